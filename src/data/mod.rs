mod geojson;
mod manifest;
mod plan;

pub use geojson::*;
pub use manifest::*;
pub use plan::*;
