mod estimate;
mod place;
mod placements;

pub use estimate::*;
pub use place::*;
pub use placements::*;
