//! Yardpack is a small library for placing rectangular cargo inside bounded
//! yard areas. It was built for
//! [Yardman](https://github.com/yardman-tools/yardman), a tool that plans
//! where containers, crates and pallets go within zones drawn on a map.
//!
//! Yardpack exposes a single packing implementation,
//! [`YardPacker`][YardPacker], a MaxRects variant with a best-area-fit
//! heuristic, plus [`estimate_dimensions`][estimate_dimensions] for turning a
//! geographic boundary polygon into a flat working extent.
//!
//! ## Example
//! ```
//! use yardpack::{CargoItem, YardPacker};
//!
//! // First, describe the cargo you want to place as Yardpack's CargoItem
//! // type. IDs are yours; Yardpack copies them into the results so you can
//! // associate placements back to your own objects.
//! let my_items = &[
//!     CargoItem::new("c-40", "40ft container", (12.2, 2.4)),
//!     CargoItem::new("c-20", "20ft container", (6.1, 2.4)),
//!     CargoItem::new("gen-1", "Generator", (3.0, 2.0)).allow_rotate(false),
//! ];
//!
//! // Construct a packer and configure it with your constraints.
//! let packer = YardPacker::new(30.0, 18.0).margin(0.5);
//!
//! // Compute placements. Items that don't fit are simply absent from the
//! // output; compare lengths to detect a partial result.
//! let placements = packer.pack(my_items).unwrap();
//! assert!(placements.len() <= my_items.len());
//! ```
//!
//! [YardPacker]: struct.YardPacker.html
//! [estimate_dimensions]: fn.estimate_dimensions.html

mod estimator;
mod geometry;
mod packer;
mod types;

pub use estimator::*;
pub use packer::*;
pub use types::*;
