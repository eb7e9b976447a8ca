use thiserror::Error;

use crate::{
    geometry::FreeRect,
    types::{CargoItem, Placement},
};

/// The error returned when a packer is configured with geometry that can
/// never produce a meaningful layout.
///
/// Note that "an item did not fit" is not an error. Items that cannot be
/// placed are simply absent from the output; callers detect partial placement
/// by comparing output length against input length.
#[derive(Debug, Error)]
pub enum PackError {
    #[error("area dimensions must be positive, got {width} x {height}")]
    InvalidArea { width: f64, height: f64 },

    #[error("boundary margin must not be negative, got {margin}")]
    NegativeMargin { margin: f64 },

    #[error("cargo item '{id}' has non-positive dimensions {width} x {height}")]
    InvalidItem {
        id: String,
        width: f64,
        height: f64,
    },
}

/// Packs rectangular cargo items into a single bounded rectangular area.
///
/// `YardPacker` is a MaxRects variant with a best-area-fit heuristic: items
/// are sorted by footprint area descending, and each item is placed into the
/// free rectangle that leaves the least leftover area, trying the rotated
/// orientation as well when both the packer and the item allow it.
///
/// The free-rectangle list is deliberately simple. Consumed entries are
/// removed and up to three leftover rectangles are appended, which may
/// overlap each other. Free rectangles are scanned in insertion order and
/// ties on score keep the first candidate found, so output is deterministic
/// for a given input order.
pub struct YardPacker {
    area_width: f64,
    area_height: f64,
    margin: f64,
    allow_rotation: bool,
}

impl YardPacker {
    pub fn new(area_width: f64, area_height: f64) -> Self {
        Self {
            area_width,
            area_height,
            margin: 0.0,
            allow_rotation: true,
        }
    }

    /// Sets a uniform clearance enforced around every placed item, in the
    /// same unit as the area dimensions. Defaults to 0.
    pub fn margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Globally enables or disables 90 degree rotation. When disabled, no
    /// item is rotated regardless of its own flag. Defaults to true.
    pub fn allow_rotation(mut self, allow: bool) -> Self {
        self.allow_rotation = allow;
        self
    }

    /// Computes placements for as many of the given items as possible.
    ///
    /// Returns placements in the order items were placed, which follows the
    /// internal largest-footprint-first ordering rather than input order.
    /// Items that do not fit anywhere are omitted from the output; this is a
    /// normal outcome, not an error. The only error conditions are invalid
    /// configuration: a non-positive area, a negative margin, or an item with
    /// non-positive dimensions.
    pub fn pack<'a, I>(&self, items: I) -> Result<Vec<Placement>, PackError>
    where
        I: IntoIterator<Item = &'a CargoItem>,
    {
        if self.area_width <= 0.0 || self.area_height <= 0.0 {
            return Err(PackError::InvalidArea {
                width: self.area_width,
                height: self.area_height,
            });
        }

        if self.margin < 0.0 {
            return Err(PackError::NegativeMargin {
                margin: self.margin,
            });
        }

        let mut sorted_items: Vec<&CargoItem> = items.into_iter().collect();

        for item in &sorted_items {
            if item.width <= 0.0 || item.height <= 0.0 {
                return Err(PackError::InvalidItem {
                    id: item.id.clone(),
                    width: item.width,
                    height: item.height,
                });
            }
        }

        // Largest footprint first: big items get placed while free space is
        // still contiguous, and small items can live with the scraps.
        sorted_items.sort_by(|a, b| b.footprint().total_cmp(&a.footprint()));

        log::trace!(
            "Packing {} items into {} x {} area (margin {})",
            sorted_items.len(),
            self.area_width,
            self.area_height,
            self.margin
        );

        let mut free_rects = vec![FreeRect::new(0.0, 0.0, self.area_width, self.area_height)];
        let mut placements = Vec::new();

        for item in sorted_items {
            // The margin is baked into the searched size, then subtracted
            // back out of the recorded placement, so neighbors end up at
            // least 2 * margin apart without the caller ever seeing the
            // inflated footprint.
            let padded_width = item.width + self.margin * 2.0;
            let padded_height = item.height + self.margin * 2.0;

            match self.find_best_fit(&free_rects, item, padded_width, padded_height) {
                Some((index, rotated)) => {
                    let (placed_width, placed_height) = if rotated {
                        (padded_height, padded_width)
                    } else {
                        (padded_width, padded_height)
                    };

                    let free = free_rects.remove(index);

                    log::trace!(
                        "Placed item {:?} at ({}, {}), rotated: {}",
                        item.id,
                        free.x,
                        free.y,
                        rotated
                    );

                    placements.push(Placement {
                        id: item.id.clone(),
                        name: item.name.clone(),
                        kind: item.kind.clone(),
                        x: free.x + self.margin,
                        y: free.y + self.margin,
                        width: placed_width - self.margin * 2.0,
                        height: placed_height - self.margin * 2.0,
                        rotated,
                    });

                    // Split the leftover L-shape into up to three new free
                    // rectangles: right of the item (item height), below the
                    // item (full free width), and the bottom-right corner.
                    // These may overlap; candidates are re-validated on every
                    // search, so that is safe.
                    if placed_width < free.width {
                        free_rects.push(FreeRect::new(
                            free.x + placed_width,
                            free.y,
                            free.width - placed_width,
                            placed_height,
                        ));
                    }

                    if placed_height < free.height {
                        free_rects.push(FreeRect::new(
                            free.x,
                            free.y + placed_height,
                            free.width,
                            free.height - placed_height,
                        ));
                    }

                    if placed_width < free.width && placed_height < free.height {
                        free_rects.push(FreeRect::new(
                            free.x + placed_width,
                            free.y + placed_height,
                            free.width - placed_width,
                            free.height - placed_height,
                        ));
                    }
                }
                None => {
                    log::trace!("Item {:?} did not fit anywhere, skipping", item.id);
                }
            }
        }

        Ok(placements)
    }

    /// Finds the free rectangle with the lowest best-area-fit score across
    /// both eligible orientations. Returns the index into `free_rects` and
    /// whether the winning orientation was rotated. Strict comparison keeps
    /// the first candidate on ties, with the normal orientation scanned
    /// before the rotated one.
    fn find_best_fit(
        &self,
        free_rects: &[FreeRect],
        item: &CargoItem,
        padded_width: f64,
        padded_height: f64,
    ) -> Option<(usize, bool)> {
        let mut best: Option<(usize, bool)> = None;
        let mut best_score = f64::INFINITY;

        for (index, free) in free_rects.iter().enumerate() {
            if free.can_fit(padded_width, padded_height) {
                let score = free.score(padded_width, padded_height);
                if score < best_score {
                    best = Some((index, false));
                    best_score = score;
                }
            }
        }

        if self.allow_rotation && item.allow_rotate {
            for (index, free) in free_rects.iter().enumerate() {
                if free.can_fit(padded_height, padded_width) {
                    let score = free.score(padded_height, padded_width);
                    if score < best_score {
                        best = Some((index, true));
                        best_score = score;
                    }
                }
            }
        }

        best
    }
}
