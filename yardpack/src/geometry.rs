/// An empty axis-aligned region of the packing area that is still available
/// for placement.
///
/// Free rects are created when a placement splits leftover space and are
/// discarded at the end of each packing call. The set is allowed to contain
/// overlapping entries; every candidate is re-checked for containment before
/// use, so overlap only costs redundant scoring, never a bad placement.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FreeRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl FreeRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn can_fit(&self, width: f64, height: f64) -> bool {
        self.width >= width && self.height >= height
    }

    /// Best-area-fit score for placing a `width` x `height` item here: the
    /// leftover area. Lower is better. Only meaningful when `can_fit` holds.
    pub fn score(&self, width: f64, height: f64) -> f64 {
        (self.width - width) * (self.height - height)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fit_is_inclusive() {
        let rect = FreeRect::new(0.0, 0.0, 10.0, 5.0);

        assert!(rect.can_fit(10.0, 5.0));
        assert!(rect.can_fit(9.0, 5.0));
        assert!(!rect.can_fit(10.1, 5.0));
        assert!(!rect.can_fit(10.0, 5.1));
    }

    #[test]
    fn exact_fit_scores_zero() {
        let rect = FreeRect::new(2.0, 3.0, 10.0, 5.0);

        assert_eq!(rect.score(10.0, 5.0), 0.0);
        assert_eq!(rect.score(8.0, 4.0), 2.0);
    }
}
