//! Estimates the planar extent of a geographic area boundary.
//!
//! Yard areas are drawn on a map as polygons in longitude/latitude. The
//! packer only needs a flat rectangular working area, so the boundary is
//! reduced to the bounding box of its vertices and converted to meters with a
//! fixed-Earth-radius approximation. An elongated diagonal polygon will be
//! over-estimated in both dimensions; that is accepted behavior, since the
//! packer treats the area as a rectangle anyway.

/// Meters per degree of latitude, assuming a spherical Earth.
const METERS_PER_DEGREE: f64 = 111_319.9;

/// The extent reported when the boundary is missing or empty. Malformed
/// geographic input must never prevent placement from running.
const FALLBACK_DIMENSIONS: (f64, f64) = (100.0, 100.0);

/// The outline of a yard area: a single closed ring of (longitude, latitude)
/// pairs, first and last point equal.
///
/// Only the vertices matter here. The ring's actual shape is never consulted
/// again after estimation; the packer works on the bounding-box rectangle.
#[derive(Debug, Clone, Default)]
pub struct AreaBoundary {
    ring: Vec<(f64, f64)>,
}

impl AreaBoundary {
    pub fn new<I: IntoIterator<Item = (f64, f64)>>(ring: I) -> Self {
        Self {
            ring: ring.into_iter().collect(),
        }
    }

    /// A boundary with no vertices at all, which estimates to the fallback
    /// extent.
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn ring(&self) -> &[(f64, f64)] {
        &self.ring
    }
}

/// Approximates the (width, height) of a boundary in whole meters.
///
/// Height comes from the latitude span of the bounding box; width from the
/// longitude span, corrected by the cosine of the average latitude since
/// longitude degrees shrink toward the poles. An empty or missing ring yields
/// the fixed 100 x 100 fallback rather than an error.
pub fn estimate_dimensions(boundary: &AreaBoundary) -> (f64, f64) {
    if boundary.ring.is_empty() {
        log::warn!("Area boundary has no vertices, falling back to 100 x 100 m");
        return FALLBACK_DIMENSIONS;
    }

    let mut min_lng = f64::INFINITY;
    let mut max_lng = f64::NEG_INFINITY;
    let mut min_lat = f64::INFINITY;
    let mut max_lat = f64::NEG_INFINITY;

    for &(lng, lat) in &boundary.ring {
        min_lng = min_lng.min(lng);
        max_lng = max_lng.max(lng);
        min_lat = min_lat.min(lat);
        max_lat = max_lat.max(lat);
    }

    let height = (max_lat - min_lat) * METERS_PER_DEGREE;

    let avg_lat = (min_lat + max_lat) / 2.0;
    let width = (max_lng - min_lng) * METERS_PER_DEGREE * avg_lat.to_radians().cos();

    (width.round(), height.round())
}
