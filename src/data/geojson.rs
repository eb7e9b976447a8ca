use std::{
    io,
    path::{Path, PathBuf},
};

use fs_err as fs;
use serde::{Deserialize, Deserializer};
use snafu::{ResultExt, Snafu};
use yardpack::AreaBoundary;

#[derive(Debug, Snafu)]
pub enum GeoJsonError {
    #[snafu(display("Couldn't read GeoJSON from {}: {}", file_path.display(), source))]
    Io {
        file_path: PathBuf,
        source: io::Error,
    },

    #[snafu(display("Couldn't parse GeoJSON from {}: {}", file_path.display(), source))]
    DeserializeJson {
        file_path: PathBuf,
        source: serde_json::Error,
    },
}

/// A deliberately loose model of the GeoJSON produced by the area drawing
/// tools: a FeatureCollection whose first feature carries a polygon.
///
/// Every structural layer is optional. A file that parses as JSON but is
/// missing the feature, the geometry, or the coordinate ring yields an empty
/// boundary, which the estimator turns into its fixed fallback extent —
/// malformed geographic input must never prevent placement from running.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Clone, Deserialize)]
struct Feature {
    #[serde(default)]
    geometry: Option<Geometry>,
}

#[derive(Debug, Clone, Deserialize)]
struct Geometry {
    /// Polygon rings; each position is a list of numbers of which only the
    /// first two (longitude, latitude) are used. Extra entries like altitude
    /// are ignored. A non-polygon shape, like the flat coordinate pair of a
    /// Point geometry, degrades to no rings rather than a parse error.
    #[serde(default, deserialize_with = "polygon_rings_or_empty")]
    coordinates: Vec<Vec<Vec<f64>>>,
}

fn polygon_rings_or_empty<'de, D>(deserializer: D) -> Result<Vec<Vec<Vec<f64>>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;

    Ok(serde_json::from_value(value).unwrap_or_default())
}

impl FeatureCollection {
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self, GeoJsonError> {
        let path = path.as_ref();
        let contents = fs::read(path).context(Io { file_path: path })?;

        let collection =
            serde_json::from_slice(&contents).context(DeserializeJson { file_path: path })?;

        Ok(collection)
    }

    /// Extracts the outer ring of the first feature's polygon.
    pub fn boundary(&self) -> AreaBoundary {
        let ring = self
            .features
            .first()
            .and_then(|feature| feature.geometry.as_ref())
            .and_then(|geometry| geometry.coordinates.first());

        match ring {
            Some(ring) if !ring.is_empty() && ring.iter().all(|pos| pos.len() >= 2) => {
                AreaBoundary::new(ring.iter().map(|pos| (pos[0], pos[1])))
            }
            _ => AreaBoundary::empty(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn extracts_the_outer_ring() {
        let collection: FeatureCollection = serde_json::from_str(
            r#"{
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "properties": {},
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[
                            [24.93, 60.16],
                            [24.95, 60.16],
                            [24.95, 60.17],
                            [24.93, 60.17],
                            [24.93, 60.16]
                        ]]
                    }
                }]
            }"#,
        )
        .unwrap();

        let boundary = collection.boundary();

        assert_eq!(boundary.ring().len(), 5);
        assert_eq!(boundary.ring()[0], (24.93, 60.16));
    }

    #[test]
    fn altitude_entries_are_ignored() {
        let collection: FeatureCollection = serde_json::from_str(
            r#"{
                "features": [{
                    "geometry": {
                        "coordinates": [[[1.0, 2.0, 30.0], [3.0, 4.0, 30.0]]]
                    }
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(collection.boundary().ring(), &[(1.0, 2.0), (3.0, 4.0)]);
    }

    #[test]
    fn missing_pieces_yield_an_empty_boundary() {
        let cases = [
            r#"{}"#,
            r#"{"features": []}"#,
            r#"{"features": [{}]}"#,
            r#"{"features": [{"geometry": {}}]}"#,
            r#"{"features": [{"geometry": {"coordinates": []}}]}"#,
            r#"{"features": [{"geometry": {"coordinates": [[]]}}]}"#,
            r#"{"features": [{"geometry": {"coordinates": [[[5.0]]]}}]}"#,
        ];

        for case in &cases {
            let collection: FeatureCollection = serde_json::from_str(case).unwrap();
            assert!(
                collection.boundary().ring().is_empty(),
                "expected empty boundary for {}",
                case
            );
        }
    }

    #[test]
    fn non_polygon_geometry_yields_an_empty_boundary() {
        // A Point's coordinates are a flat pair, a LineString's a doubly
        // nested list. Neither matches the polygon ring shape; both must
        // still parse and then fall through to the empty boundary.
        let cases = [
            r#"{"features": [{"geometry": {"type": "Point", "coordinates": [24.93, 60.16]}}]}"#,
            r#"{"features": [{"geometry": {"type": "LineString", "coordinates": [[1.0, 2.0], [3.0, 4.0]]}}]}"#,
            r#"{"features": [{"geometry": {"coordinates": "scribble"}}]}"#,
        ];

        for case in &cases {
            let collection: FeatureCollection = serde_json::from_str(case).unwrap();
            assert!(
                collection.boundary().ring().is_empty(),
                "expected empty boundary for {}",
                case
            );
        }
    }
}
