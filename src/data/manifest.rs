use std::{
    io,
    path::{Path, PathBuf},
};

use fs_err as fs;
use serde::{Deserialize, Serialize};
use snafu::{ResultExt, Snafu};
use yardpack::Placement;

static MANIFEST_FILENAME: &str = "yard-placements.json";

#[derive(Debug, Snafu)]
pub enum ManifestError {
    #[snafu(display("Couldn't parse placement manifest from {}: {}", file_path.display(), source))]
    DeserializeJson {
        file_path: PathBuf,
        source: serde_json::Error,
    },

    #[snafu(display("Couldn't serialize placement manifest: {}", source))]
    SerializeJson { source: serde_json::Error },

    #[snafu(display("{}: {}", file_path.display(), source))]
    Io {
        file_path: PathBuf,
        source: io::Error,
    },
}

/// The persisted output of a placement run, written next to the plan as JSON
/// so that map renderers and other downstream consumers can pick it up.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PlacementManifest {
    /// The plan name the placements belong to.
    pub area: String,

    /// The resolved working area in meters, explicit or estimated.
    pub area_size: (f64, f64),

    /// The boundary margin the placements were computed with. The spacing is
    /// implicit in the placement coordinates; this records the input for
    /// later inspection.
    pub margin: f64,

    pub placements: Vec<PlacedCargo>,
}

/// One placed cargo item, in area coordinates with the top-left corner as
/// origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedCargo {
    pub id: String,
    pub name: String,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none", default)]
    pub kind: Option<String>,

    pub x: f64,
    pub y: f64,

    /// True footprint after rotation; the margin is not included.
    pub width: f64,
    pub height: f64,

    pub rotated: bool,
}

impl From<&Placement> for PlacedCargo {
    fn from(placement: &Placement) -> PlacedCargo {
        let (x, y) = placement.position();
        let (width, height) = placement.size();

        PlacedCargo {
            id: placement.id().to_owned(),
            name: placement.name().to_owned(),
            kind: placement.kind().map(str::to_owned),
            x,
            y,
            width,
            height,
            rotated: placement.rotated(),
        }
    }
}

impl PlacementManifest {
    pub fn from_placements(
        area: &str,
        area_size: (f64, f64),
        margin: f64,
        placements: &[Placement],
    ) -> Self {
        Self {
            area: area.to_owned(),
            area_size,
            margin,
            placements: placements.iter().map(PlacedCargo::from).collect(),
        }
    }

    pub fn read_from_folder<P: AsRef<Path>>(folder_path: P) -> Result<Option<Self>, ManifestError> {
        let folder_path = folder_path.as_ref();
        let file_path = &folder_path.join(MANIFEST_FILENAME);

        let contents = match fs::read(file_path) {
            Ok(contents) => contents,
            Err(ref err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(None);
            }
            other => other.context(Io { file_path })?,
        };

        let manifest =
            serde_json::from_slice(&contents).context(DeserializeJson { file_path })?;

        Ok(Some(manifest))
    }

    pub fn write_to_folder<P: AsRef<Path>>(&self, folder_path: P) -> Result<(), ManifestError> {
        let folder_path = folder_path.as_ref();
        let file_path = &folder_path.join(MANIFEST_FILENAME);

        let serialized = serde_json::to_vec_pretty(self).context(SerializeJson)?;
        fs::write(file_path, serialized).context(Io { file_path })?;

        log::info!("Wrote placement manifest to {}", file_path.display());

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn manifest_round_trips_through_json() {
        let manifest = PlacementManifest {
            area: "north-terminal".to_owned(),
            area_size: (40.0, 25.0),
            margin: 0.5,
            placements: vec![
                PlacedCargo {
                    id: "c-40".to_owned(),
                    name: "40ft container".to_owned(),
                    kind: Some("container".to_owned()),
                    x: 0.5,
                    y: 0.5,
                    width: 12.2,
                    height: 2.4,
                    rotated: false,
                },
                PlacedCargo {
                    id: "gen-1".to_owned(),
                    name: "Generator".to_owned(),
                    kind: None,
                    x: 0.5,
                    y: 3.9,
                    width: 2.0,
                    height: 3.0,
                    rotated: true,
                },
            ],
        };

        let serialized = serde_json::to_string(&manifest).unwrap();
        let parsed: PlacementManifest = serde_json::from_str(&serialized).unwrap();

        assert_eq!(parsed.area, manifest.area);
        assert_eq!(parsed.placements, manifest.placements);
    }

    #[test]
    fn untagged_cargo_omits_the_type_field() {
        let placed = PlacedCargo {
            id: "p-1".to_owned(),
            name: "Pallet".to_owned(),
            kind: None,
            x: 0.0,
            y: 0.0,
            width: 1.2,
            height: 0.8,
            rotated: false,
        };

        let serialized = serde_json::to_string(&placed).unwrap();

        assert!(!serialized.contains("\"type\""));
    }
}
