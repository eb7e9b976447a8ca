use std::{
    io,
    path::{Path, PathBuf},
};

use fs_err as fs;
use serde::{Deserialize, Serialize};
use snafu::{ResultExt, Snafu};
use yardpack::CargoItem;

static PLAN_FILENAME: &str = "yard.toml";

#[derive(Debug, Snafu)]
pub enum PlanError {
    #[snafu(display("Couldn't read plan from {}: {}", file_path.display(), source))]
    Io {
        file_path: PathBuf,
        source: io::Error,
    },

    #[snafu(display("Couldn't parse plan from {}: {}", file_path.display(), source))]
    DeserializeToml {
        file_path: PathBuf,
        source: toml::de::Error,
    },
}

/// A yard plan, contained in a yard.toml file.
///
/// A plan describes one yard area and the cargo that should be placed in it.
/// Running `yardman place` against a plan produces a placement manifest next
/// to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PlanConfig {
    /// The name of the plan, used in the placement manifest and in
    /// diagnostics.
    pub name: String,

    /// The area cargo is placed into.
    pub area: AreaConfig,

    /// The cargo items to place.
    #[serde(default)]
    pub cargo: Vec<CargoConfig>,

    /// The path that this plan came from. Paths inside the plan are relative
    /// to the folder containing this file.
    #[serde(skip)]
    pub file_path: PathBuf,
}

/// The yard area of a plan. Dimensions come either from explicit width and
/// height in meters, or from a GeoJSON boundary file whose extent is
/// estimated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct AreaConfig {
    /// Path to a GeoJSON file with the drawn area boundary, relative to the
    /// plan's folder. Ignored when width and height are both given.
    #[serde(default)]
    pub boundary: Option<PathBuf>,

    /// Explicit area width in meters.
    #[serde(default)]
    pub width: Option<f64>,

    /// Explicit area height in meters.
    #[serde(default)]
    pub height: Option<f64>,

    /// Uniform clearance kept around every placed item, in meters.
    #[serde(default)]
    pub margin: f64,

    /// Whether items may be rotated 90 degrees during placement.
    #[serde(default = "default_allow_rotation")]
    pub allow_rotation: bool,
}

/// One cargo item in a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct CargoConfig {
    pub id: String,
    pub name: String,

    /// Footprint in meters, in plan view.
    pub width: f64,
    pub height: f64,

    /// Whether this particular item may be rotated.
    #[serde(default = "default_allow_rotation")]
    pub allow_rotate: bool,

    /// Category tag like "container" or "pallet", copied through to the
    /// placement manifest for downstream presentation.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

fn default_allow_rotation() -> bool {
    true
}

impl PlanConfig {
    pub fn read_from_folder_or_file<P: AsRef<Path>>(path: P) -> Result<Self, PlanError> {
        let path = path.as_ref();
        let meta = fs::metadata(path).context(Io { file_path: path })?;

        if meta.is_file() {
            Self::read_from_file(path)
        } else {
            Self::read_from_folder(path)
        }
    }

    pub fn read_from_folder<P: AsRef<Path>>(folder_path: P) -> Result<Self, PlanError> {
        let folder_path = folder_path.as_ref();
        let file_path = &folder_path.join(PLAN_FILENAME);

        Self::read_from_file(file_path)
    }

    pub fn read_from_file<P: AsRef<Path>>(file_path: P) -> Result<Self, PlanError> {
        let file_path = file_path.as_ref();

        let contents = fs::read(file_path).context(Io { file_path })?;

        let mut plan: PlanConfig =
            toml::from_slice(&contents).context(DeserializeToml { file_path })?;
        plan.file_path = file_path.to_owned();

        Ok(plan)
    }

    /// The folder this plan lives in; boundary paths and the placement
    /// manifest are resolved against it.
    pub fn folder(&self) -> &Path {
        self.file_path.parent().unwrap_or_else(|| Path::new("."))
    }
}

impl CargoConfig {
    pub fn to_item(&self) -> CargoItem {
        let item = CargoItem::new(self.id.as_str(), self.name.as_str(), (self.width, self.height))
            .allow_rotate(self.allow_rotate);

        match &self.kind {
            Some(kind) => item.kind(kind.as_str()),
            None => item,
        }
    }
}
