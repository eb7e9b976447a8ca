use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(about = "A tool to plan cargo placement inside yard areas from the command line")]
pub struct Options {
    #[structopt(subcommand)]
    pub command: Subcommand,
}

#[derive(Debug, StructOpt)]
pub enum Subcommand {
    /// Estimate the planar width and height, in meters, of an area boundary
    /// drawn as a GeoJSON polygon. Prints the result to stdout.
    Estimate(EstimateOptions),

    /// Place the cargo items from a yard plan into its area and write the
    /// resulting placements next to the plan.
    Place(PlaceOptions),

    /// List the stored placements of a previously placed plan.
    Placements(PlacementsOptions),
}

#[derive(Debug, StructOpt)]
pub struct EstimateOptions {
    /// The path to the GeoJSON file containing the area boundary.
    pub path: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct PlaceOptions {
    /// The folder containing a yard.toml plan file, or the path to the plan
    /// file itself. Defaults to the current working directory.
    pub project_path: Option<PathBuf>,

    /// Print placements to stdout instead of writing the placement manifest.
    #[structopt(long)]
    pub dry_run: bool,
}

#[derive(Debug, StructOpt)]
pub struct PlacementsOptions {
    /// The folder containing the placement manifest. Defaults to the current
    /// working directory.
    pub project_path: Option<PathBuf>,
}
