use std::env;

use anyhow::bail;

use crate::data::PlacementManifest;
use crate::options::PlacementsOptions;

/// Prints the stored placements of a previously placed plan.
pub fn placements(options: PlacementsOptions) -> anyhow::Result<()> {
    let project_path = match options.project_path {
        Some(path) => path,
        None => env::current_dir()?,
    };

    let manifest = match PlacementManifest::read_from_folder(&project_path)? {
        Some(manifest) => manifest,
        None => bail!(
            "No placement manifest found in {}; run 'yardman place' first",
            project_path.display()
        ),
    };

    println!(
        "{}: {} placements in a {} x {} m area",
        manifest.area,
        manifest.placements.len(),
        manifest.area_size.0,
        manifest.area_size.1
    );

    for placed in &manifest.placements {
        println!(
            "{} ({}) at ({}, {}), {} x {}{}",
            placed.id,
            placed.name,
            placed.x,
            placed.y,
            placed.width,
            placed.height,
            if placed.rotated { ", rotated" } else { "" }
        );
    }

    Ok(())
}
