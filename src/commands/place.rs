use std::collections::HashSet;
use std::env;

use anyhow::bail;
use yardpack::{CargoItem, YardPacker};

use crate::data::{CargoConfig, FeatureCollection, PlacementManifest, PlanConfig};
use crate::options::PlaceOptions;

pub fn place(options: PlaceOptions) -> anyhow::Result<()> {
    let project_path = match options.project_path {
        Some(path) => path,
        None => env::current_dir()?,
    };

    let plan = PlanConfig::read_from_folder_or_file(&project_path)?;

    let (area_width, area_height) = resolve_area_size(&plan)?;
    log::info!(
        "Placing {} cargo items for plan '{}' into a {} x {} m area",
        plan.cargo.len(),
        plan.name,
        area_width,
        area_height
    );

    let items: Vec<CargoItem> = plan.cargo.iter().map(CargoConfig::to_item).collect();

    let packer = YardPacker::new(area_width, area_height)
        .margin(plan.area.margin)
        .allow_rotation(plan.area.allow_rotation);

    let placements = packer.pack(&items)?;

    if placements.len() < items.len() {
        let placed: HashSet<&str> = placements.iter().map(|p| p.id()).collect();
        let left_out: Vec<&str> = items
            .iter()
            .map(|item| item.id())
            .filter(|id| !placed.contains(id))
            .collect();

        log::warn!(
            "Only {} of {} cargo items fit; left out: {}",
            placements.len(),
            items.len(),
            left_out.join(", ")
        );
    }

    if options.dry_run {
        for placement in &placements {
            let (x, y) = placement.position();
            let (width, height) = placement.size();

            println!(
                "{} at ({}, {}), {} x {}{}",
                placement.id(),
                x,
                y,
                width,
                height,
                if placement.rotated() { ", rotated" } else { "" }
            );
        }
    } else {
        let manifest = PlacementManifest::from_placements(
            &plan.name,
            (area_width, area_height),
            plan.area.margin,
            &placements,
        );

        manifest.write_to_folder(plan.folder())?;
    }

    println!("Placed {} of {} cargo items", placements.len(), items.len());

    Ok(())
}

/// Resolves the working area of a plan: explicit dimensions win, otherwise
/// the boundary file is read and its extent estimated.
fn resolve_area_size(plan: &PlanConfig) -> anyhow::Result<(f64, f64)> {
    if let (Some(width), Some(height)) = (plan.area.width, plan.area.height) {
        return Ok((width, height));
    }

    if let Some(boundary_path) = &plan.area.boundary {
        let full_path = plan.folder().join(boundary_path);
        let collection = FeatureCollection::read_from_file(&full_path)?;

        return Ok(yardpack::estimate_dimensions(&collection.boundary()));
    }

    bail!(
        "Plan '{}' specifies neither explicit area dimensions nor a boundary file",
        plan.name
    );
}
