use yardpack::estimate_dimensions;

use crate::data::FeatureCollection;
use crate::options::EstimateOptions;

pub fn estimate(options: EstimateOptions) -> anyhow::Result<()> {
    let collection = FeatureCollection::read_from_file(&options.path)?;
    let boundary = collection.boundary();

    if boundary.ring().is_empty() {
        log::warn!(
            "{} contains no usable polygon ring; reporting the fallback extent",
            options.path.display()
        );
    }

    let (width, height) = estimate_dimensions(&boundary);

    println!("{} x {}", width, height);

    Ok(())
}
