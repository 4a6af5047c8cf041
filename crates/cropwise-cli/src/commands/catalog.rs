use anyhow::Result;

use crate::cli::Cli;
use crate::context::{load_config, load_dataset};
use crate::output::OutputWriter;
use crate::output_types::CatalogRow;

pub fn execute(cli: &Cli, output: &OutputWriter) -> Result<()> {
    let config = load_config(cli)?;
    let dataset = load_dataset(&config.dataset.value)?;

    if output.is_json() {
        let crops: Vec<_> = dataset.catalog().collect();
        return output.result(crops);
    }

    let rows: Vec<CatalogRow> = dataset
        .zones()
        .iter()
        .enumerate()
        .flat_map(|(zone_idx, zone)| {
            zone.recommended_crops.iter().map(move |crop| CatalogRow {
                zone: zone_idx,
                name: crop.name.clone(),
                ph: format!("{}–{}", crop.ideal_ph.min, crop.ideal_ph.max),
                n: crop.ideal_n,
                p: crop.ideal_p,
                k: crop.ideal_k,
            })
        })
        .collect();

    let summary = dataset.summary();
    output.section(format!(
        "Crop catalog ({} entries, {} distinct)",
        summary.crop_count,
        summary.distinct_crops.len()
    ));
    output.table(rows)
}
