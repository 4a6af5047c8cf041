use anyhow::Result;
use cropwise_core::CropDataset;
use cropwise_store::ResultCache;

use crate::cli::{Cli, LastArgs};
use crate::commands::recommend::report;
use crate::context::{load_config, result_cache};
use crate::output::OutputWriter;
use crate::output_types::ClearOutput;

pub async fn execute(cli: &Cli, args: &LastArgs, output: &OutputWriter) -> Result<()> {
    let config = load_config(cli)?;
    let cache = result_cache(&config);

    if args.clear {
        let cleared = cache.clear(args.mode).await?;
        if output.is_json() {
            return output.result(ClearOutput { mode: args.mode.to_string(), cleared });
        }
        if cleared {
            output.success(format!("Cleared saved {} recommendation", args.mode));
        } else {
            output.info(format!("No saved {} recommendation to clear", args.mode));
        }
        return Ok(());
    }

    let Some(entry) = cache.load(args.mode).await? else {
        if output.is_json() {
            return output.result(serde_json::Value::Null);
        }
        output.info(format!("No saved {} recommendation", args.mode));
        output.info(format!("Run 'cropwise {}' to make one", args.mode));
        return Ok(());
    };

    // Staleness is advisory; a missing or broken dataset should not hide the saved result
    match CropDataset::from_path(&config.dataset.value) {
        Ok(dataset) if !entry.is_current_for(dataset.version()) => {
            output.warning(format!(
                "Saved with dataset version {}, current dataset is {}",
                entry.dataset_version.as_deref().unwrap_or("unversioned"),
                dataset.version().unwrap_or("unversioned"),
            ));
        }
        Ok(_) => {}
        Err(e) => tracing::debug!(error = %e, "Skipping staleness check"),
    }

    if output.is_json() {
        return output.result(&entry);
    }

    output.kv("Saved at", entry.saved_at.format("%Y-%m-%d %H:%M:%S UTC"));
    report(&entry.recommendation, output, cli.explain)
}
