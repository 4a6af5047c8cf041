use anyhow::Result;
use cropwise_core::{CropDataset, DatasetError};

use crate::cli::{Cli, ValidateArgs};
use crate::context::load_config;
use crate::errors::dataset_invalid;
use crate::output::OutputWriter;
use crate::output_types::ValidateOutput;

pub fn execute(cli: &Cli, args: &ValidateArgs, output: &OutputWriter) -> Result<()> {
    let path = match &args.path {
        Some(path) => path.clone(),
        None => load_config(cli)?.dataset.value,
    };
    let display_path = path.display().to_string();

    let err = match CropDataset::from_path(&path) {
        Ok(dataset) => {
            let summary = dataset.summary();

            if output.is_json() {
                return output.result(ValidateOutput {
                    path: display_path,
                    valid: true,
                    summary: Some(summary),
                    issues: Vec::new(),
                    error: None,
                });
            }

            output.success(format!("{} is valid", display_path));
            output.kv("Version", summary.version.as_deref().unwrap_or("unversioned"));
            output.kv("Zones", summary.zone_count);
            output.kv("Catalog entries", summary.crop_count);
            output.kv("Distinct crops", summary.distinct_crops.join(", "));
            return Ok(());
        }
        Err(err) => err,
    };

    let issues = match &err {
        DatasetError::Invalid { issues } => issues.clone(),
        _ => Vec::new(),
    };

    if output.is_json() {
        output.failure(ValidateOutput {
            path: display_path,
            valid: false,
            summary: None,
            error: issues.is_empty().then(|| err.to_string()),
            issues,
        })?;
    }

    Err(dataset_invalid(&path, &err).into())
}
