use anyhow::Result;

use crate::cli::Cli;
use crate::context::load_config;
use crate::output::OutputWriter;
use crate::output_types::ConfigRow;

pub fn execute(cli: &Cli, output: &OutputWriter) -> Result<()> {
    let config = load_config(cli)?;

    let rows: Vec<ConfigRow> = config
        .to_inspection_map()
        .into_iter()
        .map(|(key, (value, source))| ConfigRow { key, value, source })
        .collect();

    output.section("Effective configuration");
    output.table(rows)
}
