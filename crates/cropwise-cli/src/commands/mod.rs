//! Command implementations

mod catalog;
mod config;
mod irrigate;
mod last;
mod recommend;
mod validate;

use crate::cli::{Cli, Commands};
use crate::output::OutputWriter;
use anyhow::Result;

/// Execute a CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);

    match &cli.command {
        Commands::Zone(args) => recommend::execute_zone(&cli, args, &output).await,
        Commands::Soil(args) => recommend::execute_soil(&cli, args, &output).await,
        Commands::Catalog => catalog::execute(&cli, &output),
        Commands::Validate(args) => validate::execute(&cli, args, &output),
        Commands::Last(args) => last::execute(&cli, args, &output).await,
        Commands::Irrigate(args) => irrigate::execute(args, &output),
        Commands::Config => config::execute(&cli, &output),
    }
}
