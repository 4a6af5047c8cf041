//! Cropwise CLI - Command-line interface
//!
//! Thin adapter over the recommendation engine and the file result cache.

mod cli;
mod commands;
mod context;
mod errors;
mod output;
mod output_types;

use clap::Parser;
use cli::Cli;
use console::style;
use errors::CliError;

fn main() {
    // Logs go to stderr so `--json` output on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        match err.downcast_ref::<CliError>() {
            Some(cli_err) => cli_err.display(),
            None => eprintln!("{} {:#}", style("✗").red().bold(), err),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(commands::execute(cli))
}
