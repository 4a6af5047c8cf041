use clap::{Parser, Subcommand};
use cropwise_core::models::{FallbackPolicy, RecommendationMode};
use std::path::PathBuf;

/// Cropwise - crop recommendations by location or soil reading
#[derive(Parser, Debug)]
#[command(name = "cropwise")]
#[command(about = "Crop recommendations by location or soil reading", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Show how each recommendation was reached
    #[arg(long, global = true)]
    pub explain: bool,

    /// Crop dataset to load (overrides config and CROPWISE_DATASET)
    #[arg(long, global = true, value_name = "PATH")]
    pub dataset: Option<PathBuf>,

    /// Config file (defaults to ./cropwise.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory for saved results (overrides config and CROPWISE_CACHE_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// What soil mode returns when nothing matches (first-two or none)
    #[arg(long, global = true, value_name = "POLICY")]
    pub fallback: Option<FallbackPolicy>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recommend crops for a coordinate
    Zone(ZoneArgs),

    /// Recommend crops for a soil reading
    Soil(SoilArgs),

    /// List every crop in the dataset
    Catalog,

    /// Load a dataset and report every problem found
    Validate(ValidateArgs),

    /// Show (or clear) the last saved recommendation for a mode
    Last(LastArgs),

    /// Irrigation advice from soil moisture and temperature
    Irrigate(IrrigateArgs),

    /// Show the effective configuration and where each value came from
    Config,
}

#[derive(Parser, Debug)]
pub struct ZoneArgs {
    /// Latitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<String>,

    /// Longitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lon: Option<String>,

    /// Do not save the result for `cropwise last`
    #[arg(long)]
    pub no_save: bool,
}

#[derive(Parser, Debug)]
pub struct SoilArgs {
    /// Nitrogen (default 50)
    #[arg(long = "n", value_name = "N", allow_hyphen_values = true)]
    pub nitrogen: Option<String>,

    /// Phosphorus (default 30)
    #[arg(long = "p", value_name = "P", allow_hyphen_values = true)]
    pub phosphorus: Option<String>,

    /// Potassium (default 40)
    #[arg(long = "k", value_name = "K", allow_hyphen_values = true)]
    pub potassium: Option<String>,

    /// Soil pH (default 6.5)
    #[arg(long, value_name = "PH", allow_hyphen_values = true)]
    pub ph: Option<String>,

    /// Do not save the result for `cropwise last`
    #[arg(long)]
    pub no_save: bool,
}

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Dataset file (defaults to the configured dataset)
    pub path: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct LastArgs {
    /// Recommendation mode (zone/general or soil/specialized)
    pub mode: RecommendationMode,

    /// Remove the saved result instead of showing it
    #[arg(long)]
    pub clear: bool,
}

#[derive(Parser, Debug)]
pub struct IrrigateArgs {
    /// Soil moisture percentage
    #[arg(long)]
    pub moisture: f64,

    /// Air temperature in °C
    #[arg(long, allow_hyphen_values = true)]
    pub temperature: Option<f64>,
}
