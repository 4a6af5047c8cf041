use console::style;
use cropwise_core::{DatasetError, InvalidQueryError};
use std::fmt;
use std::path::Path;

/// Enhanced error type with suggestions
pub struct CliError {
    pub message: String,
    pub context: Option<String>,
    pub suggestions: Vec<String>,
    pub help_command: Option<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), context: None, suggestions: Vec::new(), help_command: None }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_help(mut self, command: impl Into<String>) -> Self {
        self.help_command = Some(command.into());
        self
    }

    pub fn display(&self) {
        eprintln!("{} {}\n", style("✗").red().bold(), style(&self.message).red().bold());

        if let Some(ref context) = self.context {
            eprintln!("{}", context);
            eprintln!();
        }

        if !self.suggestions.is_empty() {
            eprintln!("{}", style("To fix this:").yellow().bold());
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, suggestion);
            }
            eprintln!();
        }

        if let Some(ref help_cmd) = self.help_command {
            eprintln!("{} {}", style("Need help?").cyan(), style(help_cmd).cyan().bold());
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Zone query rejected before lookup
pub fn invalid_coordinates(err: &InvalidQueryError) -> CliError {
    CliError::new("Enter both latitude and longitude")
        .with_context(err.to_string())
        .with_suggestion("Pass both coordinates as decimal degrees: cropwise zone --lat 15.3 --lon 75.1")
        .with_suggestion("Use a leading minus for south or west: --lat -12.5")
        .with_help("Run: cropwise zone --help")
}

/// Dataset could not be loaded
pub fn dataset_load_failed(path: &Path, err: &DatasetError) -> CliError {
    let error = CliError::new("Cannot load crop dataset")
        .with_context(format!("Path: {}\n\n{}", path.display(), err));

    let error = match err {
        DatasetError::Read { .. } => error
            .with_suggestion("Check the path, or pass one explicitly: cropwise --dataset <PATH> ...")
            .with_suggestion("Or set CROPWISE_DATASET or `dataset` in cropwise.toml"),
        DatasetError::Parse { .. } => error
            .with_suggestion("Make sure the file is a JSON document with a top-level `zones` array"),
        DatasetError::Invalid { .. } => error
            .with_suggestion("Fix the listed fields; every range must be [min, max] with min <= max"),
    };

    error.with_help("Run: cropwise validate")
}

/// Dataset failed `validate`; every issue is listed once in the context
pub fn dataset_invalid(path: &Path, err: &DatasetError) -> CliError {
    let context = match err {
        DatasetError::Invalid { issues } => {
            let lines: Vec<String> = issues.iter().map(|issue| format!("  - {}", issue)).collect();
            format!("{} problem(s) found:\n{}", issues.len(), lines.join("\n"))
        }
        other => other.to_string(),
    };

    CliError::new(format!("Dataset validation failed: {}", path.display()))
        .with_context(context)
        .with_suggestion("Every range must be [min, max] with min <= max")
        .with_suggestion("idealN, idealP and idealK must be positive numbers")
}

/// Soil moisture outside 0..=100
pub fn invalid_moisture(value: f64) -> CliError {
    CliError::new("Soil moisture must be a percentage")
        .with_context(format!("Got {}, expected a value between 0 and 100.", value))
        .with_help("Run: cropwise irrigate --help")
}
