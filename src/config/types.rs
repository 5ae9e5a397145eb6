use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// Largest accepted `indent` value.
const MAX_INDENT: usize = 16;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "excludePatterns[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BundlerSettings {
    /// Directory holding one JSON file per language.
    /// Relative paths are resolved against the project root.
    pub resources_dir: String,

    /// Destination of the consolidated document.
    /// Relative paths are resolved against the project root.
    pub output_file: String,

    /// Glob patterns matched against file names inside `resources_dir`.
    /// Matching files are not merged.
    pub exclude_patterns: Vec<String>,

    /// Spaces per indentation level in the output.
    pub indent: usize,
}

impl BundlerSettings {
    /// # Errors
    /// - Required path is empty
    /// - Invalid glob pattern
    /// - Indent out of range
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.resources_dir.is_empty() {
            errors.push(ValidationError::new(
                "resourcesDir",
                "The directory cannot be empty. Example: \"resources\"",
            ));
        }

        if self.output_file.is_empty() {
            errors.push(ValidationError::new(
                "outputFile",
                "The output path cannot be empty. Example: \"resources.json\"",
            ));
        }

        for (index, pattern) in self.exclude_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("excludePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        if self.indent == 0 || self.indent > MAX_INDENT {
            errors.push(ValidationError::new(
                "indent",
                format!("The indent must be between 1 and {MAX_INDENT}, got {}", self.indent),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for BundlerSettings {
    fn default() -> Self {
        Self {
            resources_dir: "resources".to_string(),
            output_file: "resources.json".to_string(),
            exclude_patterns: Vec::new(),
            indent: 4,
        }
    }
}
