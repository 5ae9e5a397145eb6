//! Merger type definitions.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::{
    ConfigError,
    MatcherError,
};

/// Exit status for a missing resources directory.
pub const EXIT_DIRECTORY_NOT_FOUND: u8 = 1;
/// Exit status for resource content that cannot be merged (`EX_DATAERR`).
pub const EXIT_DATA_ERROR: u8 = 65;
/// Exit status for read or write failures (`EX_IOERR`).
pub const EXIT_IO_ERROR: u8 = 74;
/// Exit status for invalid configuration (`EX_CONFIG`).
pub const EXIT_CONFIG_ERROR: u8 = 78;

/// Errors that abort a merge run.
#[derive(Error, Debug)]
pub enum MergeError {
    /// The resources directory is missing or not a directory
    #[error("Resources directory does not exist: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("Failed to list resources directory {}: {source}", path.display())]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },

    #[error("Failed to read resource file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Two files share a language but one of them is not an object
    #[error(
        "Cannot merge {} into language '{language}': expected a JSON object, found {found}",
        path.display()
    )]
    NotAnObject { path: PathBuf, language: String, found: &'static str },

    /// The file name has no stem to use as a language identifier
    #[error("Cannot derive a language identifier from {}", path.display())]
    InvalidFileName { path: PathBuf },

    #[error("Failed to serialize consolidated output: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write output file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Matcher(#[from] MatcherError),
}

impl MergeError {
    /// Process exit status for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::DirectoryNotFound { .. } => EXIT_DIRECTORY_NOT_FOUND,
            Self::Parse { .. }
            | Self::NotAnObject { .. }
            | Self::InvalidFileName { .. }
            | Self::Serialize(_) => EXIT_DATA_ERROR,
            Self::ListDirectory { .. } | Self::Read { .. } | Self::Write { .. } => EXIT_IO_ERROR,
            Self::Config(_) | Self::Matcher(_) => EXIT_CONFIG_ERROR,
        }
    }
}

/// A shallow update was asked for where one side is not a JSON object.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("shallow merge needs JSON objects on both sides, found {found}")]
pub struct NonObjectMerge {
    pub found: &'static str,
}

/// Whether `merge` created a language entry or extended an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeAction {
    Added,
    Updated,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSummary {
    /// Resource files merged, in processing order.
    pub files: Vec<PathBuf>,
    /// Language identifiers written, in output order.
    pub languages: Vec<String>,
    pub output_path: PathBuf,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::Path;

    use rstest::rstest;

    use super::*;
    use crate::input::resource::parse_bundle;

    #[rstest]
    fn exit_code_directory_not_found_is_distinct() {
        let err = MergeError::DirectoryNotFound { path: PathBuf::from("resources") };

        assert_eq!(err.exit_code(), EXIT_DIRECTORY_NOT_FOUND);
        assert_eq!(err.to_string(), "Resources directory does not exist: resources");
    }

    #[rstest]
    fn exit_code_parse_error() {
        let err = parse_bundle(Path::new("en.json"), "{").unwrap_err();

        assert_eq!(err.exit_code(), EXIT_DATA_ERROR);
        assert!(err.to_string().starts_with("Failed to parse JSON in en.json"));
    }

    #[rstest]
    fn exit_code_io_error() {
        let err = MergeError::Write {
            path: PathBuf::from("resources.json"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };

        assert_eq!(err.exit_code(), EXIT_IO_ERROR);
    }

    #[rstest]
    fn exit_code_config_error() {
        let err = MergeError::from(ConfigError::ValidationErrors(Vec::new()));

        assert_eq!(err.exit_code(), EXIT_CONFIG_ERROR);
    }
}
