//! Resource merging: discover, load, merge, write.

mod bundle;
pub mod discovery;
mod types;
pub mod writer;

use std::path::Path;

pub use bundle::ConsolidatedOutput;
pub use types::{
    EXIT_CONFIG_ERROR,
    EXIT_DATA_ERROR,
    EXIT_DIRECTORY_NOT_FOUND,
    EXIT_IO_ERROR,
    MergeAction,
    MergeError,
    MergeSummary,
    NonObjectMerge,
};

use crate::config::{
    ConfigManager,
    ResourceMatcher,
};
use crate::input::resource::{
    language_id_from_path,
    load_bundle,
};

/// Merges every resource file of a project into one document.
#[derive(Debug, Clone)]
pub struct ResourceMerger {
    config: ConfigManager,
}

impl ResourceMerger {
    #[must_use]
    pub const fn new(config: ConfigManager) -> Self {
        Self { config }
    }

    /// Run a full merge.
    ///
    /// Every file is loaded and merged before the output is written; any
    /// failure aborts the run and leaves the output file untouched.
    ///
    /// # Errors
    /// - `MergeError::DirectoryNotFound` if the resources directory is missing
    /// - read, parse and write errors for individual files
    pub fn run(&self) -> Result<MergeSummary, MergeError> {
        let settings = self.config.get_settings();
        let resources_dir = self.config.resources_dir();
        let output_path = self.config.output_file();

        tracing::info!("Resources directory: {}", resources_dir.display());
        tracing::info!("Output file: {}", output_path.display());

        let matcher = ResourceMatcher::new(settings)?;
        let files = discovery::discover(&resources_dir, &matcher, Some(&output_path))?;
        tracing::info!("Found {} resource file(s): {:?}", files.len(), display_names(&files));

        let mut output = ConsolidatedOutput::new();
        for file in &files {
            let language = language_id_from_path(file)
                .ok_or_else(|| MergeError::InvalidFileName { path: file.clone() })?;
            tracing::info!("Processing {} as language '{language}'", file.display());

            let bundle = load_bundle(file)?;
            let action = output.merge(&language, bundle).map_err(|NonObjectMerge { found }| {
                MergeError::NotAnObject { path: file.clone(), language: language.clone(), found }
            })?;
            match action {
                MergeAction::Added => tracing::info!("Adding new language: {language}"),
                MergeAction::Updated => tracing::info!("Updating existing language: {language}"),
            }
        }

        writer::write(&output, &output_path, settings.indent)?;
        tracing::info!("Saved {} language(s) to {}", output.len(), output_path.display());

        Ok(MergeSummary {
            files,
            languages: output.languages().map(str::to_string).collect(),
            output_path,
        })
    }
}

fn display_names(files: &[impl AsRef<Path>]) -> Vec<String> {
    files
        .iter()
        .filter_map(|file| file.as_ref().file_name())
        .map(|name| name.to_string_lossy().to_string())
        .collect()
}
