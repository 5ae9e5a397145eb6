//! File name matcher for entries of the resources directory.

use std::path::Path;

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};

use super::BundlerSettings;

#[derive(Debug, thiserror::Error)]
pub enum MatcherError {
    #[error("Invalid exclude pattern '{pattern}': {source}")]
    InvalidExcludePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to build glob set: {0}")]
    GlobSetBuild(#[from] globset::Error),
}

/// Decides which resource files take part in the merge.
#[derive(Debug, Clone)]
pub struct ResourceMatcher {
    exclude_set: GlobSet,
}

impl ResourceMatcher {
    /// Creates a new matcher from settings.
    pub fn new(settings: &BundlerSettings) -> Result<Self, MatcherError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &settings.exclude_patterns {
            let glob = Glob::new(pattern).map_err(|source| MatcherError::InvalidExcludePattern {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }

        Ok(Self { exclude_set: builder.build()? })
    }

    /// Returns true unless the file name matches `excludePatterns`.
    ///
    /// Only the final path component is matched.
    #[must_use]
    pub fn is_resource_file(&self, path: &Path) -> bool {
        path.file_name().is_some_and(|name| !self.exclude_set.is_match(Path::new(name)))
    }
}
