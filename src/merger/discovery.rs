//! Resource file discovery.
use std::path::{
    Path,
    PathBuf,
};

use ignore::WalkBuilder;

use super::MergeError;
use crate::config::ResourceMatcher;

/// List the resource files directly inside `source_dir`, sorted by file name.
///
/// Sub-directories, files excluded by `matcher` and `output_file` (when it
/// lives inside `source_dir`) are skipped. Hidden files and ignore files are
/// not treated specially.
///
/// # Errors
/// - `MergeError::DirectoryNotFound` if `source_dir` is missing or not a directory
/// - `MergeError::ListDirectory` if an entry cannot be read
pub fn discover(
    source_dir: &Path,
    matcher: &ResourceMatcher,
    output_file: Option<&Path>,
) -> Result<Vec<PathBuf>, MergeError> {
    if !source_dir.is_dir() {
        return Err(MergeError::DirectoryNotFound { path: source_dir.to_path_buf() });
    }

    let output_file = output_file.and_then(|path| path.canonicalize().ok());
    let mut found_files = Vec::new();

    for result in WalkBuilder::new(source_dir)
        .standard_filters(false)
        .max_depth(Some(1))
        .follow_links(true)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build()
    {
        let entry = result.map_err(|source| MergeError::ListDirectory {
            path: source_dir.to_path_buf(),
            source,
        })?;

        // ルート自身
        if entry.depth() == 0 {
            continue;
        }

        let path = entry.path();

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            tracing::debug!(path = %path.display(), "Skipping non-file entry");
            continue;
        }

        if !matcher.is_resource_file(path) {
            tracing::debug!(path = %path.display(), "Skipping excluded file");
            continue;
        }

        if let Some(output_file) = &output_file
            && path.canonicalize().is_ok_and(|canonical| &canonical == output_file)
        {
            tracing::debug!(path = %path.display(), "Skipping output file");
            continue;
        }

        found_files.push(path.to_path_buf());
    }

    Ok(found_files)
}
