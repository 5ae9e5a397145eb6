//! Serialization of the consolidated document.

use std::fs;
use std::io::Write as _;
use std::path::Path;

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;
use tempfile::NamedTempFile;

use super::{
    ConsolidatedOutput,
    MergeError,
};

/// Render `output` as JSON indented by `indent` spaces per level.
///
/// Non-ASCII characters are written as-is. No trailing newline is added.
///
/// # Errors
/// Returns error if serialization fails.
pub fn to_pretty_json(output: &ConsolidatedOutput, indent: usize) -> Result<Vec<u8>, MergeError> {
    let indent = " ".repeat(indent);
    let mut buffer = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(indent.as_bytes()));
    output.serialize(&mut serializer).map_err(MergeError::Serialize)?;
    Ok(buffer)
}

/// Write `output` to `dest_path`, replacing any existing file.
///
/// The document is written to a temporary file next to `dest_path` and
/// renamed over it, so `dest_path` is either untouched or fully written.
///
/// # Errors
/// Returns error if serialization or any file operation fails.
pub fn write(output: &ConsolidatedOutput, dest_path: &Path, indent: usize) -> Result<(), MergeError> {
    let bytes = to_pretty_json(output, indent)?;
    let write_error = |source| MergeError::Write { path: dest_path.to_path_buf(), source };

    let dest_dir = match dest_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dest_dir).map_err(write_error)?;

    let mut temp_file = NamedTempFile::new_in(dest_dir).map_err(write_error)?;
    temp_file.write_all(&bytes).map_err(write_error)?;
    temp_file.as_file().sync_all().map_err(write_error)?;
    set_output_permissions(temp_file.path(), dest_path).map_err(write_error)?;

    temp_file.persist(dest_path).map_err(|e| write_error(e.error))?;

    Ok(())
}

/// Temporary files are created owner-only; give the output the permissions
/// of the file it replaces, or the usual `0o644` for a new file.
fn set_output_permissions(temp_path: &Path, dest_path: &Path) -> std::io::Result<()> {
    let permissions = match fs::metadata(dest_path) {
        Ok(metadata) => metadata.permissions(),
        Err(_) => default_permissions(temp_path)?,
    };
    fs::set_permissions(temp_path, permissions)
}

#[cfg(unix)]
fn default_permissions(_temp_path: &Path) -> std::io::Result<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt as _;

    Ok(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions(temp_path: &Path) -> std::io::Result<fs::Permissions> {
    Ok(fs::metadata(temp_path)?.permissions())
}
