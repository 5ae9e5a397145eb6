//! Resource file input definitions

use std::path::Path;

use serde_json::Value;

use crate::merger::MergeError;

/// Derive the language identifier from a resource file path.
///
/// The identifier is the file name with its last extension removed.
/// A leading dot does not start an extension.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use locale_bundler::input::resource::language_id_from_path;
///
/// assert_eq!(language_id_from_path(Path::new("resources/en.json")), Some("en".to_string()));
/// assert_eq!(language_id_from_path(Path::new("resources/zh-CN.json")), Some("zh-CN".to_string()));
/// assert_eq!(language_id_from_path(Path::new("resources/README")), Some("README".to_string()));
/// ```
#[must_use]
pub fn language_id_from_path(file_path: &Path) -> Option<String> {
    file_path.file_stem().map(|stem| stem.to_string_lossy().to_string())
}

/// Parse resource file content into a bundle.
///
/// Any well-formed JSON document is accepted; the top level is usually an
/// object but is not required to be.
///
/// # Errors
/// Returns `MergeError::Parse` when `content` is not valid JSON.
pub fn parse_bundle(file_path: &Path, content: &str) -> Result<Value, MergeError> {
    serde_json::from_str(content)
        .map_err(|source| MergeError::Parse { path: file_path.to_path_buf(), source })
}

/// Load a resource file as a bundle.
///
/// The file is read as UTF-8 and closed before parsing.
///
/// # Errors
/// Returns error if file read or JSON parse fails.
pub fn load_bundle(file_path: &Path) -> Result<Value, MergeError> {
    let content = std::fs::read_to_string(file_path)
        .map_err(|source| MergeError::Read { path: file_path.to_path_buf(), source })?;

    parse_bundle(file_path, &content)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::fs;
    use std::path::Path;

    use googletest::prelude::*;
    use rstest::rstest;
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    #[rstest]
    #[case("resources/en.json", "en")]
    #[case("resources/ja-JP.json", "ja-JP")]
    #[case("resources/en.txt", "en")]
    #[case("resources/messages.en.json", "messages.en")]
    #[case("resources/fr", "fr")]
    #[case("resources/.hidden", ".hidden")]
    fn test_language_id_from_path(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(language_id_from_path(Path::new(path)).as_deref(), Some(expected));
    }

    #[rstest]
    fn test_language_id_from_path_without_file_name() {
        assert_eq!(language_id_from_path(Path::new("resources/..")), None);
    }

    #[googletest::test]
    fn test_parse_bundle_keeps_key_order() {
        let content = r#"{"zeta": "Z", "alpha": "A", "nested": {"b": 1, "a": 2}}"#;

        let bundle = parse_bundle(Path::new("en.json"), content).unwrap();

        let keys: Vec<&str> = bundle.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha", "nested"]);
        expect_that!(bundle.get("nested"), some(eq(&json!({"b": 1, "a": 2}))));
    }

    #[rstest]
    fn test_parse_bundle_invalid_json() {
        let result = parse_bundle(Path::new("en.json"), r#"{"hello": "Hello",}"#);

        assert!(matches!(result, Err(MergeError::Parse { .. })));
    }

    #[rstest]
    #[case(r#"["a", "b"]"#, json!(["a", "b"]))]
    #[case(r#""hello""#, json!("hello"))]
    #[case("null", json!(null))]
    #[case("42", json!(42))]
    fn test_parse_bundle_accepts_any_top_level_value(
        #[case] content: &str,
        #[case] expected: Value,
    ) {
        let bundle = parse_bundle(Path::new("en.json"), content).unwrap();

        assert_eq!(bundle, expected);
    }

    #[rstest]
    fn test_parse_bundle_keeps_large_integers_exact() {
        let content = r#"{"id": 123456789012345678901234567890, "ratio": 0.10000000000000000001}"#;

        let bundle = parse_bundle(Path::new("en.json"), content).unwrap();

        assert_eq!(bundle["id"].to_string(), "123456789012345678901234567890");
        assert_eq!(bundle["ratio"].to_string(), "0.10000000000000000001");
    }

    #[rstest]
    fn test_load_bundle_reads_unicode() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("zh.json");
        fs::write(&path, r#"{"greeting": "你好"}"#).unwrap();

        let bundle = load_bundle(&path).unwrap();

        assert_eq!(bundle.get("greeting"), Some(&json!("你好")));
    }

    #[rstest]
    fn test_load_bundle_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        let result = load_bundle(&path);

        assert!(matches!(result, Err(MergeError::Read { path: p, .. }) if p == path));
    }

    #[rstest]
    fn test_load_bundle_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("en.json");
        fs::write(&path, [0x7b, 0xff, 0x7d]).unwrap();

        let result = load_bundle(&path);

        assert!(matches!(result, Err(MergeError::Read { .. })));
    }
}
