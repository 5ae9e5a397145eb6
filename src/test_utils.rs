//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::{
    Path,
    PathBuf,
};

use tempfile::TempDir;

/// テスト用のリソースファイルを作成する
///
/// # Arguments
/// * `dir` - 作成先ディレクトリ
/// * `name` - ファイル名（例: "en.json"）
/// * `content` - ファイル内容
///
/// # Returns
/// 作成したファイルのパス
pub(crate) fn write_resource(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// `resources` ディレクトリを持つプロジェクトを一時ディレクトリに作成する
pub(crate) fn create_project(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let resources = temp_dir.path().join("resources");
    fs::create_dir(&resources).unwrap();
    for (name, content) in files {
        write_resource(&resources, name, content);
    }
    temp_dir
}

/// パス一覧からファイル名だけを取り出す
pub(crate) fn file_names(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .filter_map(|path| path.file_name())
        .map(|name| name.to_string_lossy().to_string())
        .collect()
}
