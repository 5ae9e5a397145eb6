//! 設定ファイル `.locale-bundler.json` の読み込み

use std::io::ErrorKind;
use std::path::{
    Path,
    PathBuf,
};

use super::{
    BundlerSettings,
    ConfigError,
};

/// 設定ファイル名
pub const CONFIG_FILE_NAME: &str = ".locale-bundler.json";

/// プロジェクトルートに置かれる設定ファイルのパス
fn config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_FILE_NAME)
}

/// プロジェクトルートの設定ファイルを読み込む
///
/// ファイルが無いことはエラーではなく `Ok(None)` になる。
/// 存在確認と読み込みを分けず、読み込み結果の `NotFound` で判定する。
///
/// # Errors
/// - `ConfigError::IoError`: `NotFound` 以外の読み込み失敗（ディレクトリ、権限など）
/// - `ConfigError::ParseError`: JSON として解釈できない、または型が合わない
pub(super) fn load_from_project(
    project_root: &Path,
) -> Result<Option<BundlerSettings>, ConfigError> {
    let path = config_path(project_root);

    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!("No configuration file at {}, using defaults", path.display());
            return Ok(None);
        }
        Err(err) => return Err(ConfigError::IoError(err)),
    };

    tracing::info!("Using configuration file: {}", path.display());
    serde_json::from_str(&content).map(Some).map_err(ConfigError::ParseError)
}
