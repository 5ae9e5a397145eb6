//! 設定管理を行うモジュール

use std::path::{
    Path,
    PathBuf,
};

use super::{
    BundlerSettings,
    ConfigError,
    loader,
};

/// 設定管理を行う
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// 現在の設定
    current_settings: BundlerSettings,

    /// プロジェクトのルートパス
    project_root: PathBuf,
}

impl ConfigManager {
    /// 新しい設定マネージャーを作成
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: BundlerSettings::default(), project_root: PathBuf::new() }
    }

    /// 設定を読み込む
    ///
    /// # Arguments
    /// * `project_root` - プロジェクトのルートパス
    ///
    /// # Returns
    /// - `Ok(())`: 設定の読み込みとバリデーション成功
    /// - `Err(ConfigError)`: エラー
    ///
    /// # Errors
    /// - ファイル読み込みエラー
    /// - JSON パースエラー
    /// - バリデーションエラー
    pub fn load_settings(&mut self, project_root: PathBuf) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings for project: {:?}", project_root);

        let settings = loader::load_from_project(&project_root)?.map_or_else(
            BundlerSettings::default,
            |settings| {
                tracing::debug!("Loaded project settings: {:?}", settings);
                settings
            },
        );

        self.apply(project_root, settings)
    }

    /// 設定ファイルを介さずに設定を適用する
    ///
    /// # Errors
    /// - バリデーションエラー
    pub fn with_settings(
        project_root: PathBuf,
        settings: BundlerSettings,
    ) -> Result<Self, ConfigError> {
        let mut manager = Self::new();
        manager.apply(project_root, settings)?;
        Ok(manager)
    }

    /// バリデーション後に設定を保存する
    fn apply(&mut self, project_root: PathBuf, settings: BundlerSettings) -> Result<(), ConfigError> {
        settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = settings;
        self.project_root = project_root;
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    /// 現在の設定を取得
    #[must_use]
    pub const fn get_settings(&self) -> &BundlerSettings {
        &self.current_settings
    }

    /// プロジェクトルートを取得
    #[must_use]
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// リソースディレクトリの絶対パス（ルートからの相対指定を解決済み）
    #[must_use]
    pub fn resources_dir(&self) -> PathBuf {
        self.resolve(&self.current_settings.resources_dir)
    }

    /// 出力ファイルのパス（ルートからの相対指定を解決済み）
    #[must_use]
    pub fn output_file(&self) -> PathBuf {
        self.resolve(&self.current_settings.output_file)
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() { path.to_path_buf() } else { self.project_root.join(path) }
    }
}
