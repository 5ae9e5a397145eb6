//! `.locale-bundler.json` による設定
mod loader;
mod manager;
mod matcher;
mod types;

pub use loader::CONFIG_FILE_NAME;
pub use manager::ConfigManager;
pub use matcher::{
    MatcherError,
    ResourceMatcher,
};
pub use types::{
    BundlerSettings,
    ConfigError,
    ValidationError,
};
