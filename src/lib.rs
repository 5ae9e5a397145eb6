//! locale-bundler
//!
//! 言語ごとの JSON リソースファイルを 1 つの JSON ドキュメントにまとめるビルドツール

pub mod config;
pub mod input;
pub mod merger;
#[cfg(test)]
mod test_utils;
pub mod types;

// ResourceMerger を再エクスポート
pub use merger::ResourceMerger;
