//! Entry point for the resource bundler CLI.

use std::io::IsTerminal as _;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use locale_bundler::{
    ResourceMerger,
    config::ConfigManager,
    merger::{
        MergeError,
        MergeSummary,
    },
};
use tracing_subscriber::EnvFilter;

/// Merge per-language JSON resource files into one document.
#[derive(Debug, Parser)]
#[command(name = "locale-bundler", version, about)]
struct Cli {
    /// Project root holding the resources directory and an optional `.locale-bundler.json`
    #[arg(default_value = ".")]
    root: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .with_ansi(std::io::stdout().is_terminal())
        .init();

    match run(cli.root) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(root: PathBuf) -> Result<MergeSummary, MergeError> {
    let root = std::path::absolute(&root).unwrap_or(root);

    let mut config = ConfigManager::new();
    config.load_settings(root)?;

    ResourceMerger::new(config).run()
}
