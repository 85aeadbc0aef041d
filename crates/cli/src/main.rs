mod cli;
mod commands;
mod logging;
mod prompt;
mod render;

use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;
use trading_journal_core::config::JournalConfig;
use trading_journal_core::errors::JournalError;
use trading_journal_core::TradingJournal;

use cli::Cli;

const DEFAULT_CONFIG: &str = "journal.toml";

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            return ExitCode::FAILURE;
        }
    };

    logging::init(&config.logging);
    debug!(api = %config.api.base_url, "journal starting");

    let mut journal = TradingJournal::from_config(&config);
    commands::run(&mut journal, cli.command, cli.json).await
}

/// Explicit path, else `journal.toml` if present, else defaults; the
/// environment overrides either way.
fn load_config(path: Option<&Path>) -> Result<JournalConfig, JournalError> {
    match path {
        Some(path) => JournalConfig::load(path),
        None if Path::new(DEFAULT_CONFIG).exists() => JournalConfig::load(DEFAULT_CONFIG),
        None => JournalConfig::from_env(),
    }
}
