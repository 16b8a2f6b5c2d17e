//! `raindrop` - renders Raindrop.io bookmark lists from Markdown notes
//!
//! Notes embed a fenced block of filter directives:
//!
//! ````markdown
//! ```raindrop
//! created:{daily}
//! #reading
//! @Articles
//! ```
//! ````
//!
//! `raindrop render 2024-06-01.md` prints each block's bookmarks as a
//! Markdown list.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use raindrop_config::SettingsFile;
use tracing::debug;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let settings_file = match cli.settings {
        Some(path) => SettingsFile::with_path(path),
        None => SettingsFile::new(),
    };
    debug!("Using settings file {}", settings_file.path().display());

    match cli.command {
        Commands::Render { note, json } => {
            let processor = commands::processor(&settings_file, &cli.base_url)?;
            commands::render(&processor, &note, json).await
        }
        Commands::Query { note } => commands::query(&note).await,
        Commands::Watch {
            note,
            interval_mins,
            runs,
        } => {
            let processor = commands::processor(&settings_file, &cli.base_url)?;
            commands::watch(&processor, &note, interval_mins, runs).await
        }
        Commands::Config { action } => commands::config(&settings_file, action),
    }
}
