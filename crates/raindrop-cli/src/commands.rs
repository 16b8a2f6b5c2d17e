//! Subcommand handlers

use anyhow::{Context, Result};
use raindrop_client::{
    BlockProcessor, ClientConfig, IntervalScheduler, RaindropClient, RefreshLoop,
};
use raindrop_config::{resolve_api_key, SettingsFile};
use raindrop_core::{build_search_query, extract_blocks, parse_options, render_markdown};
use std::path::Path;
use tracing::{info, warn};

use crate::cli::ConfigAction;

type Processor = BlockProcessor<RaindropClient>;

/// Build a processor from stored settings and the API host flag
pub fn processor(settings_file: &SettingsFile, base_url: &str) -> Result<Processor> {
    let settings = settings_file.load().with_context(|| {
        format!(
            "Failed to load settings from {}",
            settings_file.path().display()
        )
    })?;

    let config = ClientConfig::builder().base_url(base_url).build();
    let client = RaindropClient::with_config(config).context("Failed to create Raindrop client")?;

    Ok(BlockProcessor::new(client, resolve_api_key(&settings)))
}

async fn read_note(note: &Path) -> Result<String> {
    tokio::fs::read_to_string(note)
        .await
        .with_context(|| format!("Failed to read note {}", note.display()))
}

/// Render every block of a note as Markdown, blocks separated by a blank line
async fn render_note(processor: &Processor, note: &Path) -> Result<String> {
    let markdown = read_note(note).await?;
    let outputs = processor.process_note(&markdown, Some(note)).await;
    Ok(outputs
        .iter()
        .map(render_markdown)
        .collect::<Vec<_>>()
        .join("\n\n"))
}

pub async fn render(processor: &Processor, note: &Path, json: bool) -> Result<()> {
    if json {
        let markdown = read_note(note).await?;
        let outputs = processor.process_note(&markdown, Some(note)).await;
        println!("{}", serde_json::to_string_pretty(&outputs)?);
        return Ok(());
    }

    let rendered = render_note(processor, note).await?;
    if !rendered.is_empty() {
        println!("{}", rendered);
    }
    Ok(())
}

pub async fn query(note: &Path) -> Result<()> {
    let markdown = read_note(note).await?;
    for block in extract_blocks(&markdown) {
        let options = parse_options(&block.source, Some(note));
        if options.has_date() {
            println!("{}", build_search_query(&options));
        } else {
            println!("(no date)");
        }
    }
    Ok(())
}

pub async fn watch(
    processor: &Processor,
    note: &Path,
    interval_mins: u64,
    runs: Option<usize>,
) -> Result<()> {
    let refresh = match runs {
        Some(runs) => RefreshLoop::limited(runs),
        None => RefreshLoop::forever(),
    };
    let mut scheduler = IntervalScheduler::every_minutes(interval_mins);
    info!(
        "Watching {} every {} minute(s)",
        note.display(),
        interval_mins
    );

    refresh
        .run(&mut scheduler, |run| async move {
            match render_note(processor, note).await {
                Ok(rendered) => {
                    if run > 0 {
                        println!();
                    }
                    println!("{}", rendered);
                }
                Err(e) => warn!("Refresh {} failed: {:#}", run, e),
            }
        })
        .await;
    Ok(())
}

pub fn config(settings_file: &SettingsFile, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::SetKey { key } => {
            settings_file
                .update(|settings| settings.api_key = key.trim().to_string())
                .with_context(|| {
                    format!("Failed to save settings to {}", settings_file.path().display())
                })?;
            println!("Saved API key to {}", settings_file.path().display());
        }
        ConfigAction::Show => {
            let settings = settings_file.load()?;
            println!("settings: {}", settings_file.path().display());
            println!("apiKey: {}", settings.masked_api_key());
        }
        ConfigAction::Path => {
            println!("{}", settings_file.path().display());
        }
    }
    Ok(())
}
