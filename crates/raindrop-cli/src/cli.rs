use clap::{Parser, Subcommand};
use raindrop_client::DEFAULT_BASE_URL;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "raindrop")]
#[command(version)]
#[command(about = "Render Raindrop.io bookmark lists from ```raindrop blocks in Markdown notes", long_about = None)]
pub struct Cli {
    /// Settings file (default: ~/.config/raindrop-notes/settings.json)
    #[arg(long, global = true, env = "RAINDROP_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Raindrop API host
    #[arg(long, global = true, env = "RAINDROP_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render every raindrop block in a note
    Render {
        /// Markdown note to render
        note: PathBuf,

        /// Print the raw render output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the search query each block would send, without any network access
    Query {
        /// Markdown note to inspect
        note: PathBuf,
    },

    /// Re-render a note periodically
    Watch {
        /// Markdown note to render
        note: PathBuf,

        /// Minutes between refreshes (at most one week)
        #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..=10080))]
        interval_mins: u64,

        /// Stop after this many refreshes
        #[arg(long)]
        runs: Option<usize>,
    },

    /// Manage stored settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Store the Raindrop API key
    SetKey {
        /// Test token or access token from raindrop.io integrations
        key: String,
    },
    /// Show the stored settings with the key masked
    Show,
    /// Print the settings file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn watch_rejects_zero_interval() {
        let result = Cli::try_parse_from(["raindrop", "watch", "note.md", "--interval-mins", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn watch_rejects_interval_over_a_week() {
        let result =
            Cli::try_parse_from(["raindrop", "watch", "note.md", "--interval-mins", "10081"]);
        assert!(result.is_err());

        let result =
            Cli::try_parse_from(["raindrop", "watch", "note.md", "--interval-mins", "10080"]);
        assert!(result.is_ok());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "raindrop",
            "render",
            "note.md",
            "--base-url",
            "http://localhost:1234",
        ])
        .unwrap();
        assert_eq!(cli.base_url, "http://localhost:1234");
        assert!(matches!(cli.command, Commands::Render { json: false, .. }));
    }
}
