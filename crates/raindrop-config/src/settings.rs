//! Settings blob and its JSON file store

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable that overrides the stored API key
pub const API_KEY_ENV_VAR: &str = "RAINDROP_API_KEY";

/// Persisted settings
///
/// Stored fields are merged over the defaults: anything missing from the
/// file keeps its default value and unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Raindrop.io test token or OAuth access token; empty when unset
    pub api_key: String,
}

impl Settings {
    /// Whether an API key is stored
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// API key with all but the last four characters hidden
    pub fn masked_api_key(&self) -> String {
        mask_secret(&self.api_key)
    }
}

/// Errors from settings store operations
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// IO error reading/writing the settings file
    #[error("settings file IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("settings serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

/// JSON-backed settings store
///
/// Reads/writes `settings.json` in the raindrop-notes config directory.
/// File permissions are set to `0o600` (owner read/write only) since the
/// file holds the API key.
#[derive(Debug, Clone)]
pub struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    /// Create a SettingsFile at the default path
    pub fn new() -> Self {
        Self {
            path: Self::default_path(),
        }
    }

    /// Create a SettingsFile with a custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default settings path: `$XDG_CONFIG_HOME/raindrop-notes/settings.json`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".config")
            })
            .join("raindrop-notes")
            .join("settings.json")
    }

    /// Get the path to the settings file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, falling back to defaults when the file is absent or unreadable JSON
    pub fn load(&self) -> SettingsResult<Settings> {
        if !self.path.exists() {
            debug!("No settings file at {}, using defaults", self.path.display());
            return Ok(Settings::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Settings::default());
        }

        match serde_json::from_str(&content) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                warn!(
                    "Failed to parse settings file at {}: {}. Treating as empty.",
                    self.path.display(),
                    e
                );
                Ok(Settings::default())
            }
        }
    }

    /// Write settings to disk with restricted permissions
    pub fn save(&self, settings: &Settings) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(settings)?;
        std::fs::write(&self.path, json)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&self.path, perms)?;
        }

        debug!("Saved settings to {}", self.path.display());
        Ok(())
    }

    /// Load, modify and save in one step
    pub fn update(&self, edit: impl FnOnce(&mut Settings)) -> SettingsResult<Settings> {
        let mut settings = self.load()?;
        edit(&mut settings);
        self.save(&settings)?;
        Ok(settings)
    }
}

impl Default for SettingsFile {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve the API key to use for requests
///
/// A non-empty `RAINDROP_API_KEY` wins over the stored value. Returns an
/// empty string when neither is set; the fetcher reports that as a missing key.
pub fn resolve_api_key(settings: &Settings) -> String {
    if let Ok(value) = std::env::var(API_KEY_ENV_VAR) {
        let value = value.trim();
        if !value.is_empty() {
            debug!("Using API key from {}", API_KEY_ENV_VAR);
            return value.to_string();
        }
    }
    settings.api_key.trim().to_string()
}

fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.is_empty() {
        return "(not set)".to_string();
    }
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), visible)
}
