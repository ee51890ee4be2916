use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Daily business report extraction from the depot workbook
#[derive(Parser, Debug, Clone)]
#[command(
    name = "depot-report",
    about = "Daily business report extraction from the depot workbook",
    version
)]
pub struct Settings {
    /// Report date (YYYY-MM-DD); defaults to today when no range is given
    #[arg(long)]
    pub date: Option<String>,

    /// Range start (YYYY-MM-DD, inclusive)
    #[arg(long, requires = "to")]
    pub from: Option<String>,

    /// Range end (YYYY-MM-DD, inclusive)
    #[arg(long, requires = "from")]
    pub to: Option<String>,

    /// Workbook (spreadsheet) identifier
    #[arg(long, env = "DEPOT_SPREADSHEET_ID")]
    pub spreadsheet_id: Option<String>,

    /// Google Sheets API key
    #[arg(long, env = "DEPOT_SHEETS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,

    /// Clear the saved configuration
    #[arg(long)]
    pub clear: bool,
}

// ── StoredConfig ───────────────────────────────────────────────────────────────

/// Persisted configuration saved to `~/.depot-report/config.json`.
///
/// Only the workbook id is stored; the API key stays in the
/// environment.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct StoredConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spreadsheet_id: Option<String>,
}

impl StoredConfig {
    /// Return the default path to the persisted config file.
    pub fn config_path() -> PathBuf {
        Self::config_path_in(&dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
    }

    /// Return the config path rooted at `base_dir` (used for testing).
    pub fn config_path_in(base_dir: &std::path::Path) -> PathBuf {
        base_dir.join(".depot-report").join("config.json")
    }

    /// Load the persisted config from an explicit path.
    /// Returns `Default` when the file is absent or cannot be parsed.
    pub fn load_from(path: &std::path::Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Atomically write the config to an explicit path, creating parent
    /// directories if needed.
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;

        // Write to a temp file then rename for atomicity.
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, &json)?;
        std::fs::rename(&tmp, path)?;

        Ok(())
    }

    /// Delete the config file at an explicit path if it exists.
    pub fn clear_at(path: &std::path::Path) -> Result<(), std::io::Error> {
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse CLI arguments and merge with the persisted config.
    pub fn load() -> Self {
        Self::load_from_args(std::env::args_os().collect(), &StoredConfig::config_path())
    }

    /// Same as [`Settings::load`] but accepts an explicit argument list
    /// and config path, enabling unit tests without subprocesses.
    pub fn load_from_args(args: Vec<std::ffi::OsString>, config_path: &std::path::Path) -> Self {
        let mut settings = Settings::parse_from(args);

        if settings.clear {
            let _ = StoredConfig::clear_at(config_path);
            return settings;
        }

        let stored = StoredConfig::load_from(config_path);

        match &settings.spreadsheet_id {
            // CLI (or env) wins and refreshes the stored value.
            Some(id) => {
                if stored.spreadsheet_id.as_deref() != Some(id.as_str()) {
                    let updated = StoredConfig {
                        spreadsheet_id: Some(id.clone()),
                    };
                    if let Err(e) = updated.save_to(config_path) {
                        tracing::warn!("could not persist config: {}", e);
                    }
                }
            }
            None => settings.spreadsheet_id = stored.spreadsheet_id,
        }

        settings
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
