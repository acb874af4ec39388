//! CLI configuration management.
//!
//! Values come from (highest precedence first) command-line flags,
//! environment variables (`.env` is honoured), the JSON config file and
//! built-in defaults. Flags are applied by the caller via [`Config::with_overrides`].

use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Default bind address for `lnu serve`.
pub const DEFAULT_BIND: &str = "127.0.0.1:8787";

/// Application-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Extra data document (JSON or TOML) layered on top of the seed.
    pub data_path: Option<PathBuf>,

    /// Skip the built-in seed data.
    pub no_seed: bool,

    /// Bind address for the HTTP server.
    pub bind: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: None,
            no_seed: false,
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the config file and environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present (silently ignore if missing)
        let _ = dotenvy::dotenv();

        let mut config = match Self::config_file_path() {
            Some(config_path) if config_path.exists() => {
                let contents = std::fs::read_to_string(&config_path).with_context(|| {
                    format!("Failed to read config from {}", config_path.display())
                })?;
                serde_json::from_str(&contents).with_context(|| "Failed to parse config file")?
            }
            _ => Self::default(),
        };

        // Environment variables take precedence over the file
        if let Ok(path) = std::env::var("LNU_DATA_PATH") {
            if !path.trim().is_empty() {
                config.data_path = Some(PathBuf::from(path));
            }
        }
        if let Ok(value) = std::env::var("LNU_NO_SEED") {
            config.no_seed = parse_flag(&value)
                .with_context(|| format!("Invalid LNU_NO_SEED value: {value}"))?;
        }
        if let Ok(bind) = std::env::var("LNU_BIND") {
            if !bind.trim().is_empty() {
                config.bind = bind;
            }
        }

        Ok(config)
    }

    /// Apply command-line flags on top of the loaded values.
    pub fn with_overrides(mut self, data_path: Option<PathBuf>, no_seed: bool) -> Self {
        if data_path.is_some() {
            self.data_path = data_path;
        }
        if no_seed {
            self.no_seed = true;
        }
        self
    }

    /// Get the path to the config file.
    pub fn config_file_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "lnuisuti", "lnu").map(|dirs| dirs.config_dir().join("config.json"))
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("expected true or false, got {other}"),
    }
}
