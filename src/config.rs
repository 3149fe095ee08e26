//! Configuration Management
//!
//! Handles persistent configuration storage for the stackform CLI.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use stackform::{DecodeMode, Format};
use std::path::PathBuf;

/// Per-user directory holding the config file and the log
///
/// `<config_dir>/stackform`, or `~/.stackform` where there is no config dir.
pub fn app_dir() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("stackform"))
        .or_else(|| dirs::home_dir().map(|home| home.join(".stackform")))
}

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Output format when `--output` is not given (defaults to the input's)
    #[serde(default)]
    pub output: Option<Format>,
    /// Fail on resources that do not match their registered kind
    #[serde(default)]
    pub strict: bool,
}

impl Config {
    pub fn config_path() -> Option<PathBuf> {
        app_dir().map(|dir| dir.join("config.json"))
    }

    /// Saved defaults, or the built-in ones when there is no readable file
    pub fn load() -> Self {
        let Some(path) = Self::config_path().filter(|path| path.exists()) else {
            return Self::default();
        };

        let parsed: Result<Self> = std::fs::read_to_string(&path)
            .context("read failed")
            .and_then(|content| serde_json::from_str(&content).context("invalid JSON"));
        parsed.unwrap_or_else(|e| {
            tracing::warn!("Ignoring config {}: {:#}", path.display(), e);
            Self::default()
        })
    }

    /// Write to [`config_path`](Self::config_path), creating the app dir
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path().context("no config directory for this user")?;
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        std::fs::write(&path, serde_json::to_string_pretty(self)?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Get effective output format (CLI > config > input format)
    pub fn effective_output(&self, cli: Option<Format>, input: Format) -> Format {
        cli.or(self.output).unwrap_or(input)
    }

    /// Get effective decode mode (`--strict` > config)
    pub fn decode_mode(&self, cli_strict: bool) -> DecodeMode {
        if cli_strict || self.strict {
            DecodeMode::Strict
        } else {
            DecodeMode::Tolerant
        }
    }
}
