//! Shell configuration
//!
//! A small JSON document. Every field has a default so an empty object, or
//! no file at all, yields a working configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use app_ui::{SunlightWindow, ThemeMode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "SOLAR_SHELL_CONFIG";

/// Config error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("Failed to read config {path}: {source}")]
    Io {
        /// Offending path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The file is not valid config JSON
    #[error("Invalid config {path}: {source}")]
    Parse {
        /// Offending path
        path: PathBuf,
        /// Underlying error
        source: serde_json::Error,
    },
}

/// Result type for config operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Shell configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory of the key-value store
    pub storage_path: String,
    /// Theme mode applied at startup; when unset it is picked from the
    /// hour: dark inside the sunlight window, auto outside it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_theme_mode: Option<ThemeMode>,
    /// Simulated login round-trip
    pub login_latency_ms: u64,
    /// Daytime dark override
    pub sunlight: SunlightWindow,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_path: "solar_shell_kv.db".to_string(),
            initial_theme_mode: None,
            login_latency_ms: 1500,
            sunlight: SunlightWindow::default(),
        }
    }
}

impl AppConfig {
    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        serde_json::from_str(&raw)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    /// Load from the file named by `SOLAR_SHELL_CONFIG`, or defaults when unset
    pub fn from_env() -> Result<Self> {
        Self::load_optional(std::env::var_os(CONFIG_ENV).map(PathBuf::from))
    }

    fn load_optional(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Mode to start in at `hour`
    pub fn startup_mode(&self, hour: u32) -> ThemeMode {
        self.initial_theme_mode
            .unwrap_or_else(|| app_ui::startup_mode(hour, &self.sunlight))
    }

    /// Login latency as a duration
    pub fn login_latency(&self) -> Duration {
        Duration::from_millis(self.login_latency_ms)
    }
}
