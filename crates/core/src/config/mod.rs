//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (SNIPBIN_*)
//! 2. TOML config file (if SNIPBIN_CONFIG_FILE set)
//! 3. Built-in defaults

use std::path::PathBuf;
use std::time::Duration;

use chrono::{FixedOffset, Offset, Utc};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (SNIPBIN_*)
/// 2. TOML config file (if SNIPBIN_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    ///
    /// Set via SNIPBIN_BIND_ADDR environment variable.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Path to the SQLite snippet database.
    ///
    /// Set via SNIPBIN_DB_PATH environment variable.
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,

    /// Directory served under /static.
    ///
    /// Set via SNIPBIN_STATIC_DIR environment variable.
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// Timezone offset, in minutes east of UTC, applied to snippet
    /// timestamps when they are read back for display. Storage is always
    /// UTC. Default 0 (display in UTC).
    ///
    /// Set via SNIPBIN_UTC_OFFSET_MINUTES environment variable.
    #[serde(default)]
    pub utc_offset_minutes: i32,

    /// Seconds between background purges of expired snippets. 0 disables
    /// the purge task.
    ///
    /// Set via SNIPBIN_PURGE_INTERVAL_SECS environment variable.
    #[serde(default = "default_purge_interval_secs")]
    pub purge_interval_secs: u64,
}

fn default_bind_addr() -> String {
    "127.0.0.1:7000".into()
}

fn default_db_path() -> PathBuf {
    PathBuf::from("./snipbin.sqlite")
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("./ui/static")
}

fn default_purge_interval_secs() -> u64 {
    3600
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            db_path: default_db_path(),
            static_dir: default_static_dir(),
            utc_offset_minutes: 0,
            purge_interval_secs: default_purge_interval_secs(),
        }
    }
}

impl AppConfig {
    /// Purge period as a Duration for use with tokio timers.
    pub fn purge_interval(&self) -> Duration {
        Duration::from_secs(self.purge_interval_secs)
    }

    /// The configured display timezone.
    ///
    /// Falls back to UTC if the offset is out of range; [`Self::validate`]
    /// rejects such configs before they get this far.
    pub fn display_timezone(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes * 60).unwrap_or_else(|| Utc.fix())
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `SNIPBIN_`
    /// 2. TOML file from `SNIPBIN_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("SNIPBIN_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(
            Env::prefixed("SNIPBIN_")
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        );

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.bind_addr, "127.0.0.1:7000");
        assert_eq!(config.db_path, PathBuf::from("./snipbin.sqlite"));
        assert_eq!(config.static_dir, PathBuf::from("./ui/static"));
        assert_eq!(config.utc_offset_minutes, 0);
        assert_eq!(config.purge_interval_secs, 3600);
    }

    #[test]
    fn test_purge_interval_duration() {
        let config = AppConfig::default();
        assert_eq!(config.purge_interval(), Duration::from_secs(3600));
    }

    #[test]
    fn test_display_timezone_default_utc() {
        let config = AppConfig::default();
        assert_eq!(config.display_timezone().local_minus_utc(), 0);
    }

    #[test]
    fn test_display_timezone_offset() {
        let config = AppConfig { utc_offset_minutes: 360, ..Default::default() };
        assert_eq!(config.display_timezone().local_minus_utc(), 6 * 3600);
    }
}
