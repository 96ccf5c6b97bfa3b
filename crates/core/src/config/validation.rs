//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, or defaults.

use std::net::SocketAddr;

use crate::config::AppConfig;
use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },
}

/// RFC 3339 caps offsets at +/-18 hours.
const MAX_OFFSET_MINUTES: i32 = 18 * 60;

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `bind_addr` is not a parseable socket address
    /// - `utc_offset_minutes` is outside +/-18 hours
    /// - `static_dir` is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bind_addr.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::Invalid {
                field: "bind_addr".into(),
                reason: format!("'{}' is not a valid host:port address", self.bind_addr),
            });
        }

        if self.utc_offset_minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(ConfigError::Invalid {
                field: "utc_offset_minutes".into(),
                reason: "must be within +/-1080 (18 hours)".into(),
            });
        }

        if self.static_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid { field: "static_dir".into(), reason: "must not be empty".into() });
        }

        if self.purge_interval_secs == 0 {
            tracing::warn!("purge_interval_secs is 0; expired snippets will accumulate on disk");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_default_config() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bad_bind_addr() {
        let config = AppConfig { bind_addr: ":7000".into(), ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "bind_addr"));
    }

    #[test]
    fn test_validate_offset_out_of_range() {
        let config = AppConfig { utc_offset_minutes: 19 * 60, ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "utc_offset_minutes"));
    }

    #[test]
    fn test_validate_negative_offset_in_range() {
        let config = AppConfig { utc_offset_minutes: -360, ..Default::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_static_dir() {
        let config = AppConfig { static_dir: PathBuf::new(), ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "static_dir"));
    }

    #[test]
    fn test_validate_edge_offsets() {
        let east = AppConfig { utc_offset_minutes: 18 * 60, ..Default::default() };
        assert!(east.validate().is_ok());
        let west = AppConfig { utc_offset_minutes: -18 * 60, ..Default::default() };
        assert!(west.validate().is_ok());
    }
}
