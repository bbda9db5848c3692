//! TOML configuration for the archive endpoint and HTTP client.
//!
//! Every field has a default, so an empty file is a valid configuration.

use crate::archive::query::DEFAULT_BASE_URL;
use crate::archive::range::DEFAULT_PERIOD;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DstConfig {
    pub archive: ArchiveConfig,
    pub http: HttpConfig,
}

/// Where the archive lives and how much it serves per query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArchiveConfig {
    /// Query script URL, without a query string.
    pub base_url: String,
    /// Maximum number of years per query.
    pub period: u32,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            period: DEFAULT_PERIOD,
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HttpConfig {
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: concat!("dst/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl DstConfig {
    /// Load and validate a configuration file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate a configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.archive.period == 0 {
            return Err(ConfigError::Invalid("archive.period must be at least 1".into()));
        }
        if self.archive.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("archive.base_url must not be empty".into()));
        }
        if self.archive.base_url.contains('?') {
            return Err(ConfigError::Invalid(
                "archive.base_url must not carry a query string".into(),
            ));
        }
        if self.http.timeout_secs == 0 {
            return Err(ConfigError::Invalid("http.timeout_secs must be at least 1".into()));
        }
        Ok(())
    }
}
