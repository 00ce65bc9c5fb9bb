use super::{CacheBackend, CacheConfig, ConfigError, LoggingConfig, PardotConfig, SiteConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "pardot-embed.toml";

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub pardot: PardotConfig,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub force_https: Option<bool>,
    pub cache_backend: Option<CacheBackend>,
    pub cache_lifetime_secs: Option<u64>,
    pub log_level: Option<String>,
}

impl Config {
    /// Loads `config_path`, or `pardot-embed.toml` when present, falling back
    /// to defaults, then applies `overrides`.
    pub fn load(config_path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH)?
            }
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml(&content).map_err(|message| ConfigError::Parse {
            path: path.to_string(),
            message,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(force_https) = overrides.force_https {
            self.site.force_https = force_https;
        }
        if let Some(backend) = overrides.cache_backend {
            self.cache.backend = backend;
        }
        if let Some(lifetime) = overrides.cache_lifetime_secs {
            self.cache.lifetime_secs = lifetime;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !matches!(self.pardot.api_version, 3 | 4) {
            return Err(ConfigError::Validation(format!(
                "pardot.api_version must be 3 or 4, got {}",
                self.pardot.api_version
            )));
        }

        if !self.pardot.base_url.starts_with("http://")
            && !self.pardot.base_url.starts_with("https://")
        {
            return Err(ConfigError::Validation(
                "pardot.base_url must start with http:// or https://".to_string(),
            ));
        }

        let host = self
            .site
            .secure_host
            .strip_prefix("https://")
            .unwrap_or_default();
        if host.is_empty() || host.contains('/') {
            return Err(ConfigError::Validation(format!(
                "site.secure_host must be an https:// scheme and host without a path, got '{}'",
                self.site.secure_host
            )));
        }

        if self.cache.lifetime_secs == 0 {
            return Err(ConfigError::Validation(
                "cache.lifetime_secs must be greater than zero".to_string(),
            ));
        }

        if self.pardot.request_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "pardot.request_timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
