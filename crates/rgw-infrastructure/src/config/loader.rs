//! Configuration loader
//!
//! Handles loading configuration from defaults, a TOML file, and prefixed
//! environment variables, in that order of precedence (later sources
//! override earlier ones). Uses Figment for the merge.

use crate::config::types::{AppConfig, AuthMode, CacheBackend};
use crate::logging::log_config_loaded;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use rgw_domain::constants::EMBEDDING_DIMENSIONS;
use rgw_domain::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the working directory
const DEFAULT_CONFIG_FILE: &str = "rgw.toml";

/// Environment variable prefix; nested keys use `__` as separator
/// (e.g. `RGW__SERVER__PORT`, `RGW__DATABASE__MAX_CONNECTIONS`)
const ENV_PREFIX: &str = "RGW__";

/// Configuration loader service
#[derive(Clone, Default)]
pub struct ConfigLoader {
    /// Explicit configuration file path, when given on the command line
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader with default settings
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later override earlier):
    /// 1. `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, or `rgw.toml` if present)
    /// 3. `RGW__`-prefixed environment variables
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                figment = figment.merge(Toml::file(default_path));
                log_config_loaded(default_path, true);
            }
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: AppConfig = figment
            .extract()
            .map_err(|e| Error::configuration_with_source("failed to extract configuration", e))?;

        validate(&config)?;
        Ok(config)
    }
}

/// Validate cross-field invariants the type system cannot express
fn validate(config: &AppConfig) -> Result<()> {
    if config.server.port == 0 {
        return Err(Error::configuration("server.port must be non-zero"));
    }

    if config.embedding.dimensions != EMBEDDING_DIMENSIONS {
        return Err(Error::configuration(format!(
            "embedding.dimensions is {}, but the chunk store is provisioned for {}",
            config.embedding.dimensions, EMBEDDING_DIMENSIONS
        )));
    }

    if config.auth.mode == AuthMode::Production && config.auth.dev_header_enabled {
        return Err(Error::configuration(
            "auth.dev_header_enabled must be false in production mode",
        ));
    }

    if config.cache.enabled
        && config.cache.backend == CacheBackend::Redis
        && config.cache.redis_url.is_none()
    {
        return Err(Error::configuration(
            "cache.redis_url is required for the redis backend",
        ));
    }

    for origin in &config.cors.allowed_origins {
        let valid = (origin.starts_with("http://") || origin.starts_with("https://"))
            && !origin.ends_with('/');
        if !valid {
            return Err(Error::configuration(format!(
                "cors.allowed_origins entry '{origin}' is not a scheme://host[:port] origin"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(validate(&AppConfig::default()).is_ok());
    }

    #[test]
    fn production_with_dev_header_is_rejected() {
        let mut config = AppConfig::default();
        config.auth.mode = AuthMode::Production;
        config.auth.dev_header_enabled = true;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn production_without_dev_header_validates() {
        let mut config = AppConfig::default();
        config.auth.mode = AuthMode::Production;
        config.auth.dev_header_enabled = false;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn redis_backend_requires_url() {
        let mut config = AppConfig::default();
        config.cache.backend = CacheBackend::Redis;
        config.cache.redis_url = None;
        assert!(validate(&config).is_err());
        config.cache.redis_url = Some("redis://localhost:6379".to_string());
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn mismatched_dimensions_are_rejected() {
        let mut config = AppConfig::default();
        config.embedding.dimensions = 1536;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn malformed_origin_is_rejected() {
        let mut config = AppConfig::default();
        config.cors.allowed_origins = vec!["app.example.com".to_string()];
        assert!(validate(&config).is_err());
        config.cors.allowed_origins = vec!["https://app.example.com".to_string()];
        assert!(validate(&config).is_ok());
    }
}
