//! Structured logging with tracing
//!
//! Centralized logging configuration using the tracing ecosystem: an
//! env-filter honoring `RGW_LOG`, with plain or JSON output per config.

use rgw_domain::error::{Error, Result};
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

// Re-export LoggingConfig for convenience
pub use crate::config::types::LoggingConfig;

/// Initialize logging with the provided configuration
///
/// `RGW_LOG` overrides the configured level when set. Safe to call once;
/// a second call returns an error from the subscriber registry.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env("RGW_LOG").unwrap_or_else(|_| EnvFilter::new(&config.level));

    // Types differ between the two branches, so they cannot share the
    // builder chain.
    if config.json_format {
        let stdout = fmt::layer().json().with_target(true);
        Registry::default()
            .with(filter)
            .with(stdout)
            .try_init()
            .map_err(|e| Error::configuration_with_source("failed to initialize logging", e))?;
    } else {
        let stdout = fmt::layer().with_target(true);
        Registry::default()
            .with(filter)
            .with(stdout)
            .try_init()
            .map_err(|e| Error::configuration_with_source("failed to initialize logging", e))?;
    }

    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {}. Use trace, debug, info, warn, or error",
            level
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &std::path::Path, found: bool) {
    if found {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_levels_parse() {
        for level in ["trace", "debug", "info", "warn", "warning", "error", "INFO"] {
            assert!(parse_log_level(level).is_ok(), "{level}");
        }
    }

    #[test]
    fn unknown_level_is_rejected() {
        assert!(parse_log_level("loud").is_err());
    }
}
