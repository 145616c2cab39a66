//! Tracing subscriber setup.
//!
//! The library only emits `tracing` events; binaries embedding it call
//! [`init_tracing`] once at startup to get them printed.

use crate::config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Tracing configuration.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Log level filter
    pub log_level: String,
    /// Whether to output JSON format
    pub json_output: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_output: false,
        }
    }
}

impl TracingConfig {
    /// Derive tracing settings from the token configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            log_level: config.log_level.clone(),
            json_output: config.log_json,
        }
    }

    /// Create config with custom log level.
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enable JSON output.
    #[must_use]
    pub const fn with_json_output(mut self) -> Self {
        self.json_output = true;
        self
    }
}

/// Initialize tracing with the given configuration.
///
/// `RUST_LOG` takes precedence over the configured level. Returns `false`
/// if a global subscriber was already installed.
pub fn init_tracing(config: &TracingConfig) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.json_output {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
            .is_ok()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TracingConfig::default();
        assert_eq!(config.log_level, "info");
        assert!(!config.json_output);
    }

    #[test]
    fn test_config_builder() {
        let config = TracingConfig::default()
            .with_log_level("debug")
            .with_json_output();

        assert_eq!(config.log_level, "debug");
        assert!(config.json_output);
    }

    #[test]
    fn test_from_token_config() {
        let mut token_config = Config::new("secret");
        token_config.log_level = "warn".to_string();
        token_config.log_json = true;

        let config = TracingConfig::from_config(&token_config);
        assert_eq!(config.log_level, "warn");
        assert!(config.json_output);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        let config = TracingConfig::default().with_log_level("debug");
        let _ = init_tracing(&config);
        assert!(!init_tracing(&config));
    }
}
