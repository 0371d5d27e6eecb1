//! Configuration loading.
//!
//! Configuration is resolved exactly once at startup: defaults, then an
//! optional TOML file, then environment overrides (`NOF1_BASE_URL`,
//! `REQUEST_TIMEOUT`), then validation. The result is immutable for the
//! process lifetime.

use std::env;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ProxyConfig;
use crate::config::validation::{validate_config, ValidationIssue};

/// Environment variable overriding the upstream origin.
pub const ENV_BASE_URL: &str = "NOF1_BASE_URL";

/// Environment variable overriding the outbound request timeout (seconds).
pub const ENV_REQUEST_TIMEOUT: &str = "REQUEST_TIMEOUT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid REQUEST_TIMEOUT value: {0}")]
    InvalidTimeoutEnv(String),

    #[error("Validation failed: {}", .0.iter().map(|i| i.to_string()).collect::<Vec<_>>().join(", "))]
    Validation(Vec<ValidationIssue>),
}

/// Load, override, and validate configuration.
///
/// With no file path the defaults are used as the base. The returned
/// origin is normalized to have no trailing slash so paths can be joined
/// onto it directly.
pub fn load_config(path: Option<&Path>) -> Result<ProxyConfig, ConfigError> {
    let config = match path {
        Some(p) => toml::from_str(&fs::read_to_string(p)?)?,
        None => ProxyConfig::default(),
    };
    finalize(config, |name| env::var(name).ok())
}

fn finalize(
    mut config: ProxyConfig,
    env_lookup: impl Fn(&str) -> Option<String>,
) -> Result<ProxyConfig, ConfigError> {
    if let Some(origin) = env_lookup(ENV_BASE_URL) {
        config.upstream.origin = origin;
    }
    if let Some(raw) = env_lookup(ENV_REQUEST_TIMEOUT) {
        config.upstream.request_timeout_secs = raw
            .parse()
            .map_err(|_| ConfigError::InvalidTimeoutEnv(raw))?;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    config.upstream.origin = config.upstream.origin.trim_end_matches('/').to_string();
    Ok(config)
}
