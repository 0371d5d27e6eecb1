//! Configuration validation.
//!
//! Semantic checks on top of what serde already guarantees syntactically.
//! Validation is a pure function and reports every problem it finds, not
//! just the first one.

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::ProxyConfig;

/// A single validation problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("upstream origin is not an absolute http(s) URL: {0}")]
    InvalidOrigin(String),

    #[error("upstream origin must not carry a path, query, or fragment: {0}")]
    OriginNotBare(String),

    #[error("upstream request timeout must be greater than zero")]
    ZeroTimeout,

    #[error("listener bind address is not a valid socket address: {0}")]
    InvalidBindAddress(String),
}

/// Validate a configuration, collecting every issue.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    match Url::parse(&config.upstream.origin) {
        Ok(url) => {
            if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
                issues.push(ValidationIssue::InvalidOrigin(config.upstream.origin.clone()));
            } else if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
                issues.push(ValidationIssue::OriginNotBare(config.upstream.origin.clone()));
            }
        }
        Err(_) => {
            issues.push(ValidationIssue::InvalidOrigin(config.upstream.origin.clone()));
        }
    }

    if config.upstream.request_timeout_secs == 0 {
        issues.push(ValidationIssue::ZeroTimeout);
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        issues.push(ValidationIssue::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}
