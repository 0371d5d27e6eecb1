//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Defaults mirror the public NOF1 deployment so the binary runs with no
//! config file at all.

use serde::{Deserialize, Serialize};

/// Root configuration for the proxy service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProxyConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream origin and outbound request settings.
    pub upstream: UpstreamConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Upstream configuration.
///
/// The origin is the only destination the proxy will talk to; every
/// forwarded URL must share it exactly.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Upstream origin (scheme + host, no path).
    pub origin: String,

    /// Outbound request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            origin: "https://nof1.ai".to_string(),
            request_timeout_secs: 30,
        }
    }
}
