//! Normalized response envelope.
//!
//! Every call through the forwarder terminates in a [`ProxyResult`],
//! whether the upstream answered, errored, or never responded. Exactly one
//! of `data` / `error` is populated; the caller reads the `success` flag,
//! not the outer HTTP status, to tell the outcomes apart.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Uniform success/data/error/timestamp envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyResult {
    pub success: bool,
    pub data: Option<Value>,
    pub error: Option<String>,
    /// Capture time, ISO-8601.
    pub timestamp: String,
}

impl ProxyResult {
    /// Successful outcome carrying the upstream payload.
    pub fn success(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    /// Failed outcome carrying a descriptive message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
