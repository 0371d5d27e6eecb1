//! Request forwarding against the fixed upstream origin.
//!
//! # Responsibilities
//! - Validate methods and target origins before any network I/O
//! - Build outbound requests carrying the browser fingerprint
//! - Execute exactly one attempt over the shared impersonating client
//! - Classify every outcome into a normalized [`ProxyResult`]
//!
//! # Design Decisions
//! - The shared client is injected, not a global; it lives for the process
//! - Outcome classification is an exhaustive sum type; `forward` never
//!   lets a fault escape its boundary

pub mod fingerprint;
pub mod result;

use std::time::Duration;

use rquest::{Client, Method, StatusCode};
use serde_json::{json, Value};
use thiserror::Error;

pub use fingerprint::FingerprintProfile;
pub use result::ProxyResult;

/// HTTP verbs the forwarder will re-issue upstream.
const SUPPORTED_METHODS: [Method; 7] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::PATCH,
    Method::HEAD,
    Method::OPTIONS,
];

/// Input rejected before the forwarder is ever invoked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Unsupported HTTP method: {0}")]
    Method(String),

    #[error("URL must start with {0}")]
    OriginMismatch(String),
}

/// Parse a caller-supplied verb, case-insensitively, against the
/// supported set.
pub fn parse_method(raw: &str) -> Result<Method, ValidationError> {
    let upper = raw.to_ascii_uppercase();
    SUPPORTED_METHODS
        .iter()
        .find(|m| m.as_str() == upper)
        .cloned()
        .ok_or_else(|| ValidationError::Method(raw.to_string()))
}

/// The access-control gate: a target is allowed iff it is prefixed by the
/// configured origin. Without this the proxy endpoint would be an open
/// relay to arbitrary hosts.
pub fn ensure_same_origin(origin: &str, target_url: &str) -> Result<(), ValidationError> {
    if target_url.starts_with(origin) {
        Ok(())
    } else {
        Err(ValidationError::OriginMismatch(origin.to_string()))
    }
}

/// Build the shared outbound client: browser impersonation at the TLS and
/// HTTP/2 layer, bounded by the configured timeout. Created once at
/// startup and shared by all requests.
pub fn build_client(
    profile: &FingerprintProfile,
    request_timeout_secs: u64,
) -> Result<Client, rquest::Error> {
    Client::builder()
        .impersonate(profile.impersonation())
        .timeout(Duration::from_secs(request_timeout_secs))
        .build()
}

/// Classified outcome of a single outbound attempt.
#[derive(Debug, Error)]
enum ForwardError {
    #[error("Request failed: upstream returned {status} (Status: {})", .status.as_u16())]
    ErrorStatus { status: StatusCode },

    #[error("Request failed: {0}")]
    Network(rquest::Error),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<rquest::Error> for ForwardError {
    fn from(err: rquest::Error) -> Self {
        if err.is_builder() {
            ForwardError::Unexpected(err.to_string())
        } else {
            ForwardError::Network(err)
        }
    }
}

/// Forwards requests to the fixed upstream origin with a browser-like
/// fingerprint and normalizes every outcome.
pub struct Forwarder {
    client: Client,
    fingerprint: FingerprintProfile,
    origin: String,
}

impl Forwarder {
    pub fn new(client: Client, fingerprint: FingerprintProfile, origin: impl Into<String>) -> Self {
        let origin = origin.into();
        Self {
            client,
            fingerprint,
            origin: origin.trim_end_matches('/').to_string(),
        }
    }

    /// The configured upstream origin, without trailing slash.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Re-issue a request upstream and normalize the outcome.
    ///
    /// One attempt, no retries. Extra query parameters augment any query
    /// string already present on the target. All failure paths terminate
    /// in a `ProxyResult`; this method does not panic across its boundary.
    pub async fn forward(
        &self,
        target_url: &str,
        method: Method,
        query: &[(String, String)],
    ) -> ProxyResult {
        match self.dispatch(target_url, method, query).await {
            Ok(data) => ProxyResult::success(data),
            Err(err) => {
                tracing::warn!(target = %target_url, error = %err, "Upstream call failed");
                ProxyResult::failure(err.to_string())
            }
        }
    }

    async fn dispatch(
        &self,
        target_url: &str,
        method: Method,
        query: &[(String, String)],
    ) -> Result<Value, ForwardError> {
        let mut request = self
            .client
            .request(method, target_url)
            .headers(self.fingerprint.headers().clone());
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(ForwardError::ErrorStatus { status });
        }

        let body = response.text().await?;

        // Non-JSON upstream bodies are not failures; wrap them opaquely.
        Ok(match serde_json::from_str(&body) {
            Ok(value) => value,
            Err(_) => json!({ "content": body }),
        })
    }
}
