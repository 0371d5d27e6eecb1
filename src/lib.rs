//! NOF1 API proxy service library.
//!
//! A forwarding intermediary: inbound requests are re-issued against the
//! fixed NOF1 origin with a Chrome 120 fingerprint (headers plus TLS/HTTP2
//! impersonation) and every outcome comes back as a normalized
//! success/data/error/timestamp envelope.

pub mod config;
pub mod forward;
pub mod http;
pub mod lifecycle;

pub use config::ProxyConfig;
pub use forward::{FingerprintProfile, Forwarder, ProxyResult};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
