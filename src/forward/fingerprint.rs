//! Browser fingerprint profile for outbound requests.
//!
//! The profile bundles the fixed header set sent with every upstream call
//! and the named TLS/HTTP2 impersonation target applied at the transport
//! layer. It is built once at startup and never mutated per-request, so
//! every outbound call presents an identical fingerprint.

use rquest::header::{
    HeaderMap, HeaderValue, InvalidHeaderValue, ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE,
    CACHE_CONTROL, CONNECTION, PRAGMA, REFERER, USER_AGENT,
};
use rquest::tls::Impersonate;

const CHROME_120_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Immutable process-wide browser disguise.
#[derive(Debug, Clone)]
pub struct FingerprintProfile {
    headers: HeaderMap,
    impersonation: Impersonate,
}

impl FingerprintProfile {
    /// Build the Chrome 120 profile. The Referer is derived from the
    /// configured upstream origin so requests look same-origin.
    pub fn chrome_120(origin: &str) -> Result<Self, InvalidHeaderValue> {
        let referer = format!("{}/", origin.trim_end_matches('/'));

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(CHROME_120_UA));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json, text/plain, */*"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
        headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip, deflate, br"));
        headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
        headers.insert(REFERER, HeaderValue::from_str(&referer)?);
        headers.insert("sec-fetch-dest", HeaderValue::from_static("empty"));
        headers.insert("sec-fetch-mode", HeaderValue::from_static("cors"));
        headers.insert("sec-fetch-site", HeaderValue::from_static("same-origin"));
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));

        Ok(Self {
            headers,
            impersonation: Impersonate::Chrome120,
        })
    }

    /// Header set attached to every outbound request.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Transport-level impersonation target.
    pub fn impersonation(&self) -> Impersonate {
        self.impersonation.clone()
    }
}
