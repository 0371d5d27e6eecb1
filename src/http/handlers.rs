//! Endpoint handlers.
//!
//! Both data endpoints return the [`ProxyResult`] envelope with HTTP 200
//! whether the upstream call succeeded or failed; the envelope's `success`
//! flag carries the outcome. Only validation failures (bad verb, target
//! outside the allowed origin) surface as HTTP 400, and those never reach
//! the forwarder.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use rquest::Method;
use serde::{Deserialize, Serialize};

use crate::forward::{ensure_same_origin, parse_method, ProxyResult};
use crate::http::server::AppState;

/// Service identifier reported by the health endpoint.
pub const SERVICE_NAME: &str = "nof1-proxy";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub service: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
        service: SERVICE_NAME,
    })
}

#[derive(Debug, Deserialize)]
pub struct AccountTotalsParams {
    /// Pagination cursor, forwarded upstream only when present.
    pub marker: Option<i64>,
}

/// `GET /api/account-totals` — convenience wrapper fixing the upstream path.
pub async fn account_totals(
    State(state): State<AppState>,
    Query(params): Query<AccountTotalsParams>,
) -> Json<ProxyResult> {
    let target = format!("{}/api/account-totals", state.forwarder.origin());
    let query: Vec<(String, String)> = params
        .marker
        .map(|marker| vec![("marker".to_string(), marker.to_string())])
        .unwrap_or_default();

    Json(state.forwarder.forward(&target, Method::GET, &query).await)
}

fn default_method() -> String {
    "GET".to_string()
}

#[derive(Debug, Deserialize)]
pub struct ProxyParams {
    /// Target URL; must share the configured upstream origin.
    pub url: String,

    #[serde(default = "default_method")]
    pub method: String,
}

/// `GET /api/proxy` — generic forwarder behind the origin gate.
pub async fn proxy(
    State(state): State<AppState>,
    Query(params): Query<ProxyParams>,
) -> Response {
    if let Err(err) = ensure_same_origin(state.forwarder.origin(), &params.url) {
        tracing::warn!(url = %params.url, "Rejected target outside allowed origin");
        return (StatusCode::BAD_REQUEST, err.to_string()).into_response();
    }

    let method = match parse_method(&params.method) {
        Ok(method) => method,
        Err(err) => {
            return (StatusCode::BAD_REQUEST, err.to_string()).into_response();
        }
    };

    Json(state.forwarder.forward(&params.url, method, &[]).await).into_response()
}
