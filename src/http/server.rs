//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router with the three service routes
//! - Wire up middleware (tracing, request ID, CORS, panic recovery)
//! - Serve with graceful shutdown so in-flight upstream calls drain before
//!   the shared client is released

use std::any::Any;
use std::sync::Arc;

use axum::{
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::forward::{Forwarder, ProxyResult};
use crate::http::handlers;

/// Application state injected into handlers.
///
/// The forwarder (and the client inside it) is the only shared mutable
/// resource; it is internally thread-safe and cloned by reference.
#[derive(Clone)]
pub struct AppState {
    pub forwarder: Arc<Forwarder>,
}

/// HTTP server for the proxy service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    pub fn new(forwarder: Arc<Forwarder>) -> Self {
        let state = AppState { forwarder };
        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route("/api/account-totals", get(handlers::account_totals))
            .route("/api/proxy", get(handlers::proxy))
            .with_state(state)
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(CorsLayer::permissive())
            .layer(CatchPanicLayer::custom(handle_panic))
    }

    /// Run the server until the shutdown signal fires, then drain.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: watch::Receiver<bool>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let app = self.router.into_make_service();
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.changed().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Last-resort boundary: a panicking handler still answers with the
/// envelope instead of tearing down the connection.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "request handler panicked".to_string()
    };
    tracing::error!(detail = %detail, "Recovered from panic in request handler");

    Json(ProxyResult::failure(format!("Unexpected error: {detail}"))).into_response()
}
