//! OS signal handling.

/// Wait for Ctrl+C.
///
/// Installing the handler can only fail in degenerate environments; in
/// that case shutdown happens via process kill instead of gracefully.
pub async fn wait_for_ctrl_c() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
