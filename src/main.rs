//! NOF1 API proxy service.
//!
//! Startup order: configuration, fingerprint profile, shared outbound
//! client, then the listener. Any startup error is fatal; once serving,
//! no request-path error is.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nof1_proxy::config::load_config;
use nof1_proxy::forward::{build_client, FingerprintProfile, Forwarder};
use nof1_proxy::http::HttpServer;
use nof1_proxy::lifecycle::{signals, Shutdown};

#[derive(Debug, Parser)]
#[command(name = "nof1-proxy", about = "Browser-impersonating proxy for the NOF1 API")]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nof1_proxy=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    tracing::info!(
        origin = %config.upstream.origin,
        request_timeout_secs = config.upstream.request_timeout_secs,
        "NOF1 API proxy starting"
    );

    let fingerprint = FingerprintProfile::chrome_120(&config.upstream.origin)?;
    let client = build_client(&fingerprint, config.upstream.request_timeout_secs)?;
    let forwarder = Arc::new(Forwarder::new(
        client,
        fingerprint,
        config.upstream.origin.clone(),
    ));

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        proxying_to = %config.upstream.origin,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_ctrl_c().await;
        shutdown.trigger();
    });

    HttpServer::new(forwarder).run(listener, server_shutdown).await?;

    tracing::info!("NOF1 API proxy stopped");
    Ok(())
}
