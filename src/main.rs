//! Trendbase, a trending prompt catalog server.
//!
//! Scrapes trending listings from a remote prompt marketplace and serves
//! them through a rate-limited HTTP API backed by a TTL/LRU cache.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trendbase::api::create_router;
use trendbase::{AppState, Config, RefreshQueue};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG overrides the default filter
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trendbase=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        base_url = %config.base_url,
        cache_ttl = config.cache_ttl,
        cache_size = config.cache_size,
        request_delay = config.request_delay,
        port = config.server_port,
        "Trendbase starting"
    );

    let state = AppState::from_config(&config)?;
    let refresher = state.refresher.clone();

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(refresher))
        .await?;

    info!("Shutdown complete");
    Ok(())
}

/// Resolves once SIGINT or SIGTERM arrives, then stops the refresh worker
/// so the serve loop can drain in-flight requests.
async fn shutdown_signal(refresher: Arc<RefreshQueue>) {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("cannot install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("cannot install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Ctrl+C received, shutting down"),
        _ = terminate => info!("SIGTERM received, shutting down"),
    }

    refresher.abort();
    warn!("Refresh worker stopped");
}
