use crate::config::ServerConfig;
use crate::signaling::{SignalingService, router};
use anyhow::{Context, Result};
use std::future::Future;
use tokio::net::TcpListener;
use tracing::info;

/// Binds `config.bind_addr` and serves until Ctrl-C.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    serve_with_listener(listener, &config, async {
        let _ = tokio::signal::ctrl_c().await;
        info!("Shutdown signal received");
    })
    .await
}

pub async fn serve_with_listener<F>(
    listener: TcpListener,
    config: &ServerConfig,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr().context("Listener has no local address")?;
    info!("Signaling server listening on {}", addr);

    let service = SignalingService::new(config);
    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown)
        .await
        .context("Signaling server terminated")?;

    info!("Signaling server stopped");
    Ok(())
}
