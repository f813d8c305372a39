//! Listener setup and graceful shutdown.

use crate::{ServerError, ServerErrorKind};
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Binds `addr` and serves `router` until `shutdown` resolves.
pub async fn serve_until<F>(addr: SocketAddr, router: Router, shutdown: F) -> Result<(), ServerError>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        ServerError::new(ServerErrorKind::Bind {
            addr: addr.to_string(),
            message: e.to_string(),
        })
    })?;

    let local = listener
        .local_addr()
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))?;
    info!(addr = %local, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))
}

/// Resolves on Ctrl-C.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => warn!(error = %e, "Failed to listen for shutdown signal"),
    }
}
