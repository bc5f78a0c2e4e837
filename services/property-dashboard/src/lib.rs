//! Property Dashboard - backend service
//!
//! Serves the per-tenant property list and revenue summaries consumed by the
//! dashboard frontend, and hosts the compiled frontend bundle.

pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod error;

pub use config::{load_config, Config};
pub use error::{Result, ServiceError};

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::catalog::Catalog;

/// Serve the dashboard on `listener` until `cancel` fires
pub async fn serve(listener: TcpListener, config: &Config, cancel: CancellationToken) -> Result<()> {
    let catalog = Arc::new(Catalog::from_config(&config.catalog));
    let router = dashboard::build_router(catalog, &config.server.site_root);

    tracing::info!("Dashboard listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            cancel.cancelled().await;
        })
        .await?;

    tracing::debug!("Dashboard stopped");
    Ok(())
}

/// Run the dashboard service with the given configuration
pub async fn run(config: Config) -> Result<()> {
    let cancel = CancellationToken::new();

    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Shutdown signal received"),
            Err(e) => tracing::error!("Failed to listen for ctrl-c: {}", e),
        }
        cancel_for_signal.cancel();
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        ServiceError::Config(format!(
            "Failed to bind dashboard to port {}: {}",
            config.server.port, e
        ))
    })?;

    serve(listener, &config, cancel).await
}
