//! Application startup and lifecycle management.

use crate::handlers::greet;
use axum::{routing::any, Router};
use greeting_core::config::Config;
use greeting_core::error::AppError;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Build the router.
///
/// The greeting handler is registered for `/` with every method and as the
/// fallback, so any path on the server reaches it.
pub fn build_router() -> Router {
    Router::new().route("/", any(greet)).fallback(greet)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
}

impl Application {
    /// Bind the listener for the configured port (port 0 = random port for
    /// testing).
    pub async fn build(config: &Config) -> Result<Self, AppError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("listening on port {}", port);

        Ok(Self { port, listener })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve requests until the process is stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, build_router()).await
    }
}
