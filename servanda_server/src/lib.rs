//! Servanda site server
//!
//! Serves the server-rendered landing page, the locale switch endpoint and
//! the static browser runtime.
//!
//! # Routes
//!
//! - `GET /` - the page, in the locale stored in the `servanda_locale` cookie
//! - `POST /locale` - store or clear the preference, then `303` back to `/`
//! - `GET /healthz` - liveness probe
//! - `GET /pkg/*`, `GET /images/*` - static files
//!
//! The message catalog is loaded once at startup and shared read-only.

#![warn(missing_docs)]

pub mod cookies;
pub mod routes;
pub mod state;

pub use state::AppState;

use std::net::SocketAddr;

use anyhow::Context;
use axum::Router;
use servanda_core::SiteConfig;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Server builder for constructing and running the site.
pub struct Server {
    addr: SocketAddr,
    state: AppState,
}

impl Server {
    /// Create a server from the site configuration.
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            addr: config.listen,
            state: AppState::from_config(config),
        }
    }

    /// Build the router with all routes and middleware.
    pub fn router(&self) -> Router {
        routes::create_router(self.state.clone()).layer(TraceLayer::new_for_http())
    }

    /// Run the server, binding to the configured address.
    pub async fn run(self) -> anyhow::Result<()> {
        let listener = TcpListener::bind(self.addr)
            .await
            .with_context(|| format!("failed to bind {}", self.addr))?;

        info!("Server listening on http://{}", self.addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("server error")?;

        Ok(())
    }

    /// Get the server's socket address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown");
}
