//! Daemon: Main runtime orchestrator.
//!
//! The Daemon owns the store and the API server.
//!
//! # Lifecycle
//!
//! 1. Load configuration
//! 2. Construct the store (composition root; no ambient singleton)
//! 3. Serve the HTTP API
//! 4. Graceful shutdown on SIGINT

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info};

use quotes_store::{MemoryStore, QuoteRepository};

use crate::api::{create_router, ApiState};
use crate::config::Config;
use crate::error::DaemonResult;

// =============================================================================
// Daemon
// =============================================================================

/// The main quotes daemon.
pub struct Daemon {
    /// Configuration
    config: Config,
    /// Store, shared with the API handlers
    store: Arc<dyn QuoteRepository>,
}

impl Daemon {
    /// Create a new daemon with a provided store.
    pub fn new(config: Config, store: Arc<dyn QuoteRepository>) -> Self {
        Self { config, store }
    }

    /// Create a new daemon backed by a fresh in-memory store.
    pub fn in_memory(config: Config) -> Self {
        Self::new(config, Arc::new(MemoryStore::new()))
    }

    /// Run the daemon.
    ///
    /// This method blocks until shutdown is requested (SIGINT).
    pub async fn run(self) -> DaemonResult<()> {
        info!(
            version = env!("CARGO_PKG_VERSION"),
            environment = %self.config.environment,
            "Starting quotes daemon"
        );

        let state = Arc::new(ApiState {
            store: self.store.clone(),
        });
        let router = create_router(state);

        let addr = format!("{}:{}", self.config.api.host, self.config.api.port);
        let listener = TcpListener::bind(&addr).await?;
        info!(local_addr = %listener.local_addr()?, "API server listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Shutdown complete");
        Ok(())
    }
}

/// Resolve when SIGINT is received.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Received shutdown signal");
}
