//! Quotes API Daemon
//!
//! In-memory quote store served over HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Start with default configuration
//! cargo run -p quotesd
//!
//! # Start with custom environment
//! QUOTES_ENV=test QUOTES_API_PORT=8081 cargo run -p quotesd
//! ```
//!
//! # Environment Variables
//!
//! - `QUOTES_ENV`: Environment (test, development, production)
//! - `QUOTES_API_HOST`: API host (default: 0.0.0.0)
//! - `QUOTES_API_PORT`: API port (default: 8080)

use quotesd::{Config, Daemon};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("quotesd=info".parse()?))
        .init();

    // Load configuration
    let config = Config::from_env()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.environment,
        api_host = %config.api.host,
        api_port = config.api.port,
        "Quotes API Daemon"
    );

    // Create and run daemon
    let daemon = Daemon::in_memory(config);
    daemon.run().await?;

    Ok(())
}
