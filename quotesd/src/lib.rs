//! Quotes API Daemon Library
//!
//! Runtime orchestrator for the quote store HTTP service.
//!
//! # Architecture
//!
//! ```text
//! HTTP client → API Server → QuoteRepository (MemoryStore)
//! ```
//!
//! # Components
//!
//! - **Daemon**: Main runtime orchestrator (owns the store, serves the API)
//! - **API**: HTTP endpoints for creating, listing, and deleting quotes
//! - **Config**: Environment-based configuration
//!
//! # Example
//!
//! ```rust,ignore
//! use quotesd::{Config, Daemon};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::from_env().expect("Failed to load config");
//!     let daemon = Daemon::in_memory(config);
//!     daemon.run().await.expect("Daemon error");
//! }
//! ```

#![warn(clippy::all)]

pub mod api;
pub mod config;
pub mod daemon;
pub mod error;

// Re-exports for convenience
pub use api::{create_router, ApiState};
pub use config::{ApiConfig, Config, Environment};
pub use daemon::Daemon;
pub use error::{DaemonError, DaemonResult};
