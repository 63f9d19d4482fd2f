//! Quotes API Storage Layer
//!
//! The in-process storage engine for quotes.
//!
//! # Architecture
//!
//! - **Repository trait**: Defines the storage interface (port)
//! - **In-memory store**: The production implementation; all state is
//!   volatile and discarded on shutdown
//!
//! # Usage
//!
//! ```rust
//! use quotes_store::{MemoryStore, QuoteRepository};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = MemoryStore::new();
//!
//!     let created = store.create("Rumi", "Silence is the language of god").await.unwrap();
//!     assert_eq!(created.id, 1);
//!
//!     let all = store.get_all().await.unwrap();
//!     assert_eq!(all.len(), 1);
//! }
//! ```

#![warn(clippy::all)]

// Modules
mod error;
mod memory;
mod repository;

// Re-exports
pub use error::StoreError;
pub use memory::MemoryStore;
pub use repository::QuoteRepository;
