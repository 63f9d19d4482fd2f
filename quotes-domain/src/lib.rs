//! Quotes API Domain Layer
//!
//! Pure domain types with zero I/O dependencies.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Public modules
pub mod quote;

// Re-export commonly used types
pub use quote::{Quote, QuoteId};
