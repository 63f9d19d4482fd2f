//! Storage layer errors

use quotes_domain::QuoteId;
use thiserror::Error;

/// Errors that can occur in the storage layer
///
/// Both conditions are expected and recoverable; a failed operation performs
/// no mutation and the store remains consistent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Random selection was requested but the store holds no quotes
    #[error("no quotes available")]
    Empty,

    /// No quote exists with the given identifier
    #[error("quote not found: {id}")]
    NotFound {
        /// The identifier that had no match
        id: QuoteId,
    },
}

impl StoreError {
    /// Create a not found error
    pub fn not_found(id: QuoteId) -> Self {
        Self::NotFound { id }
    }
}
