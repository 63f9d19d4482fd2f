//! Repository trait definition (Port)
//!
//! This trait defines the storage interface the HTTP layer depends on.
//! Implementations can be in-memory or mock for testing; callers never touch
//! the underlying collection directly.

use crate::error::StoreError;
use async_trait::async_trait;
use quotes_domain::{Quote, QuoteId};

/// Repository for Quote entities
///
/// Every operation is linearizable: concurrent callers observe some serial
/// order of mutations and never a partially-applied create or delete.
#[async_trait]
pub trait QuoteRepository: Send + Sync {
    /// Create a quote, assigning it the next identifier.
    ///
    /// The caller has already validated that `author` and `text` are
    /// non-empty. Returns the stored quote including its assigned id.
    async fn create(&self, author: &str, text: &str) -> Result<Quote, StoreError>;

    /// Return a snapshot of all quotes in creation order.
    async fn get_all(&self) -> Result<Vec<Quote>, StoreError>;

    /// Return a snapshot of quotes whose author matches case-insensitively,
    /// in creation order. No match yields an empty vector, not an error.
    async fn get_by_author(&self, author: &str) -> Result<Vec<Quote>, StoreError>;

    /// Pick one quote uniformly at random from the current contents.
    async fn get_random(&self) -> Result<Quote, StoreError>;

    /// Delete the quote with the given id, preserving the relative order of
    /// the remaining quotes. The id counter is unaffected (no reuse).
    async fn delete(&self, id: QuoteId) -> Result<(), StoreError>;
}
