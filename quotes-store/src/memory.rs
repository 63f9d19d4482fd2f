//! In-memory store implementation
//!
//! A single mutex guards the collection and the id counter together, so every
//! operation runs under exclusive access for its full duration. Reads hand out
//! owned copies; no reference into the guarded state escapes.

use crate::error::StoreError;
use crate::repository::QuoteRepository;
use async_trait::async_trait;
use quotes_domain::{Quote, QuoteId};
use rand::Rng;
use std::sync::Mutex;

/// In-memory quote store
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

/// Collection plus id counter, guarded as one unit
struct Inner {
    quotes: Vec<Quote>,
    next_id: QuoteId,
}

impl MemoryStore {
    /// Create a new empty in-memory store with the id counter at 1
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                quotes: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Get the number of stored quotes
    pub fn count(&self) -> usize {
        self.inner.lock().unwrap().quotes.len()
    }

    /// Clear all quotes without resetting the id counter (useful for test setup)
    pub fn clear(&self) {
        self.inner.lock().unwrap().quotes.clear();
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteRepository for MemoryStore {
    async fn create(&self, author: &str, text: &str) -> Result<Quote, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let quote = Quote::new(inner.next_id, author, text);
        inner.next_id += 1;
        inner.quotes.push(quote.clone());
        Ok(quote)
    }

    async fn get_all(&self) -> Result<Vec<Quote>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.quotes.clone())
    }

    async fn get_by_author(&self, author: &str) -> Result<Vec<Quote>, StoreError> {
        let needle = author.to_lowercase();
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .quotes
            .iter()
            .filter(|q| q.author.to_lowercase() == needle)
            .cloned()
            .collect())
    }

    async fn get_random(&self) -> Result<Quote, StoreError> {
        let inner = self.inner.lock().unwrap();
        if inner.quotes.is_empty() {
            return Err(StoreError::Empty);
        }
        let idx = rand::thread_rng().gen_range(0..inner.quotes.len());
        Ok(inner.quotes[idx].clone())
    }

    async fn delete(&self, id: QuoteId) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        match inner.quotes.iter().position(|q| q.id == id) {
            Some(idx) => {
                // Vec::remove shifts the tail left, keeping creation order
                inner.quotes.remove(idx);
                Ok(())
            }
            None => Err(StoreError::not_found(id)),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_ids_from_one() {
        let store = MemoryStore::new();

        let first = store.create("A", "one").await.unwrap();
        let second = store.create("B", "two").await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_create_and_get_all() {
        let store = MemoryStore::new();

        store.create("A", "B").await.unwrap();
        let all = store.get_all().await.unwrap();

        assert_eq!(all.len(), 1);
        assert_eq!(all[0].author, "A");
        assert_eq!(all[0].text, "B");
    }

    #[tokio::test]
    async fn test_get_all_empty_is_ok() {
        let store = MemoryStore::new();

        let all = store.get_all().await.unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn test_get_by_author() {
        let store = MemoryStore::new();
        store.create("A", "1").await.unwrap();
        store.create("B", "2").await.unwrap();

        let result = store.get_by_author("A").await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "1");
    }

    #[tokio::test]
    async fn test_get_by_author_multiple_matches_keep_creation_order() {
        let store = MemoryStore::new();
        store.create("Ada", "first").await.unwrap();
        store.create("Alan", "other").await.unwrap();
        store.create("Ada", "second").await.unwrap();

        let result = store.get_by_author("Ada").await.unwrap();

        let texts: Vec<&str> = result.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_get_by_author_is_case_insensitive() {
        let store = MemoryStore::new();
        store.create("Ada", "x").await.unwrap();

        let result = store.get_by_author("ADA").await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].author, "Ada");
    }

    #[tokio::test]
    async fn test_get_by_author_no_match_is_empty_not_error() {
        let store = MemoryStore::new();
        store.create("Ada", "x").await.unwrap();

        let result = store.get_by_author("Nobody").await.unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_get_random_empty() {
        let store = MemoryStore::new();

        let err = store.get_random().await.unwrap_err();
        assert_eq!(err, StoreError::Empty);
    }

    #[tokio::test]
    async fn test_get_random_singleton_always_returns_it() {
        let store = MemoryStore::new();
        let created = store.create("X", "Y").await.unwrap();

        for _ in 0..10 {
            let picked = store.get_random().await.unwrap();
            assert_eq!(picked, created);
        }
    }

    #[tokio::test]
    async fn test_delete_twice_fails_second_time() {
        let store = MemoryStore::new();
        store.create("X", "Y").await.unwrap();

        store.delete(1).await.unwrap();

        let err = store.delete(1).await.unwrap_err();
        assert_eq!(err, StoreError::not_found(1));
    }

    #[tokio::test]
    async fn test_delete_preserves_order_of_rest() {
        let store = MemoryStore::new();
        store.create("a", "A").await.unwrap();
        let b = store.create("b", "B").await.unwrap();
        store.create("c", "C").await.unwrap();

        store.delete(b.id).await.unwrap();

        let all = store.get_all().await.unwrap();
        let texts: Vec<&str> = all.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(texts, vec!["A", "C"]);
    }

    #[tokio::test]
    async fn test_ids_are_monotonic_and_never_reused() {
        let store = MemoryStore::new();

        let mut last_id = 0;
        for i in 0..5 {
            let q = store.create("A", "x").await.unwrap();
            assert!(q.id > last_id);
            last_id = q.id;

            // Interleave deletes; the counter must keep climbing anyway
            if i % 2 == 0 {
                store.delete(q.id).await.unwrap();
            }
        }

        let next = store.create("A", "x").await.unwrap();
        assert!(next.id > last_id);
    }

    #[tokio::test]
    async fn test_len_after_creates_and_deletes() {
        let store = MemoryStore::new();

        for _ in 0..4 {
            store.create("A", "x").await.unwrap();
        }
        store.delete(1).await.unwrap();
        store.delete(3).await.unwrap();

        assert_eq!(store.count(), 2);
        assert_eq!(store.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_clear_empties_store_without_resetting_counter() {
        let store = MemoryStore::new();
        store.create("A", "x").await.unwrap();
        store.create("B", "y").await.unwrap();

        store.clear();

        assert_eq!(store.count(), 0);
        let next = store.create("C", "z").await.unwrap();
        assert_eq!(next.id, 3);
    }

    #[tokio::test]
    async fn test_failed_delete_mutates_nothing() {
        let store = MemoryStore::new();
        store.create("A", "x").await.unwrap();

        assert!(store.delete(99).await.is_err());

        assert_eq!(store.count(), 1);
        let next = store.create("B", "y").await.unwrap();
        assert_eq!(next.id, 2);
    }

    #[tokio::test]
    async fn test_snapshot_does_not_alias_internal_state() {
        let store = MemoryStore::new();
        store.create("A", "x").await.unwrap();

        let snapshot = store.get_all().await.unwrap();
        store.delete(1).await.unwrap();

        // The snapshot taken before the delete is unaffected by it
        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.count(), 0);
    }

    #[tokio::test]
    async fn test_concurrent_creates_yield_unique_ids() {
        use std::collections::HashSet;
        use std::sync::Arc;

        let store = Arc::new(MemoryStore::new());

        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                let mut ids = Vec::new();
                for _ in 0..25 {
                    ids.push(store.create("A", "x").await.unwrap().id);
                }
                ids
            }));
        }

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.await.unwrap() {
                assert!(seen.insert(id), "duplicate id {id}");
            }
        }

        assert_eq!(seen.len(), 200);
        assert_eq!(store.count(), 200);
    }
}
