//! Quote entity.
//!
//! The unit of storage: one quotation with its author and a store-assigned
//! identifier.

use serde::{Deserialize, Serialize};

/// Unique identifier for a Quote
///
/// Assigned by the store, starting at 1, strictly increasing. Identifiers are
/// never reused, even after the quote they belonged to is deleted.
pub type QuoteId = u64;

/// One stored quotation.
///
/// Quotes are immutable once created; the only lifecycle operations are
/// creation and deletion. The `text` field is serialized as `quote` on the
/// wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Store-assigned identifier
    pub id: QuoteId,
    /// Who said it (non-empty, validated by the caller)
    pub author: String,
    /// The quotation body (non-empty, validated by the caller)
    #[serde(rename = "quote")]
    pub text: String,
}

impl Quote {
    /// Create a quote with an already-assigned identifier.
    pub fn new(id: QuoteId, author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            author: author.into(),
            text: text.into(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_is_quote_not_text() {
        let q = Quote::new(1, "Rumi", "Silence is the language of god");
        let json = serde_json::to_value(&q).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["author"], "Rumi");
        assert_eq!(json["quote"], "Silence is the language of god");
        assert!(json.get("text").is_none());
    }

    #[test]
    fn test_deserialize_wire_representation() {
        let q: Quote =
            serde_json::from_str(r#"{"id":7,"author":"Ada","quote":"x"}"#).unwrap();

        assert_eq!(q.id, 7);
        assert_eq!(q.author, "Ada");
        assert_eq!(q.text, "x");
    }
}
