//! Store error types shared by every world-state adapter

use thiserror::Error;

/// Errors reported by a world-state implementation
///
/// The contract never inspects these beyond their message text, which is
/// surfaced verbatim to the caller when a range scan fails.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The key is not acceptable to the store (e.g. empty)
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// The store could not be reached or refused the operation
    #[error("world state unavailable: {0}")]
    Unavailable(String),

    /// A range scan could not be opened or advanced
    #[error("iterator error: {0}")]
    Iterator(String),

    /// The iterator was used after it had been closed
    #[error("iterator already closed")]
    IteratorClosed,

    /// `next` was called on an iterator with no remaining entries
    #[error("iterator exhausted")]
    IteratorExhausted,
}

impl StoreError {
    pub fn invalid_key(message: impl Into<String>) -> Self {
        StoreError::InvalidKey(message.into())
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        StoreError::Unavailable(message.into())
    }

    pub fn iterator(message: impl Into<String>) -> Self {
        StoreError::Iterator(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let error = StoreError::iterator("range [a, b) rejected");
        assert_eq!(error.to_string(), "iterator error: range [a, b) rejected");
    }

    #[test]
    fn test_store_error_messages() {
        assert_eq!(StoreError::invalid_key("empty key").to_string(), "invalid key: empty key");
        assert_eq!(
            StoreError::unavailable("peer offline").to_string(),
            "world state unavailable: peer offline"
        );
        assert_eq!(StoreError::IteratorClosed.to_string(), "iterator already closed");
        assert_eq!(StoreError::IteratorExhausted.to_string(), "iterator exhausted");
    }
}
