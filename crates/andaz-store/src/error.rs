//! # Store Error Types
//!
//! Error types for the persistence boundary.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Recovery                                       │
//! │                                                                         │
//! │  Backend failure (io::Error, disabled storage)                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StorageError ──► StoreError::StorageUnavailable                       │
//! │                        └─► degrade to in-memory cart, warn once        │
//! │                                                                         │
//! │  serde_json::Error on read                                             │
//! │       └─► StoreError::MalformedData ──► empty cart, warn               │
//! │                                                                         │
//! │  CoreError::Validation on set_quantity                                 │
//! │       └─► StoreError::InvalidQuantity ──► cart unchanged, warn         │
//! │                                                                         │
//! │  ValidationError on add                                                │
//! │       └─► StoreError::InvalidItem ──► returned to caller               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use andaz_core::ValidationError;
use thiserror::Error;

/// Key/value backend failures.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("Storage I/O failed for '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The backend refuses all access (e.g. storage disabled by the user).
    #[error("Storage is disabled")]
    Disabled,

    /// The key cannot be mapped onto the backend.
    #[error("Invalid storage key: '{0}'")]
    InvalidKey(String),
}

impl StorageError {
    pub fn io(key: impl Into<String>, source: std::io::Error) -> Self {
        StorageError::Io {
            key: key.into(),
            source,
        }
    }
}

/// Result type for storage backend operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Failures the cart store recovers from.
///
/// Only `InvalidItem` is ever handed back to callers of the mutating API;
/// the strict `CartStore::try_load` also surfaces the first two.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The persistent store cannot be read or written.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] StorageError),

    /// The stored value is not a valid serialized cart.
    #[error("Malformed cart data under '{key}': {source}")]
    MalformedData {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A quantity below 1 was requested.
    #[error("Invalid quantity {requested} for item {id}")]
    InvalidQuantity { id: String, requested: i64 },

    /// A new line item failed validation.
    #[error("Invalid item: {0}")]
    InvalidItem(#[from] ValidationError),
}

/// Result type for cart store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::InvalidQuantity {
            id: "a".to_string(),
            requested: 0,
        };
        assert_eq!(err.to_string(), "Invalid quantity 0 for item a");

        let err: StoreError = StorageError::Disabled.into();
        assert_eq!(err.to_string(), "Storage unavailable: Storage is disabled");
    }

    #[test]
    fn test_malformed_data_message() {
        let source = serde_json::from_str::<Vec<u8>>("{oops").unwrap_err();
        let err = StoreError::MalformedData {
            key: "cart".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("Malformed cart data under 'cart'"));
    }
}
