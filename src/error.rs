//! Custom error types for pennybook
//!
//! This module defines the error hierarchy for the core using thiserror
//! for ergonomic error definitions. The taxonomy is intentionally small:
//! absent-entity lookups and no-op mutations are reported by return value
//! (`Option` / `bool`), never as errors.

use thiserror::Error;

/// The main error type for pennybook operations
#[derive(Error, Debug)]
pub enum Error {
    /// A core operation was invoked before the store was seeded.
    ///
    /// This is the only condition the core treats as fatal to the caller.
    #[error("store not initialized")]
    NotInitialized,

    /// `Store::init` was called on an already-seeded store
    #[error("store already initialized")]
    AlreadyInitialized,

    /// Internal store failures (lock poisoning)
    #[error("store error: {0}")]
    Store(String),
}

impl Error {
    /// Check if this is the fail-fast initialization error
    pub fn is_not_initialized(&self) -> bool {
        matches!(self, Self::NotInitialized)
    }
}

/// Result type alias for pennybook operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NotInitialized;
        assert_eq!(err.to_string(), "store not initialized");
        assert!(err.is_not_initialized());
    }

    #[test]
    fn test_store_error_display() {
        let err = Error::Store("lock poisoned".into());
        assert_eq!(err.to_string(), "store error: lock poisoned");
        assert!(!err.is_not_initialized());
    }
}
