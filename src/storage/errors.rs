//! Storage-specific error types for document operations.
//!
//! These errors describe failures of the document store itself and know
//! nothing about HTTP or the update contract. The handler collapses every one
//! of them into a system error.

use std::time::Duration;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The filter cannot be evaluated by this store.
    #[error("Invalid query: {message}")]
    InvalidQuery { message: String },

    /// The document or patch cannot be stored.
    #[error("Invalid data: {message}{}", describe_cause(.cause))]
    InvalidData {
        message: String,
        cause: Option<String>,
    },

    /// Storage backend is unavailable.
    #[error("Storage unavailable: {message}")]
    Unavailable { message: String },

    /// The storage call did not finish in time.
    #[error("Timeout during {operation} after {duration:?}")]
    Timeout { operation: String, duration: Duration },
}

fn describe_cause(cause: &Option<String>) -> String {
    cause
        .as_ref()
        .map(|cause| format!(" (cause: {})", cause))
        .unwrap_or_default()
}

impl StorageError {
    /// Create a new InvalidQuery error.
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::InvalidQuery {
            message: message.into(),
        }
    }

    /// Create a new InvalidData error.
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData {
            message: message.into(),
            cause: None,
        }
    }

    /// Create a new InvalidData error naming what was rejected.
    pub fn invalid_data_with_cause(message: impl Into<String>, cause: impl Into<String>) -> Self {
        Self::InvalidData {
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    /// Create a new Unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Create a new Timeout error.
    pub fn timeout(operation: impl Into<String>, duration: Duration) -> Self {
        Self::Timeout {
            operation: operation.into(),
            duration,
        }
    }
}
