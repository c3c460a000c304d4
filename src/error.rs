//! Error types for event update operations.
//!
//! The handler boundary distinguishes exactly two failure kinds: the event was
//! not found, or the update could not be carried out. Everything else (bad
//! identifiers, storage outages, timeouts) collapses into [`EventError::System`]
//! with the underlying cause kept for operators.

use crate::event::IdentifierError;

/// Main error type for event update operations.
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    /// No event matches the logical identifier
    #[error("Event not found: eventId '{event_id}'")]
    NotFound { event_id: String },

    /// The update could not be performed
    #[error("System error: {message}")]
    System {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type for event update operations.
pub type EventResult<T> = Result<T, EventError>;

impl EventError {
    /// Create a not-found error for the given logical identifier.
    pub fn not_found(event_id: impl Into<String>) -> Self {
        Self::NotFound {
            event_id: event_id.into(),
        }
    }

    /// Create a system error without an underlying cause.
    pub fn system(message: impl Into<String>) -> Self {
        Self::System {
            message: message.into(),
            source: None,
        }
    }

    /// Create a system error wrapping the error that caused it.
    pub fn system_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::System {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check if this error means no event matched.
    pub fn is_not_found(&self) -> bool {
        matches!(self, EventError::NotFound { .. })
    }

    /// Check if this error is a system failure.
    pub fn is_system(&self) -> bool {
        matches!(self, EventError::System { .. })
    }
}

impl From<IdentifierError> for EventError {
    fn from(error: IdentifierError) -> Self {
        EventError::system_with_source("Invalid event identifier", error)
    }
}

impl From<serde_json::Error> for EventError {
    fn from(error: serde_json::Error) -> Self {
        EventError::system_with_source("JSON error", error)
    }
}

/// Errors raised while building an [`EventHandlerConfig`](crate::config::EventHandlerConfig).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The logical identifier field name is empty
    #[error("Identifier field name cannot be empty")]
    EmptyIdField,

    /// A storage timeout of zero would fail every request
    #[error("Storage timeout must be greater than zero")]
    ZeroTimeout,
}
