//! Configuration for the event update handler.
//!
//! The defaults match the back-office deployment: identifiers must be storage
//! object references, events are keyed by `eventId`, and the storage call is
//! not time-bounded beyond what the store itself enforces.
//!
//! ```rust
//! use backoffice_events::config::EventHandlerConfig;
//! use backoffice_events::event::IdentifierPolicy;
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = EventHandlerConfig::builder()
//!     .identifier_policy(IdentifierPolicy::AnyNonEmpty)
//!     .storage_timeout(Duration::from_secs(5))
//!     .build()?;
//! assert_eq!(config.id_field, "eventId");
//! # Ok(())
//! # }
//! ```

use crate::error::ConfigError;
use crate::event::{DEFAULT_ID_FIELD, IdentifierPolicy};
use std::time::Duration;

/// Settings controlling identifier validation and the storage call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventHandlerConfig {
    /// How path identifiers are validated before the lookup.
    pub identifier_policy: IdentifierPolicy,

    /// Name of the logical identifier field in stored documents.
    pub id_field: String,

    /// Upper bound on the storage call. Elapsing fails the update without retry.
    pub storage_timeout: Option<Duration>,
}

impl Default for EventHandlerConfig {
    fn default() -> Self {
        Self {
            identifier_policy: IdentifierPolicy::default(),
            id_field: DEFAULT_ID_FIELD.to_string(),
            storage_timeout: None,
        }
    }
}

impl EventHandlerConfig {
    /// Start building a configuration from the defaults.
    pub fn builder() -> EventHandlerConfigBuilder {
        EventHandlerConfigBuilder::new()
    }

    /// Check the configuration for values that would break every request.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.id_field.is_empty() {
            return Err(ConfigError::EmptyIdField);
        }
        if self.storage_timeout == Some(Duration::ZERO) {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

/// Builder for [`EventHandlerConfig`].
#[derive(Debug, Clone, Default)]
pub struct EventHandlerConfigBuilder {
    config: EventHandlerConfig,
}

impl EventHandlerConfigBuilder {
    /// Create a builder holding the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the identifier validation policy.
    pub fn identifier_policy(mut self, policy: IdentifierPolicy) -> Self {
        self.config.identifier_policy = policy;
        self
    }

    /// Set the logical identifier field name.
    pub fn id_field(mut self, field: impl Into<String>) -> Self {
        self.config.id_field = field.into();
        self
    }

    /// Bound the storage call by `timeout`.
    pub fn storage_timeout(mut self, timeout: Duration) -> Self {
        self.config.storage_timeout = Some(timeout);
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> Result<EventHandlerConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
