//! Event identifier value objects.
//!
//! An event is looked up by its logical `eventId`, a plain string. The store
//! also has its own object reference format (12 bytes written as 24 hex
//! characters). Depending on [`IdentifierPolicy`], path identifiers are
//! required to parse as such a reference before the lookup runs, even though
//! the lookup itself always uses the logical string.

use hex::FromHexError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Errors produced while validating an event identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    /// The identifier is the empty string
    #[error("Event identifier cannot be empty")]
    Empty,

    /// The identifier does not have the length of an object reference
    #[error("Object reference must be 24 hex characters, got {length} bytes")]
    InvalidLength { length: usize },

    /// The identifier contains a non-hex character
    #[error("Invalid character '{character}' at position {position} in object reference")]
    InvalidCharacter { position: usize, character: char },
}

/// How path identifiers are validated before reaching storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IdentifierPolicy {
    /// Identifiers must parse as a storage object reference.
    #[default]
    ObjectReference,
    /// Any non-empty string is accepted.
    AnyNonEmpty,
}

/// A validated logical event identifier.
///
/// Holds the caller's string verbatim; validation never rewrites it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventId(String);

impl EventId {
    /// Validate `value` according to `policy`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use backoffice_events::event::{EventId, IdentifierPolicy};
    ///
    /// let id =
    ///     EventId::parse("64b7f0c2a1e4d93f0c8b4567", IdentifierPolicy::ObjectReference).unwrap();
    /// assert_eq!(id.as_str(), "64b7f0c2a1e4d93f0c8b4567");
    ///
    /// assert!(EventId::parse("launch-2024", IdentifierPolicy::ObjectReference).is_err());
    /// assert!(EventId::parse("launch-2024", IdentifierPolicy::AnyNonEmpty).is_ok());
    /// ```
    pub fn parse(
        value: impl Into<String>,
        policy: IdentifierPolicy,
    ) -> Result<Self, IdentifierError> {
        let value = value.into();
        if value.is_empty() {
            return Err(IdentifierError::Empty);
        }

        if policy == IdentifierPolicy::ObjectReference {
            // Parsed only to validate the shape; the lookup uses the string.
            value.parse::<ObjectReference>()?;
        }

        Ok(Self(value))
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the identifier and return the owned string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for EventId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A 12-byte storage object reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectReference([u8; 12]);

impl ObjectReference {
    /// Get the raw bytes.
    pub fn bytes(&self) -> [u8; 12] {
        self.0
    }
}

impl FromStr for ObjectReference {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; 12];
        hex::decode_to_slice(s, &mut bytes).map_err(|e| match e {
            FromHexError::InvalidHexCharacter { c, index } => IdentifierError::InvalidCharacter {
                position: index,
                character: c,
            },
            FromHexError::OddLength | FromHexError::InvalidStringLength => {
                IdentifierError::InvalidLength { length: s.len() }
            }
        })?;

        Ok(Self(bytes))
    }
}

impl fmt::Display for ObjectReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}
