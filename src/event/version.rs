//! Content-derived versions for event documents.
//!
//! A version is a short hash of the serialized document, so two responses
//! carrying the same document carry the same version. Responses expose it as a
//! weak ETag for callers that want to detect changes between reads.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fmt;

/// Opaque version of an event document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventVersion {
    opaque: String,
}

impl EventVersion {
    /// Hash raw bytes into a version.
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);
        let hash = hasher.finalize();

        Self {
            opaque: BASE64.encode(&hash[..8]),
        }
    }

    /// Compute the version of a JSON document.
    pub fn from_document(document: &Value) -> Result<Self, serde_json::Error> {
        let bytes = serde_json::to_vec(document)?;
        Ok(Self::from_content(&bytes))
    }

    /// Get the opaque version string.
    pub fn as_str(&self) -> &str {
        &self.opaque
    }

    /// Format as a weak HTTP ETag, e.g. `W/"abc123"`.
    pub fn to_etag(&self) -> String {
        format!("W/\"{}\"", self.opaque)
    }
}

impl fmt::Display for EventVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.opaque)
    }
}
