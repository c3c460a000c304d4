//! Storage abstraction for event documents.
//!
//! The update handler needs exactly one capability from its store: find a
//! single document matching a filter, merge a field set into it, and hand back
//! the resulting document, all as one atomic step. [`EventCollection`] captures
//! that capability so any find-and-modify style document store can sit behind
//! the handler, and [`InMemoryCollection`] provides an in-process version for
//! development and tests.
//!
//! The storage layer is NOT responsible for:
//! - Identifier validation
//! - Mapping failures onto HTTP responses
//! - Retrying failed writes
//!
//! # Example Usage
//!
//! ```rust
//! use backoffice_events::storage::{
//!     EventCollection, InMemoryCollection, StorageFilter, UpdateOptions,
//! };
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let collection = InMemoryCollection::new();
//! collection
//!     .insert(json!({"eventId": "E1", "name": "Launch", "capacity": 10}))
//!     .await?;
//!
//! let patch = json!({"capacity": 20}).as_object().cloned().unwrap_or_default();
//! let updated = collection
//!     .find_one_and_update(StorageFilter::eq("eventId", "E1"), patch, UpdateOptions::return_after())
//!     .await?;
//! assert_eq!(updated, Some(json!({"eventId": "E1", "name": "Launch", "capacity": 20})));
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod in_memory;

pub use errors::StorageError;
pub use in_memory::{InMemoryCollection, InMemoryCollectionStats};

use serde_json::{Map, Value};
use std::fmt;
use std::future::Future;

/// Equality predicate selecting documents by one string field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageFilter {
    field: String,
    value: String,
}

impl StorageFilter {
    /// Match documents whose `field` is the string `value`.
    pub fn eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Get the field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Get the expected value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Check a document against this filter.
    ///
    /// Only string fields match; `{"eventId": 1}` never matches the value `"1"`.
    pub fn matches(&self, document: &Map<String, Value>) -> bool {
        matches!(document.get(&self.field), Some(Value::String(s)) if *s == self.value)
    }
}

impl fmt::Display for StorageFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} == {:?}", self.field, self.value)
    }
}

/// Which state of the document a find-and-update returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReturnDocument {
    /// The document as it was before the merge
    Before,
    /// The document after the merge
    #[default]
    After,
}

/// Options for [`EventCollection::find_one_and_update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateOptions {
    /// Which document state to return
    pub return_document: ReturnDocument,
}

impl UpdateOptions {
    /// Options returning the post-update document.
    pub fn return_after() -> Self {
        Self {
            return_document: ReturnDocument::After,
        }
    }

    /// Options returning the pre-update document.
    pub fn return_before() -> Self {
        Self {
            return_document: ReturnDocument::Before,
        }
    }
}

/// Atomic find-and-modify capability of a document collection.
///
/// # Behavior
///
/// - At most one document is modified per call
/// - The filter match, the merge, and the fetch of the returned state happen
///   as one atomic step, so concurrent calls against the same document are
///   serialized and never lose each other's fields
/// - Merge semantics: every key in `patch` overwrites (or adds) the same
///   top-level key of the document; other keys are untouched
/// - No match returns `Ok(None)` and never inserts
pub trait EventCollection: Send + Sync {
    /// The error type returned by storage operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Merge `patch` into the first document matching `filter`.
    ///
    /// # Returns
    /// `Some(document)` in the state selected by `options`, or `None` if
    /// nothing matched.
    fn find_one_and_update(
        &self,
        filter: StorageFilter,
        patch: Map<String, Value>,
        options: UpdateOptions,
    ) -> impl Future<Output = Result<Option<Value>, Self::Error>> + Send;
}
