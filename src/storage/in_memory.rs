//! In-memory event collection.
//!
//! Thread-safe implementation of [`EventCollection`] backed by a vector of
//! documents behind a tokio `RwLock`. Intended for development, tests, and
//! deployments where persistence is not required.
//!
//! # Features
//!
//! * Find-and-update runs under a single write lock, so concurrent merges on
//!   the same document serialize and none of them is lost
//! * Documents keep insertion order; the first match wins
//! * Patch keys are dotted field paths: `"venue.room"` sets `room` inside
//!   `venue`, creating intermediate objects as needed
//! * Each document gets an internal primary key (v4 UUID) that never appears
//!   in the document body
//!
//! # Performance Characteristics
//!
//! * INSERT: O(1) amortized
//! * FIND_ONE / FIND_ONE_AND_UPDATE: O(n) scan over the collection
//!
//! # Example Usage
//!
//! ```rust
//! use backoffice_events::storage::InMemoryCollection;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let collection = InMemoryCollection::new();
//! let primary_key = collection
//!     .insert(json!({"eventId": "E1", "name": "Launch"}))
//!     .await?;
//! assert!(!primary_key.is_empty());
//!
//! let found = collection.find_one("eventId", "E1").await;
//! assert_eq!(found, Some(json!({"eventId": "E1", "name": "Launch"})));
//! # Ok(())
//! # }
//! ```

use crate::event::json_type_name;
use crate::storage::{EventCollection, ReturnDocument, StorageError, StorageFilter, UpdateOptions};
use log::trace;
use serde_json::{Map, Value};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone)]
struct StoredDocument {
    primary_key: String,
    body: Map<String, Value>,
}

/// Thread-safe in-memory document collection.
///
/// Cloning is cheap and clones share the same underlying documents.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCollection {
    documents: Arc<RwLock<Vec<StoredDocument>>>,
}

impl InMemoryCollection {
    /// Create a new empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document and return its generated primary key.
    ///
    /// The document must be a JSON object.
    pub async fn insert(&self, document: Value) -> Result<String, StorageError> {
        let body = match document {
            Value::Object(body) => body,
            other => {
                return Err(StorageError::invalid_data_with_cause(
                    "Documents must be JSON objects",
                    json_type_name(&other),
                ));
            }
        };

        let primary_key = Uuid::new_v4().to_string();
        let mut guard = self.documents.write().await;
        guard.push(StoredDocument {
            primary_key: primary_key.clone(),
            body,
        });

        trace!("Inserted document with primary key '{}'", primary_key);
        Ok(primary_key)
    }

    /// Return the first document whose `field` equals `value`.
    pub async fn find_one(&self, field: &str, value: &str) -> Option<Value> {
        let filter = StorageFilter::eq(field, value);
        let guard = self.documents.read().await;
        guard
            .iter()
            .find(|doc| filter.matches(&doc.body))
            .map(|doc| Value::Object(doc.body.clone()))
    }

    /// Return the document stored under an internal primary key.
    pub async fn get_by_primary_key(&self, primary_key: &str) -> Option<Value> {
        let guard = self.documents.read().await;
        guard
            .iter()
            .find(|doc| doc.primary_key == primary_key)
            .map(|doc| Value::Object(doc.body.clone()))
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    /// Whether the collection holds no documents.
    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }

    /// Remove every document (useful for testing).
    pub async fn clear(&self) {
        self.documents.write().await.clear();
    }

    /// Get collection statistics for debugging and monitoring.
    pub async fn stats(&self, id_field: &str) -> InMemoryCollectionStats {
        let guard = self.documents.read().await;
        let total_documents = guard.len();
        let with_identifier = guard
            .iter()
            .filter(|doc| matches!(doc.body.get(id_field), Some(Value::String(_))))
            .count();

        InMemoryCollectionStats {
            total_documents,
            documents_with_identifier: with_identifier,
        }
    }

    fn validate_filter(filter: &StorageFilter) -> Result<(), StorageError> {
        if filter.field().is_empty() {
            return Err(StorageError::invalid_query("Filter field name cannot be empty"));
        }
        Ok(())
    }

    /// Check every patch key before the collection is locked.
    ///
    /// Keys are dotted field paths. Segments must be non-empty and must not
    /// start with `$`, and no path may be a prefix of another path in the
    /// same patch.
    fn validate_patch(patch: &Map<String, Value>) -> Result<(), StorageError> {
        let mut paths = Vec::with_capacity(patch.len());
        for key in patch.keys() {
            if key.is_empty() {
                return Err(StorageError::invalid_data("Patch field names cannot be empty"));
            }
            let segments: Vec<&str> = key.split('.').collect();
            if segments.iter().any(|segment| segment.is_empty()) {
                return Err(StorageError::invalid_data_with_cause(
                    "Patch field paths cannot contain empty segments",
                    key.clone(),
                ));
            }
            if segments.iter().any(|segment| segment.starts_with('$')) {
                return Err(StorageError::invalid_data_with_cause(
                    "Patch field names cannot start with '$'",
                    key.clone(),
                ));
            }
            paths.push(segments);
        }

        // Sorted, a path is directly followed by any path it is a prefix of.
        paths.sort();
        for pair in paths.windows(2) {
            if pair[1].starts_with(&pair[0]) {
                return Err(StorageError::invalid_data_with_cause(
                    "Patch field paths conflict",
                    format!("{} and {}", pair[0].join("."), pair[1].join(".")),
                ));
            }
        }
        Ok(())
    }

    /// Set the value at a dotted `path`, creating missing intermediate objects.
    fn set_path(
        body: &mut Map<String, Value>,
        path: &str,
        value: Value,
    ) -> Result<(), StorageError> {
        let mut segments: Vec<&str> = path.split('.').collect();
        let Some(last) = segments.pop() else {
            return Err(StorageError::invalid_data("Patch field names cannot be empty"));
        };

        let mut current = body;
        for segment in segments {
            let entry = current
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            current = match entry {
                Value::Object(fields) => fields,
                other => {
                    return Err(StorageError::invalid_data_with_cause(
                        format!("Cannot set '{}' inside a non-object field", path),
                        json_type_name(other),
                    ));
                }
            };
        }

        current.insert(last.to_string(), value);
        Ok(())
    }
}

impl EventCollection for InMemoryCollection {
    type Error = StorageError;

    async fn find_one_and_update(
        &self,
        filter: StorageFilter,
        patch: Map<String, Value>,
        options: UpdateOptions,
    ) -> Result<Option<Value>, Self::Error> {
        Self::validate_filter(&filter)?;
        Self::validate_patch(&patch)?;

        let mut guard = self.documents.write().await;

        let Some(document) = guard.iter_mut().find(|doc| filter.matches(&doc.body)) else {
            return Ok(None);
        };

        let before = match options.return_document {
            ReturnDocument::Before => Some(Value::Object(document.body.clone())),
            ReturnDocument::After => None,
        };

        // Applied to a copy so a rejected path leaves the document untouched.
        let mut updated = document.body.clone();
        for (path, value) in patch {
            Self::set_path(&mut updated, &path, value)?;
        }
        document.body = updated;

        trace!(
            "Merged patch into document '{}' matching {}",
            document.primary_key, filter
        );

        Ok(Some(before.unwrap_or_else(|| Value::Object(document.body.clone()))))
    }
}

/// Statistics about the current state of an in-memory collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryCollectionStats {
    /// Total number of stored documents
    pub total_documents: usize,
    /// Documents carrying a string value in the identifier field
    pub documents_with_identifier: usize,
}
