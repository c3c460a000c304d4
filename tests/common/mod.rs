//! Shared fixtures and storage doubles for integration tests.

#![allow(dead_code)]

use backoffice_events::config::EventHandlerConfig;
use backoffice_events::event::IdentifierPolicy;
use backoffice_events::operation_handler::EventUpdateHandler;
use backoffice_events::storage::{
    EventCollection, InMemoryCollection, StorageError, StorageFilter, UpdateOptions,
};
use serde_json::{Map, Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// An object-reference shaped identifier present in [`seeded_collection`].
pub const LAUNCH_ID: &str = "64b7f0c2a1e4d93f0c8b4567";
/// An object-reference shaped identifier absent from every fixture.
pub const MISSING_ID: &str = "64b7f0c2a1e4d93f0c8bffff";

/// Install a test logger once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn launch_event() -> Value {
    json!({"eventId": "E1", "name": "Launch", "capacity": 10})
}

/// Collection holding the `E1` launch event and an object-reference keyed event.
pub async fn seeded_collection() -> InMemoryCollection {
    let collection = InMemoryCollection::new();
    collection.insert(launch_event()).await.unwrap();
    collection
        .insert(json!({
            "eventId": LAUNCH_ID,
            "name": "Board meeting",
            "capacity": 12,
            "tags": ["internal"],
            "venue": {"room": "4B", "floor": 4}
        }))
        .await
        .unwrap();
    collection
}

/// Handler accepting any non-empty identifier, for the plain-string fixtures.
pub fn lenient_handler<C: EventCollection>(collection: C) -> EventUpdateHandler<C> {
    let config = EventHandlerConfig::builder()
        .identifier_policy(IdentifierPolicy::AnyNonEmpty)
        .build()
        .unwrap();
    EventUpdateHandler::with_config(collection, config).unwrap()
}

pub fn object(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

/// Store that always reports itself unavailable.
#[derive(Debug, Default, Clone)]
pub struct UnavailableCollection {
    pub calls: Arc<AtomicUsize>,
}

impl UnavailableCollection {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl EventCollection for UnavailableCollection {
    type Error = StorageError;

    async fn find_one_and_update(
        &self,
        _filter: StorageFilter,
        _patch: Map<String, Value>,
        _options: UpdateOptions,
    ) -> Result<Option<Value>, Self::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StorageError::unavailable("connection refused by db-01:27017"))
    }
}

/// Wraps an in-memory collection and counts storage calls.
#[derive(Debug, Clone)]
pub struct CountingCollection {
    pub inner: InMemoryCollection,
    pub calls: Arc<AtomicUsize>,
}

impl CountingCollection {
    pub fn new(inner: InMemoryCollection) -> Self {
        Self {
            inner,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl EventCollection for CountingCollection {
    type Error = StorageError;

    async fn find_one_and_update(
        &self,
        filter: StorageFilter,
        patch: Map<String, Value>,
        options: UpdateOptions,
    ) -> Result<Option<Value>, Self::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.find_one_and_update(filter, patch, options).await
    }
}

/// Waits before delegating, so a short handler timeout fires first.
#[derive(Debug, Clone)]
pub struct SlowCollection {
    pub inner: InMemoryCollection,
    pub delay: Duration,
}

impl EventCollection for SlowCollection {
    type Error = StorageError;

    async fn find_one_and_update(
        &self,
        filter: StorageFilter,
        patch: Map<String, Value>,
        options: UpdateOptions,
    ) -> Result<Option<Value>, Self::Error> {
        tokio::time::sleep(self.delay).await;
        self.inner.find_one_and_update(filter, patch, options).await
    }
}
