//! Core update handler.
//!
//! [`EventUpdateHandler`] owns a storage collection and turns an identifier
//! plus a patch into one atomic find-and-update call. It holds no mutable
//! state of its own; concurrent updates are serialized by the collection.

use crate::config::EventHandlerConfig;
use crate::error::{ConfigError, EventError, EventResult};
use crate::event::{Event, EventId, EventPatch, json_type_name};
use crate::operation_handler::errors::{create_error_response, create_success_response};
use crate::operation_handler::request::{UpdateEventRequest, UpdateEventResponse};
use crate::storage::{EventCollection, StorageError, StorageFilter, UpdateOptions};
use log::{debug, error, info, trace, warn};
use serde_json::Value;

/// Handler applying partial updates to events.
///
/// The collection is injected at construction so tests can substitute a
/// double for the real store.
pub struct EventUpdateHandler<C: EventCollection> {
    collection: C,
    config: EventHandlerConfig,
}

impl<C: EventCollection> EventUpdateHandler<C> {
    /// Create a handler with the default configuration.
    pub fn new(collection: C) -> Self {
        Self {
            collection,
            config: EventHandlerConfig::default(),
        }
    }

    /// Create a handler with a custom configuration.
    pub fn with_config(collection: C, config: EventHandlerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { collection, config })
    }

    /// Get the handler configuration.
    pub fn config(&self) -> &EventHandlerConfig {
        &self.config
    }

    /// Get the underlying collection.
    pub fn collection(&self) -> &C {
        &self.collection
    }

    /// Apply `patch` to the event whose logical identifier is `identifier`.
    ///
    /// Returns the full event after the merge. Fields absent from `patch` are
    /// left untouched, and an empty patch returns the event unchanged.
    ///
    /// # Errors
    ///
    /// * [`EventError::NotFound`] if no event has that identifier
    /// * [`EventError::System`] if the identifier fails validation, the patch
    ///   is not a JSON object, or the store fails or times out
    pub async fn update(&self, identifier: &str, patch: Value) -> EventResult<Event> {
        let request_id = uuid::Uuid::new_v4().to_string();
        self.apply_update(identifier, patch, &request_id).await
    }

    /// Handle a request and shape the outcome as an HTTP-style response.
    ///
    /// Every failure is translated here; nothing propagates past this call.
    pub async fn handle(&self, request: UpdateEventRequest) -> UpdateEventResponse {
        let request_id = request
            .request_id
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        match self
            .apply_update(&request.identifier, request.body, &request_id)
            .await
        {
            Ok(event) => create_success_response(event, request.identifier, request_id),
            Err(e) => create_error_response(&e, Some(request.identifier), request_id),
        }
    }

    async fn apply_update(
        &self,
        identifier: &str,
        patch: Value,
        request_id: &str,
    ) -> EventResult<Event> {
        info!("Updating event '{}' (request: '{}')", identifier, request_id);
        trace!(
            "Update data: {}",
            serde_json::to_string(&patch).unwrap_or_else(|_| "invalid json".to_string())
        );

        let result = self.merge_into_store(identifier, patch).await;
        Self::log_outcome(identifier, request_id, &result);
        result
    }

    async fn merge_into_store(&self, identifier: &str, patch: Value) -> EventResult<Event> {
        let event_id = EventId::parse(identifier, self.config.identifier_policy)?;
        let patch = Self::patch_fields(patch)?;

        let filter = StorageFilter::eq(self.config.id_field.as_str(), event_id.as_str());
        let operation =
            self.collection
                .find_one_and_update(filter, patch, UpdateOptions::return_after());

        let outcome = match self.config.storage_timeout {
            Some(limit) => match tokio::time::timeout(limit, operation).await {
                Ok(result) => result,
                Err(_) => {
                    return Err(EventError::system_with_source(
                        "Storage call timed out",
                        StorageError::timeout("find_one_and_update", limit),
                    ));
                }
            },
            None => operation.await,
        };

        outcome
            .map_err(|e| EventError::system_with_source("Failed to update event in storage", e))?
            .ok_or_else(|| EventError::not_found(event_id.into_string()))
    }

    fn log_outcome(identifier: &str, request_id: &str, result: &EventResult<Event>) {
        match result {
            Ok(_) => debug!(
                "Event '{}' updated successfully (request: '{}')",
                identifier, request_id
            ),
            Err(EventError::NotFound { event_id }) => warn!(
                "Event '{}' not found for update (request: '{}')",
                event_id, request_id
            ),
            Err(EventError::System {
                message,
                source: Some(cause),
            }) => error!(
                "Error updating event '{}': {}: {} (request: '{}')",
                identifier, message, cause, request_id
            ),
            Err(EventError::System {
                message,
                source: None,
            }) => error!(
                "Error updating event '{}': {} (request: '{}')",
                identifier, message, request_id
            ),
        }
    }

    fn patch_fields(patch: Value) -> EventResult<EventPatch> {
        match patch {
            Value::Object(fields) => Ok(fields),
            other => Err(EventError::system(format!(
                "Patch must be a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }
}
