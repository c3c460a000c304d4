//! Response shaping for the update endpoint.
//!
//! Client-visible bodies are fixed strings. Error detail goes to the logs,
//! never into a response.

use crate::error::EventError;
use crate::event::{Event, EventVersion};
use crate::operation_handler::request::{ResponseMetadata, UpdateEventResponse};
use serde_json::json;

/// Status returned with the updated event
pub const STATUS_OK: u16 = 200;
/// Status returned when no event matches
pub const STATUS_NOT_FOUND: u16 = 400;
/// Status returned for any other failure
pub const STATUS_SYSTEM_ERROR: u16 = 500;

/// Body message when no event matches
pub const NOT_FOUND_MESSAGE: &str = "Event not found.";
/// Body message for any other failure
pub const SYSTEM_ERROR_MESSAGE: &str = "Failed to update event.";

/// Create the `200` response carrying the updated event.
pub fn create_success_response(
    event: Event,
    event_id: String,
    request_id: String,
) -> UpdateEventResponse {
    let etag = EventVersion::from_document(&event)
        .ok()
        .map(|version| version.to_etag());

    UpdateEventResponse {
        status: STATUS_OK,
        body: event,
        metadata: ResponseMetadata {
            request_id,
            event_id: Some(event_id),
            etag,
        },
    }
}

/// Create an error response from an [`EventError`].
pub fn create_error_response(
    error: &EventError,
    event_id: Option<String>,
    request_id: String,
) -> UpdateEventResponse {
    let (status, message) = match error {
        EventError::NotFound { .. } => (STATUS_NOT_FOUND, NOT_FOUND_MESSAGE),
        EventError::System { .. } => (STATUS_SYSTEM_ERROR, SYSTEM_ERROR_MESSAGE),
    };

    UpdateEventResponse {
        status,
        body: json!({ "error": message }),
        metadata: ResponseMetadata {
            request_id,
            event_id,
            etag: None,
        },
    }
}
