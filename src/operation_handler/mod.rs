//! Framework-agnostic handler for the event update endpoint.
//!
//! # Key Types
//!
//! - [`EventUpdateHandler`] - Applies partial updates through an [`EventCollection`](crate::storage::EventCollection)
//! - [`UpdateEventRequest`] - Identifier and body bound by the router
//! - [`UpdateEventResponse`] - Status code, JSON body, and metadata
//! - [`UpdateEventEndpoint`] - Route description for the hosting framework
//!
//! # Examples
//!
//! ```rust
//! use backoffice_events::operation_handler::{EventUpdateHandler, UpdateEventRequest};
//! use backoffice_events::storage::InMemoryCollection;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let collection = InMemoryCollection::new();
//! collection
//!     .insert(json!({"eventId": "64b7f0c2a1e4d93f0c8b4567", "capacity": 10}))
//!     .await?;
//!
//! let handler = EventUpdateHandler::new(collection);
//! let request = UpdateEventRequest::new("64b7f0c2a1e4d93f0c8b4567", json!({"capacity": 20}));
//! let response = handler.handle(request).await;
//! assert_eq!(response.status, 200);
//! # Ok(())
//! # }
//! ```

mod errors;
mod handler;
mod request;

pub use errors::{
    NOT_FOUND_MESSAGE, STATUS_NOT_FOUND, STATUS_OK, STATUS_SYSTEM_ERROR, SYSTEM_ERROR_MESSAGE,
    create_error_response, create_success_response,
};
pub use handler::EventUpdateHandler;
pub use request::{
    AuthMode, ResponseMetadata, UpdateEventEndpoint, UpdateEventRequest, UpdateEventResponse,
};
