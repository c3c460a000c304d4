//! Back-office event updates for Rust.
//!
//! Applies a partial update to one stored event, located by its logical
//! `eventId`, and returns the event as it stands after the update. The merge
//! and the fetch of the result happen in one atomic storage call, so
//! concurrent writers to the same event never lose each other's fields.
//!
//! # Core Components
//!
//! - [`EventUpdateHandler`] - Validates the request and performs the update
//! - [`EventCollection`] - Trait for plugging in a document store
//! - [`InMemoryCollection`] - In-process store for development and tests
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use backoffice_events::{EventUpdateHandler, InMemoryCollection, UpdateEventRequest};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let handler = EventUpdateHandler::new(InMemoryCollection::new());
//! let request = UpdateEventRequest::from_path(
//!     "/bo/event/64b7f0c2a1e4d93f0c8b4567",
//!     json!({"capacity": 20}),
//! );
//! if let Some(request) = request {
//!     let response = handler.handle(request).await;
//!     println!("{} {}", response.status, response.body);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod operation_handler;
pub mod storage;

// Re-export commonly used types for convenience
pub use config::{EventHandlerConfig, EventHandlerConfigBuilder};
pub use error::{ConfigError, EventError, EventResult};
pub use event::{Event, EventId, EventPatch, IdentifierError, IdentifierPolicy};
pub use operation_handler::{
    EventUpdateHandler, UpdateEventEndpoint, UpdateEventRequest, UpdateEventResponse,
};
pub use storage::{EventCollection, InMemoryCollection, StorageError, StorageFilter};
