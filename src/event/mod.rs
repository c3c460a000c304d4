//! Event documents and their identifiers.
//!
//! Events are schemaless JSON documents. The only field this crate knows about
//! is the logical identifier (`eventId` by default), which is the lookup key
//! for updates and is unrelated to the store's internal primary key.

pub mod identifier;
pub mod version;

pub use identifier::{EventId, IdentifierError, IdentifierPolicy, ObjectReference};
pub use version::EventVersion;

use serde_json::{Map, Value};

/// A persisted event document.
pub type Event = Value;

/// Field set applied to an event as a partial merge.
pub type EventPatch = Map<String, Value>;

/// Default name of the logical identifier field.
pub const DEFAULT_ID_FIELD: &str = "eventId";

/// Name of a JSON value's type, for error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
