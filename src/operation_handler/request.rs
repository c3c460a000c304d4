//! Request, response, and route types for the update endpoint.
//!
//! Routing and authentication are done by the hosting web framework; these
//! types describe what it should bind and what comes back, without tying the
//! handler to any particular framework.

use serde_json::Value;

/// How a route is gated before the handler runs.
///
/// The router enforces it; the handler never re-checks credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// Caller must already be authenticated
    Authenticated,
}

/// Route description for `PUT /bo/event/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateEventEndpoint;

impl UpdateEventEndpoint {
    /// HTTP method of the route
    pub const METHOD: &'static str = "PUT";
    /// Path template; `{id}` binds the event identifier
    pub const PATH: &'static str = "/bo/event/{id}";
    /// Authentication the router must enforce
    pub const AUTH: AuthMode = AuthMode::Authenticated;

    const PREFIX: &'static str = "/bo/event/";

    /// Bind `{id}` from a concrete request path.
    ///
    /// The query string is ignored and one trailing slash is tolerated.
    /// Returns `None` if the path is not this route.
    ///
    /// ```rust
    /// use backoffice_events::operation_handler::UpdateEventEndpoint;
    ///
    /// assert_eq!(UpdateEventEndpoint::match_path("/bo/event/E1"), Some("E1".to_string()));
    /// assert_eq!(UpdateEventEndpoint::match_path("/bo/event/"), None);
    /// assert_eq!(UpdateEventEndpoint::match_path("/bo/event/E1/tickets"), None);
    /// ```
    pub fn match_path(path: &str) -> Option<String> {
        let path = path.split_once('?').map_or(path, |(path, _)| path);
        let id = path.strip_prefix(Self::PREFIX)?;
        let id = id.strip_suffix('/').unwrap_or(id);

        if id.is_empty() || id.contains('/') {
            return None;
        }
        Some(id.to_string())
    }
}

/// An update request as received from the router.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateEventRequest {
    /// Identifier bound from the `{id}` path segment
    pub identifier: String,
    /// JSON request body, applied as the patch
    pub body: Value,
    /// Request ID for tracing and correlation
    pub request_id: Option<String>,
}

impl UpdateEventRequest {
    /// Create a request for `identifier` with the given body.
    pub fn new(identifier: impl Into<String>, body: Value) -> Self {
        Self {
            identifier: identifier.into(),
            body,
            request_id: None,
        }
    }

    /// Build a request from a concrete path, if it matches the route.
    pub fn from_path(path: &str, body: Value) -> Option<Self> {
        UpdateEventEndpoint::match_path(path).map(|identifier| Self::new(identifier, body))
    }

    /// Attach a request ID used in log lines.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }
}

/// Response of the update endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateEventResponse {
    /// HTTP status code
    pub status: u16,
    /// JSON response body
    pub body: Value,
    /// Information for logs and headers; never part of the body
    pub metadata: ResponseMetadata,
}

impl UpdateEventResponse {
    /// Whether the update succeeded.
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Metadata accompanying an update response.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseMetadata {
    /// Request ID for tracing
    pub request_id: String,
    /// Identifier the request targeted
    pub event_id: Option<String>,
    /// Weak ETag of the returned event, on success
    pub etag: Option<String>,
}
