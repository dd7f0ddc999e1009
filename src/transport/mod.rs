//! Transport abstraction for action requests.
//!
//! The action client never talks to the network directly: it hands an
//! [`ActionRequest`] to a [`Transport`] and gets the raw response body back.
//! [`http::HttpTransport`] is the production implementation.

use async_trait::async_trait;
use reqwest::Method;
use std::time::Duration;

pub mod http;

pub use http::HttpTransport;

/// Errors raised while a request is in flight.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// What the caller expects back from the endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ResponseKind {
    /// A structured JSON action result.
    #[default]
    Json,
    /// An opaque file payload.
    Binary,
}

impl ResponseKind {
    /// Value for the `Accept` header.
    pub fn accept_header(&self) -> &'static str {
        match self {
            ResponseKind::Json => "application/json",
            ResponseKind::Binary => "*/*",
        }
    }
}

/// Request payload.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    /// Form fields, sent urlencoded (or as the query string for `GET`).
    Form(Vec<(String, String)>),
}

/// A single request issued on behalf of a UI action.
#[derive(Clone, Debug)]
pub struct ActionRequest {
    pub method: Method,
    pub url: String,
    pub body: RequestBody,
    pub expects: ResponseKind,
}

impl ActionRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: RequestBody::Empty,
            expects: ResponseKind::Json,
        }
    }

    pub fn with_form(mut self, fields: Vec<(String, String)>) -> Self {
        self.body = RequestBody::Form(fields);
        self
    }

    pub fn expecting(mut self, kind: ResponseKind) -> Self {
        self.expects = kind;
        self
    }
}

/// Raw response handed back to the client. The status is informational only.
#[derive(Clone, Debug)]
pub struct ActionResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl ActionResponse {
    pub fn is_success_status(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport trait implemented by anything able to carry an [`ActionRequest`].
///
/// Implementations must not inspect the status code: the body decides
/// whether an action succeeded.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ActionRequest) -> Result<ActionResponse, TransportError>;
}
