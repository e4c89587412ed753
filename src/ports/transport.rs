//! API Transport Port - Interface for the marketplace's JSON REST API.
//!
//! The transport issues one call at a time and classifies every
//! outcome: decoded JSON on success, or a failure that distinguishes
//! backend refusals from connectivity problems. It never retries.

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

/// HTTP method for an API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }

    /// True for calls that change backend state and therefore carry
    /// CSRF proof.
    pub fn is_state_changing(&self) -> bool {
        matches!(self, Method::Post)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One JSON API call to issue.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the configured API base, e.g. "cars/".
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn with_query_params(mut self, params: Vec<(String, String)>) -> Self {
        self.query.extend(params);
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Errors that can occur when issuing an API call
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiFailure {
    /// The backend answered with a non-success status. The decoded
    /// error body is kept when the backend sent one.
    #[error("server returned status {status}")]
    Status { status: u16, body: Option<Value> },

    /// The backend could not be reached.
    #[error("network error: {message}")]
    Network { message: String },

    /// The call did not complete within the configured timeout.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// The response arrived but was not usable JSON.
    #[error("response could not be decoded: {message}")]
    Decode { message: String },
}

impl ApiFailure {
    pub fn status(status: u16) -> Self {
        ApiFailure::Status { status, body: None }
    }

    pub fn status_with_body(status: u16, body: Value) -> Self {
        ApiFailure::Status {
            status,
            body: Some(body),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        ApiFailure::Network {
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        ApiFailure::Decode {
            message: message.into(),
        }
    }

    /// True when the backend answered 401. Callers treat this as
    /// "not signed in", never as a malfunction.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, ApiFailure::Status { status: 401, .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiFailure::Status { status: 404, .. })
    }

    /// Decoded error body, when the backend sent one.
    pub fn body(&self) -> Option<&Value> {
        match self {
            ApiFailure::Status { body, .. } => body.as_ref(),
            _ => None,
        }
    }
}

/// Port for issuing calls against the marketplace API
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Issues one API call and returns the decoded JSON body.
    ///
    /// # Arguments
    /// * `request` - The call to issue
    ///
    /// # Errors
    /// Returns `ApiFailure::Status` when the backend answered with a
    /// non-success code, `Network`/`Timeout` when the exchange broke
    /// down, and `Decode` when the body was not usable JSON.
    async fn request(&self, request: ApiRequest) -> Result<Value, ApiFailure>;
}
