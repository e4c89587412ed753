//! In-memory API transport for tests.
//!
//! Routes each request path to a canned JSON body or an injected
//! failure, records every request it sees, and can add artificial
//! latency so in-flight states stay observable. Lets auth and catalog
//! flows run without a marketplace backend.
//!
//! ```ignore
//! let transport = MockTransport::new()
//!     .with_json("login/", json!({"user_id": 7, "username": "alice"}))
//!     .with_failure("cars/", ApiFailure::status(500));
//!
//! let body = transport.request(ApiRequest::post("login/")).await?;
//! assert_eq!(transport.call_count(), 1);
//! ```

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{ApiFailure, ApiRequest, ApiTransport};

/// A configured mock outcome for one endpoint.
#[derive(Debug, Clone)]
enum MockOutcome {
    /// Return a decoded JSON body.
    Json(Value),
    /// Return a failure.
    Failure(ApiFailure),
}

/// Mock API transport for testing.
///
/// Configurable to return specific bodies or failures per endpoint
/// path. Paths with no configured outcome answer with status 404.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    /// Outcomes routed by request path.
    routes: Arc<Mutex<HashMap<String, MockOutcome>>>,
    /// Artificial latency applied before answering.
    delay: Duration,
    /// Every request seen, in order.
    calls: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MockTransport {
    /// Creates a new mock transport with no configured routes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures a JSON body for an endpoint path.
    pub fn with_json(self, path: impl Into<String>, body: Value) -> Self {
        self.routes
            .lock()
            .unwrap()
            .insert(path.into(), MockOutcome::Json(body));
        self
    }

    /// Configures a failure for an endpoint path.
    pub fn with_failure(self, path: impl Into<String>, failure: ApiFailure) -> Self {
        self.routes
            .lock()
            .unwrap()
            .insert(path.into(), MockOutcome::Failure(failure));
        self
    }

    /// Adds artificial latency to every request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of calls made through this transport.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns the number of calls made to one endpoint path.
    pub fn calls_to(&self, path: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.path == path)
            .count()
    }

    /// All requests seen so far, oldest first.
    pub fn get_calls(&self) -> Vec<ApiRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// Forgets recorded requests.
    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }
}

#[async_trait]
impl ApiTransport for MockTransport {
    async fn request(&self, request: ApiRequest) -> Result<Value, ApiFailure> {
        let outcome = self.routes.lock().unwrap().get(&request.path).cloned();

        // Recorded before the delay so in-flight assertions can see it.
        self.calls.lock().unwrap().push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match outcome {
            Some(MockOutcome::Json(body)) => Ok(body),
            Some(MockOutcome::Failure(failure)) => Err(failure),
            None => Err(ApiFailure::status(404)),
        }
    }
}
