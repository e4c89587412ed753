//! REST Client - Implementation of ApiTransport for the marketplace API.
//!
//! Issues JSON calls through a shared cookie jar. The backend's CSRF
//! cookie is mirrored into a request header on every state-changing
//! call, matching the double-submit scheme the server enforces. Each
//! call is issued exactly once; callers decide what a failure means.
//!
//! # Configuration
//!
//! ```ignore
//! let config = RestClientConfig::new("http://127.0.0.1:8000/api")
//!     .with_timeout(Duration::from_secs(10));
//!
//! let client = RestClient::new(config);
//! ```

use async_trait::async_trait;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::{Client, Response, Url};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use crate::ports::{ApiFailure, ApiRequest, ApiTransport, Method};

/// Configuration for the REST client.
#[derive(Debug, Clone)]
pub struct RestClientConfig {
    /// Base URL of the marketplace API (default: http://127.0.0.1:8000/api).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Name of the CSRF cookie the backend issues.
    pub csrf_cookie: String,
    /// Header the CSRF token is mirrored into.
    pub csrf_header: String,
}

impl RestClientConfig {
    /// Creates a new configuration for the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
            csrf_cookie: "csrftoken".to_string(),
            csrf_header: "X-CSRFToken".to_string(),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the CSRF cookie name.
    pub fn with_csrf_cookie(mut self, name: impl Into<String>) -> Self {
        self.csrf_cookie = name.into();
        self
    }

    /// Sets the CSRF header name.
    pub fn with_csrf_header(mut self, name: impl Into<String>) -> Self {
        self.csrf_header = name.into();
        self
    }
}

/// Marketplace API client implementation.
pub struct RestClient {
    config: RestClientConfig,
    client: Client,
    cookies: Arc<Jar>,
}

impl RestClient {
    /// Creates a new REST client with the given configuration.
    pub fn new(config: RestClientConfig) -> Self {
        let cookies = Arc::new(Jar::default());
        let client = Client::builder()
            .timeout(config.timeout)
            .cookie_provider(Arc::clone(&cookies))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            client,
            cookies,
        }
    }

    /// Builds the absolute URL for an endpoint path.
    fn endpoint_url(&self, path: &str) -> Result<Url, ApiFailure> {
        let joined = format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined)
            .map_err(|e| ApiFailure::network(format!("Invalid request URL '{}': {}", joined, e)))
    }

    /// Reads the CSRF token the backend set for this origin, if any.
    fn csrf_token(&self, url: &Url) -> Option<String> {
        let header = self.cookies.cookies(url)?;
        let raw = header.to_str().ok()?;
        raw.split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == self.config.csrf_cookie)
            .map(|(_, value)| value.to_string())
    }

    /// Sends the request and classifies transport-level failures.
    async fn send(&self, request: &ApiRequest) -> Result<Response, ApiFailure> {
        let url = self.endpoint_url(&request.path)?;

        let mut builder = match request.method {
            Method::Get => self.client.get(url.clone()),
            Method::Post => self.client.post(url.clone()),
        };

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        // State-changing calls carry the CSRF proof; reads never do.
        if request.method.is_state_changing() {
            if let Some(token) = self.csrf_token(&url) {
                builder = builder.header(&self.config.csrf_header, token);
            }
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiFailure::Timeout {
                    timeout_secs: self.config.timeout.as_secs(),
                }
            } else if e.is_connect() {
                ApiFailure::network(format!("Connection failed: {}", e))
            } else {
                ApiFailure::network(e.to_string())
            }
        })
    }

    /// Parses the API response status and handles errors.
    async fn handle_response_status(&self, response: Response) -> Result<Response, ApiFailure> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        // Keep the decoded error body so callers can surface the
        // backend's own wording.
        let error_body = response.text().await.unwrap_or_default();

        match serde_json::from_str::<Value>(&error_body) {
            Ok(body) => Err(ApiFailure::status_with_body(status.as_u16(), body)),
            Err(_) => Err(ApiFailure::status(status.as_u16())),
        }
    }

    /// Decodes a successful response body. Empty bodies read as null.
    async fn parse_body(&self, response: Response) -> Result<Value, ApiFailure> {
        let text = response
            .text()
            .await
            .map_err(|e| ApiFailure::decode(format!("Failed to read response body: {}", e)))?;

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text)
            .map_err(|e| ApiFailure::decode(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl ApiTransport for RestClient {
    async fn request(&self, request: ApiRequest) -> Result<Value, ApiFailure> {
        tracing::debug!("Issuing {} {}", request.method, request.path);

        let response = self.send(&request).await?;
        let response = self.handle_response_status(response).await?;
        self.parse_body(response).await
    }
}
