//! Backend API configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Backend API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the AutoAggregator API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Name of the cookie carrying the CSRF token
    #[serde(default = "default_csrf_cookie")]
    pub csrf_cookie: String,

    /// Name of the header the token is echoed into
    #[serde(default = "default_csrf_header")]
    pub csrf_header: String,
}

impl ApiConfig {
    /// Validate API configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.csrf_cookie.trim().is_empty() {
            return Err(ValidationError::MissingCsrfCookieName);
        }
        if self.csrf_header.trim().is_empty() {
            return Err(ValidationError::MissingCsrfHeaderName);
        }
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            csrf_cookie: default_csrf_cookie(),
            csrf_header: default_csrf_header(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000/api".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_csrf_cookie() -> String {
    "csrftoken".to_string()
}

fn default_csrf_header() -> String {
    "X-CSRFToken".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_config_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8000/api");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.csrf_cookie, "csrftoken");
        assert_eq!(config.csrf_header, "X-CSRFToken");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_non_http_base_url() {
        let config = ApiConfig {
            base_url: "ftp://example.com".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let config = ApiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ApiConfig {
            timeout_secs: 500,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_blank_csrf_names() {
        let config = ApiConfig {
            csrf_cookie: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ApiConfig {
            csrf_header: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
