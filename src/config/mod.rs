//! Typed configuration for the client.
//!
//! All settings come from the process environment (with an optional
//! `.env` file for development) via the `config` and `dotenvy` crates.
//! Variables start with `AUTOAGG` and use `__` between path segments,
//! so `AUTOAGG__API__BASE_URL` lands in `api.base_url`. Every field has
//! a default; an empty environment yields a working local setup.
//!
//! # Example
//!
//! ```no_run
//! use autoagg_client::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Talking to {}", config.api.base_url);
//! ```

mod api;
mod demo;
mod error;
mod storage;

pub use api::ApiConfig;
pub use demo::DemoConfig;
pub use error::{ConfigError, ValidationError};
pub use storage::StorageConfig;

use serde::Deserialize;

/// Top-level settings, one field per section.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Backend API settings (base URL, timeout, CSRF names).
    #[serde(default)]
    pub api: ApiConfig,

    /// Where the session record lives on disk.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Credentials for the demo binary's optional login pass.
    #[serde(default)]
    pub demo: DemoConfig,

    /// Tracing filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppConfig {
    /// Reads settings from the environment.
    ///
    /// A `.env` file in the working directory is applied first when
    /// present, then `AUTOAGG__*` variables are deserialized into the
    /// section structs. Missing variables fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is present but cannot be
    /// parsed into its field's type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default().prefix("AUTOAGG").separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Checks every section for values that parse but make no sense
    /// (blank base URL, zero timeout, empty session path).
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.api.validate()?;
        self.storage.validate()?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            storage: StorageConfig::default(),
            demo: DemoConfig::default(),
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info,autoagg_client=debug".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global, so these tests must not interleave.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn scrub_env() {
        env::remove_var("AUTOAGG__API__BASE_URL");
        env::remove_var("AUTOAGG__API__TIMEOUT_SECS");
        env::remove_var("AUTOAGG__STORAGE__SESSION_FILE");
        env::remove_var("AUTOAGG__DEMO__USERNAME");
        env::remove_var("AUTOAGG__DEMO__PASSWORD");
        env::remove_var("AUTOAGG__LOG_LEVEL");
    }

    #[test]
    fn test_empty_environment_yields_local_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        scrub_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "load failed: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:8000/api");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(
            config.storage.session_file,
            std::path::PathBuf::from("./data/session.json")
        );
        assert_eq!(config.demo.credentials(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AUTOAGG__API__BASE_URL", "http://api.example.com/v1");
        env::set_var("AUTOAGG__API__TIMEOUT_SECS", "10");
        let result = AppConfig::load();
        scrub_env();

        let config = result.unwrap();
        assert_eq!(config.api.base_url, "http://api.example.com/v1");
        assert_eq!(config.api.timeout_secs, 10);
    }

    #[test]
    fn test_demo_credentials_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AUTOAGG__DEMO__USERNAME", "alice");
        env::set_var("AUTOAGG__DEMO__PASSWORD", "secret");
        let result = AppConfig::load();
        scrub_env();

        let config = result.unwrap();
        assert_eq!(
            config.demo.credentials(),
            Some(("alice".to_string(), "secret".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AUTOAGG__API__BASE_URL", "not-a-url");
        let result = AppConfig::load();
        scrub_env();

        let config = result.unwrap();
        assert!(config.validate().is_err());
    }
}
