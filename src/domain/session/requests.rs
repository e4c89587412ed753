//! Credential submissions for the auth flows.
//!
//! Requests validate completeness locally before any network call.
//! Passwords are held as [`SecretString`] so they never appear in
//! debug output or logs.

use secrecy::{ExposeSecret, SecretString};

use crate::domain::foundation::ValidationError;

/// Credentials submitted to the login flow.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub username: String,
    pub password: SecretString,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::new(password.into()),
        }
    }

    /// Local completeness check. Both fields must be present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.is_empty() {
            return Err(ValidationError::empty_field("username"));
        }
        if self.password.expose_secret().is_empty() {
            return Err(ValidationError::empty_field("password"));
        }
        Ok(())
    }
}

/// Details submitted to the registration flow.
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

impl RegisterRequest {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: SecretString::new(password.into()),
            confirm_password: SecretString::new(confirm_password.into()),
        }
    }

    /// Local completeness check. All fields must be present and the
    /// two password entries must match.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.is_empty() {
            return Err(ValidationError::empty_field("username"));
        }
        if self.email.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if self.password.expose_secret().is_empty() {
            return Err(ValidationError::empty_field("password"));
        }
        if self.confirm_password.expose_secret().is_empty() {
            return Err(ValidationError::empty_field("confirm_password"));
        }
        if self.password.expose_secret() != self.confirm_password.expose_secret() {
            return Err(ValidationError::field_mismatch("confirm_password", "password"));
        }
        Ok(())
    }
}
