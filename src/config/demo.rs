//! Demo binary configuration

use serde::Deserialize;

/// Optional credentials the demo binary uses for a login round trip
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DemoConfig {
    /// Username to log in with
    pub username: Option<String>,

    /// Password to log in with
    pub password: Option<String>,
}

impl DemoConfig {
    /// Credentials when both halves are configured
    pub fn credentials(&self) -> Option<(String, String)> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Some((username.clone(), password.clone())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_require_both_halves() {
        let config = DemoConfig::default();
        assert_eq!(config.credentials(), None);

        let config = DemoConfig {
            username: Some("alice".to_string()),
            password: None,
        };
        assert_eq!(config.credentials(), None);

        let config = DemoConfig {
            username: Some("alice".to_string()),
            password: Some("secret".to_string()),
        };
        assert_eq!(
            config.credentials(),
            Some(("alice".to_string(), "secret".to_string()))
        );
    }
}
