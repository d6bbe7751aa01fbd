//! Configuration for the zm client.
//!
//! Configuration is read once per invocation from environment variables
//! (optionally seeded from a `.env` file by the binary) and handed to
//! [`ZammadClient::new`](crate::zammad_client::ZammadClient::new).

use std::env;

use url::Url;

use crate::error::ZmError;

/// Environment variable holding the Zammad base URL.
pub const URL_VAR: &str = "ZAMMAD_URL";

/// Environment variable holding the API token.
pub const TOKEN_VAR: &str = "ZAMMAD_TOKEN";

/// Connection settings for a Zammad instance.
///
/// The token is kept in memory only and is never logged.
#[derive(Clone)]
pub struct Config {
    /// Base URL of the Zammad instance (e.g., `https://helpdesk.example.com`).
    pub base_url: String,

    /// API access token.
    pub token: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl Config {
    /// Creates a configuration from explicit values, applying the same
    /// validation as [`Config::from_env`].
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self, ZmError> {
        let base_url = Self::validate_base_url(base_url.into())?;
        let token = token.into().trim().to_string();
        Self::validate_token(&token)?;

        Ok(Config { base_url, token })
    }

    /// Loads configuration from `ZAMMAD_URL` and `ZAMMAD_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns `ZmError::Config` if either variable is missing or empty,
    /// or if a value fails validation.
    pub fn from_env() -> Result<Self, ZmError> {
        let base_url = Self::get_required_env(URL_VAR)?;
        let token = Self::get_required_env(TOKEN_VAR)?;

        Self::new(base_url, token)
    }

    fn get_required_env(name: &str) -> Result<String, ZmError> {
        env::var(name)
            .map_err(|_| ZmError::missing_env(name))
            .and_then(|value| {
                if value.trim().is_empty() {
                    Err(ZmError::missing_env(name))
                } else {
                    Ok(value)
                }
            })
    }

    /// Trims the URL, drops trailing slashes and checks that it parses.
    fn validate_base_url(url: String) -> Result<String, ZmError> {
        let url = url.trim().trim_end_matches('/').to_string();

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ZmError::invalid_config(format!(
                "{} must start with http:// or https://",
                URL_VAR
            )));
        }

        Url::parse(&url).map_err(|e| {
            ZmError::invalid_config(format!("{} is not a valid URL: {}", URL_VAR, e))
        })?;

        Ok(url)
    }

    /// Rejects tokens copied verbatim from example files.
    fn validate_token(token: &str) -> Result<(), ZmError> {
        let token_lower = token.to_lowercase();
        let placeholder_patterns = ["your_token", "your-token", "placeholder", "changeme"];

        for pattern in placeholder_patterns {
            if token_lower.contains(pattern) {
                return Err(ZmError::invalid_config(format!(
                    "{} appears to be a placeholder value",
                    TOKEN_VAR
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_base_url_removes_trailing_slash() {
        let result = Config::validate_base_url("https://example.com/".to_string()).unwrap();
        assert_eq!(result, "https://example.com");
    }

    #[test]
    fn test_validate_base_url_trims_whitespace() {
        let result = Config::validate_base_url("  https://example.com  ".to_string()).unwrap();
        assert_eq!(result, "https://example.com");
    }

    #[test]
    fn test_validate_base_url_requires_scheme() {
        let result = Config::validate_base_url("example.com".to_string());
        assert!(matches!(result, Err(ZmError::Config(_))));
    }

    #[test]
    fn test_validate_base_url_rejects_unparseable() {
        assert!(Config::validate_base_url("http://".to_string()).is_err());
    }

    #[test]
    fn test_validate_token_rejects_placeholder() {
        assert!(Config::validate_token("your_token_here").is_err());
        assert!(Config::validate_token("CHANGEME").is_err());
    }

    #[test]
    fn test_validate_token_accepts_real_token() {
        assert!(Config::validate_token("k3jd8Fh2lq0ZmT").is_ok());
    }

    #[test]
    fn test_new_normalizes_values() {
        let config = Config::new("https://helpdesk.example.com/", " abc123 ").unwrap();
        assert_eq!(config.base_url, "https://helpdesk.example.com");
        assert_eq!(config.token, "abc123");
    }

    #[test]
    fn test_debug_hides_token() {
        let config = Config::new("https://helpdesk.example.com", "abc123").unwrap();
        let shown = format!("{:?}", config);
        assert!(!shown.contains("abc123"));
        assert!(shown.contains("helpdesk.example.com"));
    }
}
