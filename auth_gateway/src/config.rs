//! Deployment configuration for the gateway
//!
//! The redirect targets and client id that earlier deployments hard-coded
//! per site live in one explicit struct, built once at startup and shared
//! with the HTTP layer. Store handles stay env-driven statics (see
//! `storage`).

use std::env;

use thiserror::Error;
use url::Url;

/// Default session lifetime when SESSION_TTL_SECS is unset
const DEFAULT_SESSION_TTL_SECS: u64 = 300;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for {0}: {1}")]
    Invalid(String, String),
}

/// Startup configuration for the gateway
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Front-end origin that `/callback` redirects to. Absolute URL from
    /// configuration only; never derived from request input.
    pub frontend_origin: Url,
    /// OAuth client id presented to the external issuer
    pub client_id: String,
    /// Redirect URI registered with the issuer (this gateway's `/callback`)
    pub redirect_uri: String,
    /// Session lifetime in seconds
    pub session_ttl: u64,
}

impl GatewayConfig {
    /// Build the configuration from the environment, failing at startup
    /// rather than falling back at request time.
    pub fn from_env() -> Result<Self, ConfigError> {
        let frontend_origin = env::var("FRONTEND_ORIGIN")
            .map_err(|_| ConfigError::Missing("FRONTEND_ORIGIN".to_string()))?;
        let frontend_origin = Url::parse(&frontend_origin)
            .map_err(|e| ConfigError::Invalid("FRONTEND_ORIGIN".to_string(), e.to_string()))?;

        let client_id = env::var("OAUTH2_CLIENT_ID")
            .map_err(|_| ConfigError::Missing("OAUTH2_CLIENT_ID".to_string()))?;

        let redirect_uri = env::var("OAUTH2_REDIRECT_URI")
            .map_err(|_| ConfigError::Missing("OAUTH2_REDIRECT_URI".to_string()))?;

        let session_ttl = match env::var("SESSION_TTL_SECS") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid("SESSION_TTL_SECS".to_string(), raw))?,
            Err(_) => DEFAULT_SESSION_TTL_SECS,
        };

        Ok(Self {
            frontend_origin,
            client_id,
            redirect_uri,
            session_ttl,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    struct EnvVarGuard {
        key: String,
        original_value: Option<String>,
    }

    impl EnvVarGuard {
        fn new(key: &str, value: &str) -> Self {
            let original_value = env::var(key).ok();
            unsafe {
                env::set_var(key, value);
            }
            Self {
                key: key.to_string(),
                original_value,
            }
        }

        fn removed(key: &str) -> Self {
            let original_value = env::var(key).ok();
            unsafe {
                env::remove_var(key);
            }
            Self {
                key: key.to_string(),
                original_value,
            }
        }
    }

    impl Drop for EnvVarGuard {
        fn drop(&mut self) {
            unsafe {
                match &self.original_value {
                    Some(value) => env::set_var(&self.key, value),
                    None => env::remove_var(&self.key),
                }
            }
        }
    }

    #[test]
    #[serial]
    fn test_from_env_complete() {
        let _origin = EnvVarGuard::new("FRONTEND_ORIGIN", "https://app.example.com/");
        let _client = EnvVarGuard::new("OAUTH2_CLIENT_ID", "client-1");
        let _redirect = EnvVarGuard::new("OAUTH2_REDIRECT_URI", "https://gw.example.com/callback");
        let _ttl = EnvVarGuard::new("SESSION_TTL_SECS", "600");

        let config = GatewayConfig::from_env().expect("config should build");

        assert_eq!(config.frontend_origin.as_str(), "https://app.example.com/");
        assert_eq!(config.client_id, "client-1");
        assert_eq!(config.redirect_uri, "https://gw.example.com/callback");
        assert_eq!(config.session_ttl, 600);
    }

    #[test]
    #[serial]
    fn test_session_ttl_defaults() {
        let _origin = EnvVarGuard::new("FRONTEND_ORIGIN", "https://app.example.com/");
        let _client = EnvVarGuard::new("OAUTH2_CLIENT_ID", "client-1");
        let _redirect = EnvVarGuard::new("OAUTH2_REDIRECT_URI", "https://gw.example.com/callback");
        let _ttl = EnvVarGuard::removed("SESSION_TTL_SECS");

        let config = GatewayConfig::from_env().expect("config should build");

        assert_eq!(config.session_ttl, DEFAULT_SESSION_TTL_SECS);
    }

    #[test]
    #[serial]
    fn test_missing_frontend_origin_fails() {
        let _origin = EnvVarGuard::removed("FRONTEND_ORIGIN");
        let _client = EnvVarGuard::new("OAUTH2_CLIENT_ID", "client-1");
        let _redirect = EnvVarGuard::new("OAUTH2_REDIRECT_URI", "https://gw.example.com/callback");

        let result = GatewayConfig::from_env();

        assert!(matches!(result, Err(ConfigError::Missing(_))));
    }

    #[test]
    #[serial]
    fn test_relative_frontend_origin_fails() {
        // A relative URL cannot be a redirect target
        let _origin = EnvVarGuard::new("FRONTEND_ORIGIN", "/not-absolute");
        let _client = EnvVarGuard::new("OAUTH2_CLIENT_ID", "client-1");
        let _redirect = EnvVarGuard::new("OAUTH2_REDIRECT_URI", "https://gw.example.com/callback");

        let result = GatewayConfig::from_env();

        assert!(matches!(result, Err(ConfigError::Invalid(_, _))));
    }

    #[test]
    #[serial]
    fn test_invalid_ttl_fails() {
        let _origin = EnvVarGuard::new("FRONTEND_ORIGIN", "https://app.example.com/");
        let _client = EnvVarGuard::new("OAUTH2_CLIENT_ID", "client-1");
        let _redirect = EnvVarGuard::new("OAUTH2_REDIRECT_URI", "https://gw.example.com/callback");
        let _ttl = EnvVarGuard::new("SESSION_TTL_SECS", "not-a-number");

        let result = GatewayConfig::from_env();

        assert!(matches!(result, Err(ConfigError::Invalid(_, _))));
    }
}
