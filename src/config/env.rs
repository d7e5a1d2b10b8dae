// src/config/env.rs
// Environment-based configuration - single source of truth for all env vars

use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::API_KEY_ENV;

/// Fallback variable consulted when GEMINI_KEY is unset
const API_KEY_FALLBACK_ENV: &str = "GEMINI_API_KEY";

/// Default model endpoint (model name is part of the resource path)
pub const DEFAULT_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash";

/// Default outbound request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 25;

/// Settings for the upstream Gemini API
#[derive(Clone)]
pub struct GeminiConfig {
    /// Model resource URL (GEMINI_API_URL), without the `:generateContent` suffix
    pub api_url: String,
    /// API key (GEMINI_KEY or GEMINI_API_KEY)
    pub api_key: Option<String>,
    /// Outbound request timeout (GEMINI_TIMEOUT_SECS)
    pub request_timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

// Hand-written so the key never reaches logs
impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl GeminiConfig {
    /// Load Gemini settings from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load Gemini settings through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = read(API_KEY_ENV).or_else(|| read(API_KEY_FALLBACK_ENV));

        let api_url = read("GEMINI_API_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let request_timeout = match read("GEMINI_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) => Duration::from_secs(secs),
                Err(_) => {
                    warn!(value = %raw, "Invalid GEMINI_TIMEOUT_SECS, using default");
                    Duration::from_secs(DEFAULT_TIMEOUT_SECS)
                }
            },
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Self {
            api_url,
            api_key,
            request_timeout,
        }
    }

    /// Builder-style override of the model URL
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Builder-style override of the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Full `generateContent` endpoint, without the key
    pub fn endpoint(&self) -> String {
        format!("{}:generateContent", self.api_url)
    }
}

/// Bind address for the inbound HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Outcome of `EnvConfig::validate`; warnings never block startup
#[derive(Debug, Default)]
pub struct ConfigValidation {
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl ConfigValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors joined into one line for the startup log
    pub fn error_summary(&self) -> String {
        self.errors.join("; ")
    }
}

/// Environment configuration - all env vars in one place
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    pub gemini: GeminiConfig,
}

impl EnvConfig {
    /// Load all environment configuration (call once at startup)
    pub fn load() -> Self {
        info!("Loading environment configuration");

        let gemini = GeminiConfig::from_env();
        if gemini.has_api_key() {
            debug!(api_url = %gemini.api_url, "Gemini API key loaded");
        } else {
            warn!("{} is not set - every request will return a configuration error", API_KEY_ENV);
        }

        Self { gemini }
    }

    /// Validate the configuration
    pub fn validate(&self) -> ConfigValidation {
        let mut validation = ConfigValidation::default();

        if !self.gemini.has_api_key() {
            validation.warnings.push(format!(
                "No Gemini API key configured. Set {} to enable text processing.",
                API_KEY_ENV
            ));
        }

        let url = &self.gemini.api_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            validation.errors.push(format!(
                "GEMINI_API_URL '{}' must start with http:// or https://",
                url
            ));
        }

        if self.gemini.request_timeout.is_zero() {
            validation
                .errors
                .push("GEMINI_TIMEOUT_SECS must be greater than zero".to_string());
        }

        validation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    // ============================================================================
    // GeminiConfig loading
    // ============================================================================

    #[test]
    fn test_defaults_when_env_empty() {
        let config = GeminiConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.api_key.is_none());
        assert_eq!(config.request_timeout, Duration::from_secs(25));
    }

    #[test]
    fn test_primary_key_wins_over_fallback() {
        let config = GeminiConfig::from_lookup(lookup_from(&[
            ("GEMINI_KEY", "primary"),
            ("GEMINI_API_KEY", "fallback"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("primary"));
    }

    #[test]
    fn test_fallback_key_used() {
        let config = GeminiConfig::from_lookup(lookup_from(&[("GEMINI_API_KEY", "fallback")]));
        assert_eq!(config.api_key.as_deref(), Some("fallback"));
    }

    #[test]
    fn test_blank_key_is_absent() {
        let config = GeminiConfig::from_lookup(lookup_from(&[("GEMINI_KEY", "   ")]));
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_url_override_strips_trailing_slash() {
        let config = GeminiConfig::from_lookup(lookup_from(&[(
            "GEMINI_API_URL",
            "http://localhost:9000/models/test/",
        )]));
        assert_eq!(config.api_url, "http://localhost:9000/models/test");
        assert_eq!(
            config.endpoint(),
            "http://localhost:9000/models/test:generateContent"
        );
    }

    #[test]
    fn test_timeout_parsing() {
        let config = GeminiConfig::from_lookup(lookup_from(&[("GEMINI_TIMEOUT_SECS", "5")]));
        assert_eq!(config.request_timeout, Duration::from_secs(5));

        let config = GeminiConfig::from_lookup(lookup_from(&[("GEMINI_TIMEOUT_SECS", "soon")]));
        assert_eq!(config.request_timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_debug_masks_key() {
        let config = GeminiConfig::default().with_api_key("super-secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("***"));
    }

    // ============================================================================
    // Validation
    // ============================================================================

    #[test]
    fn test_validation_no_key_is_warning() {
        let config = EnvConfig::default();
        let validation = config.validate();
        assert!(validation.is_valid()); // Warnings don't make it invalid
        assert_eq!(validation.warnings.len(), 1);
        assert!(validation.warnings[0].contains("GEMINI_KEY"));
        assert_eq!(validation.error_summary(), "");
    }

    #[test]
    fn test_validation_bad_url_and_timeout() {
        let config = EnvConfig {
            gemini: GeminiConfig {
                api_url: "ftp://example".to_string(),
                api_key: Some("k".to_string()),
                request_timeout: Duration::ZERO,
            },
        };
        let validation = config.validate();
        assert!(!validation.is_valid());
        assert_eq!(validation.errors.len(), 2);
        assert_eq!(
            validation.error_summary(),
            "GEMINI_API_URL 'ftp://example' must start with http:// or https://; \
             GEMINI_TIMEOUT_SECS must be greater than zero"
        );
    }

    #[test]
    fn test_validation_ok() {
        let config = EnvConfig {
            gemini: GeminiConfig::default().with_api_key("k"),
        };
        let validation = config.validate();
        assert!(validation.is_valid());
        assert!(validation.warnings.is_empty());
    }

    #[test]
    fn test_server_addr() {
        let server = ServerConfig::default();
        assert_eq!(server.addr(), "0.0.0.0:8080");
    }
}
