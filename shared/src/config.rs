use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 20;
pub const MAX_REMOTE_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_ACCESS_CODE: &str = "F3F3";
pub const ACCESS_CODE_LEN: usize = 4;

/// Interval at which the shell is expected to send `Event::TimerTick`.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("model name cannot be empty")]
    EmptyModel,

    #[error("remote timeout must be between 1 and {max} seconds, got {got}")]
    TimeoutOutOfRange { got: u64, max: u64 },

    #[error("access code must be 4 letters or digits")]
    InvalidAccessCode,
}

/// Remote API key. Redacted in `Debug` output and never serialized.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(SecretString);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(SecretString::new(key.into()))
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for ApiKey {
    fn clone(&self) -> Self {
        Self::new(self.expose())
    }
}

impl PartialEq for ApiKey {
    fn eq(&self, other: &Self) -> bool {
        self.expose() == other.expose()
    }
}

impl Eq for ApiKey {}

/// Settings the shell hands to the core at startup.
///
/// The API key is optional: without it every chat message is answered by the script.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConciergeConfig {
    pub api_key: Option<ApiKey>,
    pub endpoint: String,
    pub model: String,
    pub remote_timeout_secs: u64,
    pub access_code: String,
    /// Seeds scripted reply selection. `None` seeds from the OS.
    pub reply_seed: Option<u64>,
}

impl Default for ConciergeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            remote_timeout_secs: DEFAULT_REMOTE_TIMEOUT_SECS,
            access_code: DEFAULT_ACCESS_CODE.to_owned(),
            reply_seed: None,
        }
    }
}

impl ConciergeConfig {
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(ApiKey::new(key));
        self
    }

    #[must_use]
    pub fn with_reply_seed(mut self, seed: u64) -> Self {
        self.reply_seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let parsed = Url::parse(&self.endpoint).map_err(|e| ConfigError::InvalidEndpoint {
            url: self.endpoint.clone(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidEndpoint {
                url: self.endpoint.clone(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        if parsed.host_str().is_none() {
            return Err(ConfigError::InvalidEndpoint {
                url: self.endpoint.clone(),
                reason: "missing host".into(),
            });
        }

        if self.model.trim().is_empty() {
            return Err(ConfigError::EmptyModel);
        }

        if !(1..=MAX_REMOTE_TIMEOUT_SECS).contains(&self.remote_timeout_secs) {
            return Err(ConfigError::TimeoutOutOfRange {
                got: self.remote_timeout_secs,
                max: MAX_REMOTE_TIMEOUT_SECS,
            });
        }

        if self.access_code.chars().count() != ACCESS_CODE_LEN
            || !self.access_code.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(ConfigError::InvalidAccessCode);
        }

        Ok(())
    }

    /// The key, if one was supplied and it is not blank.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_ref()
            .map(ApiKey::expose)
            .filter(|key| !key.trim().is_empty())
    }

    #[must_use]
    pub fn remote_timeout(&self) -> Duration {
        Duration::from_secs(self.remote_timeout_secs)
    }

    /// Number of timer ticks after which a pending remote call counts as timed out.
    #[must_use]
    pub fn timeout_ticks(&self) -> u32 {
        let ticks = self.remote_timeout().as_secs() / TICK_INTERVAL.as_secs().max(1);
        u32::try_from(ticks.max(1)).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn completion_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }

    #[must_use]
    pub fn accepts_access_code(&self, code: &str) -> bool {
        code.trim().eq_ignore_ascii_case(&self.access_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn defaults_are_valid() {
        let config = ConciergeConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.api_key(), None);
        assert_eq!(config.timeout_ticks(), 20);
    }

    #[test]
    fn deserializes_partial_json() {
        let config: ConciergeConfig =
            serde_json::from_str(r#"{"api_key":"k-123","remote_timeout_secs":5}"#).unwrap();
        assert_eq!(config.api_key(), Some("k-123"));
        assert_eq!(config.timeout_ticks(), 5);
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn debug_output_hides_the_key() {
        let config = ConciergeConfig::default().with_api_key("very-secret");
        assert!(!format!("{config:?}").contains("very-secret"));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let config = ConciergeConfig::default().with_api_key("  ");
        assert_eq!(config.api_key(), None);
    }

    #[test]
    fn rejects_bad_endpoints() {
        for endpoint in ["not a url", "ftp://example.com/v1", "data:text/plain,hi"] {
            let config = ConciergeConfig {
                endpoint: endpoint.into(),
                ..ConciergeConfig::default()
            };
            assert_matches!(config.validate(), Err(ConfigError::InvalidEndpoint { .. }), "{endpoint}");
        }
    }

    #[test]
    fn rejects_out_of_range_timeout() {
        for secs in [0, MAX_REMOTE_TIMEOUT_SECS + 1] {
            let config = ConciergeConfig {
                remote_timeout_secs: secs,
                ..ConciergeConfig::default()
            };
            assert_eq!(
                config.validate(),
                Err(ConfigError::TimeoutOutOfRange {
                    got: secs,
                    max: MAX_REMOTE_TIMEOUT_SECS
                })
            );
        }
    }

    #[test]
    fn rejects_bad_access_code() {
        for code in ["F3F", "F3F3F", "F3-3"] {
            let config = ConciergeConfig {
                access_code: code.into(),
                ..ConciergeConfig::default()
            };
            assert_eq!(config.validate(), Err(ConfigError::InvalidAccessCode));
        }
    }

    #[test]
    fn access_code_is_case_insensitive() {
        let config = ConciergeConfig::default();
        assert!(config.accepts_access_code("f3f3"));
        assert!(!config.accepts_access_code("F3F4"));
    }

    #[test]
    fn completion_url_joins_endpoint_and_model() {
        let config = ConciergeConfig {
            endpoint: "https://example.com/v1beta/".into(),
            model: "flash".into(),
            ..ConciergeConfig::default()
        };
        assert_eq!(
            config.completion_url(),
            "https://example.com/v1beta/models/flash:generateContent"
        );
    }
}
