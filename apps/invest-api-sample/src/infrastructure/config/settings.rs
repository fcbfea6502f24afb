//! Sample Configuration Settings
//!
//! Configuration types for the sample run, loaded from environment variables.

use std::time::Duration;

use chrono::TimeDelta;
use uuid::Uuid;

use crate::application::runner::RunnerSettings;
use crate::application::services::DEFAULT_OPERATIONS_LOOKBACK_DAYS;

/// Application name sent in the `x-app-name` header.
pub const DEFAULT_APP_NAME: &str = "invest-api-rust-sample";

/// Instrument whose trading status is requested by default.
pub const DEFAULT_INSTRUMENT_UID: &str = "ba64a3c7-dd1d-4f19-8758-94aac17d971b";

const PRODUCTION_ENDPOINT: &str = "https://invest-public-api.tinkoff.ru:443";
const SANDBOX_ENDPOINT: &str = "https://sandbox-invest-public-api.tinkoff.ru:443";

/// API environment (sandbox vs production).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Sandbox with virtual money.
    #[default]
    Sandbox,
    /// Production (real accounts).
    Production,
}

impl Environment {
    /// Parse environment from string.
    #[must_use]
    pub fn from_str_case_insensitive(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            _ => Self::Sandbox,
        }
    }

    /// Check if this is the production environment.
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Get the environment name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sandbox => "sandbox",
            Self::Production => "production",
        }
    }

    /// Default gRPC endpoint of the environment.
    #[must_use]
    pub const fn default_endpoint(&self) -> &'static str {
        match self {
            Self::Sandbox => SANDBOX_ENDPOINT,
            Self::Production => PRODUCTION_ENDPOINT,
        }
    }
}

/// API access token.
#[derive(Clone)]
pub struct Credentials {
    token: String,
}

impl Credentials {
    /// Create new credentials.
    #[must_use]
    pub const fn new(token: String) -> Self {
        Self { token }
    }

    /// Get the access token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// Channel settings.
#[derive(Debug, Clone)]
pub struct ConnectionSettings {
    /// TCP/TLS connect timeout.
    pub connect_timeout: Duration,
    /// Per-request deadline.
    pub request_timeout: Duration,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Complete sample configuration.
#[derive(Debug, Clone)]
pub struct SampleConfig {
    /// API environment.
    pub environment: Environment,
    /// gRPC endpoint URL.
    pub endpoint: String,
    /// API credentials.
    pub credentials: Credentials,
    /// Application name sent with every request.
    pub app_name: String,
    /// Instrument for the trading status sample.
    pub instrument_uid: String,
    /// Operations window, in days.
    pub operations_lookback_days: u32,
    /// Channel settings.
    pub connection: ConnectionSettings,
}

impl SampleConfig {
    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is missing or a value is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is missing or a value is malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup("INVEST_TOKEN")
            .ok_or_else(|| ConfigError::MissingEnvVar("INVEST_TOKEN".to_string()))?;

        if token.is_empty() {
            return Err(ConfigError::EmptyValue("INVEST_TOKEN".to_string()));
        }

        let environment = lookup("INVEST_ENV")
            .map(|s| Environment::from_str_case_insensitive(&s))
            .unwrap_or_default();

        let endpoint = lookup("INVEST_ENDPOINT")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| environment.default_endpoint().to_string());

        let app_name = lookup("INVEST_APP_NAME")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_APP_NAME.to_string());
        if !is_metadata_safe(&app_name) {
            return Err(ConfigError::InvalidValue {
                key: "INVEST_APP_NAME".to_string(),
                value: app_name,
            });
        }

        let instrument_uid = lookup("INVEST_INSTRUMENT_UID")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_INSTRUMENT_UID.to_string());
        if Uuid::parse_str(&instrument_uid).is_err() {
            return Err(ConfigError::InvalidValue {
                key: "INVEST_INSTRUMENT_UID".to_string(),
                value: instrument_uid,
            });
        }

        let operations_lookback_days = parse_u32(
            &lookup,
            "INVEST_OPERATIONS_LOOKBACK_DAYS",
            DEFAULT_OPERATIONS_LOOKBACK_DAYS,
        );

        let connection = ConnectionSettings {
            connect_timeout: parse_duration_secs(
                &lookup,
                "INVEST_CONNECT_TIMEOUT_SECS",
                ConnectionSettings::default().connect_timeout,
            ),
            request_timeout: parse_duration_secs(
                &lookup,
                "INVEST_REQUEST_TIMEOUT_SECS",
                ConnectionSettings::default().request_timeout,
            ),
        };

        Ok(Self {
            environment,
            endpoint,
            credentials: Credentials::new(token),
            app_name,
            instrument_uid,
            operations_lookback_days,
            connection,
        })
    }

    /// Inputs for the sample runner.
    #[must_use]
    pub fn runner_settings(&self) -> RunnerSettings {
        RunnerSettings {
            instrument_uid: self.instrument_uid.clone(),
            operations_lookback: TimeDelta::days(i64::from(self.operations_lookback_days)),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required environment variable is missing.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// Environment variable has empty value.
    #[error("environment variable {0} cannot be empty")]
    EmptyValue(String),
    /// Environment variable has a malformed value.
    #[error("environment variable {key} has invalid value: {value}")]
    InvalidValue {
        /// Variable name.
        key: String,
        /// Rejected value.
        value: String,
    },
}

/// The application name travels as an ASCII metadata value.
fn is_metadata_safe(value: &str) -> bool {
    value.bytes().all(|b| b == b' ' || b.is_ascii_graphic())
}

fn parse_u32<F>(lookup: &F, key: &str, default: u32) -> u32
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

fn parse_duration_secs<F>(lookup: &F, key: &str, default: Duration) -> Duration
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .and_then(|v| v.parse::<u64>().ok())
        .map_or(default, Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<SampleConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        SampleConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn environment_parsing() {
        assert_eq!(
            Environment::from_str_case_insensitive("prod"),
            Environment::Production
        );
        assert_eq!(
            Environment::from_str_case_insensitive("PRODUCTION"),
            Environment::Production
        );
        assert_eq!(
            Environment::from_str_case_insensitive("sandbox"),
            Environment::Sandbox
        );
        assert_eq!(
            Environment::from_str_case_insensitive("unknown"),
            Environment::Sandbox
        );
    }

    #[test]
    fn defaults_with_token_only() {
        let config = config_from(&[("INVEST_TOKEN", "t.secret")]).unwrap();

        assert_eq!(config.environment, Environment::Sandbox);
        assert_eq!(config.endpoint, SANDBOX_ENDPOINT);
        assert_eq!(config.app_name, DEFAULT_APP_NAME);
        assert_eq!(config.instrument_uid, DEFAULT_INSTRUMENT_UID);
        assert_eq!(config.operations_lookback_days, 30);
        assert_eq!(config.connection.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.connection.request_timeout, Duration::from_secs(30));
        assert_eq!(config.credentials.token(), "t.secret");
    }

    #[test]
    fn production_endpoint_and_overrides() {
        let config = config_from(&[
            ("INVEST_TOKEN", "t.secret"),
            ("INVEST_ENV", "prod"),
            ("INVEST_APP_NAME", "my-app"),
            ("INVEST_OPERATIONS_LOOKBACK_DAYS", "7"),
            ("INVEST_REQUEST_TIMEOUT_SECS", "5"),
        ])
        .unwrap();

        assert!(config.environment.is_production());
        assert_eq!(config.endpoint, PRODUCTION_ENDPOINT);
        assert_eq!(config.app_name, "my-app");
        assert_eq!(config.operations_lookback_days, 7);
        assert_eq!(config.connection.request_timeout, Duration::from_secs(5));
        assert_eq!(
            config.runner_settings().operations_lookback,
            TimeDelta::days(7)
        );
    }

    #[test]
    fn explicit_endpoint_wins() {
        let config = config_from(&[
            ("INVEST_TOKEN", "t.secret"),
            ("INVEST_ENV", "prod"),
            ("INVEST_ENDPOINT", "http://127.0.0.1:50051"),
        ])
        .unwrap();

        assert_eq!(config.endpoint, "http://127.0.0.1:50051");
    }

    #[test]
    fn missing_token() {
        let err = config_from(&[]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(key) if key == "INVEST_TOKEN"));
    }

    #[test]
    fn empty_token() {
        let err = config_from(&[("INVEST_TOKEN", "")]).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyValue(key) if key == "INVEST_TOKEN"));
    }

    #[test]
    fn invalid_instrument_uid() {
        let err = config_from(&[
            ("INVEST_TOKEN", "t.secret"),
            ("INVEST_INSTRUMENT_UID", "not-a-uuid"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key, .. } if key == "INVEST_INSTRUMENT_UID"));
    }

    #[test]
    fn non_ascii_app_name() {
        let err = config_from(&[("INVEST_TOKEN", "t"), ("INVEST_APP_NAME", "пример")]).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "INVEST_APP_NAME")
        );
    }

    #[test]
    fn malformed_numbers_fall_back_to_defaults() {
        let config = config_from(&[
            ("INVEST_TOKEN", "t.secret"),
            ("INVEST_OPERATIONS_LOOKBACK_DAYS", "a week"),
            ("INVEST_CONNECT_TIMEOUT_SECS", "-1"),
        ])
        .unwrap();

        assert_eq!(config.operations_lookback_days, 30);
        assert_eq!(config.connection.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn credentials_redacted_debug() {
        let creds = Credentials::new("t.secret456".to_string());
        let debug = format!("{creds:?}");
        assert!(!debug.contains("secret456"));
        assert!(debug.contains("[REDACTED]"));
    }
}
