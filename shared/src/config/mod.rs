//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server and CORS configuration
//! - `reset` - OTP lifetime and sweep scheduling
//! - `mail` - Outbound email transport
//! - `identity` - Account system used for lookups and password updates
//!
//! Every sub-configuration is read through a lookup function so that tests can
//! feed values without touching the process environment.

pub mod environment;
pub mod identity;
pub mod mail;
pub mod reset;
pub mod server;

use serde::{Deserialize, Serialize};
use std::env;

// Re-export commonly used types
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use identity::{IdentityConfig, IdentityProviderKind};
pub use mail::{MailConfig, MailProvider};
pub use reset::{ResetConfig, MAX_CODE_TTL_MINUTES};
pub use server::{CorsConfig, ServerConfig};

/// Source of raw configuration values, keyed by environment variable name
pub type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Read a value and parse it, falling back to `default` when absent or invalid
pub(crate) fn parse_or<T: std::str::FromStr>(lookup: Lookup<'_>, key: &str, default: T) -> T {
    lookup(key)
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}

/// Read a non-empty string value
pub(crate) fn non_empty(lookup: Lookup<'_>, key: &str) -> Option<String> {
    lookup(key)
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// OTP registry configuration
    pub reset: ResetConfig,

    /// Outbound email configuration
    pub mail: MailConfig,

    /// Identity provider configuration
    pub identity: IdentityConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            reset: ResetConfig::default(),
            mail: MailConfig::default(),
            identity: IdentityConfig::default(),
            cors: CorsConfig::development(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(&|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key/value source
    pub fn from_lookup(lookup: Lookup<'_>) -> Self {
        let environment = lookup("ENVIRONMENT")
            .or_else(|| lookup("ENV"))
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default();

        Self {
            environment,
            server: ServerConfig::from_lookup(lookup),
            reset: ResetConfig::from_lookup(lookup),
            mail: MailConfig::from_lookup(lookup),
            identity: IdentityConfig::from_lookup(lookup),
            cors: CorsConfig::from_lookup(lookup, environment),
            logging: LoggingConfig::from_lookup(lookup, environment),
        }
    }

    /// Check that every enabled integration has the settings it needs
    ///
    /// Returns the list of problems found, if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut problems = Vec::new();

        if !(1..=reset::MAX_CODE_TTL_MINUTES).contains(&self.reset.code_ttl_minutes) {
            problems.push(format!(
                "RESET_CODE_TTL_MINUTES must be between 1 and {}",
                reset::MAX_CODE_TTL_MINUTES
            ));
        }
        if self.reset.sweep_interval_seconds == 0 {
            problems.push("RESET_SWEEP_INTERVAL_SECONDS must be positive".to_string());
        }
        problems.extend(self.mail.problems());
        problems.extend(self.identity.problems());

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = AppConfig::from_lookup(&lookup_from(&[]));

        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.server.port, 5001);
        assert_eq!(config.reset.code_ttl_minutes, 10);
        assert_eq!(config.reset.sweep_interval_seconds, 300);
        assert!(!config.reset.revoke_on_delivery_failure);
        assert_eq!(config.mail.provider, MailProvider::Log);
        assert_eq!(config.identity.provider, IdentityProviderKind::Memory);
    }

    #[test]
    fn test_reset_port_takes_precedence() {
        let config = AppConfig::from_lookup(&lookup_from(&[
            ("RESET_PORT", "6001"),
            ("SERVER_PORT", "7001"),
        ]));
        assert_eq!(config.server.port, 6001);

        let config = AppConfig::from_lookup(&lookup_from(&[("SERVER_PORT", "7001")]));
        assert_eq!(config.server.port, 7001);
    }

    #[test]
    fn test_invalid_numbers_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(&lookup_from(&[
            ("RESET_CODE_TTL_MINUTES", "ten"),
            ("RESET_PORT", "not-a-port"),
        ]));
        assert_eq!(config.reset.code_ttl_minutes, 10);
        assert_eq!(config.server.port, 5001);
    }

    #[test]
    fn test_validate_reports_missing_smtp_credentials() {
        let config = AppConfig::from_lookup(&lookup_from(&[("MAIL_PROVIDER", "smtp")]));
        let problems = config.validate().unwrap_err();
        assert!(problems.iter().any(|p| p.contains("EMAIL_USER")));
        assert!(problems.iter().any(|p| p.contains("EMAIL_PASS")));
    }

    #[test]
    fn test_validate_reports_missing_firebase_settings() {
        let config = AppConfig::from_lookup(&lookup_from(&[("IDENTITY_PROVIDER", "firebase")]));
        let problems = config.validate().unwrap_err();
        assert!(problems.iter().any(|p| p.contains("FIREBASE_PROJECT_ID")));
        assert!(problems.iter().any(|p| p.contains("FIREBASE_ACCESS_TOKEN")));
    }

    #[test]
    fn test_validate_bounds_code_ttl() {
        for ttl in ["0", "-5", "1441", "1000000000000"] {
            let config =
                AppConfig::from_lookup(&lookup_from(&[("RESET_CODE_TTL_MINUTES", ttl)]));
            let problems = config.validate().unwrap_err();
            assert!(
                problems.iter().any(|p| p.contains("RESET_CODE_TTL_MINUTES")),
                "ttl {} should be rejected",
                ttl
            );
        }

        for ttl in ["1", "10", "1440"] {
            let config =
                AppConfig::from_lookup(&lookup_from(&[("RESET_CODE_TTL_MINUTES", ttl)]));
            assert!(config.validate().is_ok(), "ttl {} should be accepted", ttl);
        }
    }

    #[test]
    fn test_validate_accepts_complete_configuration() {
        let config = AppConfig::from_lookup(&lookup_from(&[
            ("ENVIRONMENT", "production"),
            ("MAIL_PROVIDER", "smtp"),
            ("EMAIL_USER", "noreply@careercatalyst.app"),
            ("EMAIL_PASS", "app-password"),
            ("IDENTITY_PROVIDER", "firebase"),
            ("FIREBASE_PROJECT_ID", "career-catalyst"),
            ("FIREBASE_ACCESS_TOKEN", "ya29.token"),
        ]));
        assert_eq!(config.environment, Environment::Production);
        assert!(config.validate().is_ok());
    }
}
