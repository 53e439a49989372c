//! Configuration for the password reset service

use chrono::Duration;
use cc_shared::config::{ResetConfig, MAX_CODE_TTL_MINUTES};

use crate::domain::entities::DEFAULT_TTL_MINUTES;

/// Configuration for the password reset service
#[derive(Debug, Clone)]
pub struct PasswordResetConfig {
    /// Minutes before an issued code expires
    pub code_ttl_minutes: i64,
    /// Seconds between background sweeps of expired codes
    pub sweep_interval_seconds: u64,
    /// Drop the freshly issued code when the email could not be sent
    pub revoke_on_delivery_failure: bool,
}

impl PasswordResetConfig {
    /// Code lifetime as a duration
    ///
    /// Clamped to `1..=MAX_CODE_TTL_MINUTES`; configuration validation
    /// rejects values outside that range before the service is built.
    pub fn code_ttl(&self) -> Duration {
        let minutes = self.code_ttl_minutes.clamp(1, MAX_CODE_TTL_MINUTES);
        Duration::try_minutes(minutes).unwrap_or_else(|| Duration::minutes(DEFAULT_TTL_MINUTES))
    }

    /// Sweep period as a std duration for the tokio timer
    pub fn sweep_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.sweep_interval_seconds.max(1))
    }
}

impl Default for PasswordResetConfig {
    fn default() -> Self {
        Self {
            code_ttl_minutes: DEFAULT_TTL_MINUTES,
            sweep_interval_seconds: 300,
            revoke_on_delivery_failure: false,
        }
    }
}

impl From<&ResetConfig> for PasswordResetConfig {
    fn from(config: &ResetConfig) -> Self {
        Self {
            code_ttl_minutes: config.code_ttl_minutes,
            sweep_interval_seconds: config.sweep_interval_seconds,
            revoke_on_delivery_failure: config.revoke_on_delivery_failure,
        }
    }
}
