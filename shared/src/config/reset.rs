//! Password reset configuration module

use serde::{Deserialize, Serialize};

use super::{parse_or, Lookup};

/// Default lifetime of a one-time code in minutes
pub const DEFAULT_CODE_TTL_MINUTES: i64 = 10;

/// Longest code lifetime accepted by validation (one day)
pub const MAX_CODE_TTL_MINUTES: i64 = 24 * 60;

/// Default interval between expired-code sweeps in seconds
pub const DEFAULT_SWEEP_INTERVAL_SECONDS: u64 = 5 * 60;

/// OTP registry configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResetConfig {
    /// Number of minutes an issued code stays valid
    pub code_ttl_minutes: i64,

    /// Seconds between background sweeps of expired codes
    pub sweep_interval_seconds: u64,

    /// Drop an issued code when its email could not be delivered
    #[serde(default)]
    pub revoke_on_delivery_failure: bool,
}

impl Default for ResetConfig {
    fn default() -> Self {
        Self {
            code_ttl_minutes: DEFAULT_CODE_TTL_MINUTES,
            sweep_interval_seconds: DEFAULT_SWEEP_INTERVAL_SECONDS,
            revoke_on_delivery_failure: false,
        }
    }
}

impl ResetConfig {
    pub(crate) fn from_lookup(lookup: Lookup<'_>) -> Self {
        let defaults = Self::default();
        Self {
            code_ttl_minutes: parse_or(lookup, "RESET_CODE_TTL_MINUTES", defaults.code_ttl_minutes),
            sweep_interval_seconds: parse_or(
                lookup,
                "RESET_SWEEP_INTERVAL_SECONDS",
                defaults.sweep_interval_seconds,
            ),
            revoke_on_delivery_failure: parse_or(
                lookup,
                "RESET_REVOKE_ON_DELIVERY_FAILURE",
                defaults.revoke_on_delivery_failure,
            ),
        }
    }
}
