//! One-time password record entity for email-based password resets.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, Rng};
use serde::{Deserialize, Serialize};

/// Length of the one-time code
pub const CODE_LENGTH: usize = 6;

/// Smallest code that can be issued
pub const CODE_MIN: u32 = 100_000;

/// Largest code that can be issued
pub const CODE_MAX: u32 = 999_999;

/// Default lifetime of a one-time code (10 minutes)
pub const DEFAULT_TTL_MINUTES: i64 = 10;

/// Outstanding password-reset code for one identity
///
/// Records are immutable once issued: a resend replaces the whole record and
/// a successful reset or an expiry deletes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRecord {
    /// Email address the code was issued for, case-sensitive as received
    pub identity: String,

    /// The 6-digit code
    pub code: String,

    /// Timestamp when the code was issued
    pub issued_at: DateTime<Utc>,

    /// Timestamp after which the code is no longer accepted
    pub expires_at: DateTime<Utc>,
}

impl OtpRecord {
    /// Issues a record with a freshly drawn code
    ///
    /// # Arguments
    ///
    /// * `identity` - Email address the code belongs to
    /// * `now` - Issuance instant
    /// * `ttl` - How long the code stays valid
    ///
    /// Returns `None` when `now + ttl` is outside the representable range.
    pub fn issue(identity: impl Into<String>, now: DateTime<Utc>, ttl: Duration) -> Option<Self> {
        let expires_at = now.checked_add_signed(ttl)?;
        Some(Self {
            identity: identity.into(),
            code: Self::generate_code(),
            issued_at: now,
            expires_at,
        })
    }

    /// Draws a code uniformly from [100000, 999999] using the OS CSPRNG
    pub fn generate_code() -> String {
        OsRng.gen_range(CODE_MIN..=CODE_MAX).to_string()
    }

    /// Checks whether the record has expired at `now`
    ///
    /// A code is still accepted at exactly `expires_at`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Compares a supplied code against this record in constant time
    pub fn matches(&self, supplied: &str) -> bool {
        self.code.len() == supplied.len()
            && constant_time_eq(self.code.as_bytes(), supplied.as_bytes())
    }

    /// Time left before expiry, or zero once expired
    pub fn time_remaining(&self, now: DateTime<Utc>) -> Duration {
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}
