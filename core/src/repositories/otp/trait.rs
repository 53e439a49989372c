//! OTP store trait defining the interface for outstanding reset codes.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::OtpRecord;
use crate::errors::DomainError;

/// Storage for outstanding one-time codes, keyed by identity
///
/// Every method is atomic with respect to a single identity. Implementations
/// hold at most one record per identity.
#[async_trait]
pub trait OtpStore: Send + Sync {
    /// Fetch the outstanding record for an identity
    async fn get(&self, identity: &str) -> Result<Option<OtpRecord>, DomainError>;

    /// Store a record, replacing any previous one for the same identity
    ///
    /// # Returns
    /// * `Ok(Some(OtpRecord))` - The record that was replaced
    /// * `Ok(None)` - No record existed for the identity
    async fn put(&self, record: OtpRecord) -> Result<Option<OtpRecord>, DomainError>;

    /// Remove whatever record is stored for an identity
    async fn remove(&self, identity: &str) -> Result<Option<OtpRecord>, DomainError>;

    /// Remove the stored record only if it is exactly `expected`
    ///
    /// Returns `false` when the record was already removed or replaced, which
    /// lets two concurrent consumers race without both succeeding.
    async fn remove_exact(&self, expected: &OtpRecord) -> Result<bool, DomainError>;

    /// Delete every record expired at `now`
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of records removed
    async fn sweep(&self, now: DateTime<Utc>) -> Result<usize, DomainError>;

    /// Number of outstanding records
    async fn len(&self) -> Result<usize, DomainError>;
}
