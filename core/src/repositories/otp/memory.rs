//! In-process OTP store backed by a lock-guarded map

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::OtpRecord;
use crate::errors::DomainError;

use super::r#trait::OtpStore;

/// Volatile OTP store; records live only as long as the process
#[derive(Clone, Default)]
pub struct InMemoryOtpStore {
    records: Arc<RwLock<HashMap<String, OtpRecord>>>,
}

impl InMemoryOtpStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OtpStore for InMemoryOtpStore {
    async fn get(&self, identity: &str) -> Result<Option<OtpRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records.get(identity).cloned())
    }

    async fn put(&self, record: OtpRecord) -> Result<Option<OtpRecord>, DomainError> {
        let mut records = self.records.write().await;
        Ok(records.insert(record.identity.clone(), record))
    }

    async fn remove(&self, identity: &str) -> Result<Option<OtpRecord>, DomainError> {
        let mut records = self.records.write().await;
        Ok(records.remove(identity))
    }

    async fn remove_exact(&self, expected: &OtpRecord) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;

        match records.get(&expected.identity) {
            Some(current) if current == expected => {
                records.remove(&expected.identity);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn sweep(&self, now: DateTime<Utc>) -> Result<usize, DomainError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|_, record| !record.is_expired_at(now));
        Ok(before - records.len())
    }

    async fn len(&self) -> Result<usize, DomainError> {
        Ok(self.records.read().await.len())
    }
}
