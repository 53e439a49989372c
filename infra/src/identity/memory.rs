//! In-memory identity provider for development and tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use cc_core::IdentityProviderTrait;
use cc_shared::utils::mask_email;

/// Account store kept in process memory
///
/// Maps email to the last password set through [`update_password`], or
/// `None` for seeded accounts that were never reset.
///
/// [`update_password`]: IdentityProviderTrait::update_password
#[derive(Clone, Default)]
pub struct InMemoryIdentityProvider {
    accounts: Arc<RwLock<HashMap<String, Option<String>>>>,
    failing: Arc<AtomicBool>,
}

impl InMemoryIdentityProvider {
    pub fn new<I, S>(emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let accounts = emails.into_iter().map(|email| (email.into(), None)).collect();
        Self {
            accounts: Arc::new(RwLock::new(accounts)),
            failing: Arc::new(AtomicBool::new(false)),
        }
    }

    pub async fn add_account(&self, email: impl Into<String>) {
        self.accounts.write().await.entry(email.into()).or_insert(None);
    }

    pub async fn remove_account(&self, email: &str) -> bool {
        self.accounts.write().await.remove(email).is_some()
    }

    /// Password last set for an account
    pub async fn password_of(&self, email: &str) -> Option<String> {
        self.accounts.read().await.get(email).cloned().flatten()
    }

    /// Make every following call fail, or succeed again
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), String> {
        if self.failing.load(Ordering::SeqCst) {
            return Err("Identity provider unavailable".to_string());
        }
        Ok(())
    }
}

#[async_trait]
impl IdentityProviderTrait for InMemoryIdentityProvider {
    async fn account_exists(&self, email: &str) -> Result<bool, String> {
        self.check_available()?;
        Ok(self.accounts.read().await.contains_key(email))
    }

    async fn update_password(&self, email: &str, new_password: &str) -> Result<(), String> {
        self.check_available()?;
        match self.accounts.write().await.get_mut(email) {
            Some(password) => {
                *password = Some(new_password.to_string());
                Ok(())
            }
            None => Err(format!("No user record for {}", mask_email(email))),
        }
    }
}
