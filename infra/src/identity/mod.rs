//! Identity provider adapters
//!
//! The reset workflow only needs to know whether an account exists and to
//! replace its password.

use std::sync::Arc;

use cc_core::IdentityProviderTrait;
use cc_shared::config::{IdentityConfig, IdentityProviderKind};

pub mod firebase;
pub mod memory;

pub use firebase::FirebaseIdentityProvider;
pub use memory::InMemoryIdentityProvider;

use crate::InfrastructureError;

#[cfg(test)]
mod tests;

/// Create an identity provider based on configuration
pub fn create_identity_provider(
    config: &IdentityConfig,
) -> Result<Arc<dyn IdentityProviderTrait>, InfrastructureError> {
    match config.provider {
        IdentityProviderKind::Firebase => Ok(Arc::new(FirebaseIdentityProvider::new(config)?)),
        IdentityProviderKind::Memory => {
            tracing::warn!(
                accounts = config.seed_accounts.len(),
                "Using in-memory identity provider"
            );
            Ok(Arc::new(InMemoryIdentityProvider::new(
                config.seed_accounts.iter().cloned(),
            )))
        }
    }
}
