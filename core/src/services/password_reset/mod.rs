//! Password reset workflow over email one-time codes
//!
//! This module provides:
//! - The OTP registry (issue, verify, consume, sweep)
//! - The reset service orchestrating identity lookups and email delivery
//! - A cancellable background sweeper for expired codes

mod config;
mod registry;
mod service;
mod sweeper;
mod traits;
mod types;

#[cfg(test)]
pub(crate) mod tests;

pub use config::PasswordResetConfig;
pub use registry::OtpRegistry;
pub use service::PasswordResetService;
pub use sweeper::{OtpSweeper, SweeperHandle};
pub use traits::{EmailServiceTrait, IdentityProviderTrait};
pub use types::{CodeDispatch, ResetOutcome, SendCodeResult};
