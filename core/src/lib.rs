//! # CareerCatalyst Core
//!
//! Core business logic for the CareerCatalyst password reset backend.
//! This crate contains the OTP record entity, the password strength rules,
//! the OTP store interface, the reset workflow and its error types.

pub mod clock;
pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use clock::{Clock, ManualClock, SystemClock};
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
