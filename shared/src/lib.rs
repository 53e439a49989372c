//! Shared utilities and common types for the CareerCatalyst server
//!
//! This crate provides functionality used across all server crates:
//! - Configuration types loaded from the environment
//! - Email address validation and log masking

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, Environment,
    ServerConfig, CorsConfig, LoggingConfig, LogFormat,
    ResetConfig, MailConfig, MailProvider, IdentityConfig, IdentityProviderKind,
};
pub use utils::email;
