//! Value objects representing domain concepts without identity.

pub mod password_strength;

// Re-export commonly used types
pub use password_strength::{
    validate_password, PasswordChecks, PasswordRule, PasswordStrength, PasswordValidation,
    MIN_PASSWORD_LENGTH, SPECIAL_CHARACTERS, VERY_STRONG_LENGTH,
};
