//! Password strength rules applied when a new password is set.
//!
//! `validate_password` is the single source of truth for both enforcement at
//! reset time and the strength meter shown while typing.

use serde::{Deserialize, Serialize};

/// Minimum number of characters a password must have
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Length at which a password satisfying every rule counts as very strong
pub const VERY_STRONG_LENGTH: usize = 12;

/// Symbols accepted by the special-character rule
pub const SPECIAL_CHARACTERS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

/// A single mandatory password rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordRule {
    MinLength,
    Uppercase,
    Lowercase,
    Digit,
    SpecialCharacter,
}

impl PasswordRule {
    /// All rules, in the order they are reported
    pub const ALL: [PasswordRule; 5] = [
        PasswordRule::MinLength,
        PasswordRule::Uppercase,
        PasswordRule::Lowercase,
        PasswordRule::Digit,
        PasswordRule::SpecialCharacter,
    ];

    /// User-facing description of the unmet rule
    pub fn message(&self) -> &'static str {
        match self {
            PasswordRule::MinLength => "Password must be at least 8 characters long",
            PasswordRule::Uppercase => "Password must contain at least one uppercase letter",
            PasswordRule::Lowercase => "Password must contain at least one lowercase letter",
            PasswordRule::Digit => "Password must contain at least one number",
            PasswordRule::SpecialCharacter => "Password must contain at least one special character",
        }
    }
}

impl std::fmt::Display for PasswordRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Strength label shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "weak",
            PasswordStrength::Medium => "medium",
            PasswordStrength::Strong => "strong",
            PasswordStrength::VeryStrong => "very-strong",
        }
    }
}

/// Outcome of each individual rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChecks {
    pub min_length: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_number: bool,
    pub has_special_char: bool,
}

impl PasswordChecks {
    fn passes(&self, rule: PasswordRule) -> bool {
        match rule {
            PasswordRule::MinLength => self.min_length,
            PasswordRule::Uppercase => self.has_uppercase,
            PasswordRule::Lowercase => self.has_lowercase,
            PasswordRule::Digit => self.has_number,
            PasswordRule::SpecialCharacter => self.has_special_char,
        }
    }

    /// Number of rules satisfied
    pub fn passed(&self) -> usize {
        PasswordRule::ALL.iter().filter(|rule| self.passes(**rule)).count()
    }
}

/// Full result of validating a candidate password
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordValidation {
    pub is_valid: bool,
    pub unmet: Vec<PasswordRule>,
    pub strength: PasswordStrength,
    pub checks: PasswordChecks,
}

impl PasswordValidation {
    /// Messages for every unmet rule, in rule order
    pub fn errors(&self) -> Vec<String> {
        self.unmet.iter().map(|rule| rule.message().to_string()).collect()
    }

    /// Share of satisfied rules as a percentage, for strength meters
    pub fn percentage(&self) -> u8 {
        (self.checks.passed() * 100 / PasswordRule::ALL.len()) as u8
    }
}

/// Validates a candidate password against every mandatory rule
///
/// Length is counted in characters, not bytes.
pub fn validate_password(password: &str) -> PasswordValidation {
    let length = password.chars().count();
    let checks = PasswordChecks {
        min_length: length >= MIN_PASSWORD_LENGTH,
        has_uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
        has_lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
        has_number: password.chars().any(|c| c.is_ascii_digit()),
        has_special_char: password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)),
    };

    let unmet: Vec<PasswordRule> = PasswordRule::ALL
        .iter()
        .copied()
        .filter(|rule| !checks.passes(*rule))
        .collect();

    let passed = checks.passed();
    let strength = if passed == PasswordRule::ALL.len() && length >= VERY_STRONG_LENGTH {
        PasswordStrength::VeryStrong
    } else if passed == PasswordRule::ALL.len() {
        PasswordStrength::Strong
    } else if passed >= 3 {
        PasswordStrength::Medium
    } else {
        PasswordStrength::Weak
    };

    PasswordValidation {
        is_valid: unmet.is_empty(),
        unmet,
        strength,
        checks,
    }
}
