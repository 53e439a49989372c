use serde::{Deserialize, Serialize};
use validator::Validate;

use cc_core::{PasswordChecks, PasswordStrength, PasswordValidation};

// Fields default to empty so a missing field is reported by validation
// with the same message as an empty one.

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendOtpRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email and OTP are required"))]
    pub email: String,

    /// 6-digit code from the email
    #[serde(default)]
    #[validate(length(min = 1, message = "Email and OTP are required"))]
    pub otp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "All fields are required"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "All fields are required"))]
    pub otp: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "All fields are required"))]
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AccountDeletedRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    /// Greeting name, "User" when omitted
    #[serde(default)]
    pub user_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordStrengthRequest {
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendOtpResponse {
    pub success: bool,
    pub message: String,
    /// Seconds until the delivered code expires
    pub expires_in_seconds: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordStrengthResponse {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub strength: PasswordStrength,
    pub checks: PasswordChecks,
    /// Share of rules met, 0 to 100
    pub percentage: u8,
}

impl From<PasswordValidation> for PasswordStrengthResponse {
    fn from(validation: PasswordValidation) -> Self {
        Self {
            is_valid: validation.is_valid,
            errors: validation.errors(),
            strength: validation.strength,
            percentage: validation.percentage(),
            checks: validation.checks,
        }
    }
}
