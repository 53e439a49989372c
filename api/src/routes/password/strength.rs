use actix_web::{web, HttpResponse};

use crate::dto::{PasswordStrengthRequest, PasswordStrengthResponse};
use cc_core::validate_password;

/// Handler for POST /api/v1/password/strength
///
/// Scores a candidate password for the client's strength meter. Never fails
/// and never logs the candidate.
///
/// # Response
///
/// ```json
/// {
///     "isValid": false,
///     "errors": ["Password must contain at least one uppercase letter"],
///     "strength": "medium",
///     "checks": {
///         "minLength": true,
///         "hasUppercase": false,
///         "hasLowercase": true,
///         "hasNumber": true,
///         "hasSpecialChar": true
///     },
///     "percentage": 80
/// }
/// ```
pub async fn password_strength(request: web::Json<PasswordStrengthRequest>) -> HttpResponse {
    let validation = validate_password(&request.password);
    HttpResponse::Ok().json(PasswordStrengthResponse::from(validation))
}
