use actix_web::{error::JsonPayloadError, http::StatusCode, web, HttpRequest, HttpResponse};
use std::collections::HashMap;
use validator::ValidationErrors;

use crate::dto::error::{ErrorResponse, ErrorResponseExt};
use cc_core::errors::DomainError;

/// Status code for each domain error
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
        DomainError::AccountNotFound => StatusCode::NOT_FOUND,
        DomainError::Otp(_) => StatusCode::BAD_REQUEST,
        DomainError::WeakPassword { .. } => StatusCode::BAD_REQUEST,
        DomainError::Delivery { .. } => StatusCode::SERVICE_UNAVAILABLE,
        DomainError::Provider { .. } => StatusCode::BAD_GATEWAY,
        DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Message shown to the client; upstream details stay in the logs
fn public_message(error: &DomainError) -> String {
    match error {
        DomainError::Validation { message } => message.clone(),
        DomainError::AccountNotFound => "No account found with this email".to_string(),
        DomainError::Otp(otp) => otp.to_string(),
        DomainError::WeakPassword { .. } => {
            "Password does not meet security requirements".to_string()
        }
        DomainError::Delivery { .. } => {
            "Failed to send email. Please try again.".to_string()
        }
        DomainError::Provider { .. } => {
            "Account service is temporarily unavailable. Please try again.".to_string()
        }
        DomainError::Internal { .. } => "An internal error occurred".to_string(),
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let status = status_for(error);

    if status.is_server_error() {
        tracing::error!(error = %error, code = error.code(), "Request failed");
    } else {
        tracing::info!(error = %error, code = error.code(), "Request rejected");
    }

    let mut body = ErrorResponse::new(error.code(), public_message(error));
    if let DomainError::WeakPassword { .. } = error {
        body = body.with_requirements(error.requirements());
    }

    body.to_response(status)
}

/// 400 response for DTO validation failures
///
/// The message of the first failing field becomes the top-level message.
pub fn handle_validation_errors(errors: &ValidationErrors) -> HttpResponse {
    let mut fields: HashMap<String, Vec<String>> = HashMap::new();

    for (field, field_errors) in errors.field_errors() {
        let messages = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        fields.insert(field.to_string(), messages);
    }

    let mut names: Vec<&String> = fields.keys().collect();
    names.sort();
    let message = names
        .first()
        .and_then(|name| fields[*name].first().cloned())
        .unwrap_or_else(|| "Invalid request data".to_string());

    tracing::info!(fields = ?names, "Request validation failed");

    ErrorResponse::new("VALIDATION_ERROR", message)
        .with_details(fields)
        .to_response(StatusCode::BAD_REQUEST)
}

/// JSON extractor configuration returning the standard error body
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(json_error_handler)
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let (status, message) = match &err {
        JsonPayloadError::ContentType => (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "Content-Type must be application/json".to_string(),
        ),
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => (
            StatusCode::PAYLOAD_TOO_LARGE,
            "Request body is too large".to_string(),
        ),
        _ => (StatusCode::BAD_REQUEST, format!("Invalid JSON body: {}", err)),
    };

    let response = ErrorResponse::new("VALIDATION_ERROR", message).to_response(status);
    actix_web::error::InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cc_core::domain::PasswordRule;
    use cc_core::errors::OtpError;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&DomainError::AccountNotFound),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&DomainError::Otp(OtpError::Expired)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&DomainError::Delivery {
                message: "smtp".to_string()
            }),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_for(&DomainError::Provider {
                message: "firebase".to_string()
            }),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_upstream_details_are_not_exposed() {
        let error = DomainError::Delivery {
            message: "535 Authentication failed for smtp-user".to_string(),
        };

        assert!(!public_message(&error).contains("smtp-user"));
    }

    #[actix_web::test]
    async fn test_weak_password_body_lists_requirements() {
        let error = DomainError::WeakPassword {
            unmet: vec![PasswordRule::MinLength],
        };

        let response = handle_domain_error(&error);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = actix_web::body::to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "WEAK_PASSWORD");
        assert_eq!(
            body["requirements"][0],
            "Password must be at least 8 characters long"
        );
    }
}
