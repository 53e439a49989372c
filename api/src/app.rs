//! Application state and factory
//!
//! This module provides the factory for creating the Actix-web application.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use crate::handlers::json_config;
use crate::middleware::cors::create_cors;
use crate::routes::{self, health::health_check, AppState};
use cc_core::{EmailServiceTrait, IdentityProviderTrait, OtpStore};
use cc_shared::config::{CorsConfig, ServerConfig};

/// Create and configure the application with all dependencies
pub fn create_app<S, E, I>(
    app_state: web::Data<AppState<S, E, I>>,
    server: &ServerConfig,
    cors: &CorsConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    S: OtpStore + 'static,
    E: EmailServiceTrait + ?Sized + 'static,
    I: IdentityProviderTrait + ?Sized + 'static,
{
    let attachment_limit = server.max_attachment_payload_size;

    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(json_config(server.max_payload_size))
        // Add middleware (request tracing outermost, then CORS)
        .wrap(create_cors(cors))
        .wrap(TracingLogger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .configure(|cfg| routes::configure::<S, E, I>(cfg, attachment_limit))
                // API documentation endpoint
                .route("/", web::get().to(api_documentation)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// API documentation endpoint
async fn api_documentation() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "CareerCatalyst Email Services API v1",
        "endpoints": {
            "health": "/api/v1/health",
            "password_reset": {
                "send_otp": {
                    "path": "/api/v1/password-reset/send-otp",
                    "method": "POST",
                    "request_body": { "email": "string" },
                    "responses": {
                        "200": "OTP emailed",
                        "400": "Missing or invalid email",
                        "404": "No account found",
                        "503": "Email delivery failed"
                    }
                },
                "resend_otp": {
                    "path": "/api/v1/password-reset/resend-otp",
                    "method": "POST",
                    "request_body": { "email": "string" }
                },
                "verify_otp": {
                    "path": "/api/v1/password-reset/verify-otp",
                    "method": "POST",
                    "request_body": { "email": "string", "otp": "string (6 digits)" },
                    "responses": {
                        "200": "OTP valid",
                        "400": "OTP not found, expired or invalid"
                    }
                },
                "verify_otp_and_reset": {
                    "path": "/api/v1/password-reset/verify-otp-and-reset",
                    "method": "POST",
                    "request_body": {
                        "email": "string",
                        "otp": "string (6 digits)",
                        "newPassword": "string"
                    },
                    "responses": {
                        "200": "Password changed",
                        "400": "Weak password or OTP failure",
                        "502": "Identity provider failure"
                    }
                }
            },
            "notifications": {
                "account_deleted": {
                    "path": "/api/v1/notifications/account-deleted",
                    "method": "POST",
                    "request_body": { "email": "string", "userName": "string (optional)" }
                }
            },
            "outreach": {
                "send_resume_email": {
                    "path": "/api/v1/send-resume-email",
                    "method": "POST",
                    "request_body": {
                        "recipientEmail": "string",
                        "senderName": "string",
                        "message": "string (optional)",
                        "pdfData": "string (base64 or data URL)",
                        "filename": "string"
                    }
                },
                "send_candidate_email": {
                    "path": "/api/v1/send-candidate-email",
                    "method": "POST",
                    "request_body": {
                        "to": "string",
                        "subject": "string",
                        "body": "string",
                        "company": "string (optional)",
                        "jobTitle": "string (optional)",
                        "candidateName": "string (optional)"
                    }
                }
            },
            "password": {
                "strength": {
                    "path": "/api/v1/password/strength",
                    "method": "POST",
                    "request_body": { "password": "string" }
                }
            }
        }
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "NOT_FOUND",
        "message": "The requested resource was not found",
        "timestamp": chrono::Utc::now(),
    }))
}
