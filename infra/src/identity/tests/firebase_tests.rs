//! Unit tests for Firebase payload handling

use cc_shared::config::{IdentityConfig, IdentityProviderKind};

use crate::identity::firebase::{api_error, parse_lookup};
use crate::identity::{create_identity_provider, FirebaseIdentityProvider};
use crate::InfrastructureError;

#[test]
fn test_parse_lookup_with_user() {
    let body = r#"{"kind":"identitytoolkit#GetAccountInfoResponse","users":[{"localId":"uid-42","email":"ada@example.com","emailVerified":true}]}"#;

    assert_eq!(parse_lookup(body).unwrap().as_deref(), Some("uid-42"));
}

#[test]
fn test_parse_lookup_without_users() {
    let body = r#"{"kind":"identitytoolkit#GetAccountInfoResponse"}"#;

    assert!(parse_lookup(body).unwrap().is_none());
    assert!(parse_lookup("").unwrap().is_none());
}

#[test]
fn test_parse_lookup_malformed() {
    assert!(matches!(
        parse_lookup("not json"),
        Err(InfrastructureError::General(_))
    ));
}

#[test]
fn test_api_error_uses_google_message() {
    let body = r#"{"error":{"code":400,"message":"WEAK_PASSWORD : Password should be at least 6 characters","errors":[]}}"#;

    match api_error(400, body) {
        InfrastructureError::Identity { status, message } => {
            assert_eq!(status, 400);
            assert!(message.starts_with("WEAK_PASSWORD"));
        }
        other => panic!("Expected identity error, got {:?}", other),
    }
}

#[test]
fn test_api_error_falls_back_to_body() {
    match api_error(503, " upstream down ") {
        InfrastructureError::Identity { message, .. } => assert_eq!(message, "upstream down"),
        other => panic!("Expected identity error, got {:?}", other),
    }
}

#[test]
fn test_firebase_requires_project_and_token() {
    let config = IdentityConfig {
        provider: IdentityProviderKind::Firebase,
        ..IdentityConfig::default()
    };
    assert!(FirebaseIdentityProvider::new(&config).is_err());

    let config = IdentityConfig {
        provider: IdentityProviderKind::Firebase,
        project_id: Some("career-catalyst".to_string()),
        access_token: Some("ya29.token".to_string()),
        ..IdentityConfig::default()
    };
    assert!(create_identity_provider(&config).is_ok());
}
