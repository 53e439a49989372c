//! Reset workflow wired to the development adapters

use std::sync::Arc;

use cc_core::{
    InMemoryOtpStore, OtpRegistry, PasswordResetConfig, PasswordResetService, SystemClock,
};
use cc_infra::{InMemoryIdentityProvider, LogEmailService};

#[tokio::test]
async fn test_reset_with_log_mailer_and_memory_identity() {
    let config = PasswordResetConfig::default();
    let registry = Arc::new(OtpRegistry::new(
        Arc::new(InMemoryOtpStore::new()),
        Arc::new(SystemClock),
        config.code_ttl(),
    ));
    let mailer = Arc::new(LogEmailService::new(config.code_ttl_minutes));
    let identity = Arc::new(InMemoryIdentityProvider::new(["ada@example.com"]));
    let service = PasswordResetService::new(registry, mailer.clone(), identity.clone(), config);

    service.request_code("ada@example.com").await.unwrap();
    let code = mailer.last_code_for("ada@example.com").unwrap();

    service.verify_code("ada@example.com", &code).await.unwrap();
    let outcome = service
        .verify_and_reset("ada@example.com", &code, "Sup3r-Secret")
        .await
        .unwrap();

    assert!(outcome.confirmation_sent);
    assert_eq!(
        identity.password_of("ada@example.com").await.as_deref(),
        Some("Sup3r-Secret")
    );

    let subjects: Vec<String> = mailer.outbox().into_iter().map(|m| m.subject).collect();
    assert_eq!(
        subjects,
        vec![
            "Password Reset OTP - CareerCatalyst".to_string(),
            "Password Changed Successfully - CareerCatalyst".to_string(),
        ]
    );
}
