//! Unit tests for the OTP registry

use chrono::{Duration, TimeZone, Utc};
use std::sync::Arc;

use crate::clock::{Clock, ManualClock};
use crate::domain::value_objects::PasswordRule;
use crate::errors::{DomainError, OtpError};
use crate::repositories::{InMemoryOtpStore, OtpStore};
use crate::services::password_reset::OtpRegistry;

const EMAIL: &str = "ada@example.com";
const STRONG: &str = "Password1!";

fn setup() -> (OtpRegistry<InMemoryOtpStore>, Arc<InMemoryOtpStore>, ManualClock) {
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap());
    let store = Arc::new(InMemoryOtpStore::new());
    let registry = OtpRegistry::new(store.clone(), Arc::new(clock.clone()), Duration::minutes(10));
    (registry, store, clock)
}

fn wrong_code(code: &str) -> String {
    if code == "123456" { "654321".to_string() } else { "123456".to_string() }
}

#[tokio::test]
async fn test_issue_sets_expiry_from_clock() {
    let (registry, _, clock) = setup();

    let record = registry.issue(EMAIL).await.unwrap();

    assert_eq!(record.identity, EMAIL);
    assert_eq!(record.code.len(), 6);
    assert_eq!(record.issued_at, clock.now());
    assert_eq!(record.expires_at, clock.now() + Duration::minutes(10));
    assert_eq!(registry.outstanding().await.unwrap(), 1);
}

#[tokio::test]
async fn test_reissue_invalidates_previous_code() {
    let (registry, _, _) = setup();

    let first = registry.issue(EMAIL).await.unwrap();
    let mut second = registry.issue(EMAIL).await.unwrap();
    // Codes are random; force a distinct replacement if the draw collided.
    while second.code == first.code {
        second = registry.issue(EMAIL).await.unwrap();
    }

    let err = registry.verify(EMAIL, &first.code).await.unwrap_err();
    assert!(matches!(err, DomainError::Otp(OtpError::Mismatch)));
    assert!(registry.verify(EMAIL, &second.code).await.is_ok());
    assert_eq!(registry.outstanding().await.unwrap(), 1);
}

#[tokio::test]
async fn test_issue_does_not_touch_other_identities() {
    let (registry, _, _) = setup();

    let other = registry.issue("grace@example.com").await.unwrap();
    registry.issue(EMAIL).await.unwrap();

    assert!(registry.verify("grace@example.com", &other.code).await.is_ok());
}

#[tokio::test]
async fn test_verify_is_repeatable() {
    let (registry, _, _) = setup();
    let record = registry.issue(EMAIL).await.unwrap();

    assert!(registry.verify(EMAIL, &record.code).await.is_ok());
    assert!(registry.verify(EMAIL, &record.code).await.is_ok());
    assert_eq!(registry.outstanding().await.unwrap(), 1);
}

#[tokio::test]
async fn test_verify_without_record() {
    let (registry, _, _) = setup();

    let err = registry.verify(EMAIL, "123456").await.unwrap_err();
    assert!(matches!(err, DomainError::Otp(OtpError::NotFoundOrExpired)));
}

#[tokio::test]
async fn test_verify_mismatch_keeps_record() {
    let (registry, _, _) = setup();
    let record = registry.issue(EMAIL).await.unwrap();

    let err = registry.verify(EMAIL, &wrong_code(&record.code)).await.unwrap_err();
    assert!(matches!(err, DomainError::Otp(OtpError::Mismatch)));
    assert!(registry.verify(EMAIL, &record.code).await.is_ok());
}

#[tokio::test]
async fn test_verify_accepts_code_at_exact_expiry() {
    let (registry, _, clock) = setup();
    let record = registry.issue(EMAIL).await.unwrap();

    clock.set(record.expires_at);
    assert!(registry.verify(EMAIL, &record.code).await.is_ok());
}

#[tokio::test]
async fn test_verify_expired_deletes_record() {
    let (registry, store, clock) = setup();
    let record = registry.issue(EMAIL).await.unwrap();

    clock.advance(Duration::minutes(10) + Duration::seconds(1));

    let err = registry.verify(EMAIL, &record.code).await.unwrap_err();
    assert!(matches!(err, DomainError::Otp(OtpError::Expired)));
    assert!(store.get(EMAIL).await.unwrap().is_none());

    let err = registry.verify(EMAIL, &record.code).await.unwrap_err();
    assert!(matches!(err, DomainError::Otp(OtpError::NotFoundOrExpired)));
}

#[tokio::test]
async fn test_consume_once_then_replay_fails() {
    let (registry, store, _) = setup();
    let record = registry.issue(EMAIL).await.unwrap();

    let consumed = registry.consume(EMAIL, &record.code, STRONG).await.unwrap();
    assert_eq!(consumed, record);
    assert!(store.get(EMAIL).await.unwrap().is_none());

    let err = registry.consume(EMAIL, &record.code, STRONG).await.unwrap_err();
    assert!(matches!(err, DomainError::Otp(OtpError::NotFoundOrExpired)));
}

#[tokio::test]
async fn test_consume_weak_secret_leaves_record() {
    let (registry, _, _) = setup();
    let record = registry.issue(EMAIL).await.unwrap();

    let err = registry.consume(EMAIL, &record.code, "short").await.unwrap_err();
    match err {
        DomainError::WeakPassword { unmet } => {
            assert!(unmet.contains(&PasswordRule::MinLength));
        }
        other => panic!("Expected weak password error, got {:?}", other),
    }

    assert!(registry.verify(EMAIL, &record.code).await.is_ok());
}

#[tokio::test]
async fn test_consume_weak_secret_checked_before_code() {
    let (registry, _, _) = setup();

    // No record at all: strength still reported first
    let err = registry.consume(EMAIL, "123456", "password").await.unwrap_err();
    assert!(matches!(err, DomainError::WeakPassword { .. }));
}

#[tokio::test]
async fn test_consume_mismatch_leaves_record() {
    let (registry, _, _) = setup();
    let record = registry.issue(EMAIL).await.unwrap();

    let err = registry
        .consume(EMAIL, &wrong_code(&record.code), STRONG)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Otp(OtpError::Mismatch)));
    assert_eq!(registry.outstanding().await.unwrap(), 1);
}

#[tokio::test]
async fn test_consume_expired_deletes_record() {
    let (registry, _, clock) = setup();
    let record = registry.issue(EMAIL).await.unwrap();
    clock.advance(Duration::minutes(11));

    let err = registry.consume(EMAIL, &record.code, STRONG).await.unwrap_err();
    assert!(matches!(err, DomainError::Otp(OtpError::Expired)));
    assert_eq!(registry.outstanding().await.unwrap(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_consume_has_single_winner() {
    let (registry, _, _) = setup();
    let registry = Arc::new(registry);
    let record = registry.issue(EMAIL).await.unwrap();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let registry = registry.clone();
        let code = record.code.clone();
        handles.push(tokio::spawn(async move {
            registry.consume(EMAIL, &code, STRONG).await.is_ok()
        }));
    }

    let mut successes = 0;
    for handle in handles {
        if handle.await.unwrap() {
            successes += 1;
        }
    }
    assert_eq!(successes, 1);
}

#[tokio::test]
async fn test_revoke_only_matching_record() {
    let (registry, _, _) = setup();
    let first = registry.issue(EMAIL).await.unwrap();
    let second = registry.issue(EMAIL).await.unwrap();

    if first != second {
        assert!(!registry.revoke(&first).await.unwrap());
    }
    assert!(registry.revoke(&second).await.unwrap());
    assert_eq!(registry.outstanding().await.unwrap(), 0);
}

#[tokio::test]
async fn test_sweep_noop_then_removes_expired() {
    let (registry, _, clock) = setup();
    registry.issue(EMAIL).await.unwrap();
    clock.advance(Duration::minutes(5));
    registry.issue("grace@example.com").await.unwrap();

    assert_eq!(registry.sweep().await.unwrap(), 0);
    assert_eq!(registry.outstanding().await.unwrap(), 2);

    clock.advance(Duration::minutes(5) + Duration::seconds(1));
    assert_eq!(registry.sweep().await.unwrap(), 1);
    assert_eq!(registry.outstanding().await.unwrap(), 1);

    clock.advance(Duration::minutes(5));
    assert_eq!(registry.sweep().await.unwrap(), 1);
    assert_eq!(registry.outstanding().await.unwrap(), 0);
}

#[tokio::test]
async fn test_issue_with_unrepresentable_expiry_fails_cleanly() {
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap());
    let store = Arc::new(InMemoryOtpStore::new());
    let registry = OtpRegistry::new(
        store.clone(),
        Arc::new(clock),
        Duration::days(365 * 1_000_000),
    );

    let err = registry.issue(EMAIL).await.unwrap_err();

    assert!(matches!(err, DomainError::Internal { .. }));
    assert_eq!(store.len().await.unwrap(), 0);
}
