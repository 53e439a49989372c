//! Unit tests for the background OTP sweeper

use chrono::{Duration, TimeZone, Utc};
use std::sync::Arc;

use crate::clock::ManualClock;
use crate::repositories::InMemoryOtpStore;
use crate::services::password_reset::{OtpRegistry, OtpSweeper};

fn registry() -> (Arc<OtpRegistry<InMemoryOtpStore>>, ManualClock) {
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap());
    let registry = Arc::new(OtpRegistry::new(
        Arc::new(InMemoryOtpStore::new()),
        Arc::new(clock.clone()),
        Duration::minutes(10),
    ));
    (registry, clock)
}

#[tokio::test]
async fn test_run_once_removes_expired() {
    let (registry, clock) = registry();
    let sweeper = OtpSweeper::new(registry.clone(), std::time::Duration::from_secs(300));

    registry.issue("ada@example.com").await.unwrap();
    assert_eq!(sweeper.run_once().await.unwrap(), 0);

    clock.advance(Duration::minutes(11));
    assert_eq!(sweeper.run_once().await.unwrap(), 1);
    assert_eq!(registry.outstanding().await.unwrap(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_background_task_sweeps_on_interval() {
    let (registry, clock) = registry();
    let sweeper = Arc::new(OtpSweeper::new(
        registry.clone(),
        std::time::Duration::from_secs(300),
    ));

    registry.issue("ada@example.com").await.unwrap();
    let handle = sweeper.start();

    // First tick fires immediately with nothing expired
    tokio::time::sleep(std::time::Duration::from_secs(1)).await;
    assert_eq!(registry.outstanding().await.unwrap(), 1);

    clock.advance(Duration::minutes(11));
    tokio::time::sleep(std::time::Duration::from_secs(300)).await;
    assert_eq!(registry.outstanding().await.unwrap(), 0);

    handle.stop().await;
}

#[tokio::test(start_paused = true)]
async fn test_stop_ends_task() {
    let (registry, clock) = registry();
    let sweeper = Arc::new(OtpSweeper::new(
        registry.clone(),
        std::time::Duration::from_secs(60),
    ));

    let handle = sweeper.start();
    let token = handle.cancellation_token();
    handle.stop().await;
    assert!(token.is_cancelled());

    // No sweeps happen after stop
    registry.issue("ada@example.com").await.unwrap();
    clock.advance(Duration::minutes(11));
    tokio::time::sleep(std::time::Duration::from_secs(600)).await;
    assert_eq!(registry.outstanding().await.unwrap(), 1);
}
