//! Background sweeper for expired reset codes
//!
//! Verification never relies on the sweeper; it only bounds memory held by
//! codes that were requested and then abandoned.

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::errors::DomainResult;
use crate::repositories::OtpStore;

use super::registry::OtpRegistry;

/// Periodically removes expired records from the registry
pub struct OtpSweeper<S: OtpStore + 'static> {
    registry: Arc<OtpRegistry<S>>,
    interval: Duration,
}

impl<S: OtpStore + 'static> OtpSweeper<S> {
    pub fn new(registry: Arc<OtpRegistry<S>>, interval: Duration) -> Self {
        Self { registry, interval }
    }

    /// Run a single sweep cycle
    pub async fn run_once(&self) -> DomainResult<usize> {
        self.registry.sweep().await
    }

    /// Start the sweeper as a background task
    ///
    /// The task runs until [`SweeperHandle::stop`] is called or the handle's
    /// token is cancelled.
    pub fn start(self: Arc<Self>) -> SweeperHandle {
        let token = CancellationToken::new();
        let cancel = token.clone();

        let task = tokio::spawn(async move {
            info!(
                interval_secs = self.interval.as_secs(),
                "OTP sweeper started"
            );

            let mut interval_timer = tokio::time::interval(self.interval);
            interval_timer.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        info!("OTP sweeper stopping");
                        break;
                    }
                    _ = interval_timer.tick() => {
                        if let Err(e) = self.run_once().await {
                            error!("OTP sweep cycle failed: {}", e);
                        }
                    }
                }
            }
        });

        SweeperHandle { token, task }
    }
}

/// Owner of a running sweeper task
pub struct SweeperHandle {
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl SweeperHandle {
    /// Token that stops the sweeper when cancelled
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop the sweeper and wait for the task to exit
    pub async fn stop(self) {
        self.token.cancel();
        if let Err(e) = self.task.await {
            warn!("OTP sweeper task ended abnormally: {}", e);
        }
    }
}
