//! Self-imposed request rate limiting
//!
//! The Kanka API allows a fixed number of requests per minute. Rather than
//! reacting to 429 responses, the client gates every outbound request through
//! [`RateGate`], a sliding-window admission counter: each admission schedules
//! its own capacity release one interval after admission time, so a burst of
//! N requests frees up exactly as it was admitted, not on a fixed clock tick.

use crate::config::DEFAULT_MAX_REQUESTS_PER_INTERVAL;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tracing::debug;

/// Sliding-window admission gate
///
/// Capacity is a semaphore holding `max_per_interval` permits. [`acquire`]
/// consumes one permit and spawns a timer that returns it one interval
/// later, independent of whether the request it admitted has completed.
/// The gate never errors; exhausted capacity only delays the caller.
/// Admission order across waiting tasks is not guaranteed.
///
/// [`acquire`]: RateGate::acquire
#[derive(Clone)]
pub struct RateGate {
    permits: Arc<Semaphore>,
    max_per_interval: u32,
    reset_interval_ms: Arc<AtomicU64>,
}

impl RateGate {
    /// Create a gate admitting `max_per_interval` requests per `reset_interval`
    ///
    /// A zero `max_per_interval` falls back to the default of
    /// [`DEFAULT_MAX_REQUESTS_PER_INTERVAL`].
    pub fn new(max_per_interval: u32, reset_interval: Duration) -> Self {
        let max = if max_per_interval == 0 {
            DEFAULT_MAX_REQUESTS_PER_INTERVAL
        } else {
            max_per_interval
        };

        Self {
            permits: Arc::new(Semaphore::new(max as usize)),
            max_per_interval: max,
            reset_interval_ms: Arc::new(AtomicU64::new(reset_interval.as_millis() as u64)),
        }
    }

    /// Wait until the gate admits one request
    ///
    /// Consumes one unit of capacity and schedules its release one reset
    /// interval from now. Safe to call from many concurrent tasks. Dropping
    /// the returned future while parked abandons the wait without consuming
    /// capacity.
    pub async fn acquire(&self) {
        // Semaphore is never closed, so acquire can only fail if we closed
        // it ourselves.
        let permit = self
            .permits
            .clone()
            .acquire_owned()
            .await
            .expect("rate gate semaphore closed");
        permit.forget();

        let delay = self.reset_interval();
        let permits = Arc::clone(&self.permits);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            permits.add_permits(1);
        });

        debug!(
            available = self.permits.available_permits(),
            max = self.max_per_interval,
            "rate gate admission"
        );
    }

    /// Number of admissions currently available without waiting
    pub fn available(&self) -> usize {
        self.permits.available_permits()
    }

    /// Maximum admissions per interval
    pub fn max_per_interval(&self) -> u32 {
        self.max_per_interval
    }

    /// Current reset interval
    pub fn reset_interval(&self) -> Duration {
        Duration::from_millis(self.reset_interval_ms.load(Ordering::Relaxed))
    }

    /// Change the release delay for subsequent admissions
    ///
    /// Intended for test acceleration only: the per-minute request quota
    /// assumes a one-minute interval, so production code should leave this
    /// untouched. Admissions already in flight keep their original delay.
    pub fn set_reset_interval(&self, interval: Duration) {
        self.reset_interval_ms
            .store(interval.as_millis() as u64, Ordering::Relaxed);
    }
}

impl std::fmt::Debug for RateGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateGate")
            .field("max_per_interval", &self.max_per_interval)
            .field("available", &self.permits.available_permits())
            .field("reset_interval", &self.reset_interval())
            .finish()
    }
}
