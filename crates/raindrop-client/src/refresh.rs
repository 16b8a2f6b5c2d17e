//! Periodic re-rendering
//!
//! Hosts that keep a note on screen re-run its raindrop blocks on a timer.
//! The timer is injected through [`RefreshScheduler`] so the processing code
//! never owns one.

use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;
use tokio::time::{interval, Interval, MissedTickBehavior};
use tracing::debug;

/// Default time between refreshes
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(30 * 60);

/// Longest accepted time between refreshes (one week)
pub const MAX_REFRESH_INTERVAL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

const MIN_REFRESH_INTERVAL: Duration = Duration::from_millis(1);

/// Source of refresh ticks
#[async_trait]
pub trait RefreshScheduler: Send {
    /// Wait until the next refresh is due
    async fn tick(&mut self);
}

/// Scheduler backed by a tokio interval; the first tick completes immediately
pub struct IntervalScheduler {
    interval: Interval,
}

impl IntervalScheduler {
    /// Tick every `period`, clamped to `MAX_REFRESH_INTERVAL`
    pub fn new(period: Duration) -> Self {
        let period = period.clamp(MIN_REFRESH_INTERVAL, MAX_REFRESH_INTERVAL);
        let mut interval = interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }

    /// Tick every `minutes` minutes
    pub fn every_minutes(minutes: u64) -> Self {
        Self::new(Duration::from_secs(minutes.saturating_mul(60)))
    }
}

impl Default for IntervalScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_REFRESH_INTERVAL)
    }
}

#[async_trait]
impl RefreshScheduler for IntervalScheduler {
    async fn tick(&mut self) {
        self.interval.tick().await;
    }
}

/// Drives a refresh callback from a scheduler
#[derive(Debug, Clone, Copy, Default)]
pub struct RefreshLoop {
    max_runs: Option<usize>,
}

impl RefreshLoop {
    /// Loop until the task is dropped
    pub fn forever() -> Self {
        Self { max_runs: None }
    }

    /// Stop after `runs` refreshes
    pub fn limited(runs: usize) -> Self {
        Self {
            max_runs: Some(runs),
        }
    }

    /// Wait for each tick and run `on_tick` with the zero-based run number
    ///
    /// Returns the number of completed runs.
    pub async fn run<S, F, Fut>(&self, scheduler: &mut S, mut on_tick: F) -> usize
    where
        S: RefreshScheduler + ?Sized,
        F: FnMut(usize) -> Fut,
        Fut: Future<Output = ()>,
    {
        let mut runs = 0;
        while self.max_runs.map_or(true, |max| runs < max) {
            scheduler.tick().await;
            debug!("Refresh run {}", runs);
            on_tick(runs).await;
            runs += 1;
        }
        runs
    }
}
