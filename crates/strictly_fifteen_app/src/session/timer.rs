//! Cancellable one-tick-per-period game clock.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::task::JoinHandle;
use tokio::time::{Duration, Instant, MissedTickBehavior};
use tracing::{debug, instrument, trace};

use crate::session::SessionError;

/// Guard for a spawned tick task. Aborts the task on drop.
///
/// Each timer owns its own counter, so a tick that races with cancellation
/// can never leak into the next game.
#[derive(Debug)]
pub struct TickTimer {
    ticks: Arc<AtomicU64>,
    handle: JoinHandle<()>,
}

impl TickTimer {
    /// Spawns a task on the current tokio runtime that counts one tick per
    /// `period`. The first tick lands one full period after start.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoRuntime`] when called outside a runtime.
    #[instrument]
    pub fn start(period: Duration) -> Result<Self, SessionError> {
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| SessionError::NoRuntime)?;
        let ticks = Arc::new(AtomicU64::new(0));

        let counter = Arc::clone(&ticks);
        let handle = runtime.spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                let elapsed = counter.fetch_add(1, Ordering::SeqCst) + 1;
                trace!(elapsed, "Tick");
            }
        });

        debug!("Tick timer started");
        Ok(Self { ticks, handle })
    }

    /// Ticks counted so far.
    pub fn elapsed(&self) -> u64 {
        self.ticks.load(Ordering::SeqCst)
    }

    /// Cancels the timer, returning the final tick count.
    #[instrument(skip(self))]
    pub fn stop(self) -> u64 {
        let elapsed = self.elapsed();
        debug!(elapsed, "Tick timer stopped");
        elapsed
    }
}

impl Drop for TickTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
