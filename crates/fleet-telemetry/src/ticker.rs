//! Background periodic runner for the telemetry simulator.
//!
//! # Run serialization
//!
//! One dedicated thread owns the simulator, so two passes can never execute
//! concurrently.  Pacing is deadline-based: if a pass overruns the period,
//! the missed deadlines are skipped outright rather than fired late, so the
//! store is never hit by back-to-back catch-up passes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use fleet_core::Clock;

use crate::sim::TelemetrySimulator;
use crate::store::{AlertSink, VehicleStore};

/// Granularity at which the sleep loop rechecks the stop flag.
const STOP_POLL: Duration = Duration::from_millis(50);

/// Spawns and owns the background telemetry thread.
pub struct Ticker;

impl Ticker {
    /// Start running `sim` every `period` on a dedicated thread.
    ///
    /// The first pass runs immediately.  Pass failures are logged and never
    /// stop the loop; only [`TickerHandle::stop`] does.
    pub fn spawn<S, A, C>(
        mut sim: TelemetrySimulator<S, A>,
        period: Duration,
        clock: C,
    ) -> TickerHandle
    where
        S: VehicleStore + Send + 'static,
        A: AlertSink + Send + 'static,
        C: Clock + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);

        let thread = thread::spawn(move || {
            let mut next_deadline = Instant::now() + period;

            while !flag.load(Ordering::Relaxed) {
                match sim.run_tick(clock.now_unix()) {
                    Ok(report) => tracing::debug!(
                        tick = %report.tick,
                        processed = report.processed,
                        failed = report.failed,
                        alerts = report.alerts,
                        "telemetry pass complete"
                    ),
                    Err(e) => tracing::error!(
                        error = %e,
                        "telemetry pass failed; next scheduled pass will still run"
                    ),
                }

                // Skip any deadlines the pass overran instead of bursting.
                let now = Instant::now();
                while next_deadline <= now {
                    next_deadline += period;
                }

                // Interruptible sleep until the deadline.
                while Instant::now() < next_deadline {
                    if flag.load(Ordering::Relaxed) {
                        return;
                    }
                    let remaining = next_deadline.saturating_duration_since(Instant::now());
                    thread::sleep(remaining.min(STOP_POLL));
                }
            }
        });

        TickerHandle { stop, thread: Some(thread) }
    }
}

/// Handle to a running [`Ticker`] thread.
pub struct TickerHandle {
    stop: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl TickerHandle {
    /// Signal the loop to stop and wait for the in-flight pass (if any) to
    /// finish.  Idempotent.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            // A panicking pass is already a bug; don't compound it here.
            let _ = thread.join();
        }
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
