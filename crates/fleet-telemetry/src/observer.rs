//! Tick observer trait for progress reporting.

use fleet_core::Tick;

use crate::sim::TickReport;

/// Callbacks invoked around each telemetry pass.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl TickObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, report: &TickReport) {
///         println!("{tick}: {} vehicles, {} alerts", report.processed, report.alerts);
///     }
/// }
/// ```
pub trait TickObserver {
    /// Called just before a pass begins.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after a pass completes successfully.
    fn on_tick_end(&mut self, _tick: Tick, _report: &TickReport) {}
}

/// A [`TickObserver`] that does nothing.  Use when you need to call
/// `run_ticks` but don't want progress callbacks.
pub struct NoopObserver;

impl TickObserver for NoopObserver {}
