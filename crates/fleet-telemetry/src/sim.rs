//! The telemetry simulator and its per-vehicle state machine.
//!
//! Each tick performs one full pass over the fleet, one vehicle at a time
//! with no cross-vehicle interaction: load, mutate, store.  Vehicles are
//! written back immediately after their own update, not batched at the end
//! of the pass, so a late failure cannot lose earlier updates.

use fleet_core::{Clock, FleetRng, Tick, Vehicle, VehicleStatus};

use crate::alert::{Alert, AlertKind, AlertSeverity};
use crate::error::{TelemetryError, TelemetryResult};
use crate::observer::TickObserver;
use crate::store::{AlertSink, VehicleStore};

// ── Tuning constants ─────────────────────────────────────────────────────────

/// Simulated seconds covered by one tick.
pub const TICK_PERIOD_SECS: f64 = 5.0;

/// Speed above which an `Overspeeding` alert fires, km/h.
pub const OVERSPEED_LIMIT_KMH: f64 = 100.0;

/// Distance since last service above which a vehicle is flagged, km.
pub const SERVICE_INTERVAL_KM: f64 = 1_000.0;

/// Battery drained per tick while parked, percentage points.
const IDLE_DRAIN_PCT: f64 = 0.1;

// ── TickReport ───────────────────────────────────────────────────────────────

/// Summary of one completed pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickReport {
    pub tick: Tick,
    /// Vehicles updated and persisted.
    pub processed: usize,
    /// Vehicles whose persistence failed (logged, pass continued).
    pub failed: usize,
    /// Alerts handed to the sink.
    pub alerts: usize,
}

// ── TelemetrySimulator ───────────────────────────────────────────────────────

/// Evolves every vehicle's physical and operational state once per tick.
///
/// The simulator owns its RNG; battery drain and speed sampling never touch
/// a shared global source.  Wall-clock time is passed in per tick so tests
/// can pin timestamps.
pub struct TelemetrySimulator<S: VehicleStore, A: AlertSink> {
    store: S,
    alerts: A,
    rng: FleetRng,
    tick: Tick,
}

impl<S: VehicleStore, A: AlertSink> TelemetrySimulator<S, A> {
    pub fn new(store: S, alerts: A, rng: FleetRng) -> Self {
        Self {
            store,
            alerts,
            rng,
            tick: Tick::ZERO,
        }
    }

    /// The tick the next pass will run as.
    pub fn next_tick(&self) -> Tick {
        self.tick
    }

    /// Borrow the underlying store (e.g. to inspect state mid-test).
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Unwrap the store and sink after the simulator is done.
    pub fn into_parts(self) -> (S, A) {
        (self.store, self.alerts)
    }

    /// Run one full pass over the fleet at wall-clock time `now_unix`.
    ///
    /// A save failure for one vehicle is logged and counted, and the pass
    /// moves on to the next vehicle.  Only a failure to load the fleet at
    /// all aborts the pass; every attempted pass consumes a tick number
    /// either way, so a failed pass never stalls the sequence.
    pub fn run_tick(&mut self, now_unix: i64) -> TelemetryResult<TickReport> {
        let tick = self.tick;
        self.tick = tick.offset(1);

        let vehicles = self.store.load_all().map_err(TelemetryError::Store)?;

        let mut report = TickReport { tick, processed: 0, failed: 0, alerts: 0 };

        for mut vehicle in vehicles {
            let emitted = advance_vehicle(&mut vehicle, now_unix, &mut self.rng);
            report.alerts += emitted.len();
            for alert in emitted {
                self.alerts.record(alert);
            }

            match self.store.save(&vehicle) {
                Ok(()) => report.processed += 1,
                Err(e) => {
                    report.failed += 1;
                    tracing::warn!(
                        vehicle = %vehicle.id,
                        error = %e,
                        "vehicle save failed; continuing pass"
                    );
                }
            }
        }

        Ok(report)
    }

    /// Run `n` consecutive passes, reading the clock once per pass.
    ///
    /// Pass-level failures are logged and do not stop the remaining passes,
    /// matching the containment the background ticker provides.
    pub fn run_ticks<O: TickObserver>(&mut self, n: u64, clock: &dyn Clock, observer: &mut O) {
        for _ in 0..n {
            let tick = self.tick;
            observer.on_tick_start(tick);
            match self.run_tick(clock.now_unix()) {
                Ok(report) => observer.on_tick_end(tick, &report),
                Err(e) => {
                    tracing::error!(%tick, error = %e, "telemetry pass failed; continuing");
                }
            }
        }
    }
}

// ── Per-vehicle state machine ────────────────────────────────────────────────

/// Advance one vehicle by one tick and return the alerts it raised.
///
/// Pure with respect to everything but the RNG, which makes the state
/// machine directly testable without a store.
pub fn advance_vehicle(vehicle: &mut Vehicle, now_unix: i64, rng: &mut FleetRng) -> Vec<Alert> {
    let mut alerts = Vec::new();
    drain_battery(vehicle, rng, &mut alerts);
    simulate_motion(vehicle, rng, &mut alerts);
    vehicle.last_update_unix = now_unix;
    alerts
}

/// Battery branch of the state machine.
///
/// Depletion while `InUse` pulls the vehicle into `Maintenance`; the motion
/// branch below then sees the new status and parks it in the same tick.
fn drain_battery(vehicle: &mut Vehicle, rng: &mut FleetRng, alerts: &mut Vec<Alert>) {
    match vehicle.status {
        VehicleStatus::InUse => {
            vehicle.battery_pct -= rng.gen_range(1.0..2.0);
            if vehicle.battery_pct <= 0.0 {
                vehicle.battery_pct = 0.0;
                vehicle.status = VehicleStatus::Maintenance;
                alerts.push(Alert {
                    vehicle_id: vehicle.id,
                    kind: AlertKind::LowBattery,
                    message: "Battery depleted. Vehicle moved to Maintenance.".to_owned(),
                    severity: AlertSeverity::Critical,
                });
            }
        }
        VehicleStatus::Idle => {
            vehicle.battery_pct = (vehicle.battery_pct - IDLE_DRAIN_PCT).max(0.0);
        }
        // Workshop states hold their charge.
        VehicleStatus::Maintenance | VehicleStatus::NeedsService => {}
    }

    // Rounded and clamped after every branch, taken or not.
    vehicle.battery_pct = round2(vehicle.battery_pct.clamp(0.0, 100.0));
}

/// Speed and odometer branch of the state machine.
fn simulate_motion(vehicle: &mut Vehicle, rng: &mut FleetRng, alerts: &mut Vec<Alert>) {
    if vehicle.status != VehicleStatus::InUse {
        vehicle.speed_kmh = 0.0;
        return;
    }

    vehicle.speed_kmh = round2(rng.gen_range(0.0..120.0));

    if vehicle.speed_kmh > OVERSPEED_LIMIT_KMH {
        alerts.push(Alert {
            vehicle_id: vehicle.id,
            kind: AlertKind::Overspeeding,
            message: format!(
                "Vehicle exceeded 100 km/h (speed: {:.2} km/h)",
                vehicle.speed_kmh
            ),
            severity: AlertSeverity::High,
        });
    }

    // Distance covered in one tick at the sampled speed.
    let tick_km = vehicle.speed_kmh * (TICK_PERIOD_SECS / 3_600.0);
    vehicle.total_distance_km += tick_km;
    vehicle.distance_since_service_km += tick_km;

    if vehicle.distance_since_service_km > SERVICE_INTERVAL_KM && !vehicle.status.in_workshop() {
        vehicle.status = VehicleStatus::NeedsService;
        alerts.push(Alert {
            vehicle_id: vehicle.id,
            kind: AlertKind::MaintenanceRequired,
            message: "Vehicle has covered 1000 km since last service.".to_owned(),
            severity: AlertSeverity::Medium,
        });
    }
}

#[inline]
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
