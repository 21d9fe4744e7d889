//! External-collaborator traits and in-memory implementations.
//!
//! The vehicle store and alert sink are owned elsewhere (a database layer in
//! a full deployment).  This crate only consumes them, and treats both as
//! opaque, possibly-failing edges.  The in-memory implementations back tests
//! and the demo binary.

use fleet_core::{Vehicle, VehicleId};

use crate::alert::Alert;

/// Opaque error from an external store; the simulator only logs it.
pub type StoreError = Box<dyn std::error::Error + Send + Sync + 'static>;

// ── Traits ───────────────────────────────────────────────────────────────────

/// The external vehicle store, read and rewritten once per vehicle per tick.
pub trait VehicleStore {
    /// All vehicles, in a stable order.
    fn load_all(&mut self) -> Result<Vec<Vehicle>, StoreError>;

    /// Persist one vehicle record, overwriting the stored state.
    fn save(&mut self, vehicle: &Vehicle) -> Result<(), StoreError>;
}

/// The external alert sink.  Recording is fire-and-forget; the simulator
/// neither retries nor observes delivery.
pub trait AlertSink {
    fn record(&mut self, alert: Alert);
}

// ── In-memory implementations ────────────────────────────────────────────────

/// Vehicle store backed by a `Vec`, preserving insertion order.
///
/// Last-write-wins on `save`, mirroring the consistency model of the real
/// store.
#[derive(Default)]
pub struct MemoryVehicleStore {
    vehicles: Vec<Vehicle>,
}

impl MemoryVehicleStore {
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Self { vehicles }
    }

    /// Read-only view of the current records, for inspection after a run.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Look up a vehicle by id.
    pub fn get(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }
}

impl VehicleStore for MemoryVehicleStore {
    fn load_all(&mut self) -> Result<Vec<Vehicle>, StoreError> {
        Ok(self.vehicles.clone())
    }

    fn save(&mut self, vehicle: &Vehicle) -> Result<(), StoreError> {
        match self.vehicles.iter_mut().find(|v| v.id == vehicle.id) {
            Some(slot) => *slot = vehicle.clone(),
            None => self.vehicles.push(vehicle.clone()),
        }
        Ok(())
    }
}

/// Alert sink that buffers everything it receives.
#[derive(Default)]
pub struct MemoryAlertSink {
    pub alerts: Vec<Alert>,
}

impl MemoryAlertSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Alerts recorded for one vehicle, in emission order.
    pub fn for_vehicle(&self, id: VehicleId) -> Vec<&Alert> {
        self.alerts.iter().filter(|a| a.vehicle_id == id).collect()
    }
}

impl AlertSink for MemoryAlertSink {
    fn record(&mut self, alert: Alert) {
        self.alerts.push(alert);
    }
}
