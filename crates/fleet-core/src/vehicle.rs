//! The fleet vehicle entity and its tagged state enums.
//!
//! Operational status is an explicit enumeration with a defined transition
//! table (see the telemetry crate), not a free-form string: a typo'd status
//! can then never silently fail a comparison.

use crate::{GeoPoint, VehicleId};

// ── VehicleStatus ────────────────────────────────────────────────────────────

/// Operational state of a vehicle.
///
/// Transitions are driven by the telemetry simulator: `InUse → Maintenance`
/// on battery depletion, `InUse → NeedsService` on crossing the service
/// distance threshold.  Request-path code only reads this value.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VehicleStatus {
    /// Parked and available (default state).
    #[default]
    Idle,
    /// On the road with a driver or delivery.
    InUse,
    /// Pulled from service for repair.
    Maintenance,
    /// Flagged for a service visit; still parked.
    NeedsService,
}

impl VehicleStatus {
    /// `true` for the two workshop states in which telemetry stops evolving
    /// the vehicle (no battery drain, no movement).
    #[inline]
    pub fn in_workshop(self) -> bool {
        matches!(self, VehicleStatus::Maintenance | VehicleStatus::NeedsService)
    }

    /// Human-readable label, matching the dashboard vocabulary.
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleStatus::Idle         => "Idle",
            VehicleStatus::InUse        => "In Use",
            VehicleStatus::Maintenance  => "Maintenance",
            VehicleStatus::NeedsService => "Needs Service",
        }
    }
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── VehicleKind / Fuel ───────────────────────────────────────────────────────

/// Body type of a vehicle.  Accepted by the planning APIs but not yet used to
/// differentiate routes or load capacity.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VehicleKind {
    Car,
    Truck,
    Van,
    Bike,
    Scooter,
}

impl VehicleKind {
    /// Default seat count for newly registered vehicles of this kind.
    pub fn default_seats(self) -> u8 {
        match self {
            VehicleKind::Bike | VehicleKind::Scooter => 2,
            _ => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VehicleKind::Car     => "Car",
            VehicleKind::Truck   => "Truck",
            VehicleKind::Van     => "Van",
            VehicleKind::Bike    => "Bike",
            VehicleKind::Scooter => "Scooter",
        }
    }
}

impl std::fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Energy source.  Carried for dashboard display; the telemetry battery model
/// applies uniformly regardless of fuel.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Fuel {
    Electric,
    Petrol,
    Diesel,
}

impl Fuel {
    pub fn as_str(self) -> &'static str {
        match self {
            Fuel::Electric => "Electric",
            Fuel::Petrol   => "Petrol",
            Fuel::Diesel   => "Diesel",
        }
    }
}

impl std::fmt::Display for Fuel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Vehicle ──────────────────────────────────────────────────────────────────

/// A fleet vehicle as held by the external vehicle store.
///
/// The telemetry simulator performs a load → mutate → store cycle on these
/// records each tick.  Invariants maintained by that cycle: `battery_pct`
/// stays in `[0, 100]` rounded to 2 decimals, `speed_kmh` is 0 whenever the
/// vehicle is not `InUse`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    pub id: VehicleId,
    pub name: String,
    pub kind: VehicleKind,
    pub fuel: Fuel,
    pub seats: u8,
    pub status: VehicleStatus,

    // ── Telemetry ─────────────────────────────────────────────────────────
    pub battery_pct: f64,
    pub speed_kmh: f64,
    pub position: GeoPoint,
    pub last_update_unix: i64,

    // ── Odometers ─────────────────────────────────────────────────────────
    pub distance_since_service_km: f64,
    pub total_distance_km: f64,
}

impl Vehicle {
    /// Register a new vehicle: full battery, parked, zeroed odometers.
    pub fn new(
        id: VehicleId,
        name: impl Into<String>,
        kind: VehicleKind,
        fuel: Fuel,
        position: GeoPoint,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            fuel,
            seats: kind.default_seats(),
            status: VehicleStatus::Idle,
            battery_pct: 100.0,
            speed_kmh: 0.0,
            position,
            last_update_unix: 0,
            distance_since_service_km: 0.0,
            total_distance_km: 0.0,
        }
    }
}
