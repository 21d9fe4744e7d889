//! Fleet health scoring.
//!
//! A fixed heuristic, not a learned model: battery level and distance since
//! service are blended into a 0-100ish score and bucketed into bands for the
//! maintenance dashboard.

use fleet_core::Vehicle;

/// Weight of the battery term in the health blend.
const BATTERY_WEIGHT: f64 = 0.4;
/// Weight of the service-distance term.
const SERVICE_WEIGHT: f64 = 0.6;

/// Health score for one vehicle.
///
/// `battery × 0.4 + (100 − distance_since_service/100) × 0.6`.  A vehicle
/// far past its service interval can push the score negative; callers only
/// compare against the band thresholds.
pub fn health_score(vehicle: &Vehicle) -> f64 {
    vehicle.battery_pct * BATTERY_WEIGHT
        + (100.0 - vehicle.distance_since_service_km / 100.0) * SERVICE_WEIGHT
}

/// Maintenance band a health score falls into.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HealthBand {
    /// Score below 40: fault predicted soon.
    Critical,
    /// Score below 70: service due soon.
    DueSoon,
    /// Everything else.
    Healthy,
}

impl HealthBand {
    pub fn classify(score: f64) -> Self {
        if score < 40.0 {
            HealthBand::Critical
        } else if score < 70.0 {
            HealthBand::DueSoon
        } else {
            HealthBand::Healthy
        }
    }
}

/// Band counts across a fleet.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetHealth {
    pub critical: usize,
    pub due_soon: usize,
    pub healthy: usize,
}

/// Score and band every vehicle in `vehicles`.
pub fn fleet_health(vehicles: &[Vehicle]) -> FleetHealth {
    let mut summary = FleetHealth::default();
    for vehicle in vehicles {
        match HealthBand::classify(health_score(vehicle)) {
            HealthBand::Critical => summary.critical += 1,
            HealthBand::DueSoon  => summary.due_soon += 1,
            HealthBand::Healthy  => summary.healthy += 1,
        }
    }
    summary
}
