//! Per-vehicle load assignments and their classification.

use fleet_core::{Vehicle, VehicleId};
use serde::Serialize;

use crate::task::DeliveryTask;

// ── LoadStatus ───────────────────────────────────────────────────────────────

/// Classification of one vehicle's aggregate load.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize)]
pub enum LoadStatus {
    #[default]
    Balanced,
    Underloaded,
    Overloaded,
}

impl LoadStatus {
    /// Classify a total load in kg.
    ///
    /// Boundaries: above 500 kg is `Overloaded`, strictly below 100 kg is
    /// `Underloaded`, exactly 100 kg (and up to 500 kg inclusive) is
    /// `Balanced`.
    pub fn classify(total_kg: f64) -> Self {
        if total_kg > 500.0 {
            LoadStatus::Overloaded
        } else if total_kg < 100.0 {
            LoadStatus::Underloaded
        } else {
            LoadStatus::Balanced
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LoadStatus::Balanced    => "Balanced",
            LoadStatus::Underloaded => "Underloaded",
            LoadStatus::Overloaded  => "Overloaded",
        }
    }
}

impl std::fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── LoadAssignment ───────────────────────────────────────────────────────────

/// The tasks and aggregate weight attributed to one vehicle by the balancer.
///
/// Mutated in place during a single `optimize_load` call, then handed to the
/// HTTP layer; `total_load_kg` always equals the weight sum of
/// `assigned_task_ids`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadAssignment {
    pub vehicle_id: VehicleId,
    pub vehicle_name: String,
    pub assigned_task_ids: Vec<String>,
    pub total_load_kg: f64,
    pub status: LoadStatus,
}

impl LoadAssignment {
    /// Fresh assignment for a vehicle: no tasks, zero load, `Balanced`.
    pub fn unloaded(vehicle: &Vehicle) -> Self {
        Self {
            vehicle_id: vehicle.id,
            vehicle_name: vehicle.name.clone(),
            assigned_task_ids: Vec::new(),
            total_load_kg: 0.0,
            status: LoadStatus::Balanced,
        }
    }

    /// Place `task` onto this assignment and reclassify the load.
    pub fn assign(&mut self, task: &DeliveryTask) {
        self.assigned_task_ids.push(task.id.clone());
        self.total_load_kg += task.weight_kg;
        self.status = LoadStatus::classify(self.total_load_kg);
    }
}
