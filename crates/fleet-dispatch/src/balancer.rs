//! Round-robin load balancing.

use fleet_core::Vehicle;

use crate::assignment::LoadAssignment;
use crate::task::DeliveryTask;

/// Distribute `tasks` across `vehicles`, one assignment per vehicle in the
/// given vehicle order.
///
/// Policy: strict round-robin.  Tasks are placed in input order, one per
/// step, cycling back to the first vehicle after the last.  Task priority
/// and vehicle capacity or position are not consulted; this is a deliberate
/// simplification of the current policy, not an oversight to patch locally.
///
/// An empty vehicle list yields an empty result regardless of how many
/// tasks were submitted.
pub fn optimize_load(vehicles: &[Vehicle], tasks: &[DeliveryTask]) -> Vec<LoadAssignment> {
    if vehicles.is_empty() {
        return Vec::new();
    }

    let mut assignments: Vec<LoadAssignment> =
        vehicles.iter().map(LoadAssignment::unloaded).collect();

    let n = assignments.len();
    for (i, task) in tasks.iter().enumerate() {
        assignments[i % n].assign(task);
    }

    assignments
}
