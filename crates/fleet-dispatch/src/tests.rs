//! Unit tests for fleet-dispatch.

#[cfg(test)]
mod helpers {
    use fleet_core::{Fuel, GeoPoint, Vehicle, VehicleId, VehicleKind};

    use crate::task::{DeliveryTask, TaskPriority};

    pub fn fleet(n: usize) -> Vec<Vehicle> {
        (0..n)
            .map(|i| {
                Vehicle::new(
                    VehicleId(i as u64 + 1),
                    format!("Unit-{}", i + 1),
                    VehicleKind::Van,
                    Fuel::Diesel,
                    GeoPoint::new(28.60, 77.20),
                )
            })
            .collect()
    }

    pub fn task(id: &str, weight_kg: f64) -> DeliveryTask {
        DeliveryTask {
            id: id.to_owned(),
            lat: 28.61,
            lng: 77.25,
            weight_kg,
            priority: TaskPriority::Normal,
        }
    }

    pub fn tasks(weights: &[f64]) -> Vec<DeliveryTask> {
        weights
            .iter()
            .enumerate()
            .map(|(i, &w)| task(&format!("task-{i}"), w))
            .collect()
    }
}

// ── Load classification ───────────────────────────────────────────────────────

#[cfg(test)]
mod classification {
    use crate::LoadStatus;

    #[test]
    fn boundaries() {
        assert_eq!(LoadStatus::classify(501.0), LoadStatus::Overloaded);
        assert_eq!(LoadStatus::classify(500.0), LoadStatus::Balanced);
        assert_eq!(LoadStatus::classify(100.0), LoadStatus::Balanced);
        assert_eq!(LoadStatus::classify(99.99), LoadStatus::Underloaded);
        assert_eq!(LoadStatus::classify(0.0), LoadStatus::Underloaded);
    }
}

// ── Round-robin balancing ─────────────────────────────────────────────────────

#[cfg(test)]
mod balancing {
    use std::collections::HashSet;

    use crate::{optimize_load, LoadStatus};

    #[test]
    fn no_vehicles_yields_empty_result() {
        let assignments = optimize_load(&[], &super::helpers::tasks(&[10.0, 20.0, 30.0]));
        assert!(assignments.is_empty());
    }

    #[test]
    fn no_tasks_yields_unloaded_assignments() {
        let fleet = super::helpers::fleet(3);
        let assignments = optimize_load(&fleet, &[]);

        assert_eq!(assignments.len(), 3);
        for (a, v) in assignments.iter().zip(&fleet) {
            assert_eq!(a.vehicle_id, v.id);
            assert_eq!(a.vehicle_name, v.name);
            assert!(a.assigned_task_ids.is_empty());
            assert_eq!(a.total_load_kg, 0.0);
            assert_eq!(a.status, LoadStatus::Balanced);
        }
    }

    #[test]
    fn seven_tasks_across_three_vehicles() {
        let fleet = super::helpers::fleet(3);
        let tasks = super::helpers::tasks(&[10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0]);
        let assignments = optimize_load(&fleet, &tasks);

        assert_eq!(assignments[0].assigned_task_ids, ["task-0", "task-3", "task-6"]);
        assert_eq!(assignments[1].assigned_task_ids, ["task-1", "task-4"]);
        assert_eq!(assignments[2].assigned_task_ids, ["task-2", "task-5"]);
    }

    #[test]
    fn every_task_assigned_exactly_once() {
        let fleet = super::helpers::fleet(3);
        let tasks = super::helpers::tasks(&[5.0; 7]);
        let assignments = optimize_load(&fleet, &tasks);

        let assigned: Vec<&String> = assignments
            .iter()
            .flat_map(|a| a.assigned_task_ids.iter())
            .collect();
        assert_eq!(assigned.len(), tasks.len());
        let unique: HashSet<_> = assigned.iter().collect();
        assert_eq!(unique.len(), tasks.len());
    }

    #[test]
    fn weight_is_conserved() {
        let fleet = super::helpers::fleet(3);
        let tasks = super::helpers::tasks(&[12.5, 80.0, 33.3, 190.0, 7.2, 55.5, 140.0]);
        let assignments = optimize_load(&fleet, &tasks);

        let assigned_total: f64 = assignments.iter().map(|a| a.total_load_kg).sum();
        let task_total: f64 = tasks.iter().map(|t| t.weight_kg).sum();
        assert!((assigned_total - task_total).abs() < 1e-9);

        for a in &assignments {
            let expected: f64 = a
                .assigned_task_ids
                .iter()
                .map(|id| tasks.iter().find(|t| &t.id == id).unwrap().weight_kg)
                .sum();
            assert!((a.total_load_kg - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn status_recomputed_after_each_placement() {
        let fleet = super::helpers::fleet(1);

        // 90 kg → Underloaded, +60 kg → Balanced, +400 kg → Overloaded.
        let assignments = optimize_load(&fleet, &super::helpers::tasks(&[90.0]));
        assert_eq!(assignments[0].status, LoadStatus::Underloaded);

        let assignments = optimize_load(&fleet, &super::helpers::tasks(&[90.0, 60.0]));
        assert_eq!(assignments[0].status, LoadStatus::Balanced);

        let assignments = optimize_load(&fleet, &super::helpers::tasks(&[90.0, 60.0, 400.0]));
        assert_eq!(assignments[0].status, LoadStatus::Overloaded);
    }

    #[test]
    fn more_vehicles_than_tasks() {
        let fleet = super::helpers::fleet(5);
        let tasks = super::helpers::tasks(&[150.0, 150.0]);
        let assignments = optimize_load(&fleet, &tasks);

        assert_eq!(assignments.len(), 5);
        assert_eq!(assignments[0].assigned_task_ids.len(), 1);
        assert_eq!(assignments[1].assigned_task_ids.len(), 1);
        for a in &assignments[2..] {
            assert!(a.assigned_task_ids.is_empty());
            assert_eq!(a.status, LoadStatus::Balanced);
        }
    }
}
