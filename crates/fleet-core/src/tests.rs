//! Unit tests for fleet-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, NodeId, VehicleId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(VehicleId(0) < VehicleId(1));
        assert!(NodeId(100) > NodeId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(VehicleId::INVALID.0, u64::MAX);
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(EdgeId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(VehicleId(7).to_string(), "VehicleId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(28.6304, 77.2177);
        assert!(p.distance_km(p) < 1e-9);
    }

    #[test]
    fn symmetric() {
        let a = GeoPoint::new(28.6304, 77.2177);
        let b = GeoPoint::new(28.5700, 77.3200);
        assert!((a.distance_km(b) - b.distance_km(a)).abs() < 1e-12);
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111.2 km
        let a = GeoPoint::new(28.0, 77.0);
        let b = GeoPoint::new(29.0, 77.0);
        let d = a.distance_km(b);
        assert!((d - 111.195).abs() < 0.5, "got {d}");
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(1.0, 2.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        let mid = a.lerp(b, 0.5);
        assert!((mid.lat - 0.5).abs() < 1e-12);
        assert!((mid.lng - 1.0).abs() < 1e-12);
    }
}

#[cfg(test)]
mod time {
    use crate::{Clock, SystemClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn tick_display() {
        assert_eq!(Tick(3).to_string(), "T3");
    }

    #[test]
    fn system_clock_is_past_2020() {
        // 2020-01-01 00:00:00 UTC
        assert!(SystemClock.now_unix() > 1_577_836_800);
    }
}

#[cfg(test)]
mod rng {
    use crate::FleetRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = FleetRng::new(12345);
        let mut r2 = FleetRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = FleetRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(1.0f64..2.0);
            assert!((1.0..2.0).contains(&v));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = FleetRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}

#[cfg(test)]
mod vehicle {
    use crate::{Fuel, GeoPoint, Vehicle, VehicleId, VehicleKind, VehicleStatus};

    #[test]
    fn new_vehicle_defaults() {
        let v = Vehicle::new(
            VehicleId(1),
            "Test Car",
            VehicleKind::Car,
            Fuel::Electric,
            GeoPoint::new(28.63, 77.21),
        );
        assert_eq!(v.status, VehicleStatus::Idle);
        assert_eq!(v.battery_pct, 100.0);
        assert_eq!(v.speed_kmh, 0.0);
        assert_eq!(v.total_distance_km, 0.0);
        assert_eq!(v.seats, 4);
    }

    #[test]
    fn two_wheelers_seat_two() {
        assert_eq!(VehicleKind::Scooter.default_seats(), 2);
        assert_eq!(VehicleKind::Bike.default_seats(), 2);
        assert_eq!(VehicleKind::Truck.default_seats(), 4);
    }

    #[test]
    fn workshop_states() {
        assert!(VehicleStatus::Maintenance.in_workshop());
        assert!(VehicleStatus::NeedsService.in_workshop());
        assert!(!VehicleStatus::Idle.in_workshop());
        assert!(!VehicleStatus::InUse.in_workshop());
    }

    #[test]
    fn status_labels() {
        assert_eq!(VehicleStatus::InUse.to_string(), "In Use");
        assert_eq!(VehicleStatus::NeedsService.to_string(), "Needs Service");
    }
}
