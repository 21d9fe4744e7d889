//! End-to-end demo: plan a route, balance a delivery batch, and run the
//! telemetry simulator over a seeded fleet.
//!
//! Run with `RUST_LOG=debug` to watch per-pass logging from the simulator.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use fleet_core::{Fuel, FleetRng, GeoPoint, SystemClock, Tick, Vehicle, VehicleId, VehicleKind, VehicleStatus};
use fleet_dispatch::{optimize_load, DeliveryTask, TaskPriority};
use fleet_routing::{RoutePlanner, RouteRequest};
use fleet_spatial::city_graph;
use fleet_telemetry::{
    fleet_health, Alert, AlertSink, MemoryVehicleStore, TelemetrySimulator, TickObserver,
    TickReport, Ticker,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let graph = Arc::new(city_graph());
    tracing::info!(
        landmarks = graph.node_count(),
        edges = graph.edge_count(),
        "landmark graph ready"
    );

    // ── Route planning ────────────────────────────────────────────────────
    let planner = RoutePlanner::new(Arc::clone(&graph));
    let request = RouteRequest {
        start_lat: 28.6304,
        start_lng: 77.2177, // Connaught Place
        end_lat: 28.5700,
        end_lng: 77.3200, // Noida Sector 18
        preference: Some("TIME".to_owned()),
        vehicle_type: Some("CAR".to_owned()),
    };
    let variants = planner.plan_route(&request, &mut FleetRng::from_entropy());
    println!("── Route variants ──────────────────────────────────");
    println!("{}", serde_json::to_string_pretty(&variants)?);

    // ── Load balancing ────────────────────────────────────────────────────
    let fleet = seed_fleet();
    let tasks = demo_tasks();
    let assignments = optimize_load(&fleet, &tasks);
    println!("── Load assignments ────────────────────────────────");
    println!("{}", serde_json::to_string_pretty(&assignments)?);

    // ── Telemetry simulation, stepped deterministically ───────────────────
    let store = MemoryVehicleStore::new(fleet);
    let mut sim = TelemetrySimulator::new(store, PrintSink, FleetRng::new(2024));
    sim.run_ticks(6, &SystemClock, &mut ProgressPrinter);

    let (store, _) = sim.into_parts();
    println!("── Fleet after 6 passes ────────────────────────────");
    for v in store.vehicles() {
        println!(
            "{:<24} {:<13} battery {:>6.2}%  speed {:>6.2} km/h  odo {:.3} km",
            v.name,
            v.status.to_string(),
            v.battery_pct,
            v.speed_kmh,
            v.total_distance_km,
        );
    }
    println!("health: {:?}", fleet_health(store.vehicles()));

    // ── The same simulator as a background job ────────────────────────────
    let sim = TelemetrySimulator::new(store, PrintSink, FleetRng::from_entropy());
    let mut handle = Ticker::spawn(sim, Duration::from_millis(500), SystemClock);
    std::thread::sleep(Duration::from_millis(1_600));
    handle.stop();

    Ok(())
}

// ── Observers & sinks ────────────────────────────────────────────────────────

/// Prints one line per completed pass.
struct ProgressPrinter;

impl TickObserver for ProgressPrinter {
    fn on_tick_end(&mut self, tick: Tick, report: &TickReport) {
        println!(
            "{tick}: {} vehicles updated, {} failed, {} alerts",
            report.processed, report.failed, report.alerts
        );
    }
}

/// Alert sink that forwards to the log.
struct PrintSink;

impl AlertSink for PrintSink {
    fn record(&mut self, alert: Alert) {
        tracing::warn!(
            vehicle = %alert.vehicle_id,
            kind = %alert.kind,
            severity = %alert.severity,
            "{}",
            alert.message
        );
    }
}

// ── Seed data ────────────────────────────────────────────────────────────────

/// A small mixed fleet, mid-trip and mid-wear, so the simulator has state
/// transitions to chew on within a few passes.
fn seed_fleet() -> Vec<Vehicle> {
    let mut v1 = Vehicle::new(
        VehicleId(1),
        "Tesla Model 3 - Alpha",
        VehicleKind::Car,
        Fuel::Electric,
        GeoPoint::new(28.6304, 77.2177),
    );
    v1.status = VehicleStatus::InUse;
    v1.battery_pct = 85.0;
    v1.distance_since_service_km = 998.5;

    let mut v2 = Vehicle::new(
        VehicleId(2),
        "Tata Ace - Logistics",
        VehicleKind::Truck,
        Fuel::Diesel,
        GeoPoint::new(28.6129, 77.2295),
    );
    v2.status = VehicleStatus::InUse;
    v2.battery_pct = 4.0;

    let mut v3 = Vehicle::new(
        VehicleId(3),
        "Honda City - Prime",
        VehicleKind::Car,
        Fuel::Petrol,
        GeoPoint::new(28.5880, 77.2580),
    );
    v3.distance_since_service_km = 200.0;

    let mut v4 = Vehicle::new(
        VehicleId(4),
        "Ola S1 Pro",
        VehicleKind::Scooter,
        Fuel::Electric,
        GeoPoint::new(28.5700, 77.3200),
    );
    v4.battery_pct = 92.0;
    v4.distance_since_service_km = 100.0;

    let v5 = Vehicle::new(
        VehicleId(5),
        "Mahindra Supro - Cargo",
        VehicleKind::Van,
        Fuel::Diesel,
        GeoPoint::new(28.6000, 77.2900),
    );

    vec![v1, v2, v3, v4, v5]
}

fn demo_tasks() -> Vec<DeliveryTask> {
    let spots = [
        (28.6127, 77.2773, 120.0, TaskPriority::High),
        (28.6304, 77.2772, 45.0, TaskPriority::Normal),
        (28.5492, 77.2526, 310.0, TaskPriority::Normal),
        (28.5898, 77.3101, 80.0, TaskPriority::High),
        (28.5670, 77.3300, 230.0, TaskPriority::Normal),
        (28.6200, 77.3700, 15.0, TaskPriority::Normal),
        (28.6000, 77.2900, 190.0, TaskPriority::Normal),
    ];
    spots
        .iter()
        .enumerate()
        .map(|(i, &(lat, lng, weight_kg, priority))| DeliveryTask {
            id: format!("task-{}", i + 1),
            lat,
            lng,
            weight_kg,
            priority,
        })
        .collect()
}
