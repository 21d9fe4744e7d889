//! The route planner: one geometric baseline, three traffic profiles.
//!
//! A single baseline quantity (great-circle distance between the endpoints)
//! is projected into three "what-if" profiles rather than simulating real
//! traffic.  Given the baseline and the injected RNG, the numbers in every
//! variant are fully deterministic.

use std::sync::Arc;

use fleet_core::{FleetRng, GeoPoint};
use fleet_spatial::LandmarkGraph;

use crate::synth::curved_path;
use crate::variant::{RouteKind, RouteRequest, RouteVariant, TrafficLevel};

/// Stateless route planner over a shared, read-only landmark graph.
///
/// Safe to call concurrently from many request handlers; each call brings
/// its own [`FleetRng`].
pub struct RoutePlanner {
    graph: Arc<LandmarkGraph>,
}

impl RoutePlanner {
    pub fn new(graph: Arc<LandmarkGraph>) -> Self {
        Self { graph }
    }

    /// Produce the three route variants for a request, in the fixed order
    /// `[Fastest, Shortest, Eco]`.
    pub fn plan_route(&self, request: &RouteRequest, rng: &mut FleetRng) -> Vec<RouteVariant> {
        let start = request.start();
        let end   = request.end();

        let baseline_km = start.distance_km(end);

        // Fastest rides the landmark graph; a missing or degenerate graph
        // result (fewer than 3 points means no real intermediate routing)
        // falls back to a synthesized path.
        let graph_path = match self.graph.shortest_path(start, end) {
            Some(p) if p.len() >= 3 => p,
            _ => {
                tracing::debug!(%start, %end, "no graph route; synthesizing fastest path");
                curved_path(start, end, rng)
            }
        };

        vec![
            fastest_variant(baseline_km, graph_path),
            profiled_variant(
                RouteKind::Shortest,
                baseline_km * 1.05,
                TrafficLevel::Heavy,
                curved_path(start, end, rng),
            ),
            profiled_variant(
                RouteKind::Eco,
                baseline_km * 1.15,
                TrafficLevel::Moderate,
                curved_path(start, end, rng),
            ),
        ]
    }
}

/// The Fastest profile: graph-backed path, light traffic, and an ETA model
/// keyed to the raw baseline rather than an assumed speed.
fn fastest_variant(baseline_km: f64, path: Vec<GeoPoint>) -> RouteVariant {
    let kind = RouteKind::Fastest;
    let eta_minutes = (baseline_km * 1.5).round() as i64;
    RouteVariant {
        id: kind.id().to_owned(),
        kind,
        eta: format!("{eta_minutes} mins"),
        distance: format!("{:.1} km", baseline_km * 1.2),
        traffic_level: TrafficLevel::Low,
        energy_usage: baseline_km * 0.1,
        path,
        color: kind.color().to_owned(),
    }
}

/// Shortest/Eco profiles: ETA from the profile's assumed average speed,
/// floored at 5 minutes.
fn profiled_variant(
    kind: RouteKind,
    distance_km: f64,
    traffic: TrafficLevel,
    path: Vec<GeoPoint>,
) -> RouteVariant {
    let eta_minutes = ((distance_km / traffic.assumed_speed_kmh()) * 60.0)
        .round()
        .max(5.0) as i64;
    RouteVariant {
        id: kind.id().to_owned(),
        kind,
        eta: format!("{eta_minutes} mins"),
        distance: format!("{distance_km:.1} km"),
        traffic_level: traffic,
        energy_usage: distance_km * 0.1,
        path,
        color: kind.color().to_owned(),
    }
}
