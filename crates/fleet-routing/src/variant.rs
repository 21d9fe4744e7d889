//! Route variant payloads and the planning request DTO.

use fleet_core::GeoPoint;
use serde::{Deserialize, Serialize};

// ── RouteKind ────────────────────────────────────────────────────────────────

/// Which of the three candidate profiles a variant represents.
///
/// Every planning request yields all three, always in the order
/// `[Fastest, Shortest, Eco]`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum RouteKind {
    #[serde(rename = "Fastest (AI-Graph)")]
    Fastest,
    #[serde(rename = "Shortest Path")]
    Shortest,
    #[serde(rename = "Eco-Friendly")]
    Eco,
}

impl RouteKind {
    /// Stable variant id carried in the response payload.
    pub fn id(self) -> &'static str {
        match self {
            RouteKind::Fastest  => "rt_1",
            RouteKind::Shortest => "rt_2",
            RouteKind::Eco      => "rt_3",
        }
    }

    /// Display label shown by the map UI.
    pub fn label(self) -> &'static str {
        match self {
            RouteKind::Fastest  => "Fastest (AI-Graph)",
            RouteKind::Shortest => "Shortest Path",
            RouteKind::Eco      => "Eco-Friendly",
        }
    }

    /// Hex color the map UI draws this variant in.
    pub fn color(self) -> &'static str {
        match self {
            RouteKind::Fastest  => "#3b82f6",
            RouteKind::Shortest => "#10b981",
            RouteKind::Eco      => "#22c55e",
        }
    }
}

impl std::fmt::Display for RouteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ── TrafficLevel ─────────────────────────────────────────────────────────────

/// Assumed congestion profile of a variant.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum TrafficLevel {
    Low,
    Moderate,
    Heavy,
}

impl TrafficLevel {
    /// Average speed assumed under this congestion profile, km/h.
    pub fn assumed_speed_kmh(self) -> f64 {
        match self {
            TrafficLevel::Low      => 60.0,
            TrafficLevel::Moderate => 40.0,
            TrafficLevel::Heavy    => 25.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TrafficLevel::Low      => "Low",
            TrafficLevel::Moderate => "Moderate",
            TrafficLevel::Heavy    => "Heavy",
        }
    }
}

impl std::fmt::Display for TrafficLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── RouteVariant ─────────────────────────────────────────────────────────────

/// One candidate route in a planning response.
///
/// Produced fresh per request and handed to the HTTP layer for
/// serialization; never persisted.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteVariant {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RouteKind,
    /// Display ETA, e.g. `"28 mins"`.
    pub eta: String,
    /// Display distance, e.g. `"10.3 km"`.
    pub distance: String,
    pub traffic_level: TrafficLevel,
    /// Dimension-agnostic placeholder figure (kWh or litres).
    pub energy_usage: f64,
    /// Polyline from the request's start point to its end point.
    pub path: Vec<GeoPoint>,
    /// Hex color for the map UI.
    pub color: String,
}

// ── RouteRequest ─────────────────────────────────────────────────────────────

/// A route planning request as received from the HTTP layer.
///
/// `preference` and `vehicle_type` are accepted for forward compatibility
/// but do not yet influence the produced variants.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    pub start_lat: f64,
    pub start_lng: f64,
    pub end_lat: f64,
    pub end_lng: f64,
    /// "TIME", "DISTANCE", or "ENERGY".
    #[serde(default)]
    pub preference: Option<String>,
    /// "CAR", "TRUCK", or "BIKE".
    #[serde(default)]
    pub vehicle_type: Option<String>,
}

impl RouteRequest {
    pub fn start(&self) -> GeoPoint {
        GeoPoint::new(self.start_lat, self.start_lng)
    }

    pub fn end(&self) -> GeoPoint {
        GeoPoint::new(self.end_lat, self.end_lng)
    }
}
