//! Delivery task DTOs.

use fleet_core::GeoPoint;
use serde::{Deserialize, Serialize};

/// Urgency of a delivery task.
///
/// Accepted on the wire and carried through, but the current balancing
/// policy does not order by it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskPriority {
    High,
    #[default]
    Normal,
}

/// A delivery task as received from the HTTP layer.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryTask {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    /// Parcel weight in kilograms.
    pub weight_kg: f64,
    #[serde(default)]
    pub priority: TaskPriority,
}

impl DeliveryTask {
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

/// The load optimization request body.
#[derive(Clone, Debug, Deserialize)]
pub struct LoadOptimizationRequest {
    pub tasks: Vec<DeliveryTask>,
}
