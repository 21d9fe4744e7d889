//! `fleet-core` — foundational types for the fleet management core.
//!
//! This crate is a dependency of every other `fleet-*` crate.  It
//! intentionally has no `fleet-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                             |
//! |-------------|------------------------------------------------------|
//! | [`ids`]     | `VehicleId`, `NodeId`, `EdgeId`                      |
//! | [`geo`]     | `GeoPoint`, haversine distance                       |
//! | [`time`]    | `Tick`, `Clock`, `SystemClock`                       |
//! | [`rng`]     | `FleetRng` (one instance per call path)              |
//! | [`vehicle`] | `Vehicle`, `VehicleStatus`, `VehicleKind`, `Fuel`    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;
pub mod vehicle;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::GeoPoint;
pub use ids::{EdgeId, NodeId, VehicleId};
pub use rng::FleetRng;
pub use time::{Clock, SystemClock, Tick};
pub use vehicle::{Fuel, Vehicle, VehicleKind, VehicleStatus};
