//! `fleet-routing` — route planning and path synthesis.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`synth`]   | `curved_path` — jittered multi-point path generation      |
//! | [`variant`] | `RouteVariant`, `RouteKind`, `TrafficLevel`, request DTO  |
//! | [`planner`] | `RoutePlanner` — three variants per request               |
//!
//! All computation here is synchronous, stateless, and per-request; variants
//! are transient response payloads, never persisted.

pub mod planner;
pub mod synth;
pub mod variant;

#[cfg(test)]
mod tests;

pub use planner::RoutePlanner;
pub use synth::curved_path;
pub use variant::{RouteKind, RouteRequest, RouteVariant, TrafficLevel};
