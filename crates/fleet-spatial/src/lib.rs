//! `fleet-spatial` — landmark graph, nearest-node lookup, shortest paths.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`graph`]    | `LandmarkGraph` (CSR + R-tree), `LandmarkGraphBuilder`  |
//! | [`dijkstra`] | `LandmarkGraph::shortest_path`                          |
//! | [`city`]     | `city_graph()` — the seeded default landmark set        |
//!
//! # Error model
//!
//! This crate deliberately has no error type.  "No usable graph route" is an
//! expected control-flow branch, signalled as `None` and consumed by the
//! route planner's fallback, never an `Err`.

pub mod city;
pub mod dijkstra;
pub mod graph;


pub use city::city_graph;
pub use graph::{LandmarkGraph, LandmarkGraphBuilder};
