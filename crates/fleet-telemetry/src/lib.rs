//! `fleet-telemetry` — periodic vehicle state simulation.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`alert`]    | `Alert`, `AlertKind`, `AlertSeverity`                    |
//! | [`store`]    | `VehicleStore` / `AlertSink` traits, in-memory impls     |
//! | [`sim`]      | `TelemetrySimulator` — the per-tick state machine        |
//! | [`observer`] | `TickObserver` progress hooks                            |
//! | [`ticker`]   | `Ticker` — the background periodic runner                |
//! | [`health`]   | Fixed-heuristic fleet health scoring                     |
//! | [`error`]    | `TelemetryError`, `TelemetryResult<T>`                   |
//!
//! # Failure containment
//!
//! Nothing in this crate is a user-facing fatal error.  A failure saving one
//! vehicle is logged and the rest of the pass continues; a failure of a whole
//! pass is logged and the next scheduled tick still fires.  The simulator is
//! never permanently stopped by a single bad tick.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to alert and report types. |

pub mod alert;
pub mod error;
pub mod health;
pub mod observer;
pub mod sim;
pub mod store;
pub mod ticker;


pub use alert::{Alert, AlertKind, AlertSeverity};
pub use error::{TelemetryError, TelemetryResult};
pub use health::{fleet_health, health_score, FleetHealth, HealthBand};
pub use observer::{NoopObserver, TickObserver};
pub use sim::{TelemetrySimulator, TickReport, TICK_PERIOD_SECS};
pub use store::{AlertSink, MemoryAlertSink, MemoryVehicleStore, StoreError, VehicleStore};
pub use ticker::{Ticker, TickerHandle};
