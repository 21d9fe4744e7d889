//! Telemetry-subsystem error type.

use thiserror::Error;

use crate::store::StoreError;

/// Errors produced by a telemetry pass.
///
/// Per-vehicle save failures never surface here; they are contained inside
/// the pass.  Only a failure that prevents the pass as a whole (loading the
/// vehicle list) is reported, and the ticker contains even that.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("vehicle store error: {0}")]
    Store(StoreError),
}

pub type TelemetryResult<T> = Result<T, TelemetryError>;
