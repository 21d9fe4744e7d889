//! Alert payloads emitted by the telemetry simulator.

use fleet_core::VehicleId;

/// How urgent an alert is.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlertSeverity {
    Critical,
    High,
    Medium,
}

impl AlertSeverity {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertSeverity::Critical => "Critical",
            AlertSeverity::High     => "High",
            AlertSeverity::Medium   => "Medium",
        }
    }
}

impl std::fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The condition an alert reports.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlertKind {
    LowBattery,
    Overspeeding,
    MaintenanceRequired,
}

impl AlertKind {
    /// Dashboard label for this condition.
    pub fn as_str(self) -> &'static str {
        match self {
            AlertKind::LowBattery          => "Low Battery",
            AlertKind::Overspeeding        => "Overspeeding",
            AlertKind::MaintenanceRequired => "Maintenance Required",
        }
    }
}

impl std::fmt::Display for AlertKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One alert, created by the simulator and handed to the external sink.
/// Fire-and-forget from the simulator's perspective.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alert {
    pub vehicle_id: VehicleId,
    pub kind: AlertKind,
    pub message: String,
    pub severity: AlertSeverity,
}
