//! Device status — the power state reported by a device.

use serde::{Deserialize, Serialize};

/// Power state of a device.
///
/// Every device starts [`Online`](Self::Online): reachable, but never
/// switched on. Only [`On`](Self::On) satisfies the controller gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    #[default]
    Online,
    On,
    Off,
}

impl DeviceStatus {
    /// Whether the status is exactly [`On`](Self::On).
    #[must_use]
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl std::fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Online => f.write_str("online"),
            Self::On => f.write_str("on"),
            Self::Off => f.write_str("off"),
        }
    }
}
