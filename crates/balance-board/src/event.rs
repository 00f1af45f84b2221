//! Signals raised for the external reporting layer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardEvent {
    /// Handshake decoded; calibration is available and sensor reports are accepted.
    AccessoryInserted,
    /// A connected board was reset after the transport reported a disconnect.
    AccessoryRemoved,
}
