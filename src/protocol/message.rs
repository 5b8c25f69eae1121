use crate::core::{Device, MAX_LIGHT_VALUE};

/// One swarm announcement: leadership flag, light reading, rank, reset flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Beacon {
    /// Whether the sender currently believes it is the master
    pub is_master: bool,
    /// The sender's light sensor reading
    pub light_value: u16,
    /// The sender's join order
    pub join_order: u16,
    /// Reset flag; a set flag routes the record to the reset path
    pub reset: bool,
}

impl Beacon {
    /// Creates a regular announcement record
    pub fn announce(is_master: bool, light_value: u16, join_order: u16) -> Self {
        Beacon {
            is_master,
            light_value: light_value.min(MAX_LIGHT_VALUE),
            join_order,
            reset: false,
        }
    }

    /// Creates a reset record carrying the sentinel join order
    pub fn reset() -> Self {
        Beacon {
            is_master: false,
            light_value: 0,
            join_order: super::RESET_ORDER,
            reset: true,
        }
    }

    /// Materializes the device entry a received record describes
    pub fn observed_from(&self, identity: impl Into<String>, now_ms: u64) -> Device {
        Device {
            identity: identity.into(),
            last_seen: now_ms,
            is_master: self.is_master,
            light_value: self.light_value,
            join_order: self.join_order,
        }
    }
}
