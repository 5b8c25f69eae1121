use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

/// One swarm member as locally observed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    /// Unique address string identifying the node, stable per session
    pub identity: String,
    /// Monotonic timestamp of the most recent observation, in milliseconds
    pub last_seen: u64,
    /// Locally believed leadership flag for this identity
    pub is_master: bool,
    /// Light sensor reading, 0-4095, the election score
    pub light_value: u16,
    /// Rank assigned once per identity, used as the TDMA slot index
    pub join_order: u16,
}

impl Device {
    /// Returns whether this device was seen within `window_ms` of `now_ms`
    pub fn is_active(&self, now_ms: u64, window_ms: u64) -> bool {
        now_ms.saturating_sub(self.last_seen) < window_ms
    }
}

/// Configuration for one swarm node
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SwarmConfig {
    /// Multicast group address the swarm announces on
    pub multicast_group: Ipv4Addr,
    /// UDP port for swarm traffic
    pub port: u16,
    /// Maximum number of devices tracked in the membership table
    pub capacity: usize,
    /// TDMA slot duration in milliseconds
    pub slot_ms: u64,
    /// Transmit window at the start of a slot, in milliseconds
    pub tx_window_ms: u64,
    /// Recency threshold for counting a device as active, in milliseconds
    pub activity_window_ms: u64,
    /// Age beyond which a device is removed, in milliseconds
    pub eviction_timeout_ms: u64,
    /// Passive listening period before claiming a rank, in milliseconds
    pub discovery_window_ms: u64,
    /// Interval between leader election passes, in milliseconds
    pub election_interval_ms: u64,
    /// Interval between eviction sweeps, in milliseconds
    pub sweep_interval_ms: u64,
    /// Interval between membership status dumps, in milliseconds
    pub status_interval_ms: u64,
    /// Per-rank restart delay after a reset, in milliseconds
    pub restart_stagger_ms: u64,
    /// Control-loop poll cadence in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        SwarmConfig {
            multicast_group: super::MULTICAST_GROUP.parse().expect("valid group address"),
            port: super::DEFAULT_PORT,
            capacity: super::TABLE_CAPACITY,
            slot_ms: super::SLOT_MS,
            tx_window_ms: super::TX_WINDOW_MS,
            activity_window_ms: super::ACTIVITY_WINDOW_MS,
            eviction_timeout_ms: super::EVICTION_TIMEOUT_MS,
            discovery_window_ms: super::DISCOVERY_WINDOW_MS,
            election_interval_ms: super::ELECTION_INTERVAL_MS,
            sweep_interval_ms: super::SWEEP_INTERVAL_MS,
            status_interval_ms: super::STATUS_INTERVAL_MS,
            restart_stagger_ms: super::RESTART_STAGGER_MS,
            poll_interval_ms: super::POLL_INTERVAL_MS,
        }
    }
}
