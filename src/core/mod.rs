//! Core types and constants for the swarm protocol
//!
//! This module contains the fundamental building blocks used throughout the library.

pub mod error;
pub mod types;

pub use self::error::{Error, Result};
pub use self::types::{Device, SwarmConfig};

/// Multicast group the swarm announces on
pub const MULTICAST_GROUP: &str = "239.1.1.1";

/// UDP port for swarm traffic
pub const DEFAULT_PORT: u16 = 5000;

/// Maximum datagram size in bytes
pub const MAX_DATAGRAM_SIZE: usize = 1024;

/// Multicast TTL for outbound datagrams
pub const MULTICAST_TTL: u32 = 2;

/// Upper bound of the light sensor range
pub const MAX_LIGHT_VALUE: u16 = 4095;

/// Maximum number of devices tracked in the membership table
pub const TABLE_CAPACITY: usize = 10;

/// TDMA slot duration in milliseconds
pub const SLOT_MS: u64 = 100;

/// Transmit window at the start of a slot, in milliseconds
pub const TX_WINDOW_MS: u64 = 5;

/// Recency threshold for counting a device as active, in milliseconds
pub const ACTIVITY_WINDOW_MS: u64 = 3000;

/// Age beyond which a device is removed from the table, in milliseconds
pub const EVICTION_TIMEOUT_MS: u64 = 5000;

/// Passive listening period before claiming a rank, in milliseconds
pub const DISCOVERY_WINDOW_MS: u64 = 3000;

/// Interval between leader election passes, in milliseconds
pub const ELECTION_INTERVAL_MS: u64 = 1000;

/// Interval between eviction sweeps, in milliseconds
pub const SWEEP_INTERVAL_MS: u64 = 1000;

/// Interval between membership status dumps, in milliseconds
pub const STATUS_INTERVAL_MS: u64 = 5000;

/// Per-rank restart delay after a reset, in milliseconds
pub const RESTART_STAGGER_MS: u64 = 5000;

/// Control-loop poll cadence in milliseconds
pub const POLL_INTERVAL_MS: u64 = 10;
