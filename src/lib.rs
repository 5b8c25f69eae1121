//! Luxmesh: a self-organizing TDMA beacon swarm for light-sensing nodes
//!
//! This library implements a decentralized coordination protocol for a small swarm of
//! identical nodes sharing one multicast broadcast domain. Nodes discover each other,
//! assign themselves stable ranks, elect a leader from their light-sensor readings, and
//! schedule collision-avoiding periodic broadcasts purely from local knowledge.
pub mod core;

pub mod membership;
pub mod network;
pub mod protocol;
pub mod swarm;
pub mod time;

// Re-export commonly used items
pub use crate::core::{Error, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
