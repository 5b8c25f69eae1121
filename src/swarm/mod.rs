//! The coordination engine
//!
//! This module drives a node through its life in the swarm: passive discovery,
//! rank assignment, TDMA-scheduled beaconing, leader election, timeout
//! eviction, and staggered restart handling. Membership, leadership, and
//! scheduling are independently-converging local approximations; transient
//! disagreement between nodes is expected and tolerated.

mod coordinator;
mod election;
mod schedule;

pub use self::coordinator::{Coordinator, Step};
pub use self::election::elect;
pub use self::schedule::{SlotState, TdmaSchedule};
