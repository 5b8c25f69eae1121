//! Membership tracking for the swarm
//!
//! This module maintains the bounded table of known devices that scheduling,
//! election, and eviction all read from.

mod table;

pub use self::table::{MembershipTable, Upsert};
