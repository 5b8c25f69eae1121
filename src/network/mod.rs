//! Transport over the shared broadcast medium
//!
//! This module defines the datagram channel the coordinator speaks through:
//! broadcast-send to the whole group and non-blocking receive with sender
//! identity. The medium is unreliable: a lost datagram is superseded by the
//! next cycle's broadcast, so neither direction retries.

mod multicast;

pub use self::multicast::MulticastTransport;

use bytes::BytesMut;

use crate::core::Result;

/// One received datagram with its sender's identity
#[derive(Debug, Clone)]
pub struct Datagram {
    /// Raw record bytes
    pub payload: BytesMut,
    /// Address string identifying the sender
    pub sender: String,
}

/// Unreliable broadcast channel shared by the swarm
pub trait Transport {
    /// Broadcasts a payload to every node in the group
    fn broadcast(&mut self, payload: &[u8]) -> Result<()>;

    /// Returns the next pending datagram, or `None` when the medium is idle
    fn poll_recv(&mut self) -> Result<Option<Datagram>>;
}
