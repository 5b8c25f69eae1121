//! Wire protocol for swarm announcements
//!
//! This module defines the beacon record exchanged between nodes and its
//! delimited-text codec. Each datagram carries exactly one record.

pub mod codec;
pub mod message;

pub use self::codec::BeaconCodec;
pub use self::message::Beacon;

// Constants
/// Field delimiter in the wire record
pub const FIELD_DELIMITER: char = ',';

/// Number of fields in a wire record
pub const FIELD_COUNT: usize = 4;

/// Join-order sentinel carried by reset records
pub const RESET_ORDER: u16 = 255;
