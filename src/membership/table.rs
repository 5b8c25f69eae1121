use tracing::debug;

use crate::core::{Device, TABLE_CAPACITY};

/// Outcome of an upsert against the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// A new entry was created
    Inserted,
    /// An existing entry was overwritten
    Updated,
    /// The table was full and the new identity was ignored
    Dropped,
}

/// Bounded set of known devices keyed by identity
///
/// Stored as a flat list; lookups are linear scans, which is fine at the
/// capacity this protocol runs at. Removal compacts in place and keeps the
/// remaining entries' relative order.
#[derive(Debug)]
pub struct MembershipTable {
    devices: Vec<Device>,
    capacity: usize,
}

impl Default for MembershipTable {
    fn default() -> Self {
        Self::new()
    }
}

impl MembershipTable {
    /// Creates a table with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(TABLE_CAPACITY)
    }

    /// Creates a table bounded at `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        MembershipTable {
            devices: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Inserts or refreshes a device
    ///
    /// An existing entry is overwritten wholesale. A new identity is inserted
    /// only while the table is under capacity; past that it is silently
    /// ignored rather than treated as an error.
    pub fn upsert(&mut self, device: Device) -> Upsert {
        if let Some(existing) = self
            .devices
            .iter_mut()
            .find(|d| d.identity == device.identity)
        {
            *existing = device;
            return Upsert::Updated;
        }

        if self.devices.len() < self.capacity {
            self.devices.push(device);
            Upsert::Inserted
        } else {
            debug!(identity = %device.identity, "table full, ignoring new device");
            Upsert::Dropped
        }
    }

    /// Looks up a device by identity
    pub fn get(&self, identity: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.identity == identity)
    }

    /// Removes a device by identity, preserving the order of the rest
    pub fn remove(&mut self, identity: &str) -> Option<Device> {
        let index = self.devices.iter().position(|d| d.identity == identity)?;
        Some(self.devices.remove(index))
    }

    /// Number of tracked devices
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Returns whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Iterates over all tracked devices
    pub fn iter(&self) -> impl Iterator<Item = &Device> {
        self.devices.iter()
    }

    /// Counts devices seen within `window_ms` of `now_ms`
    pub fn active_count(&self, now_ms: u64, window_ms: u64) -> usize {
        self.devices
            .iter()
            .filter(|d| d.is_active(now_ms, window_ms))
            .count()
    }

    /// Highest join order across all tracked devices
    pub fn max_join_order(&self) -> Option<u16> {
        self.devices.iter().map(|d| d.join_order).max()
    }

    /// Sets the leadership flag on every entry: on for `leader`, off elsewhere
    pub fn mark_leader(&mut self, leader: Option<&str>) {
        for device in &mut self.devices {
            device.is_master = Some(device.identity.as_str()) == leader;
        }
    }

    /// Removes every device other than `keep` whose age exceeds `timeout_ms`
    ///
    /// Eviction is immediate and unconditional; the removed devices are
    /// returned so the caller can report them.
    pub fn evict_expired(&mut self, now_ms: u64, timeout_ms: u64, keep: &str) -> Vec<Device> {
        let mut evicted = Vec::new();
        self.devices.retain(|d| {
            if d.identity == keep || now_ms.saturating_sub(d.last_seen) <= timeout_ms {
                true
            } else {
                evicted.push(d.clone());
                false
            }
        });
        evicted
    }
}
