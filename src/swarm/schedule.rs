/// Where a node stands relative to its TDMA transmit window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    /// Inside the transmit window at the start of this node's slot
    InWindow,
    /// Inside the cycle but outside this node's window
    Outside,
    /// This node's slot lies beyond the current cycle; the node stays silent
    /// until the active set grows back past its rank
    OutOfCycle,
}

/// TDMA slot arithmetic
///
/// The cycle repeats every `active_count * slot_ms` milliseconds and each node
/// owns the slot indexed by its join order. Slot allocation derives purely
/// from local knowledge of the peer count and own rank; nodes with diverging
/// peer views can overlap, which the protocol tolerates as transient.
#[derive(Debug, Clone, Copy)]
pub struct TdmaSchedule {
    slot_ms: u64,
    tx_window_ms: u64,
}

impl TdmaSchedule {
    /// Creates a schedule with the given slot and window lengths
    pub fn new(slot_ms: u64, tx_window_ms: u64) -> Self {
        TdmaSchedule {
            slot_ms,
            tx_window_ms,
        }
    }

    /// Cycle length for `active_count` participating nodes, in milliseconds
    pub fn cycle_length(&self, active_count: usize) -> u64 {
        active_count as u64 * self.slot_ms
    }

    /// Classifies a moment for a node of rank `join_order` among
    /// `active_count` active peers
    ///
    /// `elapsed_ms` is the time since the node's cycle origin. A rank whose
    /// slot starts at or past the end of the cycle is `OutOfCycle`: it never
    /// transmits rather than wrapping into someone else's slot.
    pub fn classify(&self, elapsed_ms: u64, active_count: usize, join_order: u16) -> SlotState {
        let cycle = self.cycle_length(active_count);
        if cycle == 0 {
            return SlotState::OutOfCycle;
        }

        let slot_start = join_order as u64 * self.slot_ms;
        if slot_start >= cycle {
            return SlotState::OutOfCycle;
        }

        let time_in_cycle = elapsed_ms % cycle;
        if time_in_cycle >= slot_start && time_in_cycle < slot_start + self.tx_window_ms {
            SlotState::InWindow
        } else {
            SlotState::Outside
        }
    }
}
