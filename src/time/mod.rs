//! Monotonic time sources
//!
//! Every timing decision in the protocol compares millisecond readings from an
//! injected clock, so tests can drive time deterministically instead of
//! depending on wall-clock scheduling.

mod clock;

pub use self::clock::{Clock, ManualClock, MonotonicClock};
