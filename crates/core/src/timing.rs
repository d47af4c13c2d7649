//! Drop timing - how often gravity pulls the active piece down
//!
//! The engine owns no timer. A driver passes its clock reading (milliseconds
//! on any monotonic scale) and these functions decide whether a gravity step
//! is due.

use crate::types::DROP_INTERVALS_MS;

/// Gravity interval for a level, clamped to the last table entry
pub fn drop_interval_ms(level: u32) -> u64 {
    let last = DROP_INTERVALS_MS.len() - 1;
    DROP_INTERVALS_MS[(level as usize).min(last)]
}

/// True once strictly more than one drop interval has passed since `last_ms`.
///
/// A clock that goes backwards never triggers a step.
pub fn should_gravity_tick(last_ms: u64, level: u32, now_ms: u64) -> bool {
    now_ms.saturating_sub(last_ms) > drop_interval_ms(level)
}
