//! Cache keys for persisted board state.
//!
//! The keys are fixed so a later run finds what an earlier run wrote.

/// Prefix applied to all SeatDraw cache keys.
const PREFIX: &str = "seat-draw";

/// Key holding the last configured seat count.
pub fn seat_count() -> String {
    format!("{PREFIX}:seat-count")
}

/// Key holding the last seat list.
pub fn seats() -> String {
    format!("{PREFIX}:seats")
}
