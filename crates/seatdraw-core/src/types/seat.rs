//! Seat model shared by the generator, the draw engine, and the cache.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a seat within one pool.
///
/// Ids are assigned in generation order starting at 1 and are only
/// meaningful together with the pool that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatId(pub u32);

impl SeatId {
    /// Return the raw numeric id.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SeatId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Which side of the table a seat belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// The upper side; receives the extra seat when the count is odd.
    Top,
    /// The lower side.
    Bottom,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top => write!(f, "top"),
            Self::Bottom => write!(f, "bottom"),
        }
    }
}

/// A single allocatable seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    /// Stable identity within the pool.
    pub id: SeatId,
    /// Table side.
    pub side: Side,
    /// Zero-based layout position within `side`.
    pub index_on_side: u32,
    /// Whether the seat has been drawn.
    pub assigned: bool,
}

impl Seat {
    /// Create an unassigned seat.
    pub fn new(id: u32, side: Side, index_on_side: u32) -> Self {
        Self {
            id: SeatId(id),
            side,
            index_on_side,
            assigned: false,
        }
    }

    /// Whether the seat can still be drawn.
    pub fn is_free(&self) -> bool {
        !self.assigned
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} ({} {})", self.id, self.side, self.index_on_side + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_serializes_camel_case() {
        let seat = Seat::new(3, Side::Bottom, 1);
        let json = serde_json::to_value(&seat).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 3, "side": "bottom", "indexOnSide": 1, "assigned": false})
        );
    }

    #[test]
    fn test_seat_display() {
        let seat = Seat::new(1, Side::Top, 0);
        assert_eq!(seat.to_string(), "#1 (top 1)");
        assert!(seat.is_free());
    }
}
