//! Seat pool generation.

use seatdraw_core::types::{Seat, Side};

/// Build the seats for `count`, all unassigned.
///
/// The top side receives `ceil(count / 2)` seats and the bottom side the
/// rest. Ids run from 1 in generation order: every top seat first, then
/// every bottom seat.
pub fn generate(count: u32) -> Vec<Seat> {
    let top_count = count.div_ceil(2);
    let bottom_count = count - top_count;

    let top = (0..top_count).map(|index| (Side::Top, index));
    let bottom = (0..bottom_count).map(|index| (Side::Bottom, index));

    top.chain(bottom)
        .zip(1u32..)
        .map(|((side, index), id)| Seat::new(id, side, index))
        .collect()
}
