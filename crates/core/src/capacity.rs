// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::EventState;
use seatline_domain::BookingStatus;

/// The capacity situation of one event at a single logical instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityReport {
    /// The number of currently confirmed bookings.
    pub confirmed_count: usize,
    /// The event's seat capacity.
    pub capacity: u32,
    /// Whether the event has no confirmed seats left.
    pub is_full: bool,
}

/// Computes the capacity situation for an event snapshot.
///
/// Pure query, no mutation. The count and the capacity come from the
/// same snapshot, so callers holding the event's critical section read
/// both as of the same logical instant.
#[must_use]
pub fn evaluate(state: &EventState) -> CapacityReport {
    let confirmed_count: usize = state
        .bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Confirmed)
        .count();
    let capacity: u32 = state.event.capacity.value();
    let is_full: bool = confirmed_count >= usize::try_from(capacity).unwrap_or(usize::MAX);

    CapacityReport {
        confirmed_count,
        capacity,
        is_full,
    }
}
