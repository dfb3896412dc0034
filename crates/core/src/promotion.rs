// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use seatline_domain::{Booking, BookingStatus};

/// Selects the waitlisted booking next in line for a freed seat.
///
/// The waitlist is ordered by creation timestamp, oldest first, with
/// the persisted booking identifier as the stable tie-breaker so the
/// order is total. Returns `None` when the waitlist is empty, which is
/// not an error: canceling the last confirmed seat of an event with no
/// waitlist simply frees the seat.
#[must_use]
pub fn select_oldest_waitlisted(bookings: &[Booking]) -> Option<&Booking> {
    bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Waitlisted)
        .min_by_key(|b| (b.created_at, b.booking_id))
}
