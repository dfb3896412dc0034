// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// A command represents user intent as data only.
///
/// Commands are the only way to request booking state changes. They are
/// scoped to the single event whose [`EventState`](crate::EventState)
/// snapshot they are applied against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Request a seat at the event.
    ///
    /// The admission decision (Confirmed vs. Waitlisted) is made from
    /// the capacity observed in the snapshot at apply time.
    RequestBooking {
        /// The user requesting the seat.
        user_id: i64,
    },
    /// Cancel an existing booking.
    ///
    /// If the booking held a confirmed seat, the oldest waitlisted
    /// booking for the event is promoted within the same transition.
    CancelBooking {
        /// The booking to cancel.
        booking_id: i64,
    },
}
