// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Deterministic side-effect producers.
//!
//! Both functions map a transition to exactly one record. They are
//! invoked by the persistence layer inside the atomic commit of a
//! successful transition, after booking identifiers are assigned, and
//! never for a rejected one.

use seatline_audit::{BookingAction, BookingLog};
use seatline_domain::{Booking, Notification, NotificationKind};

/// Produces the notification record for a booking transition.
///
/// Title and message come from the fixed per-kind tables on
/// [`NotificationKind`].
///
/// # Arguments
///
/// * `kind` - The kind of transition
/// * `booking_id` - The persisted identifier of the booking
/// * `booking` - The booking the notification describes
#[must_use]
pub fn notification_for(kind: NotificationKind, booking_id: i64, booking: &Booking) -> Notification {
    Notification::new(booking.user_id, booking_id, kind, booking.tenant_id)
}

/// Produces the booking log entry for a booking transition.
///
/// # Arguments
///
/// * `action` - The audit action being recorded
/// * `note` - The free-text note for the entry
/// * `booking_id` - The persisted identifier of the booking
/// * `booking` - The booking the entry describes
#[must_use]
pub fn log_for(
    action: BookingAction,
    note: &str,
    booking_id: i64,
    booking: &Booking,
) -> BookingLog {
    BookingLog::new(
        booking_id,
        booking.event_id,
        booking.user_id,
        action,
        note.to_string(),
        booking.tenant_id,
    )
}
