// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use seatline_audit::BookingAction;
use seatline_domain::{Booking, Event, NotificationKind};

/// The booking state of a single event: the event record plus every
/// booking made against it.
///
/// State is scoped per event because all ordering and capacity
/// guarantees are per-event; snapshots of unrelated events never
/// interact. The snapshot must be loaded and committed inside the
/// event's critical section so the admission decision and the capacity
/// read observe the same logical instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventState {
    /// The event this state is scoped to.
    pub event: Event,
    /// All bookings for this event, in insertion order.
    pub bookings: Vec<Booking>,
}

impl EventState {
    /// Creates a new state for an event with no bookings.
    #[must_use]
    pub const fn new(event: Event) -> Self {
        Self {
            event,
            bookings: Vec::new(),
        }
    }

    /// Creates a state from an event and its existing bookings.
    #[must_use]
    pub const fn with_bookings(event: Event, bookings: Vec<Booking>) -> Self {
        Self { event, bookings }
    }

    /// Looks up a booking by its persisted identifier.
    #[must_use]
    pub fn booking_by_id(&self, booking_id: i64) -> Option<&Booking> {
        self.bookings
            .iter()
            .find(|b| b.booking_id == Some(booking_id))
    }
}

/// One booking's state change plus the side-effect records it must
/// produce.
///
/// Every successful transition emits exactly one notification and one
/// booking log entry; carrying the kinds here lets the persistence
/// layer materialize both records in the same atomic commit that
/// writes the booking, so they are never orphaned or dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingTransition {
    /// The booking after the transition. `booking_id` is `None` for a
    /// newly created booking until the store assigns one.
    pub booking: Booking,
    /// The kind of notification this transition produces.
    pub notification_kind: NotificationKind,
    /// The audit action this transition records.
    pub action: BookingAction,
    /// The free-text note for the booking log entry.
    pub note: String,
}

/// The result of a successful command application.
///
/// Transitions are atomic: they either commit completely or fail
/// without side effects. A cancellation that frees a confirmed seat
/// carries two transitions (the cancel and the promotion); everything
/// else carries one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The event state after the command.
    pub new_state: EventState,
    /// The booking transitions to commit, in order.
    pub transitions: Vec<BookingTransition>,
}
