// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::capacity::{CapacityReport, evaluate};
use crate::command::Command;
use crate::error::CoreError;
use crate::promotion::select_oldest_waitlisted;
use crate::state::{BookingTransition, EventState, TransitionResult};
use seatline_audit::BookingAction;
use seatline_domain::{
    Booking, BookingStatus, DomainError, NotificationKind, validate_event_bookable,
    validate_single_active_booking,
};
use time::OffsetDateTime;

/// Applies a command to an event snapshot, producing the new state and
/// the transitions to commit.
///
/// This function is pure: it never touches the store. Callers must
/// hold the event's critical section across load, apply, and commit so
/// that the capacity read and the booking write happen at the same
/// logical instant. A failed application leaves no trace; transitions
/// only exist on the `Ok` path.
///
/// Tenant and ownership authorization are enforced by the caller
/// before `apply`; the command layer deals purely in booking state.
///
/// # Arguments
///
/// * `state` - The current event snapshot (immutable)
/// * `command` - The command to apply
/// * `now` - The creation timestamp for new bookings
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and the ordered
///   transitions to commit
/// * `Err(CoreError)` if the command violates a domain rule
///
/// # Errors
///
/// Returns an error if:
/// - The event is not published (`RequestBooking`)
/// - The user already holds an active booking (`RequestBooking`)
/// - The booking does not exist or is already canceled (`CancelBooking`)
pub fn apply(
    state: &EventState,
    command: Command,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::RequestBooking { user_id } => apply_request(state, user_id, now),
        Command::CancelBooking { booking_id } => apply_cancel(state, booking_id),
    }
}

/// Handles the creation transition: evaluate capacity, decide, queue
/// the persist-plus-emit effects.
fn apply_request(
    state: &EventState,
    user_id: i64,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    validate_event_bookable(&state.event)?;
    validate_single_active_booking(user_id, state.event.event_id, &state.bookings)?;

    let report: CapacityReport = evaluate(state);
    let (status, kind, action, note): (BookingStatus, NotificationKind, BookingAction, &str) =
        if report.is_full {
            (
                BookingStatus::Waitlisted,
                NotificationKind::Waitlisted,
                BookingAction::AutoWaitlist,
                "Event at capacity; booking waitlisted",
            )
        } else {
            (
                BookingStatus::Confirmed,
                NotificationKind::BookingConfirmed,
                BookingAction::AutoConfirm,
                "Seat available; booking confirmed automatically",
            )
        };

    let booking: Booking = Booking::new(
        state.event.tenant_id,
        user_id,
        state.event.event_id,
        status,
        now,
    );

    let mut new_bookings: Vec<Booking> = state.bookings.clone();
    new_bookings.push(booking.clone());
    let new_state: EventState = EventState::with_bookings(state.event.clone(), new_bookings);

    Ok(TransitionResult {
        new_state,
        transitions: vec![BookingTransition {
            booking,
            notification_kind: kind,
            action,
            note: note.to_string(),
        }],
    })
}

/// Handles the cancellation transition and, when a confirmed seat is
/// freed, the waitlist promotion inside the same transition.
fn apply_cancel(state: &EventState, booking_id: i64) -> Result<TransitionResult, CoreError> {
    let booking: &Booking = state
        .booking_by_id(booking_id)
        .ok_or(DomainError::BookingNotFound(booking_id))?;

    if booking.status == BookingStatus::Canceled {
        return Err(CoreError::DomainViolation(DomainError::AlreadyCanceled {
            booking_id,
        }));
    }
    if !booking.status.can_transition_to(BookingStatus::Canceled) {
        // Fails closed: no path out of a state other than the lifecycle's.
        return Err(CoreError::DomainViolation(DomainError::InvalidTransition {
            from: booking.status,
            to: BookingStatus::Canceled,
        }));
    }

    let was_confirmed: bool = booking.status == BookingStatus::Confirmed;
    let (action, note): (BookingAction, &str) = if was_confirmed {
        (
            BookingAction::CancelConfirmed,
            "Confirmed booking canceled; seat freed",
        )
    } else {
        (
            BookingAction::CancelWaitlisted,
            "Waitlisted booking canceled",
        )
    };

    let canceled: Booking = booking.with_status(BookingStatus::Canceled);
    let mut new_bookings: Vec<Booking> = state
        .bookings
        .iter()
        .map(|b| {
            if b.booking_id == Some(booking_id) {
                canceled.clone()
            } else {
                b.clone()
            }
        })
        .collect();

    let mut transitions: Vec<BookingTransition> = vec![BookingTransition {
        booking: canceled,
        notification_kind: NotificationKind::BookingCanceled,
        action,
        note: note.to_string(),
    }];

    // One cancellation frees exactly one seat: at most one promotion,
    // never cascading even if capacity would allow more.
    if was_confirmed
        && let Some(next) = select_oldest_waitlisted(&new_bookings).cloned()
    {
        let promoted: Booking = next.with_status(BookingStatus::Confirmed);
        for b in &mut new_bookings {
            if b.booking_id == promoted.booking_id {
                *b = promoted.clone();
            }
        }
        transitions.push(BookingTransition {
            booking: promoted,
            notification_kind: NotificationKind::WaitlistPromoted,
            action: BookingAction::PromoteFromWaitlist,
            note: String::from("Promoted from waitlist due to cancellation"),
        });
    }

    let new_state: EventState = EventState::with_bookings(state.event.clone(), new_bookings);

    Ok(TransitionResult {
        new_state,
        transitions,
    })
}
