// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Booking, Event, User};

/// Validates that an event is currently accepting bookings.
///
/// # Errors
///
/// Returns `DomainError::EventNotBookable` if the event is not published.
pub const fn validate_event_bookable(event: &Event) -> Result<(), DomainError> {
    if event.status.is_bookable() {
        Ok(())
    } else {
        Err(DomainError::EventNotBookable {
            event_id: event.event_id,
            status: event.status,
        })
    }
}

/// Validates that a user, an event, and a booking all share one tenant.
///
/// Every booking must carry the same tenant reference as the event it
/// books and the user who holds it.
///
/// # Errors
///
/// Returns `DomainError::TenantMismatch` naming the disagreeing pair.
pub fn validate_tenant_alignment(
    user: &User,
    event: &Event,
    booking: &Booking,
) -> Result<(), DomainError> {
    if user.tenant_id != event.tenant_id {
        return Err(DomainError::TenantMismatch {
            detail: format!(
                "user {} is in tenant {} but event {} is in tenant {}",
                user.user_id, user.tenant_id, event.event_id, event.tenant_id
            ),
        });
    }
    if booking.tenant_id != event.tenant_id {
        return Err(DomainError::TenantMismatch {
            detail: format!(
                "booking is in tenant {} but event {} is in tenant {}",
                booking.tenant_id, event.event_id, event.tenant_id
            ),
        });
    }
    Ok(())
}

/// Validates that a user holds no active booking for an event.
///
/// At most one booking with status in {Confirmed, Waitlisted} may exist
/// per (user, event) pair; canceled bookings are history and permitted
/// in any number.
///
/// # Arguments
///
/// * `user_id` - The requesting user
/// * `event_id` - The target event
/// * `bookings` - All bookings for the event
///
/// # Errors
///
/// Returns `DomainError::DuplicateActiveBooking` if an active booking
/// already exists.
pub fn validate_single_active_booking(
    user_id: i64,
    event_id: i64,
    bookings: &[Booking],
) -> Result<(), DomainError> {
    let has_active: bool = bookings
        .iter()
        .any(|b| b.user_id == user_id && b.event_id == event_id && b.status.is_active());
    if has_active {
        return Err(DomainError::DuplicateActiveBooking { user_id, event_id });
    }
    Ok(())
}
