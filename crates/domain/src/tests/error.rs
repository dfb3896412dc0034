// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BookingStatus, DomainError, EventStatus};

#[test]
fn test_event_not_bookable_display() {
    let err: DomainError = DomainError::EventNotBookable {
        event_id: 5,
        status: EventStatus::Draft,
    };
    let display: String = format!("{err}");
    assert!(display.contains("Event 5"));
    assert!(display.contains("draft"));
}

#[test]
fn test_duplicate_active_booking_display() {
    let err: DomainError = DomainError::DuplicateActiveBooking {
        user_id: 2,
        event_id: 9,
    };
    let display: String = format!("{err}");
    assert!(display.contains("User 2"));
    assert!(display.contains("event 9"));
}

#[test]
fn test_already_canceled_display() {
    let err: DomainError = DomainError::AlreadyCanceled { booking_id: 11 };
    assert_eq!(format!("{err}"), "Booking 11 is already canceled");
}

#[test]
fn test_invalid_transition_display() {
    let err: DomainError = DomainError::InvalidTransition {
        from: BookingStatus::Canceled,
        to: BookingStatus::Confirmed,
    };
    let display: String = format!("{err}");
    assert!(display.contains("canceled"));
    assert!(display.contains("confirmed"));
}

#[test]
fn test_invalid_capacity_display() {
    let err: DomainError = DomainError::InvalidCapacity(0);
    assert!(format!("{err}").contains("Must be at least 1"));
}
