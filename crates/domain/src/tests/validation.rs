// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Booking, BookingStatus, Capacity, DomainError, Event, EventStatus, Role, User,
    validate_event_bookable, validate_single_active_booking, validate_tenant_alignment,
};
use time::OffsetDateTime;

fn create_test_event(status: EventStatus) -> Event {
    Event::new(
        1,
        10,
        100,
        String::from("Team Offsite"),
        String::from("Annual planning offsite"),
        None,
        OffsetDateTime::UNIX_EPOCH,
        Capacity::new(2).unwrap(),
        status,
    )
}

fn create_test_booking(user_id: i64, status: BookingStatus) -> Booking {
    Booking::with_id(1, 10, user_id, 1, status, OffsetDateTime::UNIX_EPOCH)
}

#[test]
fn test_published_event_is_bookable() {
    let event: Event = create_test_event(EventStatus::Published);
    assert!(validate_event_bookable(&event).is_ok());
}

#[test]
fn test_draft_event_is_not_bookable() {
    let event: Event = create_test_event(EventStatus::Draft);
    let result: Result<(), DomainError> = validate_event_bookable(&event);
    assert_eq!(
        result,
        Err(DomainError::EventNotBookable {
            event_id: 1,
            status: EventStatus::Draft,
        })
    );
}

#[test]
fn test_cancelled_event_is_not_bookable() {
    let event: Event = create_test_event(EventStatus::Cancelled);
    assert!(validate_event_bookable(&event).is_err());
}

#[test]
fn test_tenant_alignment_accepts_matching_tenants() {
    let user: User = User::new(2, String::from("Ada"), Role::Attendee, 10);
    let event: Event = create_test_event(EventStatus::Published);
    let booking: Booking = create_test_booking(2, BookingStatus::Confirmed);

    assert!(validate_tenant_alignment(&user, &event, &booking).is_ok());
}

#[test]
fn test_tenant_alignment_rejects_user_from_other_tenant() {
    let user: User = User::new(2, String::from("Ada"), Role::Attendee, 99);
    let event: Event = create_test_event(EventStatus::Published);
    let booking: Booking = create_test_booking(2, BookingStatus::Confirmed);

    let result: Result<(), DomainError> = validate_tenant_alignment(&user, &event, &booking);
    assert!(matches!(result, Err(DomainError::TenantMismatch { .. })));
}

#[test]
fn test_tenant_alignment_rejects_booking_from_other_tenant() {
    let user: User = User::new(2, String::from("Ada"), Role::Attendee, 10);
    let event: Event = create_test_event(EventStatus::Published);
    let mut booking: Booking = create_test_booking(2, BookingStatus::Confirmed);
    booking.tenant_id = 99;

    let result: Result<(), DomainError> = validate_tenant_alignment(&user, &event, &booking);
    assert!(matches!(result, Err(DomainError::TenantMismatch { .. })));
}

#[test]
fn test_single_active_booking_rejects_confirmed_duplicate() {
    let existing: Vec<Booking> = vec![create_test_booking(2, BookingStatus::Confirmed)];
    let result: Result<(), DomainError> = validate_single_active_booking(2, 1, &existing);
    assert_eq!(
        result,
        Err(DomainError::DuplicateActiveBooking {
            user_id: 2,
            event_id: 1,
        })
    );
}

#[test]
fn test_single_active_booking_rejects_waitlisted_duplicate() {
    let existing: Vec<Booking> = vec![create_test_booking(2, BookingStatus::Waitlisted)];
    let result: Result<(), DomainError> = validate_single_active_booking(2, 1, &existing);
    assert!(result.is_err());
}

#[test]
fn test_single_active_booking_allows_rebooking_after_cancel() {
    // Canceled bookings are history; any number may exist.
    let existing: Vec<Booking> = vec![
        create_test_booking(2, BookingStatus::Canceled),
        create_test_booking(2, BookingStatus::Canceled),
    ];
    assert!(validate_single_active_booking(2, 1, &existing).is_ok());
}

#[test]
fn test_single_active_booking_ignores_other_users() {
    let existing: Vec<Booking> = vec![create_test_booking(3, BookingStatus::Confirmed)];
    assert!(validate_single_active_booking(2, 1, &existing).is_ok());
}
