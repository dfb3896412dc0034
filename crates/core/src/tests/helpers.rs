// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared constructors for core engine tests.

use crate::EventState;
use seatline_domain::{Booking, BookingStatus, Capacity, Event, EventStatus};
use time::{Duration, OffsetDateTime};

/// The tenant all test fixtures live in.
pub const TENANT: i64 = 10;

/// The event identifier all test fixtures book against.
pub const EVENT: i64 = 1;

/// Returns a timestamp `seconds` after the epoch.
pub fn ts(seconds: i64) -> OffsetDateTime {
    OffsetDateTime::UNIX_EPOCH + Duration::seconds(seconds)
}

/// Creates a published test event with the given capacity.
pub fn create_test_event(capacity: u32) -> Event {
    Event::new(
        EVENT,
        TENANT,
        100,
        String::from("Team Offsite"),
        String::from("Annual planning offsite"),
        Some(String::from("Main Hall")),
        ts(1_000_000),
        Capacity::new(capacity).unwrap(),
        EventStatus::Published,
    )
}

/// Creates a published test event with the given capacity and status.
pub fn create_test_event_with_status(capacity: u32, status: EventStatus) -> Event {
    let mut event: Event = create_test_event(capacity);
    event.status = status;
    event
}

/// Creates a persisted booking for the test event.
pub fn create_test_booking(
    booking_id: i64,
    user_id: i64,
    status: BookingStatus,
    created_at: OffsetDateTime,
) -> Booking {
    Booking::with_id(booking_id, TENANT, user_id, EVENT, status, created_at)
}

/// Creates an event state with the given capacity and bookings.
pub fn create_test_state(capacity: u32, bookings: Vec<Booking>) -> EventState {
    EventState::with_bookings(create_test_event(capacity), bookings)
}
