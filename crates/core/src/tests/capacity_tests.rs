// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CapacityReport, EventState, evaluate};
use seatline_domain::BookingStatus;

use super::helpers::{create_test_booking, create_test_state, ts};

#[test]
fn test_empty_event_is_not_full() {
    let state: EventState = create_test_state(2, vec![]);
    let report: CapacityReport = evaluate(&state);

    assert_eq!(report.confirmed_count, 0);
    assert_eq!(report.capacity, 2);
    assert!(!report.is_full);
}

#[test]
fn test_only_confirmed_bookings_count_toward_capacity() {
    let state: EventState = create_test_state(
        2,
        vec![
            create_test_booking(1, 2, BookingStatus::Confirmed, ts(1)),
            create_test_booking(2, 3, BookingStatus::Waitlisted, ts(2)),
            create_test_booking(3, 4, BookingStatus::Canceled, ts(3)),
        ],
    );
    let report: CapacityReport = evaluate(&state);

    assert_eq!(report.confirmed_count, 1);
    assert!(!report.is_full);
}

#[test]
fn test_event_full_at_exact_capacity() {
    let state: EventState = create_test_state(
        2,
        vec![
            create_test_booking(1, 2, BookingStatus::Confirmed, ts(1)),
            create_test_booking(2, 3, BookingStatus::Confirmed, ts(2)),
        ],
    );
    let report: CapacityReport = evaluate(&state);

    assert_eq!(report.confirmed_count, 2);
    assert!(report.is_full);
}

#[test]
fn test_capacity_one_event_full_with_single_confirmed() {
    let state: EventState = create_test_state(
        1,
        vec![create_test_booking(1, 2, BookingStatus::Confirmed, ts(1))],
    );
    assert!(evaluate(&state).is_full);
}
