// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ApiError, CancelBookingRequest, CreateBookingRequest, Principal, TenantGuard,
};
use seatline_domain::{Capacity, EventStatus, Role};
use seatline_persistence::BookingStore;
use time::{Duration, OffsetDateTime};

use super::helpers::{Fixture, create_fixture};

/// Seeds a second tenant with one attendee and one published event.
fn seed_other_tenant(fixture: &Fixture) -> (Principal, i64) {
    let store = fixture.service.store();
    let tenant = store.create_tenant("Globex Summits").unwrap();
    let organizer = store
        .create_user("Orla", Role::Organizer, tenant.tenant_id)
        .unwrap();
    let attendee = store
        .create_user("Briar", Role::Attendee, tenant.tenant_id)
        .unwrap();
    let event = store
        .create_event(
            tenant.tenant_id,
            organizer.user_id,
            "Offsite",
            "Quarterly offsite",
            None,
            OffsetDateTime::now_utc() + Duration::days(3),
            Capacity::new(5).unwrap(),
            EventStatus::Published,
        )
        .unwrap();
    (
        Principal::new(attendee.user_id, Role::Attendee, tenant.tenant_id),
        event.event_id,
    )
}

#[test]
fn test_cross_tenant_booking_is_forbidden() {
    let fixture: Fixture = create_fixture(5);
    let outsider: Principal = {
        let (principal, _event_id) = seed_other_tenant(&fixture);
        principal
    };

    let err: ApiError = fixture
        .service
        .create_booking(&outsider, &CreateBookingRequest {
            event_id: fixture.event.event_id,
        })
        .unwrap_err();

    assert!(matches!(err, ApiError::Forbidden { .. }));
}

#[test]
fn test_attendee_cannot_cancel_someone_elses_booking() {
    let fixture: Fixture = create_fixture(5);
    let owner: Principal = fixture.attendee_principal();
    let other: Principal = fixture.new_attendee("Blair");

    let held = fixture
        .service
        .create_booking(&owner, &CreateBookingRequest {
            event_id: fixture.event.event_id,
        })
        .unwrap();
    let err: ApiError = fixture
        .service
        .cancel_booking(&other, &CancelBookingRequest {
            booking_id: held.booking.booking_id,
        })
        .unwrap_err();

    assert!(matches!(err, ApiError::Forbidden { .. }));
}

#[test]
fn test_organizer_can_cancel_bookings_in_their_tenant() {
    let fixture: Fixture = create_fixture(5);
    let owner: Principal = fixture.attendee_principal();
    let organizer: Principal = fixture.organizer_principal();

    let held = fixture
        .service
        .create_booking(&owner, &CreateBookingRequest {
            event_id: fixture.event.event_id,
        })
        .unwrap();
    let response = fixture
        .service
        .cancel_booking(&organizer, &CancelBookingRequest {
            booking_id: held.booking.booking_id,
        })
        .unwrap();

    assert_eq!(
        response.booking.status,
        seatline_domain::BookingStatus::Canceled
    );
}

#[test]
fn test_organizer_cannot_cancel_across_tenants() {
    let fixture: Fixture = create_fixture(5);
    let (outsider, other_event_id): (Principal, i64) = seed_other_tenant(&fixture);
    let organizer: Principal = fixture.organizer_principal();

    let held = fixture
        .service
        .create_booking(&outsider, &CreateBookingRequest {
            event_id: other_event_id,
        })
        .unwrap();
    let err: ApiError = fixture
        .service
        .cancel_booking(&organizer, &CancelBookingRequest {
            booking_id: held.booking.booking_id,
        })
        .unwrap_err();

    assert!(matches!(err, ApiError::Forbidden { .. }));
}

#[test]
fn test_admin_may_act_across_tenants() {
    let fixture: Fixture = create_fixture(5);
    let (outsider, other_event_id): (Principal, i64) = seed_other_tenant(&fixture);
    let admin_user = fixture
        .service
        .store()
        .create_user("Ada", Role::Admin, fixture.tenant.tenant_id)
        .unwrap();
    let admin: Principal =
        Principal::new(admin_user.user_id, Role::Admin, fixture.tenant.tenant_id);

    let held = fixture
        .service
        .create_booking(&outsider, &CreateBookingRequest {
            event_id: other_event_id,
        })
        .unwrap();
    let response = fixture
        .service
        .cancel_booking(&admin, &CancelBookingRequest {
            booking_id: held.booking.booking_id,
        })
        .unwrap();

    assert_eq!(
        response.booking.status,
        seatline_domain::BookingStatus::Canceled
    );
}

#[test]
fn test_admin_cannot_book_across_tenants() {
    let fixture: Fixture = create_fixture(5);
    let (_outsider, other_event_id): (Principal, i64) = seed_other_tenant(&fixture);
    let admin_user = fixture
        .service
        .store()
        .create_user("Ada", Role::Admin, fixture.tenant.tenant_id)
        .unwrap();
    let admin: Principal =
        Principal::new(admin_user.user_id, Role::Admin, fixture.tenant.tenant_id);

    let err: ApiError = fixture
        .service
        .create_booking(&admin, &CreateBookingRequest {
            event_id: other_event_id,
        })
        .unwrap_err();

    assert!(matches!(err, ApiError::Forbidden { .. }));
    assert!(fixture
        .service
        .store()
        .bookings_for_event(other_event_id)
        .unwrap()
        .is_empty());
}

#[test]
fn test_admin_booking_in_own_tenant_stays_tenant_aligned() {
    let fixture: Fixture = create_fixture(5);
    let admin_user = fixture
        .service
        .store()
        .create_user("Ada", Role::Admin, fixture.tenant.tenant_id)
        .unwrap();
    let admin: Principal =
        Principal::new(admin_user.user_id, Role::Admin, fixture.tenant.tenant_id);

    let held = fixture
        .service
        .create_booking(&admin, &CreateBookingRequest {
            event_id: fixture.event.event_id,
        })
        .unwrap();

    let stored = fixture
        .service
        .store()
        .booking(held.booking.booking_id)
        .unwrap()
        .unwrap();
    assert_eq!(stored.tenant_id, admin_user.tenant_id);
    assert_eq!(stored.tenant_id, fixture.event.tenant_id);
}

#[test]
fn test_list_events_is_tenant_scoped_except_for_admins() {
    let fixture: Fixture = create_fixture(5);
    let (outsider, _other_event_id): (Principal, i64) = seed_other_tenant(&fixture);
    let attendee: Principal = fixture.attendee_principal();
    let admin: Principal = Principal::new(
        fixture.organizer.user_id,
        Role::Admin,
        fixture.tenant.tenant_id,
    );

    assert_eq!(fixture.service.list_events(&attendee).unwrap().events.len(), 1);
    assert_eq!(fixture.service.list_events(&outsider).unwrap().events.len(), 1);
    assert_eq!(fixture.service.list_events(&admin).unwrap().events.len(), 2);
}

#[test]
fn test_guard_denial_is_explicit_for_attendees() {
    let principal: Principal = Principal::new(1, Role::Attendee, 10);
    let err: ApiError = TenantGuard::can_view_dashboard(&principal).unwrap_err();
    assert!(matches!(err, ApiError::Forbidden { .. }));
}
