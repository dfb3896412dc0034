// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BookingStore, MemoryStore};
use seatline::BookingTransition;
use seatline_audit::BookingAction;
use seatline_domain::{
    Booking, BookingStatus, Capacity, Event, EventStatus, NotificationKind, Role, Tenant, User,
};
use time::OffsetDateTime;

pub fn ts(seconds: i64) -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp(1_700_000_000 + seconds).unwrap()
}

/// Seeds a store with one tenant, one organizer, one attendee, and one
/// published event. Returns the seeded records.
pub fn seed_store(store: &MemoryStore, capacity: u32) -> (Tenant, User, User, Event) {
    let tenant: Tenant = store.create_tenant("Acme Conferences").unwrap();
    let organizer: User = store
        .create_user("Olive", Role::Organizer, tenant.tenant_id)
        .unwrap();
    let attendee: User = store
        .create_user("Avery", Role::Attendee, tenant.tenant_id)
        .unwrap();
    let event: Event = store
        .create_event(
            tenant.tenant_id,
            organizer.user_id,
            "Launch Day",
            "Product launch keynote",
            Some("Main Hall"),
            ts(86_400),
            Capacity::new(capacity).unwrap(),
            EventStatus::Published,
        )
        .unwrap();
    (tenant, organizer, attendee, event)
}

pub fn confirm_transition(tenant_id: i64, user_id: i64, event_id: i64) -> BookingTransition {
    BookingTransition {
        booking: Booking::new(tenant_id, user_id, event_id, BookingStatus::Confirmed, ts(0)),
        notification_kind: NotificationKind::BookingConfirmed,
        action: BookingAction::AutoConfirm,
        note: "Seat available; booking confirmed automatically".to_string(),
    }
}
