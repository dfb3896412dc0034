// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BookingService, Principal};
use seatline_domain::{Capacity, Event, EventStatus, Role, Tenant, User};
use seatline_persistence::{BookingStore, MemoryStore};
use std::sync::Arc;
use time::{Duration, OffsetDateTime};

/// A seeded service plus the records behind it.
pub struct Fixture {
    pub service: BookingService<MemoryStore>,
    pub tenant: Tenant,
    pub organizer: User,
    pub attendee: User,
    pub event: Event,
}

impl Fixture {
    pub fn organizer_principal(&self) -> Principal {
        Principal::new(self.organizer.user_id, Role::Organizer, self.tenant.tenant_id)
    }

    pub fn attendee_principal(&self) -> Principal {
        Principal::new(self.attendee.user_id, Role::Attendee, self.tenant.tenant_id)
    }

    /// Creates another attendee in the fixture tenant and returns their
    /// principal.
    pub fn new_attendee(&self, name: &str) -> Principal {
        let user: User = self
            .service
            .store()
            .create_user(name, Role::Attendee, self.tenant.tenant_id)
            .unwrap();
        Principal::new(user.user_id, Role::Attendee, self.tenant.tenant_id)
    }
}

/// Seeds a service with one tenant, an organizer, an attendee, and one
/// published future-dated event of the given capacity.
pub fn create_fixture(capacity: u32) -> Fixture {
    let store: Arc<MemoryStore> = Arc::new(MemoryStore::new());
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
            OffsetDateTime::now_utc() + Duration::days(7),
            Capacity::new(capacity).unwrap(),
            EventStatus::Published,
        )
        .unwrap();
    Fixture {
        service: BookingService::new(store),
        tenant,
        organizer,
        attendee,
        event,
    }
}
