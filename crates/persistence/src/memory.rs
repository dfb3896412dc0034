// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use crate::store::BookingStore;
use seatline::{BookingTransition, log_for, notification_for};
use seatline_audit::BookingLog;
use seatline_domain::{
    Booking, Capacity, Event, EventStatus, Notification, Role, Tenant, User,
};
use std::sync::{Mutex, PoisonError};
use time::OffsetDateTime;
use tracing::debug;

/// All records behind one lock so a commit is observed whole or not at
/// all.
#[derive(Debug, Default)]
struct Inner {
    tenants: Vec<Tenant>,
    users: Vec<User>,
    events: Vec<Event>,
    bookings: Vec<Booking>,
    notifications: Vec<Notification>,
    logs: Vec<BookingLog>,
    next_tenant_id: i64,
    next_user_id: i64,
    next_event_id: i64,
    next_booking_id: i64,
    next_notification_id: i64,
    next_log_id: i64,
}

impl Inner {
    fn next_tenant_id(&mut self) -> i64 {
        self.next_tenant_id += 1;
        self.next_tenant_id
    }

    fn next_user_id(&mut self) -> i64 {
        self.next_user_id += 1;
        self.next_user_id
    }

    fn next_event_id(&mut self) -> i64 {
        self.next_event_id += 1;
        self.next_event_id
    }

    fn next_booking_id(&mut self) -> i64 {
        self.next_booking_id += 1;
        self.next_booking_id
    }

    fn next_notification_id(&mut self) -> i64 {
        self.next_notification_id += 1;
        self.next_notification_id
    }

    fn next_log_id(&mut self) -> i64 {
        self.next_log_id += 1;
        self.next_log_id
    }
}

/// An in-memory [`BookingStore`].
///
/// Every operation takes the single inner lock, so a multi-record
/// commit is atomic with respect to every read: no caller can observe
/// a booking without its notification and log entry. Identifiers are
/// assigned from monotonically increasing counters starting at 1.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl BookingStore for MemoryStore {
    fn tenant(&self, tenant_id: i64) -> Result<Option<Tenant>, PersistenceError> {
        let inner = self.lock();
        Ok(inner
            .tenants
            .iter()
            .find(|t| t.tenant_id == tenant_id)
            .cloned())
    }

    fn user(&self, user_id: i64) -> Result<Option<User>, PersistenceError> {
        let inner = self.lock();
        Ok(inner.users.iter().find(|u| u.user_id == user_id).cloned())
    }

    fn event(&self, event_id: i64) -> Result<Option<Event>, PersistenceError> {
        let inner = self.lock();
        Ok(inner
            .events
            .iter()
            .find(|e| e.event_id == event_id)
            .cloned())
    }

    fn events(&self, tenant_filter: Option<i64>) -> Result<Vec<Event>, PersistenceError> {
        let inner = self.lock();
        Ok(inner
            .events
            .iter()
            .filter(|e| tenant_filter.is_none_or(|tenant_id| e.tenant_id == tenant_id))
            .cloned()
            .collect())
    }

    fn booking(&self, booking_id: i64) -> Result<Option<Booking>, PersistenceError> {
        let inner = self.lock();
        Ok(inner
            .bookings
            .iter()
            .find(|b| b.booking_id == Some(booking_id))
            .cloned())
    }

    fn bookings_for_event(&self, event_id: i64) -> Result<Vec<Booking>, PersistenceError> {
        let inner = self.lock();
        Ok(inner
            .bookings
            .iter()
            .filter(|b| b.event_id == event_id)
            .cloned()
            .collect())
    }

    fn bookings_for_user(&self, user_id: i64) -> Result<Vec<Booking>, PersistenceError> {
        let inner = self.lock();
        let mut bookings: Vec<Booking> = inner
            .bookings
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect();
        bookings.reverse();
        Ok(bookings)
    }

    fn commit(
        &self,
        transitions: &[BookingTransition],
    ) -> Result<Vec<Booking>, PersistenceError> {
        let mut inner = self.lock();

        // Validate every existing-booking reference before touching
        // anything, so a rejected commit leaves no partial writes.
        for transition in transitions {
            if let Some(booking_id) = transition.booking.booking_id
                && !inner
                    .bookings
                    .iter()
                    .any(|b| b.booking_id == Some(booking_id))
            {
                return Err(PersistenceError::CommitRejected(format!(
                    "unknown booking {booking_id}"
                )));
            }
        }

        let mut committed: Vec<Booking> = Vec::with_capacity(transitions.len());
        for transition in transitions {
            let booking: Booking = match transition.booking.booking_id {
                Some(booking_id) => {
                    let stored: &mut Booking = inner
                        .bookings
                        .iter_mut()
                        .find(|b| b.booking_id == Some(booking_id))
                        .ok_or(PersistenceError::BookingNotFound(booking_id))?;
                    *stored = transition.booking.clone();
                    stored.clone()
                }
                None => {
                    let booking_id: i64 = inner.next_booking_id();
                    let booking: Booking = Booking {
                        booking_id: Some(booking_id),
                        ..transition.booking.clone()
                    };
                    inner.bookings.push(booking.clone());
                    booking
                }
            };

            // Assigned above in both arms.
            let booking_id: i64 = booking
                .booking_id
                .ok_or_else(|| PersistenceError::Other("booking id not assigned".to_string()))?;

            let mut notification: Notification =
                notification_for(transition.notification_kind, booking_id, &booking);
            notification.notification_id = Some(inner.next_notification_id());
            inner.notifications.push(notification);

            let mut log: BookingLog =
                log_for(transition.action, &transition.note, booking_id, &booking);
            log.log_id = Some(inner.next_log_id());
            inner.logs.push(log);

            debug!(
                booking_id,
                event_id = booking.event_id,
                user_id = booking.user_id,
                status = %booking.status,
                action = %transition.action,
                "committed booking transition"
            );
            committed.push(booking);
        }
        Ok(committed)
    }

    fn notification(
        &self,
        notification_id: i64,
    ) -> Result<Option<Notification>, PersistenceError> {
        let inner = self.lock();
        Ok(inner
            .notifications
            .iter()
            .find(|n| n.notification_id == Some(notification_id))
            .cloned())
    }

    fn notifications_for_user(
        &self,
        user_id: i64,
        unread_only: bool,
    ) -> Result<Vec<Notification>, PersistenceError> {
        let inner = self.lock();
        let mut notifications: Vec<Notification> = inner
            .notifications
            .iter()
            .filter(|n| n.user_id == user_id && (!unread_only || !n.read))
            .cloned()
            .collect();
        notifications.reverse();
        Ok(notifications)
    }

    fn mark_notification_read(
        &self,
        notification_id: i64,
    ) -> Result<Notification, PersistenceError> {
        let mut inner = self.lock();
        let notification: &mut Notification = inner
            .notifications
            .iter_mut()
            .find(|n| n.notification_id == Some(notification_id))
            .ok_or(PersistenceError::NotificationNotFound(notification_id))?;
        notification.read = true;
        Ok(notification.clone())
    }

    fn logs_for_tenant(
        &self,
        tenant_id: i64,
        limit: usize,
    ) -> Result<Vec<BookingLog>, PersistenceError> {
        let inner = self.lock();
        let mut logs: Vec<BookingLog> = inner
            .logs
            .iter()
            .filter(|l| l.tenant_id == tenant_id)
            .cloned()
            .collect();
        logs.reverse();
        logs.truncate(limit);
        Ok(logs)
    }

    fn create_tenant(&self, name: &str) -> Result<Tenant, PersistenceError> {
        let mut inner = self.lock();
        if inner.tenants.iter().any(|t| t.name == name) {
            return Err(PersistenceError::ConstraintViolation(format!(
                "tenant name already taken: {name}"
            )));
        }
        let tenant: Tenant = Tenant::new(inner.next_tenant_id(), name.to_string());
        inner.tenants.push(tenant.clone());
        debug!(tenant_id = tenant.tenant_id, name, "created tenant");
        Ok(tenant)
    }

    fn create_user(
        &self,
        name: &str,
        role: Role,
        tenant_id: i64,
    ) -> Result<User, PersistenceError> {
        let mut inner = self.lock();
        if !inner.tenants.iter().any(|t| t.tenant_id == tenant_id) {
            return Err(PersistenceError::TenantNotFound(tenant_id));
        }
        let user: User = User::new(inner.next_user_id(), name.to_string(), role, tenant_id);
        inner.users.push(user.clone());
        debug!(user_id = user.user_id, name, role = %role, tenant_id, "created user");
        Ok(user)
    }

    #[allow(clippy::too_many_arguments)]
    fn create_event(
        &self,
        tenant_id: i64,
        organizer_id: i64,
        title: &str,
        description: &str,
        location: Option<&str>,
        date: OffsetDateTime,
        capacity: Capacity,
        status: EventStatus,
    ) -> Result<Event, PersistenceError> {
        let mut inner = self.lock();
        if !inner.tenants.iter().any(|t| t.tenant_id == tenant_id) {
            return Err(PersistenceError::TenantNotFound(tenant_id));
        }
        if !inner.users.iter().any(|u| u.user_id == organizer_id) {
            return Err(PersistenceError::UserNotFound(organizer_id));
        }
        let event: Event = Event::new(
            inner.next_event_id(),
            tenant_id,
            organizer_id,
            title.to_string(),
            description.to_string(),
            location.map(ToString::to_string),
            date,
            capacity,
            status,
        );
        inner.events.push(event.clone());
        debug!(event_id = event.event_id, tenant_id, title, "created event");
        Ok(event)
    }
}
