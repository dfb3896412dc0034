// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use seatline::BookingTransition;
use seatline_audit::BookingLog;
use seatline_domain::{
    Booking, Capacity, Event, EventStatus, Notification, Role, Tenant, User,
};
use time::OffsetDateTime;

/// The repository interface the booking engine is built against.
///
/// The store is an explicitly passed dependency, never a global, so
/// the engine stays testable without a live database. Implementations
/// must make [`BookingStore::commit`] atomic: either every record of
/// every transition is persisted or none is, so notification and audit
/// records are never orphaned relative to the booking state they
/// describe. All reads return committed state only.
pub trait BookingStore: Send + Sync {
    /// Looks up a tenant by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn tenant(&self, tenant_id: i64) -> Result<Option<Tenant>, PersistenceError>;

    /// Looks up a user by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn user(&self, user_id: i64) -> Result<Option<User>, PersistenceError>;

    /// Looks up an event by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn event(&self, event_id: i64) -> Result<Option<Event>, PersistenceError>;

    /// Lists events, optionally restricted to one tenant.
    ///
    /// `tenant_filter = None` lists across all tenants (admin reads).
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn events(&self, tenant_filter: Option<i64>) -> Result<Vec<Event>, PersistenceError>;

    /// Looks up a booking by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn booking(&self, booking_id: i64) -> Result<Option<Booking>, PersistenceError>;

    /// Returns all bookings for an event, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn bookings_for_event(&self, event_id: i64) -> Result<Vec<Booking>, PersistenceError>;

    /// Returns all bookings held by a user, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn bookings_for_user(&self, user_id: i64) -> Result<Vec<Booking>, PersistenceError>;

    /// Atomically commits a sequence of booking transitions.
    ///
    /// For each transition this assigns an identifier to a new booking
    /// (or updates the referenced existing one) and persists exactly
    /// one notification and one booking log entry alongside it. The
    /// whole sequence is one all-or-nothing unit.
    ///
    /// Returns the committed bookings in transition order, identifiers
    /// assigned.
    ///
    /// # Errors
    ///
    /// Returns an error if a referenced booking does not exist; in
    /// that case nothing is persisted.
    fn commit(
        &self,
        transitions: &[BookingTransition],
    ) -> Result<Vec<Booking>, PersistenceError>;

    /// Looks up a notification by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn notification(
        &self,
        notification_id: i64,
    ) -> Result<Option<Notification>, PersistenceError>;

    /// Returns a user's notifications, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn notifications_for_user(
        &self,
        user_id: i64,
        unread_only: bool,
    ) -> Result<Vec<Notification>, PersistenceError>;

    /// Sets a notification's read flag and returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns an error if the notification does not exist.
    fn mark_notification_read(
        &self,
        notification_id: i64,
    ) -> Result<Notification, PersistenceError>;

    /// Returns a tenant's most recent booking log entries, newest
    /// first, up to `limit`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn logs_for_tenant(
        &self,
        tenant_id: i64,
        limit: usize,
    ) -> Result<Vec<BookingLog>, PersistenceError>;

    /// Creates a tenant.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is already taken.
    fn create_tenant(&self, name: &str) -> Result<Tenant, PersistenceError>;

    /// Creates a user within a tenant.
    ///
    /// # Errors
    ///
    /// Returns an error if the tenant does not exist.
    fn create_user(
        &self,
        name: &str,
        role: Role,
        tenant_id: i64,
    ) -> Result<User, PersistenceError>;

    /// Creates an event within a tenant.
    ///
    /// # Errors
    ///
    /// Returns an error if the tenant or organizer does not exist.
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
    ) -> Result<Event, PersistenceError>;
}
