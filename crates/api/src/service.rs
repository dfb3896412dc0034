// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::guard::{Principal, TenantGuard};
use crate::locks::EventLockRegistry;
use crate::requests::{
    BookingView, CancelBookingRequest, CancelBookingResponse, CreateBookingRequest,
    CreateBookingResponse, DashboardResponse, DashboardSummary, EventDashboardEntry,
    ListEventsResponse, MarkNotificationReadResponse, MyBookingsResponse, MyNotificationsResponse,
};
use seatline::{Command, EventState, TransitionResult, apply};
use seatline_audit::BookingLog;
use seatline_domain::{
    Booking, BookingStatus, Event, Notification, Role, User, validate_tenant_alignment,
};
use seatline_persistence::BookingStore;
use std::sync::{Arc, Mutex, PoisonError};
use time::OffsetDateTime;
use tracing::{info, warn};

/// How many booking log entries the dashboard shows.
const DASHBOARD_LOG_LIMIT: usize = 5;

/// The booking engine's API boundary.
///
/// Orchestrates load-apply-commit around the pure core: each mutating
/// operation authorizes the principal, enters the event's critical
/// section, loads the event snapshot, applies the command, and commits
/// the resulting transitions atomically. Reads are committed-state
/// snapshots taken outside any critical section.
pub struct BookingService<S: BookingStore> {
    store: Arc<S>,
    locks: EventLockRegistry,
}

impl<S: BookingStore> BookingService<S> {
    /// Creates a service over the given store.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            locks: EventLockRegistry::new(),
        }
    }

    /// Returns a handle to the underlying store.
    #[must_use]
    pub fn store(&self) -> Arc<S> {
        Arc::clone(&self.store)
    }

    /// Books a seat at an event for the principal.
    ///
    /// The admission decision (confirm or waitlist) is made against the
    /// event's booking snapshot inside the event's critical section.
    ///
    /// # Arguments
    ///
    /// * `principal` - The authenticated caller
    /// * `request` - The booking request
    ///
    /// # Errors
    ///
    /// Returns an error if the event does not exist, belongs to another
    /// tenant, is not published, or the principal already holds an
    /// active booking for it.
    pub fn create_booking(
        &self,
        principal: &Principal,
        request: &CreateBookingRequest,
    ) -> Result<CreateBookingResponse, ApiError> {
        let event: Event = self.load_event(request.event_id)?;
        TenantGuard::can_book_event(principal, &event)?;
        let user: User = self.load_user(principal.user_id)?;

        let lock: Arc<Mutex<()>> = self.locks.lock_for(event.event_id);
        let _section = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let state: EventState = self.load_state(event)?;
        let command: Command = Command::RequestBooking {
            user_id: principal.user_id,
        };
        let result: TransitionResult = apply(&state, command, OffsetDateTime::now_utc())
            .map_err(translate_core_error)?;
        // Every committed booking must share one tenant with its holder
        // and its event.
        for transition in &result.transitions {
            validate_tenant_alignment(&user, &state.event, &transition.booking)
                .map_err(translate_domain_error)?;
        }
        let committed: Vec<Booking> = self
            .store
            .commit(&result.transitions)
            .map_err(translate_persistence_error)?;
        let booking: &Booking = committed.first().ok_or_else(|| ApiError::Internal {
            message: String::from("commit returned no booking"),
        })?;

        info!(
            user_id = principal.user_id,
            event_id = request.event_id,
            status = %booking.status,
            "booking request admitted"
        );
        let message: String = match booking.status {
            BookingStatus::Confirmed => String::from("Booking confirmed"),
            BookingStatus::Waitlisted => String::from("Event is full; added to waitlist"),
            BookingStatus::Canceled => String::from("Booking canceled"),
        };
        Ok(CreateBookingResponse {
            status: booking.status,
            booking: BookingView::from_booking(booking),
            message,
        })
    }

    /// Cancels one of the principal's bookings.
    ///
    /// Canceling a confirmed booking frees a seat and promotes the
    /// oldest waitlisted booking inside the same transaction; canceling
    /// a waitlisted booking never promotes anyone.
    ///
    /// # Arguments
    ///
    /// * `principal` - The authenticated caller
    /// * `request` - The cancellation request
    ///
    /// # Errors
    ///
    /// Returns an error if the booking does not exist, is outside the
    /// principal's scope, or is already canceled.
    pub fn cancel_booking(
        &self,
        principal: &Principal,
        request: &CancelBookingRequest,
    ) -> Result<CancelBookingResponse, ApiError> {
        let booking: Booking = self.load_booking(request.booking_id)?;
        TenantGuard::can_write_booking(principal, &booking)?;

        let lock: Arc<Mutex<()>> = self.locks.lock_for(booking.event_id);
        let _section = lock.lock().unwrap_or_else(PoisonError::into_inner);

        // Re-read inside the critical section; the booking may have
        // changed between the ownership check and lock acquisition.
        let event: Event = self.load_event(booking.event_id)?;
        let state: EventState = self.load_state(event)?;
        let command: Command = Command::CancelBooking {
            booking_id: request.booking_id,
        };
        let result: TransitionResult = apply(&state, command, OffsetDateTime::now_utc())
            .map_err(translate_core_error)?;
        let committed: Vec<Booking> = self
            .store
            .commit(&result.transitions)
            .map_err(translate_persistence_error)?;
        let canceled: &Booking = committed.first().ok_or_else(|| ApiError::Internal {
            message: String::from("commit returned no booking"),
        })?;

        if let Some(promoted) = committed.get(1) {
            info!(
                booking_id = request.booking_id,
                promoted_booking_id = promoted.booking_id,
                event_id = canceled.event_id,
                "cancellation promoted the oldest waitlisted booking"
            );
        } else {
            info!(
                booking_id = request.booking_id,
                event_id = canceled.event_id,
                "booking canceled"
            );
        }
        Ok(CancelBookingResponse {
            booking: BookingView::from_booking(canceled),
            message: String::from("Booking canceled"),
        })
    }

    /// Lists the principal's bookings, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn list_my_bookings(&self, principal: &Principal) -> Result<MyBookingsResponse, ApiError> {
        let bookings: Vec<Booking> = self
            .store
            .bookings_for_user(principal.user_id)
            .map_err(translate_persistence_error)?;
        Ok(MyBookingsResponse {
            bookings: bookings.iter().map(BookingView::from_booking).collect(),
        })
    }

    /// Lists the principal's unread notifications, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn list_my_notifications(
        &self,
        principal: &Principal,
    ) -> Result<MyNotificationsResponse, ApiError> {
        let notifications: Vec<Notification> = self
            .store
            .notifications_for_user(principal.user_id, true)
            .map_err(translate_persistence_error)?;
        Ok(MyNotificationsResponse { notifications })
    }

    /// Marks one of the principal's notifications as read.
    ///
    /// # Arguments
    ///
    /// * `principal` - The authenticated caller
    /// * `notification_id` - The notification to mark
    ///
    /// # Errors
    ///
    /// Returns an error if the notification does not exist or is
    /// addressed to a different user.
    pub fn mark_notification_read(
        &self,
        principal: &Principal,
        notification_id: i64,
    ) -> Result<MarkNotificationReadResponse, ApiError> {
        let notification: Notification = self
            .store
            .notification(notification_id)
            .map_err(translate_persistence_error)?
            .ok_or_else(|| ApiError::NotFound {
                resource_type: String::from("Notification"),
                message: format!("Notification {notification_id} does not exist"),
            })?;
        TenantGuard::can_write_notification(principal, &notification)?;

        let updated: Notification = self
            .store
            .mark_notification_read(notification_id)
            .map_err(translate_persistence_error)?;
        Ok(MarkNotificationReadResponse {
            notification: updated,
        })
    }

    /// Builds the tenant dashboard for an organizer or admin.
    ///
    /// Upcoming tenant events sorted by date with per-event booking
    /// counts and fill percentage, tenant-wide totals, and the most
    /// recent booking log entries. This is an eventually-consistent
    /// read; it never drives admission decisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the principal is an attendee or the store
    /// fails.
    pub fn dashboard(&self, principal: &Principal) -> Result<DashboardResponse, ApiError> {
        TenantGuard::can_view_dashboard(principal)?;

        let now: OffsetDateTime = OffsetDateTime::now_utc();
        let mut events: Vec<Event> = self
            .store
            .events(Some(principal.tenant_id))
            .map_err(translate_persistence_error)?;
        events.retain(|e| e.date > now);
        events.sort_by_key(|e| e.date);

        let mut summary: DashboardSummary = DashboardSummary {
            total_events: events.len(),
            ..DashboardSummary::default()
        };
        let mut entries: Vec<EventDashboardEntry> = Vec::with_capacity(events.len());
        for event in events {
            let bookings: Vec<Booking> = self
                .store
                .bookings_for_event(event.event_id)
                .map_err(translate_persistence_error)?;
            let confirmed: usize = count_with_status(&bookings, BookingStatus::Confirmed);
            let waitlisted: usize = count_with_status(&bookings, BookingStatus::Waitlisted);
            let canceled: usize = count_with_status(&bookings, BookingStatus::Canceled);
            summary.total_confirmed += confirmed;
            summary.total_waitlisted += waitlisted;
            summary.total_canceled += canceled;
            entries.push(EventDashboardEntry {
                event_id: event.event_id,
                title: event.title,
                date: event.date,
                status: event.status,
                capacity: event.capacity.value(),
                confirmed_count: confirmed,
                waitlisted_count: waitlisted,
                canceled_count: canceled,
                percentage_filled: percentage_filled(confirmed, event.capacity.value()),
            });
        }

        let recent_logs: Vec<BookingLog> = self
            .store
            .logs_for_tenant(principal.tenant_id, DASHBOARD_LOG_LIMIT)
            .map_err(translate_persistence_error)?;
        Ok(DashboardResponse {
            events: entries,
            summary,
            recent_logs,
        })
    }

    /// Lists published events visible to the principal.
    ///
    /// Admins see published events across all tenants; everyone else
    /// sees their own tenant's.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn list_events(&self, principal: &Principal) -> Result<ListEventsResponse, ApiError> {
        let tenant_filter: Option<i64> = match principal.role {
            Role::Admin => None,
            Role::Organizer | Role::Attendee => Some(principal.tenant_id),
        };
        let mut events: Vec<Event> = self
            .store
            .events(tenant_filter)
            .map_err(translate_persistence_error)?;
        events.retain(|e| e.status.is_bookable());
        events.sort_by_key(|e| e.date);
        Ok(ListEventsResponse { events })
    }

    fn load_event(&self, event_id: i64) -> Result<Event, ApiError> {
        self.store
            .event(event_id)
            .map_err(translate_persistence_error)?
            .ok_or_else(|| {
                warn!(event_id, "event lookup failed");
                ApiError::NotFound {
                    resource_type: String::from("Event"),
                    message: format!("Event {event_id} does not exist"),
                }
            })
    }

    fn load_user(&self, user_id: i64) -> Result<User, ApiError> {
        self.store
            .user(user_id)
            .map_err(translate_persistence_error)?
            .ok_or_else(|| ApiError::NotFound {
                resource_type: String::from("User"),
                message: format!("User {user_id} does not exist"),
            })
    }

    fn load_booking(&self, booking_id: i64) -> Result<Booking, ApiError> {
        self.store
            .booking(booking_id)
            .map_err(translate_persistence_error)?
            .ok_or_else(|| ApiError::NotFound {
                resource_type: String::from("Booking"),
                message: format!("Booking {booking_id} does not exist"),
            })
    }

    fn load_state(&self, event: Event) -> Result<EventState, ApiError> {
        let bookings: Vec<Booking> = self
            .store
            .bookings_for_event(event.event_id)
            .map_err(translate_persistence_error)?;
        Ok(EventState::with_bookings(event, bookings))
    }
}

fn count_with_status(bookings: &[Booking], status: BookingStatus) -> usize {
    bookings.iter().filter(|b| b.status == status).count()
}

/// Confirmed seats as a share of capacity, in percent, rounded to two
/// decimals.
#[allow(clippy::cast_precision_loss)]
fn percentage_filled(confirmed: usize, capacity: u32) -> f64 {
    let raw: f64 = confirmed as f64 / f64::from(capacity) * 100.0;
    (raw * 100.0).round() / 100.0
}
