// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response DTOs for the API boundary.
//!
//! These are distinct from domain types and represent the API contract.

use seatline_audit::BookingLog;
use seatline_domain::{Booking, BookingStatus, Event, EventStatus, Notification};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// API request to book a seat at an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    /// The event to book.
    pub event_id: i64,
}

/// A caller-facing view of one booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingView {
    /// The booking identifier.
    pub booking_id: i64,
    /// The event the booking is for.
    pub event_id: i64,
    /// The user holding the booking.
    pub user_id: i64,
    /// The booking's lifecycle state.
    pub status: BookingStatus,
    /// When the booking request was made.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl BookingView {
    /// Builds a view from a persisted booking.
    ///
    /// # Arguments
    ///
    /// * `booking` - The persisted booking (identifier assigned)
    #[must_use]
    pub fn from_booking(booking: &Booking) -> Self {
        Self {
            booking_id: booking.booking_id.unwrap_or_default(),
            event_id: booking.event_id,
            user_id: booking.user_id,
            status: booking.status,
            created_at: booking.created_at,
        }
    }
}

/// API response for a successful booking request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBookingResponse {
    /// The decided admission status.
    pub status: BookingStatus,
    /// The created booking.
    pub booking: BookingView,
    /// A success message.
    pub message: String,
}

/// API request to cancel a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelBookingRequest {
    /// The booking to cancel.
    pub booking_id: i64,
}

/// API response for a successful cancellation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelBookingResponse {
    /// The canceled booking.
    pub booking: BookingView,
    /// A success message.
    pub message: String,
}

/// API response listing the caller's bookings, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MyBookingsResponse {
    /// The caller's bookings.
    pub bookings: Vec<BookingView>,
}

/// API response listing the caller's unread notifications, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MyNotificationsResponse {
    /// The caller's unread notifications.
    pub notifications: Vec<Notification>,
}

/// API response for marking a notification read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkNotificationReadResponse {
    /// The updated notification.
    pub notification: Notification,
}

/// One upcoming event on the tenant dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDashboardEntry {
    /// The event identifier.
    pub event_id: i64,
    /// The event title.
    pub title: String,
    /// When the event takes place.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    /// The event's lifecycle state.
    pub status: EventStatus,
    /// The maximum number of confirmed bookings.
    pub capacity: u32,
    /// Bookings currently holding a seat.
    pub confirmed_count: usize,
    /// Bookings currently queued for a seat.
    pub waitlisted_count: usize,
    /// Bookings that were canceled.
    pub canceled_count: usize,
    /// Confirmed seats as a share of capacity, in percent, rounded to
    /// two decimals.
    pub percentage_filled: f64,
}

/// Tenant-wide booking totals across the dashboard's events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// The number of upcoming events.
    pub total_events: usize,
    /// Confirmed bookings across those events.
    pub total_confirmed: usize,
    /// Waitlisted bookings across those events.
    pub total_waitlisted: usize,
    /// Canceled bookings across those events.
    pub total_canceled: usize,
}

/// API response for the organizer dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardResponse {
    /// Upcoming tenant events, soonest first.
    pub events: Vec<EventDashboardEntry>,
    /// Totals across the listed events.
    pub summary: DashboardSummary,
    /// The five most recent booking log entries for the tenant.
    pub recent_logs: Vec<BookingLog>,
}

/// API response listing events visible to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEventsResponse {
    /// The visible published events.
    pub events: Vec<Event>,
}
