// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{BookingStatus, EventStatus};

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Role string is not recognized.
    InvalidRole(String),
    /// Event status string is not recognized.
    InvalidEventStatus(String),
    /// Booking status string is not recognized.
    InvalidBookingStatus(String),
    /// Notification kind string is not recognized.
    InvalidNotificationKind(String),
    /// Booking log action string is not recognized.
    InvalidBookingAction(String),
    /// Event capacity must be a positive integer.
    InvalidCapacity(u32),
    /// The event is not accepting bookings in its current state.
    EventNotBookable {
        /// The event identifier.
        event_id: i64,
        /// The event's current lifecycle state.
        status: EventStatus,
    },
    /// Booking, event, and user tenants do not agree.
    TenantMismatch {
        /// A description of which references disagree.
        detail: String,
    },
    /// The user already holds a non-canceled booking for this event.
    DuplicateActiveBooking {
        /// The user identifier.
        user_id: i64,
        /// The event identifier.
        event_id: i64,
    },
    /// The booking is already canceled; `Canceled` is terminal.
    AlreadyCanceled {
        /// The booking identifier.
        booking_id: i64,
    },
    /// The requested status transition is not part of the lifecycle.
    InvalidTransition {
        /// The booking's current status.
        from: BookingStatus,
        /// The requested status.
        to: BookingStatus,
    },
    /// The referenced event does not exist.
    EventNotFound(i64),
    /// The referenced booking does not exist.
    BookingNotFound(i64),
    /// The referenced user does not exist.
    UserNotFound(i64),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRole(s) => write!(f, "Invalid role: {s}"),
            Self::InvalidEventStatus(s) => write!(f, "Invalid event status: {s}"),
            Self::InvalidBookingStatus(s) => write!(f, "Invalid booking status: {s}"),
            Self::InvalidNotificationKind(s) => write!(f, "Invalid notification kind: {s}"),
            Self::InvalidBookingAction(s) => write!(f, "Invalid booking log action: {s}"),
            Self::InvalidCapacity(value) => {
                write!(f, "Invalid capacity: {value}. Must be at least 1")
            }
            Self::EventNotBookable { event_id, status } => {
                write!(f, "Event {event_id} is not bookable: status is {status}")
            }
            Self::TenantMismatch { detail } => write!(f, "Tenant mismatch: {detail}"),
            Self::DuplicateActiveBooking { user_id, event_id } => {
                write!(
                    f,
                    "User {user_id} already has an active booking for event {event_id}"
                )
            }
            Self::AlreadyCanceled { booking_id } => {
                write!(f, "Booking {booking_id} is already canceled")
            }
            Self::InvalidTransition { from, to } => {
                write!(f, "Invalid booking transition: {from} -> {to}")
            }
            Self::EventNotFound(id) => write!(f, "Event {id} not found"),
            Self::BookingNotFound(id) => write!(f, "Booking {id} not found"),
            Self::UserNotFound(id) => write!(f, "User {id} not found"),
        }
    }
}

impl std::error::Error for DomainError {}
