// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// Represents the role of a user within a tenant.
///
/// Role determines visibility and authority, never booking eligibility:
/// an organizer or admin may hold bookings exactly like an attendee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Attendee: may book events and see only their own records.
    #[default]
    Attendee,
    /// Organizer: may see all records within their tenant.
    Organizer,
    /// Admin: may see records across all tenants.
    Admin,
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "attendee" => Ok(Self::Attendee),
            "organizer" => Ok(Self::Organizer),
            "admin" => Ok(Self::Admin),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Role {
    /// Converts this role to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Attendee => "attendee",
            Self::Organizer => "organizer",
            Self::Admin => "admin",
        }
    }
}

/// Represents a tenant: the isolation boundary grouping users, events,
/// and bookings. There is no cross-tenant visibility except for admins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    /// The canonical numeric identifier assigned by the store.
    pub tenant_id: i64,
    /// The tenant's display name (unique).
    pub name: String,
}

impl Tenant {
    /// Creates a new `Tenant`.
    #[must_use]
    pub const fn new(tenant_id: i64, name: String) -> Self {
        Self { tenant_id, name }
    }
}

/// Represents a user within a tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// The canonical numeric identifier assigned by the store.
    pub user_id: i64,
    /// The user's name (informational, not unique).
    pub name: String,
    /// The user's role within the tenant.
    pub role: Role,
    /// The tenant this user belongs to.
    pub tenant_id: i64,
}

impl User {
    /// Creates a new `User`.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The canonical numeric identifier
    /// * `name` - The user's name
    /// * `role` - The user's role
    /// * `tenant_id` - The tenant this user belongs to
    #[must_use]
    pub const fn new(user_id: i64, name: String, role: Role, tenant_id: i64) -> Self {
        Self {
            user_id,
            name,
            role,
            tenant_id,
        }
    }
}

/// Represents the lifecycle state of an event.
///
/// Booking only operates on `Published` events; `Draft` and `Cancelled`
/// events reject booking requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    /// Initial state after creation. Not bookable.
    #[default]
    Draft,
    /// Visible and bookable within the tenant.
    Published,
    /// The event was called off. Not bookable.
    Cancelled,
}

impl FromStr for EventStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidEventStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl EventStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns whether booking requests are accepted in this state.
    #[must_use]
    pub const fn is_bookable(&self) -> bool {
        matches!(self, Self::Published)
    }
}

/// Represents an event's seat capacity.
///
/// Capacity is the maximum number of simultaneously `Confirmed` bookings
/// the event permits. It is always a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Capacity {
    /// The number of seats (at least 1).
    value: u32,
}

impl Capacity {
    /// Creates a new `Capacity`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCapacity` if `value` is zero.
    pub const fn new(value: u32) -> Result<Self, DomainError> {
        if value >= 1 {
            Ok(Self { value })
        } else {
            Err(DomainError::InvalidCapacity(value))
        }
    }

    /// Returns the seat count.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }
}

/// Represents a capacity-bounded event within a tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// The canonical numeric identifier assigned by the store.
    pub event_id: i64,
    /// The tenant this event belongs to.
    pub tenant_id: i64,
    /// The organizer who owns this event.
    pub organizer_id: i64,
    /// The event title.
    pub title: String,
    /// The event description.
    pub description: String,
    /// Optional location text.
    pub location: Option<String>,
    /// When the event takes place.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    /// The maximum number of confirmed bookings.
    pub capacity: Capacity,
    /// The lifecycle state of the event.
    pub status: EventStatus,
}

impl Event {
    /// Creates a new `Event`.
    ///
    /// # Arguments
    ///
    /// * `event_id` - The canonical numeric identifier
    /// * `tenant_id` - The tenant this event belongs to
    /// * `organizer_id` - The organizer who owns this event
    /// * `title` - The event title
    /// * `description` - The event description
    /// * `location` - Optional location text
    /// * `date` - When the event takes place
    /// * `capacity` - The maximum number of confirmed bookings
    /// * `status` - The lifecycle state
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        event_id: i64,
        tenant_id: i64,
        organizer_id: i64,
        title: String,
        description: String,
        location: Option<String>,
        date: OffsetDateTime,
        capacity: Capacity,
        status: EventStatus,
    ) -> Self {
        Self {
            event_id,
            tenant_id,
            organizer_id,
            title,
            description,
            location,
            date,
            capacity,
            status,
        }
    }
}

/// Represents the lifecycle state of a booking.
///
/// This is the canonical status vocabulary. `Canceled` is terminal:
/// no booking ever transitions out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// The booking holds a seat.
    Confirmed,
    /// The booking is queued for a seat in arrival order.
    Waitlisted,
    /// The booking was canceled. Terminal.
    Canceled,
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "confirmed" => Ok(Self::Confirmed),
            "waitlisted" => Ok(Self::Waitlisted),
            "canceled" => Ok(Self::Canceled),
            _ => Err(DomainError::InvalidBookingStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl BookingStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Waitlisted => "waitlisted",
            Self::Canceled => "canceled",
        }
    }

    /// Returns whether this booking currently occupies or awaits a seat.
    ///
    /// A user may hold at most one active booking per event; canceled
    /// bookings are history and do not count.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Confirmed | Self::Waitlisted)
    }

    /// Checks if a transition from this state to another is valid.
    ///
    /// Valid transitions are:
    /// - `Confirmed` → `Canceled`
    /// - `Waitlisted` → `Canceled`
    /// - `Waitlisted` → `Confirmed` (waitlist promotion)
    ///
    /// `Canceled` is terminal; nothing transitions out of it.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Confirmed, Self::Canceled)
                | (Self::Waitlisted, Self::Canceled)
                | (Self::Waitlisted, Self::Confirmed)
        )
    }
}

/// Represents a booking: one user's request for a seat at one event.
///
/// `created_at` is the sole FIFO ordering key for waitlist promotion,
/// with `booking_id` as the stable tie-breaker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// The canonical numeric identifier assigned by the store.
    /// `None` indicates the booking has not been persisted yet.
    pub booking_id: Option<i64>,
    /// The tenant this booking belongs to. Must equal the event's
    /// and the user's tenant.
    pub tenant_id: i64,
    /// The user who requested the seat.
    pub user_id: i64,
    /// The event the seat is requested for.
    pub event_id: i64,
    /// The lifecycle state of this booking.
    pub status: BookingStatus,
    /// When the booking request was made.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Booking {
    /// Creates a new `Booking` without a persisted ID.
    ///
    /// The `booking_id` will be assigned by the persistence layer upon
    /// first save.
    ///
    /// # Arguments
    ///
    /// * `tenant_id` - The tenant this booking belongs to
    /// * `user_id` - The user who requested the seat
    /// * `event_id` - The event the seat is requested for
    /// * `status` - The decided status
    /// * `created_at` - When the request was made
    #[must_use]
    pub const fn new(
        tenant_id: i64,
        user_id: i64,
        event_id: i64,
        status: BookingStatus,
        created_at: OffsetDateTime,
    ) -> Self {
        Self {
            booking_id: None,
            tenant_id,
            user_id,
            event_id,
            status,
            created_at,
        }
    }

    /// Creates a `Booking` with an existing ID (from persistence).
    #[must_use]
    pub const fn with_id(
        booking_id: i64,
        tenant_id: i64,
        user_id: i64,
        event_id: i64,
        status: BookingStatus,
        created_at: OffsetDateTime,
    ) -> Self {
        Self {
            booking_id: Some(booking_id),
            tenant_id,
            user_id,
            event_id,
            status,
            created_at,
        }
    }

    /// Returns a copy of this booking with the given status.
    ///
    /// This does not validate the transition; callers use
    /// [`BookingStatus::can_transition_to`] first.
    #[must_use]
    pub fn with_status(&self, status: BookingStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}
