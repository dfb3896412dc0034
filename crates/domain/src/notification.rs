// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The kind of transition a notification describes.
///
/// Each kind maps to a fixed title and message; notifications are
/// deterministic functions of the transition that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// A booking request was admitted directly.
    BookingConfirmed,
    /// A booking request found the event full and was queued.
    Waitlisted,
    /// A waitlisted booking was promoted to a confirmed seat.
    WaitlistPromoted,
    /// A booking was canceled.
    BookingCanceled,
}

impl FromStr for NotificationKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "booking_confirmed" => Ok(Self::BookingConfirmed),
            "waitlisted" => Ok(Self::Waitlisted),
            "waitlist_promoted" => Ok(Self::WaitlistPromoted),
            "booking_canceled" => Ok(Self::BookingCanceled),
            _ => Err(DomainError::InvalidNotificationKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl NotificationKind {
    /// Converts this kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BookingConfirmed => "booking_confirmed",
            Self::Waitlisted => "waitlisted",
            Self::WaitlistPromoted => "waitlist_promoted",
            Self::BookingCanceled => "booking_canceled",
        }
    }

    /// Returns the fixed notification title for this kind.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::BookingConfirmed => "Booking Confirmed",
            Self::Waitlisted => "Added to Waitlist",
            Self::WaitlistPromoted => "Promoted from Waitlist",
            Self::BookingCanceled => "Booking Canceled",
        }
    }

    /// Returns the fixed notification message for this kind.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::BookingConfirmed => "Your booking has been confirmed!",
            Self::Waitlisted => "The event is full. You have been added to the waitlist.",
            Self::WaitlistPromoted => {
                "Great news! You have been promoted from the waitlist and your booking is now confirmed."
            }
            Self::BookingCanceled => "Your booking has been canceled.",
        }
    }
}

/// A user-visible record describing the outcome of a transition
/// affecting one of their bookings.
///
/// Notifications are persisted unread and polled by the owning user;
/// there is no push delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// The canonical numeric identifier assigned by the store.
    /// `None` indicates the notification has not been persisted yet.
    pub notification_id: Option<i64>,
    /// The user this notification is addressed to.
    pub user_id: i64,
    /// The booking this notification describes.
    pub booking_id: i64,
    /// The kind of transition that produced this notification.
    pub kind: NotificationKind,
    /// The notification title (fixed per kind).
    pub title: String,
    /// The notification message (fixed per kind).
    pub message: String,
    /// Whether the user has read this notification.
    pub read: bool,
    /// The tenant this notification belongs to.
    pub tenant_id: i64,
}

impl Notification {
    /// Creates a new unread `Notification` for a booking transition.
    ///
    /// Title and message are taken from the fixed tables on
    /// [`NotificationKind`]; callers never supply free text.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user the notification is addressed to
    /// * `booking_id` - The booking the notification describes
    /// * `kind` - The kind of transition
    /// * `tenant_id` - The tenant scope
    #[must_use]
    pub fn new(user_id: i64, booking_id: i64, kind: NotificationKind, tenant_id: i64) -> Self {
        Self {
            notification_id: None,
            user_id,
            booking_id,
            kind,
            title: kind.title().to_string(),
            message: kind.message().to_string(),
            read: false,
            tenant_id,
        }
    }
}
