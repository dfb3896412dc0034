// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use serde::{Deserialize, Serialize};
use seatline_domain::DomainError;
use std::str::FromStr;

/// The transition a booking log entry records.
///
/// Every admission, promotion, and cancellation produces exactly one
/// entry tagged with one of these actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingAction {
    /// A booking request was received. Reserved for log ingestion;
    /// the engine records the decided `AutoConfirm`/`AutoWaitlist`.
    CreateRequest,
    /// The event was full; the request was queued on the waitlist.
    AutoWaitlist,
    /// Capacity was available; the request was admitted directly.
    AutoConfirm,
    /// The oldest waitlisted booking took over a freed seat.
    PromoteFromWaitlist,
    /// A confirmed booking was canceled, freeing a seat.
    CancelConfirmed,
    /// A waitlisted booking was canceled; no seat was freed.
    CancelWaitlisted,
}

impl FromStr for BookingAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create_request" => Ok(Self::CreateRequest),
            "auto_waitlist" => Ok(Self::AutoWaitlist),
            "auto_confirm" => Ok(Self::AutoConfirm),
            "promote_from_waitlist" => Ok(Self::PromoteFromWaitlist),
            "cancel_confirmed" => Ok(Self::CancelConfirmed),
            "cancel_waitlisted" => Ok(Self::CancelWaitlisted),
            _ => Err(DomainError::InvalidBookingAction(s.to_string())),
        }
    }
}

impl std::fmt::Display for BookingAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl BookingAction {
    /// Converts this action to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CreateRequest => "create_request",
            Self::AutoWaitlist => "auto_waitlist",
            Self::AutoConfirm => "auto_confirm",
            Self::PromoteFromWaitlist => "promote_from_waitlist",
            Self::CancelConfirmed => "cancel_confirmed",
            Self::CancelWaitlisted => "cancel_waitlisted",
        }
    }
}

/// An immutable booking log entry recording one state transition.
///
/// Every successful transition must produce exactly one entry. The log
/// is append-only: entries are never mutated or deleted by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingLog {
    /// The canonical numeric identifier assigned by the store.
    /// `None` indicates the entry has not been persisted yet.
    pub log_id: Option<i64>,
    /// The booking this entry describes.
    pub booking_id: i64,
    /// The event the booking belongs to.
    pub event_id: i64,
    /// The user holding the booking.
    pub user_id: i64,
    /// The transition being recorded.
    pub action: BookingAction,
    /// A free-text note describing the transition.
    pub note: String,
    /// The tenant scope of the entry.
    pub tenant_id: i64,
}

impl BookingLog {
    /// Creates a new `BookingLog` entry.
    ///
    /// Once created, an entry is immutable.
    ///
    /// # Arguments
    ///
    /// * `booking_id` - The booking this entry describes
    /// * `event_id` - The event the booking belongs to
    /// * `user_id` - The user holding the booking
    /// * `action` - The transition being recorded
    /// * `note` - A free-text note
    /// * `tenant_id` - The tenant scope
    #[must_use]
    pub const fn new(
        booking_id: i64,
        event_id: i64,
        user_id: i64,
        action: BookingAction,
        note: String,
        tenant_id: i64,
    ) -> Self {
        Self {
            log_id: None,
            booking_id,
            event_id,
            user_id,
            action,
            note,
            tenant_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_action_string_forms() {
        assert_eq!(BookingAction::CreateRequest.as_str(), "create_request");
        assert_eq!(BookingAction::AutoWaitlist.as_str(), "auto_waitlist");
        assert_eq!(BookingAction::AutoConfirm.as_str(), "auto_confirm");
        assert_eq!(
            BookingAction::PromoteFromWaitlist.as_str(),
            "promote_from_waitlist"
        );
        assert_eq!(BookingAction::CancelConfirmed.as_str(), "cancel_confirmed");
        assert_eq!(BookingAction::CancelWaitlisted.as_str(), "cancel_waitlisted");
    }

    #[test]
    fn test_booking_action_parses_canonical_strings() {
        for action in [
            BookingAction::CreateRequest,
            BookingAction::AutoWaitlist,
            BookingAction::AutoConfirm,
            BookingAction::PromoteFromWaitlist,
            BookingAction::CancelConfirmed,
            BookingAction::CancelWaitlisted,
        ] {
            assert_eq!(action.as_str().parse::<BookingAction>(), Ok(action));
        }
    }

    #[test]
    fn test_booking_action_rejects_unknown_string() {
        assert!("promote_all".parse::<BookingAction>().is_err());
    }

    #[test]
    fn test_booking_log_creation_requires_all_fields() {
        let entry: BookingLog = BookingLog::new(
            1,
            2,
            3,
            BookingAction::AutoConfirm,
            String::from("Booking confirmed automatically"),
            4,
        );

        assert_eq!(entry.log_id, None);
        assert_eq!(entry.booking_id, 1);
        assert_eq!(entry.event_id, 2);
        assert_eq!(entry.user_id, 3);
        assert_eq!(entry.action, BookingAction::AutoConfirm);
        assert_eq!(entry.note, "Booking confirmed automatically");
        assert_eq!(entry.tenant_id, 4);
    }

    #[test]
    fn test_booking_log_is_immutable_once_created() {
        let entry: BookingLog = BookingLog::new(
            1,
            2,
            3,
            BookingAction::PromoteFromWaitlist,
            String::from("Promoted from waitlist due to cancellation"),
            4,
        );

        let cloned: BookingLog = entry.clone();
        assert_eq!(entry, cloned);
    }
}
