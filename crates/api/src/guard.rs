// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ApiError;
use seatline_domain::{Booking, Event, Notification, Role};

/// An authenticated caller with an associated role and tenant.
///
/// Every service operation takes the principal explicitly; there is no
/// ambient caller context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    /// The unique identifier of the calling user.
    pub user_id: i64,
    /// The caller's role.
    pub role: Role,
    /// The tenant the caller belongs to.
    pub tenant_id: i64,
}

impl Principal {
    /// Creates a new principal.
    #[must_use]
    pub const fn new(user_id: i64, role: Role, tenant_id: i64) -> Self {
        Self {
            user_id,
            role,
            tenant_id,
        }
    }
}

/// Tenant-scoped access checks, invoked explicitly at the top of each
/// service operation.
///
/// Rules are uniform across record types: admins may act everywhere,
/// organizers anywhere inside their own tenant, and attendees only on
/// records they own within their own tenant. Booking a seat is the one
/// exception: it requires membership in the event's tenant regardless
/// of role. A denial is always an explicit [`ApiError::Forbidden`],
/// never a silently empty result.
pub struct TenantGuard;

impl TenantGuard {
    /// Checks whether the principal may read a booking.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Forbidden` if the booking belongs to another
    /// tenant, or to another user when the principal is an attendee.
    pub fn can_read_booking(principal: &Principal, booking: &Booking) -> Result<(), ApiError> {
        Self::check_record(
            principal,
            booking.tenant_id,
            booking.user_id,
            "read_booking",
        )
    }

    /// Checks whether the principal may modify a booking.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Forbidden` if the booking belongs to another
    /// tenant, or to another user when the principal is an attendee.
    pub fn can_write_booking(principal: &Principal, booking: &Booking) -> Result<(), ApiError> {
        Self::check_record(
            principal,
            booking.tenant_id,
            booking.user_id,
            "write_booking",
        )
    }

    /// Checks whether the principal may book a seat at an event.
    ///
    /// Booking takes a seat inside the event's tenant, and the booking
    /// it produces must share one tenant with its holder and its event.
    /// The check therefore has no admin exemption: a caller whose
    /// tenant differs from the event's is denied regardless of role.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Forbidden` if the event belongs to another
    /// tenant.
    pub fn can_book_event(principal: &Principal, event: &Event) -> Result<(), ApiError> {
        if principal.tenant_id == event.tenant_id {
            Ok(())
        } else {
            Err(ApiError::Forbidden {
                action: String::from("book_event"),
                reason: format!(
                    "event {} belongs to a different tenant",
                    event.event_id
                ),
            })
        }
    }

    /// Checks whether the principal may read a notification.
    ///
    /// Notifications are addressed to exactly one user; only the
    /// addressee or an admin may touch them.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Forbidden` if the notification is addressed
    /// to someone else.
    pub fn can_write_notification(
        principal: &Principal,
        notification: &Notification,
    ) -> Result<(), ApiError> {
        if principal.role == Role::Admin || principal.user_id == notification.user_id {
            Ok(())
        } else {
            Err(ApiError::Forbidden {
                action: String::from("write_notification"),
                reason: String::from("notification is addressed to a different user"),
            })
        }
    }

    /// Checks whether the principal may view the tenant dashboard.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Forbidden` for attendees.
    pub fn can_view_dashboard(principal: &Principal) -> Result<(), ApiError> {
        match principal.role {
            Role::Organizer | Role::Admin => Ok(()),
            Role::Attendee => Err(ApiError::Forbidden {
                action: String::from("view_dashboard"),
                reason: String::from("dashboard requires the organizer or admin role"),
            }),
        }
    }

    fn check_record(
        principal: &Principal,
        record_tenant_id: i64,
        record_owner_id: i64,
        action: &str,
    ) -> Result<(), ApiError> {
        match principal.role {
            Role::Admin => Ok(()),
            Role::Organizer if principal.tenant_id == record_tenant_id => Ok(()),
            Role::Attendee
                if principal.tenant_id == record_tenant_id
                    && principal.user_id == record_owner_id =>
            {
                Ok(())
            }
            Role::Organizer | Role::Attendee => Err(ApiError::Forbidden {
                action: action.to_string(),
                reason: String::from("record is outside the caller's scope"),
            }),
        }
    }
}
