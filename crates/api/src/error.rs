// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use seatline::CoreError;
use seatline_domain::DomainError;
use seatline_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The caller could not be identified.
    Unauthorized {
        /// The reason identification failed.
        reason: String,
    },
    /// Invalid input was provided.
    Validation {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The caller is identified but not permitted to perform the action.
    Forbidden {
        /// The action that was attempted.
        action: String,
        /// The reason the action was denied.
        reason: String,
    },
    /// A business rule was violated.
    Conflict {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// A requested resource was not found.
    NotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized { reason } => {
                write!(f, "Unauthorized: {reason}")
            }
            Self::Validation { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Forbidden { action, reason } => {
                write!(f, "Forbidden: '{action}' denied: {reason}")
            }
            Self::Conflict { rule, message } => {
                write!(f, "Conflict ({rule}): {message}")
            }
            Self::NotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidRole(msg) => ApiError::Validation {
            field: String::from("role"),
            message: format!("Invalid role: {msg}"),
        },
        DomainError::InvalidEventStatus(msg) => ApiError::Validation {
            field: String::from("status"),
            message: format!("Invalid event status: {msg}"),
        },
        DomainError::InvalidBookingStatus(msg) => ApiError::Validation {
            field: String::from("status"),
            message: format!("Invalid booking status: {msg}"),
        },
        DomainError::InvalidNotificationKind(msg) => ApiError::Validation {
            field: String::from("kind"),
            message: format!("Invalid notification kind: {msg}"),
        },
        DomainError::InvalidBookingAction(msg) => ApiError::Validation {
            field: String::from("action"),
            message: format!("Invalid booking log action: {msg}"),
        },
        DomainError::InvalidCapacity(value) => ApiError::Validation {
            field: String::from("capacity"),
            message: format!("Invalid capacity: {value}. Must be at least 1"),
        },
        DomainError::EventNotBookable { event_id, status } => ApiError::Conflict {
            rule: String::from("event_bookable"),
            message: format!("Event {event_id} is not bookable: status is {status}"),
        },
        DomainError::TenantMismatch { detail } => ApiError::Forbidden {
            action: String::from("cross_tenant_access"),
            reason: format!("Tenant mismatch: {detail}"),
        },
        DomainError::DuplicateActiveBooking { user_id, event_id } => ApiError::Conflict {
            rule: String::from("single_active_booking"),
            message: format!(
                "User {user_id} already has an active booking for event {event_id}"
            ),
        },
        DomainError::AlreadyCanceled { booking_id } => ApiError::Conflict {
            rule: String::from("terminal_cancellation"),
            message: format!("Booking {booking_id} is already canceled"),
        },
        DomainError::InvalidTransition { from, to } => ApiError::Conflict {
            rule: String::from("booking_lifecycle"),
            message: format!("Invalid booking transition: {from} -> {to}"),
        },
        DomainError::EventNotFound(id) => ApiError::NotFound {
            resource_type: String::from("Event"),
            message: format!("Event {id} does not exist"),
        },
        DomainError::BookingNotFound(id) => ApiError::NotFound {
            resource_type: String::from("Booking"),
            message: format!("Booking {id} does not exist"),
        },
        DomainError::UserNotFound(id) => ApiError::NotFound {
            resource_type: String::from("User"),
            message: format!("User {id} does not exist"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::Internal(msg) => ApiError::Internal { message: msg },
    }
}

/// Translates a persistence error into an API error.
///
/// Store-level lookup failures map to `NotFound`; everything else is an
/// internal failure from the caller's point of view.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::TenantNotFound(id) => ApiError::NotFound {
            resource_type: String::from("Tenant"),
            message: format!("Tenant {id} does not exist"),
        },
        PersistenceError::UserNotFound(id) => ApiError::NotFound {
            resource_type: String::from("User"),
            message: format!("User {id} does not exist"),
        },
        PersistenceError::EventNotFound(id) => ApiError::NotFound {
            resource_type: String::from("Event"),
            message: format!("Event {id} does not exist"),
        },
        PersistenceError::BookingNotFound(id) => ApiError::NotFound {
            resource_type: String::from("Booking"),
            message: format!("Booking {id} does not exist"),
        },
        PersistenceError::NotificationNotFound(id) => ApiError::NotFound {
            resource_type: String::from("Notification"),
            message: format!("Notification {id} does not exist"),
        },
        PersistenceError::ConstraintViolation(msg) => ApiError::Conflict {
            rule: String::from("uniqueness"),
            message: msg,
        },
        PersistenceError::CommitRejected(msg) | PersistenceError::Other(msg) => {
            ApiError::Internal { message: msg }
        }
    }
}
