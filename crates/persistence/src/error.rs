// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    /// The requested tenant was not found.
    #[error("Tenant not found: {0}")]
    TenantNotFound(i64),
    /// The requested user was not found.
    #[error("User not found: {0}")]
    UserNotFound(i64),
    /// The requested event was not found.
    #[error("Event not found: {0}")]
    EventNotFound(i64),
    /// The requested booking was not found.
    #[error("Booking not found: {0}")]
    BookingNotFound(i64),
    /// The requested notification was not found.
    #[error("Notification not found: {0}")]
    NotificationNotFound(i64),
    /// A record reference inside a commit does not resolve.
    #[error("Commit rejected: {0}")]
    CommitRejected(String),
    /// A uniqueness constraint was violated.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
    /// A general error occurred.
    #[error("{0}")]
    Other(String),
}
