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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod notification;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use error::DomainError;
pub use notification::{Notification, NotificationKind};
pub use types::{Booking, BookingStatus, Capacity, Event, EventStatus, Role, Tenant, User};
pub use validation::{
    validate_event_bookable, validate_single_active_booking, validate_tenant_alignment,
};
