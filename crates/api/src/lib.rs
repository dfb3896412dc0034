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

mod error;
mod guard;
mod locks;
mod requests;
mod service;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
pub use guard::{Principal, TenantGuard};
pub use locks::EventLockRegistry;
pub use requests::{
    BookingView, CancelBookingRequest, CancelBookingResponse, CreateBookingRequest,
    CreateBookingResponse, DashboardResponse, DashboardSummary, EventDashboardEntry,
    ListEventsResponse, MarkNotificationReadResponse, MyBookingsResponse, MyNotificationsResponse,
};
pub use service::BookingService;
