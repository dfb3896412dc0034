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

mod apply;
mod capacity;
mod command;
mod emit;
mod error;
mod promotion;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use capacity::{CapacityReport, evaluate};
pub use command::Command;
pub use emit::{log_for, notification_for};
pub use error::CoreError;
pub use promotion::select_oldest_waitlisted;
pub use state::{BookingTransition, EventState, TransitionResult};
