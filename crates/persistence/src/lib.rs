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
mod memory;
mod store;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use error::PersistenceError;
pub use memory::MemoryStore;
pub use store::BookingStore;
