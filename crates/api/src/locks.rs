// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Per-event critical-section registry.
///
/// Admission and cancellation must load, decide, and commit against the
/// same snapshot of one event's bookings. Holding that event's lock for
/// the whole load-apply-commit sequence makes concurrent requests for
/// the same event strictly sequential while unrelated events proceed in
/// parallel. Locks are created on first use and kept for the lifetime
/// of the registry.
#[derive(Debug, Default)]
pub struct EventLockRegistry {
    locks: Mutex<HashMap<i64, Arc<Mutex<()>>>>,
}

impl EventLockRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the lock guarding the given event's critical section.
    #[must_use]
    pub fn lock_for(&self, event_id: i64) -> Arc<Mutex<()>> {
        let mut locks = self
            .locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(locks.entry(event_id).or_default())
    }
}
