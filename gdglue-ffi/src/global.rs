/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Lazily initialized, mutex-guarded global.
///
/// Usable in `static` items thanks to the `const` constructor. The init function runs on first [`lock()`](Self::lock).
/// Used for the process-wide registries of the binding layer: class IDs, registered classes and flattened name tables.
pub struct Global<T> {
    value: Mutex<Slot<T>>,
}

enum Slot<T> {
    Pending(fn() -> T),
    Ready(T),
    /// Init function panicked; the global stays unusable.
    Poisoned,
}

impl<T> Global<T> {
    pub const fn new(init_fn: fn() -> T) -> Self {
        Self {
            value: Mutex::new(Slot::Pending(init_fn)),
        }
    }

    /// `Global` initialized with `T::default()`.
    ///
    /// Inherent rather than `Default`, because the trait method is not `const`.
    pub const fn default() -> Self
    where
        T: Default,
    {
        Self::new(T::default)
    }

    /// Blocks until the value is available and returns a guard giving shared or mutable access.
    ///
    /// # Panics
    /// If the init function panics, now or on an earlier call.
    pub fn lock(&self) -> GlobalGuard<'_, T> {
        // A panic while holding a guard leaves the value itself consistent; only failed init poisons the global.
        let mut guard = self.value.lock().unwrap_or_else(PoisonError::into_inner);

        if let Slot::Pending(init_fn) = *guard {
            *guard = Slot::Poisoned;

            match std::panic::catch_unwind(init_fn) {
                Ok(value) => *guard = Slot::Ready(value),
                Err(payload) => {
                    eprintln!("panic during Global<T> initialization");
                    drop(guard);
                    std::panic::resume_unwind(payload);
                }
            }
        }

        match *guard {
            Slot::Ready(_) => GlobalGuard { guard },
            _ => panic!("previous Global<T> initialization failed due to panic"),
        }
    }
}

/// Guard that temporarily gives access to a `Global<T>`'s inner value.
pub struct GlobalGuard<'a, T> {
    guard: MutexGuard<'a, Slot<T>>,
}

impl<T> Deref for GlobalGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match &*self.guard {
            Slot::Ready(value) => value,
            _ => unreachable!("guard only handed out for initialized globals"),
        }
    }
}

impl<T> DerefMut for GlobalGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        match &mut *self.guard {
            Slot::Ready(value) => value,
            _ => unreachable!("guard only handed out for initialized globals"),
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    static CLASS_IDS: Global<HashMap<&'static str, u16>> = Global::default();
    static SEEDED: Global<Vec<&'static str>> = Global::new(|| vec!["Object"]);
    static BROKEN: Global<u32> = Global::new(|| panic!("init failure"));

    #[test]
    fn lazy_default() {
        {
            let mut ids = CLASS_IDS.lock();
            let next = ids.len() as u16;
            ids.entry("Node").or_insert(next);
        }

        let ids = CLASS_IDS.lock();
        assert_eq!(ids.get("Node"), Some(&0));
    }

    #[test]
    fn lazy_with_init_fn() {
        SEEDED.lock().push("Node");

        assert_eq!(*SEEDED.lock(), ["Object", "Node"]);
    }

    #[test]
    fn failed_init_stays_failed() {
        let first = std::panic::catch_unwind(|| *BROKEN.lock());
        let second = std::panic::catch_unwind(|| *BROKEN.lock());

        assert!(first.is_err());
        assert!(second.is_err());
    }
}
