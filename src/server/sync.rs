//! Exclusive-access monitor
//!
//! [`Synchronized`] owns one value and hands out [`Access`] handles. Only one
//! handle exists at a time; readers and writers are not distinguished. The
//! handle releases the lock when dropped, on every exit path.

use parking_lot::{Mutex, MutexGuard};
use std::ops::{Deref, DerefMut};

#[derive(Debug, Default)]
pub struct Synchronized<T> {
    value: Mutex<T>,
}

/// Scoped exclusive access to the value inside a [`Synchronized`]
pub struct Access<'a, T> {
    guard: MutexGuard<'a, T>,
}

impl<T> Synchronized<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Mutex::new(value),
        }
    }

    /// Block until no other handle is live, then grant exclusive access
    pub fn get_access(&self) -> Access<'_, T> {
        Access {
            guard: self.value.lock(),
        }
    }
}

impl<T> Access<'_, T> {
    /// Swap in a new value, returning the previous one
    ///
    /// Other holders observe either the old or the new value, never a mix.
    pub fn replace(&mut self, value: T) -> T {
        std::mem::replace(&mut *self.guard, value)
    }
}

impl<T> Deref for Access<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.guard
    }
}

impl<T> DerefMut for Access<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.guard
    }
}
