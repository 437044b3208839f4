// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Mutual exclusion around a whole dispatch.
//!
//! A [`Logger`](crate::Logger) is a single-writer value: every mutating entry point takes
//! `&mut self`. The exclusivity setting additionally brackets each dispatched record (timestamp
//! capture, formatting, all writes and rotations) with an acquire and a release, which serializes
//! separate loggers that share log files, or ties dispatch into a lock the application already
//! owns.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use parking_lot::MutexGuard;

/// How a [`Logger`](crate::Logger) serializes its dispatches.
///
/// # Examples
///
/// ```
/// use logfan::Exclusivity;
///
/// // Two loggers that append to the same files never interleave their dispatches.
/// let shared = Exclusivity::mutex();
/// let a = logfan::builder().exclusivity(shared.clone()).build();
/// let b = logfan::builder().exclusivity(shared).build();
/// ```
#[derive(Clone, Debug, Default)]
pub enum Exclusivity {
    /// No hook is called. Dispatches are only as exclusive as the `&mut` borrow of the logger.
    #[default]
    Unsynchronized,
    /// A callback invoked with `true` before a dispatch and with `false` after it.
    Callback(ExclusiveFn),
    /// A mutex held for the duration of each dispatch, shared by every clone.
    Mutex(Arc<Mutex<()>>),
}

impl Exclusivity {
    /// Create an exclusivity hook from a callback taking the acquire (`true`) or release
    /// (`false`) signal.
    pub fn callback(f: impl Fn(bool) + Send + Sync + 'static) -> Self {
        Exclusivity::Callback(ExclusiveFn::new(f))
    }

    /// Create an exclusivity hook backed by a fresh mutex. Clone it to share the mutex.
    pub fn mutex() -> Self {
        Exclusivity::Mutex(Arc::new(Mutex::new(())))
    }

    /// Whether dispatches are unsynchronized.
    pub fn is_unsynchronized(&self) -> bool {
        matches!(self, Exclusivity::Unsynchronized)
    }

    pub(crate) fn enter(&self) -> ExclusiveGuard<'_> {
        match self {
            Exclusivity::Unsynchronized => ExclusiveGuard::Unsynchronized,
            Exclusivity::Callback(f) => {
                (f.f)(true);
                ExclusiveGuard::Callback(f)
            }
            Exclusivity::Mutex(mutex) => ExclusiveGuard::Mutex(mutex.lock()),
        }
    }
}

/// A callback hook that you can pass to [`Exclusivity::Callback`].
///
/// The callback receives `true` to acquire and `false` to release.
#[derive(Clone)]
pub struct ExclusiveFn {
    f: Arc<dyn Fn(bool) + Send + Sync + 'static>,
}

impl fmt::Debug for ExclusiveFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExclusiveFn {{ ... }}")
    }
}

impl ExclusiveFn {
    /// Create a new callback hook.
    pub fn new(f: impl Fn(bool) + Send + Sync + 'static) -> Self {
        ExclusiveFn { f: Arc::new(f) }
    }
}

/// Releases the exclusivity hook when dropped.
pub(crate) enum ExclusiveGuard<'a> {
    Unsynchronized,
    Callback(&'a ExclusiveFn),
    Mutex(#[allow(dead_code)] MutexGuard<'a, ()>),
}

impl Drop for ExclusiveGuard<'_> {
    fn drop(&mut self) {
        if let ExclusiveGuard::Callback(f) = self {
            (f.f)(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_brackets_the_guard() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let exclusivity = {
            let events = events.clone();
            Exclusivity::callback(move |acquire| events.lock().push(acquire))
        };

        {
            let _guard = exclusivity.enter();
            assert_eq!(*events.lock(), vec![true]);
        }
        assert_eq!(*events.lock(), vec![true, false]);
    }

    #[test]
    fn test_mutex_is_held_while_guard_lives() {
        let exclusivity = Exclusivity::mutex();
        let Exclusivity::Mutex(mutex) = exclusivity.clone() else {
            unreachable!()
        };

        let guard = exclusivity.enter();
        assert!(mutex.try_lock().is_none());
        drop(guard);
        assert!(mutex.try_lock().is_some());
    }

    #[test]
    fn test_unsynchronized_is_the_default() {
        let exclusivity = Exclusivity::default();
        assert!(exclusivity.is_unsynchronized());
        assert!(matches!(exclusivity.enter(), ExclusiveGuard::Unsynchronized));
    }
}
