//! A scoped mutual-exclusion lock.
//!
//! Calling `lock` and `unlock` by hand is fragile: an early return or a panic between the two calls
//! leaves the lock held forever. [`Mutex::lock`] instead returns a [`MutexGuard`] that holds the
//! lock for as long as it is alive, and releases it when it goes out of scope, whichever way that
//! happens.
//!
//! Unlike [`std::sync::Mutex`], this lock does not poison itself when a thread panics while holding
//! it. The guard is released during unwinding like on any other exit path, and the next `lock`
//! call succeeds.
//!
//! ```
//! use scope_own::sync::Mutex;
//!
//! static COUNTER: Mutex<u32> = Mutex::new(0);
//!
//! fn bump(skip: bool) {
//!     let mut guard = COUNTER.lock();
//!     if skip {
//!         return; // the guard still unlocks here
//!     }
//!     *guard += 1;
//! }
//!
//! bump(true);
//! bump(false);
//! assert_eq!(*COUNTER.lock(), 1);
//! ```

use std::{
    error::Error,
    fmt,
    ops::{Deref, DerefMut},
    sync,
};

pub type TryLockResult<Guard> = Result<Guard, TryLockError>;

#[derive(Default)]
pub struct Mutex<T: ?Sized> {
    inner: sync::Mutex<T>,
}

impl<T> Mutex<T> {
    pub const fn new(t: T) -> Mutex<T> {
        Self {
            inner: sync::Mutex::new(t),
        }
    }
}

impl<T: ?Sized> Mutex<T> {
    /// Acquires the lock, blocking until it is available.
    ///
    /// The lock is held until the returned [`MutexGuard`] is dropped.
    pub fn lock(&self) -> MutexGuard<'_, T> {
        let guard = match self.inner.lock() {
            Ok(guard) => guard,
            Err(poison) => poison.into_inner(),
        };
        log::trace!("lock acquired");

        MutexGuard { inner: guard }
    }

    /// Attempts to acquire the lock without blocking.
    pub fn try_lock(&self) -> TryLockResult<MutexGuard<'_, T>> {
        let guard = match self.inner.try_lock() {
            Ok(guard) => guard,
            Err(sync::TryLockError::Poisoned(poison)) => poison.into_inner(),
            Err(sync::TryLockError::WouldBlock) => return Err(TryLockError),
        };
        log::trace!("lock acquired");

        Ok(MutexGuard { inner: guard })
    }

    pub fn into_inner(self) -> T
    where
        T: Sized,
    {
        match self.inner.into_inner() {
            Ok(inner) => inner,
            Err(poison) => poison.into_inner(),
        }
    }

    pub fn get_mut(&mut self) -> &mut T {
        match self.inner.get_mut() {
            Ok(t) => t,
            Err(poison) => poison.into_inner(),
        }
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Mutex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Mutex");
        match self.inner.try_lock() {
            Ok(val) => s.field("data", &&*val),
            Err(sync::TryLockError::Poisoned(poison)) => s.field("data", &&*poison.into_inner()),
            Err(sync::TryLockError::WouldBlock) => s.field("data", &"<locked>"),
        }
        .finish_non_exhaustive()
    }
}

impl<T> From<T> for Mutex<T> {
    fn from(value: T) -> Self {
        Self {
            inner: value.into(),
        }
    }
}

/// Proof that the lock of a [`Mutex`] is held. Dropping it unlocks the [`Mutex`].
#[must_use = "if unused the `Mutex` will immediately unlock"]
pub struct MutexGuard<'a, T: ?Sized + 'a> {
    inner: sync::MutexGuard<'a, T>,
}

impl<'a, T: ?Sized + 'a> Drop for MutexGuard<'a, T> {
    fn drop(&mut self) {
        log::trace!("lock released");
    }
}

impl<'a, T: ?Sized + 'a> Deref for MutexGuard<'a, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<'a, T: ?Sized + 'a> DerefMut for MutexGuard<'a, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<'a, T: ?Sized + fmt::Debug + 'a> fmt::Debug for MutexGuard<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.inner, f)
    }
}

impl<'a, T: ?Sized + fmt::Display + 'a> fmt::Display for MutexGuard<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.inner, f)
    }
}

/// Returned by [`Mutex::try_lock`] when the lock is currently held.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct TryLockError;

impl Error for TryLockError {}

impl fmt::Display for TryLockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("`try_lock` failed because the operation would block")
    }
}
