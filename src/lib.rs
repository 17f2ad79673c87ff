//! Scope-bound resource release.
//!
//! A resource acquired at runtime has to be released exactly once, on every path out of the code
//! that acquired it: the normal return, any early `return` or `?`, and a panic unwinding through
//! it. Writing the release by hand at each exit point is easy to get wrong. Instead, this crate
//! ties the release to the lifetime of a local value, whose destructor runs automatically when its
//! scope ends.
//!
//! # Overview
//!
//! - [`create_shape`] allocates a toy resource, a [`Shape`] of some [`ShapeKind`].
//! - [`Owned`] (and its alias [`ShapeWrapper`]) takes exclusive ownership of zero or one resource
//!   and releases it when dropped.
//! - [`defer`] runs an arbitrary closure at scope exit.
//! - [`sync::Mutex`] hands out a guard that unlocks the mutex when dropped.
//!
//! # Usage
//!
//! The resource is released even when the scope is left by a panic:
//!
//! ```
//! use std::panic::catch_unwind;
//! use scope_own::{create_shape, ShapeKind, ShapeWrapper};
//!
//! let result = catch_unwind(|| {
//!     let _wrapper = ShapeWrapper::new(create_shape(ShapeKind::Circle));
//!     panic!("something went wrong");
//!     // `_wrapper` is dropped during unwinding, releasing the circle
//! });
//! assert!(result.is_err());
//! ```
//!
//! Locks follow the same pattern. The guard is a local value, so the lock is released on every exit
//! path:
//!
//! ```
//! use scope_own::sync::Mutex;
//!
//! let mutex = Mutex::new(Vec::new());
//! {
//!     let mut guard = mutex.lock();
//!     guard.push(1);
//! }
//! assert_eq!(*mutex.try_lock().unwrap(), [1]);
//! ```

mod drop;
mod owned;
mod shape;
pub mod sync;

pub use drop::{defer, Defer};
pub use owned::{Owned, OwnedBuilder, ShapeWrapper};
pub use shape::{create_shape, Shape, ShapeKind};
