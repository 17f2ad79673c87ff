//! Closures that run at scope exit.
//!
//! [`defer`] is the closure-shaped sibling of [`Owned`][crate::Owned]: instead of releasing a
//! resource it owns, it runs arbitrary cleanup code when the enclosing scope is left, whether by
//! falling off the end, by an early `return`, or by a panic unwinding through it.

/// Drop guard returned by [`defer`].
#[must_use = "`Defer` should be assigned to a variable, or it will run immediately"]
pub struct Defer<F: FnOnce()>(Option<F>);

impl<F: FnOnce()> Defer<F> {
    /// Disarms the guard, so that the deferred closure never runs.
    pub fn cancel(mut self) {
        self.0 = None;
    }
}

impl<F: FnOnce()> Drop for Defer<F> {
    fn drop(&mut self) {
        if let Some(cb) = self.0.take() {
            cb();
        }
    }
}

/// Returns a value that runs `cb` when dropped.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use scope_own::defer;
///
/// let ran = Cell::new(false);
/// {
///     let _guard = defer(|| ran.set(true));
///     assert!(!ran.get());
/// }
/// assert!(ran.get());
/// ```
pub fn defer<F: FnOnce()>(cb: F) -> Defer<F> {
    Defer(Some(cb))
}
