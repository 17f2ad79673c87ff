use crate::Shape;

/// An owning wrapper around a [`Shape`] allocation.
pub type ShapeWrapper = Owned<Box<Shape>>;

/// A builder that can be used to configure an [`Owned`] wrapper before it takes ownership.
#[derive(Debug, Clone, Default)]
pub struct OwnedBuilder {
    label: Option<String>,
}

impl OwnedBuilder {
    /// Sets the label used when the wrapper logs its release.
    pub fn label<N: Into<String>>(self, label: N) -> Self {
        Self {
            label: Some(label.into()),
        }
    }

    /// Creates the [`Owned`] wrapper, taking ownership of `resource` if there is one.
    pub fn wrap<T>(self, resource: Option<T>) -> Owned<T> {
        Owned {
            resource,
            label: self.label,
        }
    }
}

/// Exclusive owner of at most one resource of type `T`.
///
/// When an [`Owned`] goes out of scope, the resource it holds is released (dropped). This happens
/// on every way out of the scope: a normal return, an early `return` or `?`, and a panic unwinding
/// through the owner. An empty wrapper releases nothing.
///
/// [`Owned`] is deliberately not [`Clone`], so there is never a second owner that could release
/// the same resource again.
///
/// # Examples
///
/// ```
/// use scope_own::{create_shape, ShapeKind, ShapeWrapper};
///
/// fn foo() {
///     let _wrapper = ShapeWrapper::new(create_shape(ShapeKind::Circle));
///     // the circle is released here, when `foo` returns
/// }
///
/// foo();
/// ```
#[derive(Debug)]
#[must_use = "`Owned` releases its resource as soon as it is dropped"]
pub struct Owned<T> {
    resource: Option<T>,
    label: Option<String>,
}

impl<T> Drop for Owned<T> {
    fn drop(&mut self) {
        let Some(resource) = self.resource.take() else {
            return;
        };

        if let Some(label) = &self.label {
            log::trace!("wrapper '{label}' releasing its resource");
        }
        drop(resource);
    }
}

impl Owned<()> {
    /// Returns a builder that can be used to configure an [`Owned`] wrapper.
    #[inline]
    pub fn builder() -> OwnedBuilder {
        OwnedBuilder { label: None }
    }
}

impl<T> Owned<T> {
    /// Takes ownership of `resource`.
    pub fn new(resource: T) -> Self {
        Self {
            resource: Some(resource),
            label: None,
        }
    }

    /// Creates a wrapper that owns nothing.
    pub fn empty() -> Self {
        Self {
            resource: None,
            label: None,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.resource.is_none()
    }

    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.resource.as_ref()
    }

    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.resource.as_mut()
    }
}

impl<T> Default for Owned<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for Owned<T> {
    fn from(resource: Option<T>) -> Self {
        Owned::builder().wrap(resource)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::Cell,
        panic::{catch_unwind, resume_unwind, AssertUnwindSafe},
    };

    use crate::{create_shape, ShapeKind};

    use super::*;

    /// Counts how many times it has been released.
    struct Tracked<'a>(&'a Cell<u32>);

    impl Drop for Tracked<'_> {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn assert_send<T: Send>() {}

    #[test]
    fn releases_once_at_scope_exit() {
        let releases = Cell::new(0);
        {
            let wrapper = Owned::new(Tracked(&releases));
            assert!(!wrapper.is_empty());
            assert_eq!(releases.get(), 0);
        }
        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn empty_wrapper_is_noop() {
        let wrapper = Owned::<Tracked<'_>>::empty();
        assert!(wrapper.is_empty());
        assert!(wrapper.get().is_none());
        drop(wrapper);

        let wrapper: Owned<Tracked<'_>> = Owned::default();
        drop(wrapper);
        let wrapper: Owned<Tracked<'_>> = None.into();
        drop(wrapper);
    }

    #[test]
    fn releases_on_early_return() {
        fn work(releases: &Cell<u32>, bail: bool) -> Option<()> {
            let _wrapper = Owned::new(Tracked(releases));
            if bail {
                return None;
            }
            Some(())
        }

        let releases = Cell::new(0);
        assert!(work(&releases, true).is_none());
        assert_eq!(releases.get(), 1);
        assert!(work(&releases, false).is_some());
        assert_eq!(releases.get(), 2);
    }

    #[test]
    fn releases_during_unwind() {
        let releases = Cell::new(0);
        catch_unwind(AssertUnwindSafe(|| {
            let _wrapper = Owned::builder()
                .label("unwinding")
                .wrap(Some(Tracked(&releases)));
            resume_unwind(Box::new("failure after construction"));
        }))
        .unwrap_err();
        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn wrappers_release_independently() {
        let first = Cell::new(0);
        let second = Cell::new(0);

        let outer = Owned::new(Tracked(&first));
        {
            let _inner = Owned::new(Tracked(&second));
        }
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);

        drop(outer);
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn moving_the_wrapper_moves_ownership() {
        let releases = Cell::new(0);
        let wrapper = Owned::new(Tracked(&releases));
        let moved = wrapper;
        assert_eq!(releases.get(), 0);
        drop(moved);
        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn wraps_a_shape() {
        let mut wrapper = ShapeWrapper::new(create_shape(ShapeKind::Triangle));
        assert_eq!(wrapper.get().map(|s| s.kind()), Some(ShapeKind::Triangle));
        assert!(wrapper.get_mut().is_some());
    }

    #[test]
    fn shape_wrapper_is_send() {
        assert_send::<ShapeWrapper>();
    }
}
