//! The toy resource: shapes.
//!
//! Shapes carry no behavior. They exist to be allocated by [`create_shape`], handed to an owner,
//! and released exactly once.

use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// The closed set of shape variants [`create_shape`] can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Triangle,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
        })
    }
}

/// An allocated shape.
///
/// Every [`Shape`] has a process-unique id. There is no way to duplicate one: it is neither
/// [`Clone`] nor [`Copy`], so whoever holds it is its only owner.
#[derive(Debug, PartialEq, Eq)]
pub struct Shape {
    kind: ShapeKind,
    id: u64,
}

impl Shape {
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for Shape {
    fn drop(&mut self) {
        log::trace!("releasing {} #{}", self.kind, self.id);
    }
}

/// Allocates a new [`Shape`] of the given kind.
///
/// The caller becomes its sole owner. Each call returns a distinct shape.
///
/// # Examples
///
/// ```
/// use scope_own::{create_shape, ShapeKind};
///
/// let a = create_shape(ShapeKind::Circle);
/// let b = create_shape(ShapeKind::Circle);
/// assert_eq!(a.kind(), ShapeKind::Circle);
/// assert_ne!(a.id(), b.id());
/// ```
pub fn create_shape(kind: ShapeKind) -> Box<Shape> {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    log::trace!("allocating {kind} #{id}");
    Box::new(Shape { kind, id })
}
