//! Reverse adapter: swaps front/back semantics of a bidirectional view.
//!
//! ## Double reversal
//!
//! `reverse(reverse(v))` must BEHAVE as `v`, and does so by construction:
//! reversal goes through the [`Reversible`] trait, and the impl for
//! `Reverse<V>` UNWRAPS instead of nesting a second adapter. This is a
//! required algebraic identity of the view algebra, not an optimization.
//!
//! `Reversible` is also the extension point: a foreign bidirectional type
//! opts in with one line of [`impl_reversible!`], gaining `reverse()` without
//! modification.

use crate::tier::{Bidirectional, Counted, Forward, RandomAccess};

/// A bidirectional view with front and back exchanged.
///
/// Index 0 of the reverse view is the wrapped view's last element. `count`
/// forwards unchanged. `Contiguous` is intentionally not implemented:
/// reversed order is not a forward contiguous region.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Reverse<V> {
    inner: V,
}

impl<V: Bidirectional> Reverse<V> {
    /// Wrap a view. Prefer [`reverse`], which also unwraps.
    #[inline]
    pub fn new(inner: V) -> Self {
        Reverse { inner }
    }

    /// The wrapped view.
    #[inline]
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: Bidirectional> Forward for Reverse<V> {
    type Item = V::Item;

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[inline(always)]
    fn front(&self) -> V::Item {
        self.inner.back()
    }

    #[inline(always)]
    fn pop_front(&self) -> Self {
        Reverse {
            inner: self.inner.pop_back(),
        }
    }
}

impl<V: Bidirectional> Bidirectional for Reverse<V> {
    #[inline(always)]
    fn back(&self) -> V::Item {
        self.inner.front()
    }

    #[inline(always)]
    fn pop_back(&self) -> Self {
        Reverse {
            inner: self.inner.pop_front(),
        }
    }
}

impl<V: Bidirectional + Counted> Counted for Reverse<V> {
    #[inline(always)]
    fn count(&self) -> usize {
        self.inner.count()
    }
}

impl<V: RandomAccess> RandomAccess for Reverse<V> {
    #[inline(always)]
    fn at(&self, index: usize) -> V::Item {
        debug_assert!(index < self.inner.count(), "reverse index out of range");
        self.inner.at(self.inner.count() - 1 - index)
    }

    // Offset re-expressed against the wrapped view, so index 0 of the
    // reverse view stays the wrapped view's last element.
    #[inline(always)]
    fn select(&self, offset: usize, count: usize) -> Self {
        let n = self.inner.count();
        debug_assert!(
            offset.checked_add(count).is_some_and(|end| end <= n),
            "reverse select out of range"
        );
        Reverse {
            inner: self.inner.select(n - offset - count, count),
        }
    }
}

/// Per-type reversal, the trait behind [`reverse`].
///
/// Implemented by every bidirectional view in this crate; for wrapping types
/// `Reversed` is `Reverse<Self>`, for `Reverse<V>` it is `V` (the unwrap).
pub trait Reversible: Bidirectional {
    /// View with front and back exchanged.
    type Reversed: Bidirectional;

    fn reversed(self) -> Self::Reversed;
}

impl<V: Bidirectional> Reversible for Reverse<V> {
    type Reversed = V;

    #[inline]
    fn reversed(self) -> V {
        self.inner
    }
}

/// Reverse a view. `reverse(reverse(v))` is `v` itself, via unwrapping.
#[inline]
pub fn reverse<V: Reversible>(view: V) -> V::Reversed {
    view.reversed()
}

/// Opt a foreign bidirectional view type into [`reverse`] with the standard
/// wrapping impl. Types that can reverse more cheaply implement
/// [`Reversible`] by hand instead.
#[macro_export]
macro_rules! impl_reversible {
    ($ty:ty) => {
        impl $crate::view::reverse::Reversible for $ty {
            type Reversed = $crate::view::reverse::Reverse<$ty>;

            #[inline]
            fn reversed(self) -> Self::Reversed {
                $crate::view::reverse::Reverse::new(self)
            }
        }
    };
}
