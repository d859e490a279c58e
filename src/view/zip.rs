//! Zip adapter: N views advanced in lockstep.
//!
//! `Zip<Views>` holds a record (tuple) of 0..=6 wrapped views, possibly of
//! different element types. `front`/`back` produce a record of per-slot
//! items in argument order; pops advance every slot; `is_empty` is true for
//! arity 0 or when any slot is empty; `count` is the minimum over slots,
//! computed fresh each call. Slots are plain values, so advancing one copy
//! of a slot's view can never affect another.
//!
//! ## Construction and flattening
//!
//! [`zip!`] accepts zero or more views and flattens ONE level: a zip
//! argument contributes its slots, not itself, so `zip!(zip!(a, b), c)`,
//! `zip!(a, zip!(b, c))` and `zip!(a, b, c)` are all the same arity-3 view.
//!
//! Flattening resolves statically with the inherent-method-fallback trick:
//! `FlattenArg<Zip<Views>>` has an inherent `flatten_views` returning the
//! slot record, and a trait fallback on `FlattenArg<T>` wraps any other view
//! into a 1-record. Inherent items win, so a zip unwraps and everything else
//! nests, decided entirely at compile time. The records are then glued with
//! [`TupleCat`](crate::primitives::tuple::TupleCat).
//!
//! ## Equality
//!
//! Two zips compare by comparing their wrapped-view records elementwise
//! (identity semantics when the slots are spans), never by materializing
//! element records. Zips of incomparable slots simply do not implement
//! `PartialEq`.

use crate::primitives::tuple::Arity;
use crate::tier::{Bidirectional, Counted, Forward, RandomAccess};
use crate::view::reverse::{Reverse, Reversible};

/// View over a record of wrapped views, advanced in lockstep.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Zip<Views> {
    views: Views,
}

impl Zip<()> {
    /// The arity-0 zip, empty forever.
    #[inline]
    pub const fn empty() -> Self {
        Zip { views: () }
    }
}

impl<Views> Zip<Views> {
    /// Wrap a record of views directly, without flattening. Prefer [`zip!`].
    #[inline]
    pub fn new(views: Views) -> Self {
        Zip { views }
    }

    /// The wrapped record.
    #[inline]
    pub fn into_views(self) -> Views {
        self.views
    }

    /// Borrow the wrapped record.
    #[inline]
    pub fn views(&self) -> &Views {
        &self.views
    }

    /// Number of slots.
    #[inline]
    pub fn arity(&self) -> usize
    where
        Views: Arity,
    {
        Views::ARITY
    }
}

// =============================================================================
// Arity 0 - empty forever
// =============================================================================

impl Forward for Zip<()> {
    type Item = ();

    #[inline(always)]
    fn is_empty(&self) -> bool {
        true
    }

    #[inline(always)]
    fn front(&self) {
        debug_assert!(false, "front on empty zip");
    }

    #[inline(always)]
    fn pop_front(&self) -> Self {
        debug_assert!(false, "pop_front on empty zip");
        Zip { views: () }
    }
}

impl Bidirectional for Zip<()> {
    #[inline(always)]
    fn back(&self) {
        debug_assert!(false, "back on empty zip");
    }

    #[inline(always)]
    fn pop_back(&self) -> Self {
        debug_assert!(false, "pop_back on empty zip");
        Zip { views: () }
    }
}

impl Counted for Zip<()> {
    #[inline(always)]
    fn count(&self) -> usize {
        0
    }
}

impl RandomAccess for Zip<()> {
    #[inline(always)]
    fn at(&self, _index: usize) {
        debug_assert!(false, "zip index out of range");
    }

    #[inline(always)]
    fn select(&self, offset: usize, count: usize) -> Self {
        debug_assert!(offset == 0 && count == 0, "zip select out of range");
        Zip { views: () }
    }
}

impl Reversible for Zip<()> {
    type Reversed = Reverse<Self>;

    #[inline]
    fn reversed(self) -> Self::Reversed {
        Reverse::new(self)
    }
}

// =============================================================================
// Arities 1..=6 (generated)
// =============================================================================

macro_rules! impl_zip {
    ($(($V:ident, $idx:tt)),+) => {
        impl<$($V: Forward),+> Forward for Zip<($($V,)+)> {
            type Item = ($($V::Item,)+);

            // Short-circuits; order of checking remaining slots unspecified.
            #[inline(always)]
            fn is_empty(&self) -> bool {
                $(self.views.$idx.is_empty())||+
            }

            #[inline(always)]
            fn front(&self) -> Self::Item {
                ($(self.views.$idx.front(),)+)
            }

            #[inline(always)]
            fn pop_front(&self) -> Self {
                Zip { views: ($(self.views.$idx.pop_front(),)+) }
            }
        }

        impl<$($V: Bidirectional),+> Bidirectional for Zip<($($V,)+)> {
            #[inline(always)]
            fn back(&self) -> Self::Item {
                ($(self.views.$idx.back(),)+)
            }

            #[inline(always)]
            fn pop_back(&self) -> Self {
                Zip { views: ($(self.views.$idx.pop_back(),)+) }
            }
        }

        impl<$($V: Counted),+> Counted for Zip<($($V,)+)> {
            #[inline(always)]
            fn count(&self) -> usize {
                let mut n = usize::MAX;
                $(n = n.min(self.views.$idx.count());)+
                n
            }
        }

        impl<$($V: RandomAccess),+> RandomAccess for Zip<($($V,)+)> {
            #[inline(always)]
            fn at(&self, index: usize) -> Self::Item {
                debug_assert!(index < self.count(), "zip index out of range");
                ($(self.views.$idx.at(index),)+)
            }

            #[inline(always)]
            fn select(&self, offset: usize, count: usize) -> Self {
                debug_assert!(
                    offset.checked_add(count).is_some_and(|end| end <= self.count()),
                    "zip select out of range"
                );
                Zip { views: ($(self.views.$idx.select(offset, count),)+) }
            }
        }

        impl<$($V: Bidirectional),+> Reversible for Zip<($($V,)+)> {
            type Reversed = Reverse<Self>;

            #[inline]
            fn reversed(self) -> Self::Reversed {
                Reverse::new(self)
            }
        }
    };
}

impl_zip!((A, 0));
impl_zip!((A, 0), (B, 1));
impl_zip!((A, 0), (B, 1), (C, 2));
impl_zip!((A, 0), (B, 1), (C, 2), (D, 3));
impl_zip!((A, 0), (B, 1), (C, 2), (D, 3), (E, 4));
impl_zip!((A, 0), (B, 1), (C, 2), (D, 3), (E, 4), (F, 5));

// =============================================================================
// One-level flattening for zip!
// =============================================================================

/// Flattening wrapper used by [`zip!`]. Not part of the public surface.
#[doc(hidden)]
pub struct FlattenArg<T>(pub T);

// Inherent item: wins resolution for zip arguments, unwrapping their slots.
impl<Views> FlattenArg<Zip<Views>> {
    #[doc(hidden)]
    #[inline(always)]
    pub fn flatten_views(self) -> Views {
        self.0.views
    }
}

/// Fallback: any non-zip argument becomes a 1-record.
#[doc(hidden)]
pub trait FlattenFallback<T> {
    fn flatten_views(self) -> (T,);
}

impl<T> FlattenFallback<T> for FlattenArg<T> {
    #[inline(always)]
    fn flatten_views(self) -> (T,) {
        (self.0,)
    }
}

/// Build a [`Zip`] from zero or more views, flattening one level of zip
/// arguments: the result's arity is the SUM of the input arities, never a
/// zip-of-zip.
///
/// ```ignore
/// let abc = zip!(a, zip!(b, c));   // arity 3, same as zip!(a, b, c)
/// ```
#[macro_export]
macro_rules! zip {
    () => {
        $crate::view::zip::Zip::empty()
    };
    ($($view:expr),+ $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::view::zip::FlattenFallback as _;
        let views = ();
        $(
            let views = $crate::primitives::tuple::TupleCat::cat(
                views,
                $crate::view::zip::FlattenArg($view).flatten_views(),
            );
        )+
        $crate::view::zip::Zip::new(views)
    }};
}
