//! Contiguous view over pointer + count.
//!
//! `Span` is the base-case view: it wraps nothing, owns nothing, and never
//! allocates or mutates memory. It is a pair `{pointer, count}` plus a
//! lifetime tying it to the backing region.
//!
//! ## Contract
//!
//! The pointer/count pair must denote a contiguous region valid for `'a`.
//! The safe constructors ([`Span::new`], [`Span::from_mut`]) uphold this by
//! construction; [`Span::from_raw_parts`] pushes it onto the caller.
//!
//! `count == 0` ⇔ logically empty, independent of the pointer. The canonical
//! empty span carries a null pointer; an exhausted span keeps whatever
//! pointer it advanced to. Both compare unequal (equality is identity).
//!
//! Preconditions (`front` on empty, out-of-bounds `select`, ...) are
//! `debug_assert!`ed and undefined in release: never clamped, never checked
//! on hot paths unless the caller opts in by building with debug assertions.
//!
//! ## Writing through a span
//!
//! `Span<'a, T>` hands out `&'a T` and cannot write. The write-side story is
//! [`Span::from_mut`], which views an exclusive slice as `Span<'a, Cell<T>>`;
//! the copy/move/swap algorithms in [`crate::algo`] are bounded on cell
//! items. Views stay copyable, and the borrow checker keeps the usual
//! exclusivity at the slice boundary.

use core::cell::Cell;
use core::fmt;
use core::marker::PhantomData;
use core::mem::size_of;

use crate::tier::{Bidirectional, Contiguous, Counted, Forward, RandomAccess};
use crate::view::reverse::{Reverse, Reversible};

/// Non-owning contiguous view: pointer + count.
pub struct Span<'a, T> {
    ptr: *const T,
    len: usize,
    _marker: PhantomData<&'a [T]>,
}

// Same auto-trait surface as &[T].
unsafe impl<T: Sync> Send for Span<'_, T> {}
unsafe impl<T: Sync> Sync for Span<'_, T> {}

impl<T> Clone for Span<'_, T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Span<'_, T> {}

impl<T> fmt::Debug for Span<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Span")
            .field("ptr", &self.ptr)
            .field("len", &self.len)
            .finish()
    }
}

/// Identity equality: pointer AND count. Element-wise equivalence is the
/// `algo::equal` algorithm, deliberately distinct.
impl<T> PartialEq for Span<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr && self.len == other.len
    }
}

impl<T> Eq for Span<'_, T> {}

impl<'a, T> Span<'a, T> {
    /// The canonical empty span: null pointer, zero count.
    #[inline]
    pub const fn empty() -> Self {
        Span {
            ptr: core::ptr::null(),
            len: 0,
            _marker: PhantomData,
        }
    }

    /// View an existing slice.
    #[inline]
    pub const fn new(slice: &'a [T]) -> Self {
        Span {
            ptr: slice.as_ptr(),
            len: slice.len(),
            _marker: PhantomData,
        }
    }

    /// View `count` elements starting at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr..ptr + count` must be a contiguous region of initialized `T`,
    /// valid and unmoved for `'a`. A null `ptr` is allowed only with
    /// `count == 0`.
    #[inline]
    pub const unsafe fn from_raw_parts(ptr: *const T, count: usize) -> Self {
        Span {
            ptr,
            len: count,
            _marker: PhantomData,
        }
    }

    /// View an exclusive slice as a span of cells, the write-side entry
    /// point for the copy/move/swap algorithms.
    #[inline]
    pub fn from_mut(slice: &'a mut [T]) -> Span<'a, Cell<T>> {
        Span::new(Cell::from_mut(slice).as_slice_of_cells())
    }

    /// The region as a slice. Empty-safe: an empty span yields `&[]` no
    /// matter what its pointer holds.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        if self.len == 0 {
            &[]
        } else {
            unsafe { core::slice::from_raw_parts(self.ptr, self.len) }
        }
    }

    #[inline(always)]
    fn addr(&self) -> usize {
        self.ptr as usize
    }

    #[inline(always)]
    fn end_addr(&self) -> usize {
        self.addr() + self.len * size_of::<T>()
    }

    /// Smallest span covering both operands.
    ///
    /// Contract: both operands are sub-spans of ONE backing region (this is
    /// not checkable from raw pointers). Debug builds additionally assert
    /// the operands overlap or touch; disjoint inputs would otherwise
    /// silently cover the gap between them.
    ///
    /// The set operations recover element counts from addresses, so they
    /// reject zero-sized element types at compile time:
    ///
    /// ```compile_fail
    /// use tola_ranges::Span;
    ///
    /// let units = [(), (), ()];
    /// let v = Span::new(&units);
    /// let _ = v.union(&v);
    /// ```
    pub fn union(&self, other: &Self) -> Self {
        const { assert!(size_of::<T>() != 0, "span set ops on zero-sized elements") };
        if self.len == 0 {
            return *other;
        }
        if other.len == 0 {
            return *self;
        }
        debug_assert!(
            self.end_addr() >= other.addr() && other.end_addr() >= self.addr(),
            "union of disjoint spans"
        );
        let (base, start) = if self.addr() <= other.addr() {
            (self.ptr, self.addr())
        } else {
            (other.ptr, other.addr())
        };
        let end = self.end_addr().max(other.end_addr());
        Span {
            ptr: base,
            len: (end - start) / size_of::<T>(),
            _marker: PhantomData,
        }
    }

    /// Overlapping part of both operands; the canonical empty span when they
    /// are disjoint. Same same-backing and non-zero-sized-element contract
    /// as [`Span::union`].
    pub fn intersect(&self, other: &Self) -> Self {
        const { assert!(size_of::<T>() != 0, "span set ops on zero-sized elements") };
        let start = self.addr().max(other.addr());
        let end = self.end_addr().min(other.end_addr());
        if self.len == 0 || other.len == 0 || end <= start {
            return Span::empty();
        }
        let base = if self.addr() >= other.addr() {
            self.ptr
        } else {
            other.ptr
        };
        Span {
            ptr: base,
            len: (end - start) / size_of::<T>(),
            _marker: PhantomData,
        }
    }

    /// Parts of `self` before and after `other`, as `(left, right)`.
    /// Same same-backing and non-zero-sized-element contract as
    /// [`Span::union`].
    pub fn difference(&self, other: &Self) -> (Self, Self) {
        const { assert!(size_of::<T>() != 0, "span set ops on zero-sized elements") };
        if other.len == 0 {
            return (*self, Span::empty());
        }
        let left_end = other.addr().clamp(self.addr(), self.end_addr());
        let left = Span {
            ptr: self.ptr,
            len: (left_end - self.addr()) / size_of::<T>(),
            _marker: PhantomData,
        };
        let right_start = other.end_addr().clamp(self.addr(), self.end_addr());
        let right = Span {
            ptr: unsafe { self.ptr.add((right_start - self.addr()) / size_of::<T>()) },
            len: (self.end_addr() - right_start) / size_of::<T>(),
            _marker: PhantomData,
        };
        (left, right)
    }
}

impl<'a, T> From<&'a [T]> for Span<'a, T> {
    #[inline]
    fn from(slice: &'a [T]) -> Self {
        Span::new(slice)
    }
}

impl<T> Default for Span<'_, T> {
    #[inline]
    fn default() -> Self {
        Span::empty()
    }
}

// =============================================================================
// Tier impls - Span sits at the top of the lattice
// =============================================================================

impl<'a, T> Forward for Span<'a, T> {
    type Item = &'a T;

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    fn front(&self) -> &'a T {
        debug_assert!(self.len > 0, "front on empty span");
        unsafe { &*self.ptr }
    }

    #[inline(always)]
    fn pop_front(&self) -> Self {
        debug_assert!(self.len > 0, "pop_front on empty span");
        Span {
            ptr: unsafe { self.ptr.add(1) },
            len: self.len - 1,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Bidirectional for Span<'a, T> {
    #[inline(always)]
    fn back(&self) -> &'a T {
        debug_assert!(self.len > 0, "back on empty span");
        unsafe { &*self.ptr.add(self.len - 1) }
    }

    #[inline(always)]
    fn pop_back(&self) -> Self {
        debug_assert!(self.len > 0, "pop_back on empty span");
        Span {
            ptr: self.ptr,
            len: self.len - 1,
            _marker: PhantomData,
        }
    }
}

impl<T> Counted for Span<'_, T> {
    #[inline(always)]
    fn count(&self) -> usize {
        self.len
    }
}

impl<'a, T> RandomAccess for Span<'a, T> {
    #[inline(always)]
    fn at(&self, index: usize) -> &'a T {
        debug_assert!(index < self.len, "span index out of range");
        unsafe { &*self.ptr.add(index) }
    }

    #[inline(always)]
    fn select(&self, offset: usize, count: usize) -> Self {
        debug_assert!(
            offset.checked_add(count).is_some_and(|end| end <= self.len),
            "span select out of range"
        );
        Span {
            ptr: unsafe { self.ptr.add(offset) },
            len: count,
            _marker: PhantomData,
        }
    }
}

impl<T> Contiguous for Span<'_, T> {
    type Elem = T;

    #[inline(always)]
    fn data(&self) -> *const T {
        self.ptr
    }
}

impl<'a, T> Reversible for Span<'a, T> {
    type Reversed = Reverse<Self>;

    #[inline]
    fn reversed(self) -> Self::Reversed {
        Reverse::new(self)
    }
}
