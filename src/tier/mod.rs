//! # Layer 1: Capability Tiers
//!
//! One trait per tier; supertraits encode the inclusion lattice:
//!
//! ```text
//! Forward ⊂ Bidirectional ⊂ RandomAccess ⊂ Contiguous
//!             Counted ⊂ RandomAccess   (Counted is otherwise orthogonal)
//! ```
//!
//! A type participates in a tier purely by implementing the trait; there is
//! no common base type and no declared intent. Using a view where a tier is
//! unmet fails to resolve at the call site, naming the missing trait.
//!
//! ## Value semantics
//!
//! Views are small, copyable and non-owning. "Advancing" (`pop_front`)
//! returns a NEW view instead of mutating shared state, so any number of
//! independently-advancing observers may share one backing store.
//!
//! ## Items
//!
//! `Forward::Item` is a reference-like value (`&'a T` for a span, a tuple of
//! items for a zip). Items borrow from the BACKING store, not from the view
//! value, so they outlive any particular copy of the view.

#[cfg(feature = "detect")]
pub mod detect;

#[cfg(feature = "detect")]
pub mod dispatch;

/// Forward tier: emptiness, first element, advance-from-front.
///
/// Laws:
/// - a non-empty view yields `front` and a `pop_front` successor;
/// - repeated `pop_front` until `is_empty` visits every element exactly once,
///   in order.
///
/// `front` and `pop_front` on an empty view are contract violations: debug
/// builds assert, release builds are undefined.
pub trait Forward: Clone {
    /// Element handle produced by this view.
    type Item;

    /// True iff the view has no elements left.
    fn is_empty(&self) -> bool;

    /// First element. Precondition: `!self.is_empty()`.
    fn front(&self) -> Self::Item;

    /// The view minus its first element. Precondition: `!self.is_empty()`.
    #[must_use]
    fn pop_front(&self) -> Self;
}

/// Bidirectional tier: Forward plus access from the back.
pub trait Bidirectional: Forward {
    /// Last element. Precondition: `!self.is_empty()`.
    fn back(&self) -> Self::Item;

    /// The view minus its last element. Precondition: `!self.is_empty()`.
    #[must_use]
    fn pop_back(&self) -> Self;
}

/// Counted tier: Forward plus O(1)-ish length.
///
/// `count` must agree with the number of `pop_front` steps to exhaustion.
pub trait Counted: Forward {
    /// Number of remaining elements.
    fn count(&self) -> usize;
}

/// RandomAccess tier: indexed access and sub-views.
pub trait RandomAccess: Bidirectional + Counted {
    /// Element at `index`. Precondition: `index < self.count()`.
    fn at(&self, index: usize) -> Self::Item;

    /// Sub-view `[offset, offset + count)`.
    ///
    /// Precondition: `offset + count <= self.count()`. Out-of-bounds is a
    /// contract violation, never clamped.
    #[must_use]
    fn select(&self, offset: usize, count: usize) -> Self;
}

/// Contiguous tier: the elements sit in one forward memory run.
pub trait Contiguous: RandomAccess {
    /// Backing element type.
    type Elem;

    /// Address of the first element. Unspecified (and not dereferenceable)
    /// when the view is empty.
    fn data(&self) -> *const Self::Elem;
}
