//! Static strategy selection.
//!
//! Provides zero-overhead strategy dispatch based on tier membership.
//! Uses pure type selection instead of `if` branches: a `tier_check!` const
//! is lifted to a type-level `Bool`, and `Bool::If` commits to one strategy
//! type before anything runs. The unchosen strategy is never instantiated,
//! so its bounds are never required.
//!
//! Resolution is pure in the static type: for a given view type the same
//! strategy is always chosen, with no data-dependent branching.
//!
//! ## Example
//!
//! ```ignore
//! // Counted view: resolves to BySize, no walking.
//! let n = measured!(span => Span<'static, u8>);
//!
//! // Forward-only view: resolves to ByWalk.
//! let n = measured!(chain => Chain);
//! ```

use crate::algo::walk_count;
use crate::tier::{Counted, Forward};

/// A counting strategy for views of type `V`.
pub trait CountImpl<V> {
    fn count_of(view: &V) -> usize;
}

/// Strategy: ask the view (Counted tier).
pub struct BySize;

impl<V: Counted> CountImpl<V> for BySize {
    #[inline(always)]
    fn count_of(view: &V) -> usize {
        view.count()
    }
}

/// Strategy: pop a copy to exhaustion (any Forward view).
pub struct ByWalk;

impl<V: Forward> CountImpl<V> for ByWalk {
    #[inline(always)]
    fn count_of(view: &V) -> usize {
        walk_count(view.clone())
    }
}

/// Count a concrete view, selecting [`BySize`] over [`ByWalk`] at compile
/// time from `tier_check!(Ty: Counted)`.
///
/// The type must be spelled out: detection works on concrete types only.
#[macro_export]
macro_rules! measured {
    ($view:expr => $ty:ty) => {{
        type __Strategy = $crate::primitives::bool::If<
            { $crate::tier_check!($ty: Counted) },
            $crate::tier::dispatch::BySize,
            $crate::tier::dispatch::ByWalk,
        >;
        <__Strategy as $crate::tier::dispatch::CountImpl<$ty>>::count_of(&$view)
    }};
}
