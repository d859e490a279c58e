#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - detect: tier detection (tier_check!) and static strategy selection

//! # tola-ranges
//!
//! Capability-tiered, zero-copy range views with compile-time dispatch.
//!
//! **Non-owning view algebra for Rust.**
//!
//! ## Architecture
//!
//! A *view* is any small, copyable value for which a subset of the primitive
//! operations (`front`, `back`, `pop_front`, `pop_back`, `is_empty`, `count`,
//! `at`, `select`, `data`) resolves. Views are classified by capability tier,
//! not by concrete type:
//!
//! ```text
//! Forward ⊂ Bidirectional ⊂ RandomAccess ⊂ Contiguous
//!             Counted ⊂ RandomAccess
//! ```
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Type-level Bool (Present/Absent), record cat/rank              |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Capability Tiers                                        |
//! |  - Forward, Bidirectional, Counted, RandomAccess, Contiguous      |
//! |  - tier_check!, measured! (autoref detection, static dispatch)    |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Views                                                   |
//! |  - Span (pointer + count), Reverse, Zip (+ zip! flattening)       |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Generic Algorithms                                      |
//! |  - for_each, equal, copy/move/swap, slicing helpers               |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Dispatch
//!
//! There is no runtime tag and no virtual call anywhere. A type joins a tier
//! by implementing the trait; adapters redefine primitives by delegation;
//! foreign types hook extension points like [`impl_reversible!`] without
//! modification. Where a strict member-over-fallback priority is needed
//! (zip-argument flattening, tier detection) the crate uses the
//! inherent-item-over-trait-item resolution order, so the whole scheme is
//! settled before anything executes.
//!
//! ## Value semantics
//!
//! Every "mutating" operation returns a new view. Independent copies of one
//! view advance without interference; the backing memory itself is a shared
//! resource whose overlap discipline stays with the caller.
//!
//! ## Quick Start
//!
//! ```ignore
//! use tola_ranges::prelude::*;
//!
//! let data = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
//! let v = Span::new(&data);
//!
//! // Double reversal unwraps back to the span itself.
//! assert_eq!(reverse(reverse(v)), v);
//!
//! // Lockstep iteration, truncated to the shortest slot.
//! let names = ["a", "b", "c"];
//! let pairs = zip!(v, Span::new(&names));
//! assert_eq!(pairs.count(), 3);
//! ```

// Allow `::tola_ranges` to work inside the crate itself
extern crate self as tola_ranges;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Capability Tiers
// =============================================================================
pub mod tier;

// =============================================================================
// Layer 2: Views
// =============================================================================
pub mod view;

// =============================================================================
// Layer 3: Generic Algorithms
// =============================================================================
pub mod algo;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use tier::{Bidirectional, Contiguous, Counted, Forward, RandomAccess};
pub use view::{reverse, Reverse, Reversible, Span, Zip};

/// Common items for working with views.
pub mod prelude {
    pub use crate::algo::{
        copy_into, drop_back, drop_front, equal, for_each, move_into, slice, split_at,
        swap_ranges, take_front, walk_count,
    };
    pub use crate::tier::{Bidirectional, Contiguous, Counted, Forward, RandomAccess};
    pub use crate::view::{reverse, Reverse, Reversible, Span, Zip};
    // Note: zip!, tier_check!, measured!, impl_reversible! are #[macro_export]
    // so they're at the crate root.
}
