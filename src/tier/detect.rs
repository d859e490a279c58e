//! Autoref-based tier detection machinery.
//!
//! This module implements the "Inherent Const Fallback" pattern for
//! compile-time tier detection on concrete view types.
//!
//! ## How it works
//!
//! For each tier T we want to detect:
//! 1. Define a fallback trait with `const IS_T: bool = false`
//! 2. Implement the fallback for `Detect<X>` for all X
//! 3. Implement an inherent const `IS_T = true` for `Detect<X>` where `X: T`
//!
//! When resolving `Detect::<Concrete>::IS_T`, the compiler:
//! - If `Concrete: T`, finds the inherent const (true)
//! - Otherwise, finds the trait const (false)
//!
//! ## Limitation
//!
//! This only works for **concrete types** known at the call site.
//! It does NOT work in generic contexts like `fn foo<V>()`.

use core::marker::PhantomData;

use crate::tier::{Bidirectional, Contiguous, Counted, Forward, RandomAccess};

/// Detection wrapper type.
#[doc(hidden)]
pub struct Detect<T>(PhantomData<T>);

// =============================================================================
// Tier Detection (generated)
// =============================================================================

/// Generate fallback trait + inherent const for a tier.
macro_rules! impl_tier_detect {
    ($Tier:ident) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$Tier Fallback>] { const [<IS_ $Tier:snake:upper>]: bool = false; }
            impl<T> [<$Tier Fallback>] for Detect<T> {}
            impl<T: $Tier> Detect<T> { pub const [<IS_ $Tier:snake:upper>]: bool = true; }
        }
    };
}

impl_tier_detect!(Forward);
impl_tier_detect!(Bidirectional);
impl_tier_detect!(Counted);
impl_tier_detect!(RandomAccess);
impl_tier_detect!(Contiguous);

/// Const-bool tier query for a concrete view type.
///
/// ```ignore
/// use tola_ranges::{tier_check, Span};
///
/// const _: () = assert!(tier_check!(Span<'static, u8>: Contiguous));
/// assert!(!tier_check!(Reverse<Span<'static, u8>>: Contiguous));
/// ```
#[macro_export]
macro_rules! tier_check {
    ($ty:ty: Forward) => {{
        #[allow(unused_imports)]
        use $crate::tier::detect::ForwardFallback as _;
        $crate::tier::detect::Detect::<$ty>::IS_FORWARD
    }};
    ($ty:ty: Bidirectional) => {{
        #[allow(unused_imports)]
        use $crate::tier::detect::BidirectionalFallback as _;
        $crate::tier::detect::Detect::<$ty>::IS_BIDIRECTIONAL
    }};
    ($ty:ty: Counted) => {{
        #[allow(unused_imports)]
        use $crate::tier::detect::CountedFallback as _;
        $crate::tier::detect::Detect::<$ty>::IS_COUNTED
    }};
    ($ty:ty: RandomAccess) => {{
        #[allow(unused_imports)]
        use $crate::tier::detect::RandomAccessFallback as _;
        $crate::tier::detect::Detect::<$ty>::IS_RANDOM_ACCESS
    }};
    ($ty:ty: Contiguous) => {{
        #[allow(unused_imports)]
        use $crate::tier::detect::ContiguousFallback as _;
        $crate::tier::detect::Detect::<$ty>::IS_CONTIGUOUS
    }};
}
