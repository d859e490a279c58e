//! Record (tuple) primitives: rank and concatenation.
//!
//! This is the entire tuple interface the view layer consumes: `Arity`
//! reports the rank of a record, `TupleCat` builds a rank `N + M` record from
//! a rank-`N` and a rank-`M` one. Field access itself is structural (`t.0`,
//! `t.1`, ...) inside the generated `Zip` impls.
//!
//! Impls are macro-generated for ranks 0..=6, which bounds `Zip` arity.

/// Rank of a record, as a const.
pub trait Arity {
    const ARITY: usize;
}

/// Concatenate two records: `(A, B) ++ (C,) = (A, B, C)`.
pub trait TupleCat<Rhs> {
    type Out;

    fn cat(self, rhs: Rhs) -> Self::Out;
}

macro_rules! impl_arity {
    ($n:expr; $($T:ident),*) => {
        impl<$($T),*> Arity for ($($T,)*) {
            const ARITY: usize = $n;
        }
    };
}

impl_arity!(0;);
impl_arity!(1; A);
impl_arity!(2; A, B);
impl_arity!(3; A, B, C);
impl_arity!(4; A, B, C, D);
impl_arity!(5; A, B, C, D, E);
impl_arity!(6; A, B, C, D, E, F);

macro_rules! impl_tuple_cat {
    (($($L:ident),*), ($($R:ident),*)) => {
        impl<$($L,)* $($R,)*> TupleCat<($($R,)*)> for ($($L,)*) {
            type Out = ($($L,)* $($R,)*);

            #[inline(always)]
            #[allow(non_snake_case, clippy::unused_unit)]
            fn cat(self, rhs: ($($R,)*)) -> Self::Out {
                let ($($L,)*) = self;
                let ($($R,)*) = rhs;
                ($($L,)* $($R,)*)
            }
        }
    };
}

// All (lhs, rhs) rank pairs with a combined rank of at most 6.
impl_tuple_cat!((), ());
impl_tuple_cat!((), (R0));
impl_tuple_cat!((), (R0, R1));
impl_tuple_cat!((), (R0, R1, R2));
impl_tuple_cat!((), (R0, R1, R2, R3));
impl_tuple_cat!((), (R0, R1, R2, R3, R4));
impl_tuple_cat!((), (R0, R1, R2, R3, R4, R5));
impl_tuple_cat!((L0), ());
impl_tuple_cat!((L0), (R0));
impl_tuple_cat!((L0), (R0, R1));
impl_tuple_cat!((L0), (R0, R1, R2));
impl_tuple_cat!((L0), (R0, R1, R2, R3));
impl_tuple_cat!((L0), (R0, R1, R2, R3, R4));
impl_tuple_cat!((L0, L1), ());
impl_tuple_cat!((L0, L1), (R0));
impl_tuple_cat!((L0, L1), (R0, R1));
impl_tuple_cat!((L0, L1), (R0, R1, R2));
impl_tuple_cat!((L0, L1), (R0, R1, R2, R3));
impl_tuple_cat!((L0, L1, L2), ());
impl_tuple_cat!((L0, L1, L2), (R0));
impl_tuple_cat!((L0, L1, L2), (R0, R1));
impl_tuple_cat!((L0, L1, L2), (R0, R1, R2));
impl_tuple_cat!((L0, L1, L2, L3), ());
impl_tuple_cat!((L0, L1, L2, L3), (R0));
impl_tuple_cat!((L0, L1, L2, L3), (R0, R1));
impl_tuple_cat!((L0, L1, L2, L3, L4), ());
impl_tuple_cat!((L0, L1, L2, L3, L4), (R0));
impl_tuple_cat!((L0, L1, L2, L3, L4, L5), ());
