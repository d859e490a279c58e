//! # Layer 3: Generic Algorithms
//!
//! Written purely against the tier traits, so they run unchanged over any
//! adapter composition, present or future.
//!
//! Every loop is driven by `is_empty` alone and runs to completion; early
//! termination is only the caller choosing to stop popping. The write-side
//! algorithms take cell views (see [`Span::from_mut`](crate::Span::from_mut))
//! and never race: a `Cell` span cannot cross threads.

use core::cell::Cell;

use crate::tier::{Bidirectional, Forward, RandomAccess};

/// Apply `f` to every element, front to back. Zero calls on an empty view.
pub fn for_each<V, F>(view: V, mut f: F)
where
    V: Forward,
    F: FnMut(V::Item),
{
    let mut v = view;
    while !v.is_empty() {
        f(v.front());
        v = v.pop_front();
    }
}

/// Count by popping to exhaustion. Works on any Forward view; Counted views
/// answer in O(1) through [`Counted::count`](crate::tier::Counted::count)
/// or the `measured!` selector instead.
pub fn walk_count<V: Forward>(view: V) -> usize {
    let mut v = view;
    let mut n = 0;
    while !v.is_empty() {
        n += 1;
        v = v.pop_front();
    }
    n
}

/// Element-wise equivalence: same length, equal elements in order. Distinct
/// from span identity equality.
pub fn equal<A, B>(a: A, b: B) -> bool
where
    A: Forward,
    B: Forward,
    A::Item: PartialEq<B::Item>,
{
    let (mut a, mut b) = (a, b);
    while !a.is_empty() && !b.is_empty() {
        if a.front() != b.front() {
            return false;
        }
        a = a.pop_front();
        b = b.pop_front();
    }
    a.is_empty() && b.is_empty()
}

/// Clone every element of `src` into `dst`, front to back, returning the
/// unfilled tail of `dst`.
///
/// Contract: `dst` is at least as long as `src`. Overlap discipline is the
/// caller's (the views may alias one backing store).
pub fn copy_into<'s, 'd, T, S, D>(src: S, dst: D) -> D
where
    T: Clone + 's + 'd,
    S: Forward<Item = &'s T>,
    D: Forward<Item = &'d Cell<T>>,
{
    let (mut src, mut dst) = (src, dst);
    while !src.is_empty() {
        debug_assert!(!dst.is_empty(), "copy into shorter view");
        dst.front().set(src.front().clone());
        src = src.pop_front();
        dst = dst.pop_front();
    }
    dst
}

/// Move every element of `src` into `dst`, leaving `T::default()` behind in
/// the source cells. Returns the unfilled tail of `dst`; same length
/// contract as [`copy_into`].
pub fn move_into<'s, 'd, T, S, D>(src: S, dst: D) -> D
where
    T: Default + 's + 'd,
    S: Forward<Item = &'s Cell<T>>,
    D: Forward<Item = &'d Cell<T>>,
{
    let (mut src, mut dst) = (src, dst);
    while !src.is_empty() {
        debug_assert!(!dst.is_empty(), "move into shorter view");
        dst.front().set(src.front().take());
        src = src.pop_front();
        dst = dst.pop_front();
    }
    dst
}

/// Swap elements pairwise until either view empties. Returns both
/// remainders.
pub fn swap_ranges<'a, 'b, T, A, B>(a: A, b: B) -> (A, B)
where
    T: 'a + 'b,
    A: Forward<Item = &'a Cell<T>>,
    B: Forward<Item = &'b Cell<T>>,
{
    let (mut a, mut b) = (a, b);
    while !a.is_empty() && !b.is_empty() {
        a.front().swap(b.front());
        a = a.pop_front();
        b = b.pop_front();
    }
    (a, b)
}

/// The view minus its first `n` elements, by popping.
/// Precondition: the view holds at least `n` elements.
pub fn drop_front<V: Forward>(view: V, n: usize) -> V {
    let mut v = view;
    for _ in 0..n {
        debug_assert!(!v.is_empty(), "drop_front past the end");
        v = v.pop_front();
    }
    v
}

/// The view minus its last `n` elements, by popping.
/// Precondition: the view holds at least `n` elements.
pub fn drop_back<V: Bidirectional>(view: V, n: usize) -> V {
    let mut v = view;
    for _ in 0..n {
        debug_assert!(!v.is_empty(), "drop_back past the end");
        v = v.pop_back();
    }
    v
}

/// The first `n` elements. Precondition: `n <= count`.
pub fn take_front<V: RandomAccess>(view: V, n: usize) -> V {
    view.select(0, n)
}

/// Split into `[0, index)` and `[index, count)`.
/// Precondition: `index <= count`.
pub fn split_at<V: RandomAccess>(view: V, index: usize) -> (V, V) {
    let rest = view.count() - index;
    (view.select(0, index), view.select(index, rest))
}

/// Sub-view `[from, to)`. Precondition: `from <= to <= count`.
pub fn slice<V: RandomAccess>(view: V, from: usize, to: usize) -> V {
    debug_assert!(from <= to, "slice bounds reversed");
    view.select(from, to - from)
}
