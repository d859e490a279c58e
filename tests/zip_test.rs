//! Zip adapter: truncation, one-level flattening, lockstep advance,
//! equality.

use tola_ranges::algo::for_each;
use tola_ranges::prelude::*;
use tola_ranges::zip;

static NUMS: [i32; 5] = [1, 2, 3, 4, 5];
static NAMES: [&str; 3] = ["one", "two", "three"];
static FLAGS: [bool; 4] = [true, false, true, false];

// =============================================================================
// Arity & truncation
// =============================================================================

#[test]
fn test_zip_truncates_to_shortest() {
    let z = zip!(Span::new(&NUMS), Span::new(&NAMES));
    assert_eq!(z.arity(), 2);
    assert_eq!(z.count(), 3);

    let mut seen = Vec::new();
    for_each(z, |(n, s)| seen.push((*n, *s)));
    assert_eq!(seen, vec![(1, "one"), (2, "two"), (3, "three")]);
}

#[test]
fn test_zip_count_computed_fresh() {
    let z = zip!(Span::new(&NUMS), Span::new(&FLAGS));
    assert_eq!(z.count(), 4);
    assert_eq!(z.pop_front().count(), 3);
    assert_eq!(z.count(), 4);
}

#[test]
fn test_empty_zip() {
    let z = zip!();
    assert_eq!(z.arity(), 0);
    assert!(z.is_empty());
    assert_eq!(z.count(), 0);
}

#[test]
fn test_zip_empty_when_any_slot_empty() {
    let z = zip!(Span::new(&NUMS), Span::<u8>::empty());
    assert!(z.is_empty());
    assert_eq!(z.count(), 0);
}

// =============================================================================
// Flattening: arity is the sum of input arities
// =============================================================================

#[test]
fn test_zip_flattening_is_associative() {
    let (a, b, c) = (Span::new(&NUMS), Span::new(&NAMES), Span::new(&FLAGS));

    let left = zip!(zip!(a, b), c);
    let right = zip!(a, zip!(b, c));
    let flat = zip!(a, b, c);

    assert_eq!(left.arity(), 3);
    assert_eq!(right.arity(), 3);
    assert_eq!(flat.arity(), 3);

    // All three are the SAME type: comparison is over the wrapped views.
    assert_eq!(left, flat);
    assert_eq!(right, flat);

    let mut seqs: Vec<Vec<(i32, &str, bool)>> = Vec::new();
    for z in [left, right, flat] {
        let mut seen = Vec::new();
        for_each(z, |(n, s, f)| seen.push((*n, *s, *f)));
        seqs.push(seen);
    }
    assert_eq!(seqs[0], seqs[1]);
    assert_eq!(seqs[1], seqs[2]);
    assert_eq!(
        seqs[2],
        vec![(1, "one", true), (2, "two", false), (3, "three", true)]
    );
}

#[test]
fn test_zip_of_empty_zip_flattens_away() {
    let z = zip!(zip!());
    assert_eq!(z.arity(), 0);
    assert!(z.is_empty());
}

#[test]
fn test_single_argument_zip() {
    let z = zip!(Span::new(&NAMES));
    assert_eq!(z.arity(), 1);
    assert_eq!(z.count(), 3);
    assert_eq!(z.front(), (&"one",));
}

// =============================================================================
// Lockstep advance & per-slot independence
// =============================================================================

#[test]
fn test_pop_front_advances_every_slot() {
    let z = zip!(Span::new(&NUMS), Span::new(&NAMES));
    let z2 = z.pop_front();
    assert_eq!(z2.front(), (&2, &"two"));
    // The original copy is untouched.
    assert_eq!(z.front(), (&1, &"one"));
}

#[test]
fn test_back_is_per_slot() {
    let a = Span::new(&NUMS).select(0, 3);
    let b = Span::new(&NAMES);
    let z = zip!(a, b);
    // Back of each wrapped view independently, in argument order.
    assert_eq!(z.back(), (&3, &"three"));
    assert_eq!(z.pop_back().back(), (&2, &"two"));
}

#[test]
fn test_zip_random_access() {
    let z = zip!(Span::new(&NUMS), Span::new(&FLAGS));
    assert_eq!(z.at(2), (&3, &true));
    let sub = z.select(1, 2);
    assert_eq!(sub.count(), 2);
    assert_eq!(sub.front(), (&2, &false));
}

#[test]
fn test_zip_reverses() {
    let a = Span::new(&NUMS).select(0, 3);
    let b = Span::new(&NAMES);
    let mut seen = Vec::new();
    for_each(reverse(zip!(a, b)), |(n, s)| seen.push((*n, *s)));
    assert_eq!(seen, vec![(3, "three"), (2, "two"), (1, "one")]);
}

// =============================================================================
// Equality: over wrapped views, never materialized tuples
// =============================================================================

#[test]
fn test_zip_equality_is_slotwise() {
    let (a, b) = (Span::new(&NUMS), Span::new(&NAMES));
    assert_eq!(zip!(a, b), zip!(a, b));
    // Advancing one slot breaks equality.
    assert_ne!(zip!(a, b), zip!(a.pop_front(), b).pop_front());
    assert_ne!(zip!(a, b), zip!(a, b).pop_front());
}

#[test]
fn test_zip_equality_is_identity_over_spans() {
    let other: [i32; 5] = [1, 2, 3, 4, 5];
    let (a, b) = (Span::new(&NUMS), Span::new(&NAMES));
    // Same contents, different backing: slots are not identity-equal.
    assert_ne!(zip!(a, b), zip!(Span::new(&other), b));
}
