//! Span construction, primitive operations, and the identity-vs-equivalence
//! split.

use tola_ranges::algo::equal;
use tola_ranges::prelude::*;

// =============================================================================
// Construction & emptiness
// =============================================================================

#[test]
fn test_empty_span_is_canonical() {
    let s = Span::<u32>::empty();
    assert!(s.is_empty());
    assert_eq!(s.count(), 0);
    assert!(s.as_slice().is_empty());
    assert_eq!(s, Span::default());
}

#[test]
fn test_empty_independent_of_pointer() {
    // An exhausted span keeps a live pointer but is still logically empty.
    let data = [7u32];
    let s = Span::new(&data).pop_front();
    assert!(s.is_empty());
    assert!(!s.data().is_null());
    assert!(s.as_slice().is_empty());
}

#[test]
fn test_from_raw_parts_round_trip() {
    let data = [1u8, 2, 3];
    let s = unsafe { Span::from_raw_parts(data.as_ptr(), data.len()) };
    assert_eq!(s, Span::new(&data));
    assert_eq!(s.as_slice(), &data);
}

// =============================================================================
// Front/back/pop
// =============================================================================

#[test]
fn test_forward_visits_in_order() {
    let data = [0, 1, 2, 3, 4];
    let mut v = Span::new(&data);
    let mut seen = Vec::new();
    while !v.is_empty() {
        seen.push(*v.front());
        v = v.pop_front();
    }
    assert_eq!(seen, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_back_and_pop_back() {
    let data = [1, 2, 3];
    let v = Span::new(&data);
    assert_eq!(*v.back(), 3);
    let v = v.pop_back();
    assert_eq!(*v.back(), 2);
    assert_eq!(v.count(), 2);
    // Popping from the back leaves the data pointer in place.
    assert_eq!(v.data(), data.as_ptr());
}

#[test]
fn test_pop_front_advances_pointer() {
    let data = [1, 2, 3];
    let v = Span::new(&data).pop_front();
    assert_eq!(v.data(), unsafe { data.as_ptr().add(1) });
    assert_eq!(v.count(), 2);
}

#[test]
fn test_views_advance_independently() {
    let data = [1, 2, 3];
    let a = Span::new(&data);
    let b = a.pop_front();
    // `a` is untouched: advancing never writes through the view.
    assert_eq!(a.count(), 3);
    assert_eq!(*a.front(), 1);
    assert_eq!(*b.front(), 2);
}

// =============================================================================
// Select & at
// =============================================================================

#[test]
fn test_select_full_is_identity() {
    let data = [1, 2, 3, 4];
    let v = Span::new(&data);
    assert_eq!(v.select(0, v.count()), v);
}

#[test]
fn test_select_at_end_is_empty() {
    let data = [1, 2, 3, 4];
    let v = Span::new(&data);
    assert!(v.select(v.count(), 0).is_empty());
}

#[test]
fn test_select_sub_span() {
    let data = [10, 11, 12, 13, 14];
    let v = Span::new(&data).select(1, 3);
    assert_eq!(v.as_slice(), &[11, 12, 13]);
    assert_eq!(v.count(), 3);
}

#[test]
fn test_at_indexes_elements() {
    let data = [5, 6, 7];
    let v = Span::new(&data);
    assert_eq!(*v.at(0), 5);
    assert_eq!(*v.at(2), 7);
}

// =============================================================================
// Identity vs equivalence
// =============================================================================

#[test]
fn test_same_region_is_identity_equal() {
    let data = [1, 2, 3];
    assert_eq!(Span::new(&data), Span::new(&data));
}

#[test]
fn test_equal_contents_distinct_backing() {
    let a = [1, 2, 3];
    let b = [1, 2, 3];
    let (va, vb) = (Span::new(&a), Span::new(&b));
    // Not identity-equal, but element-wise equivalent.
    assert_ne!(va, vb);
    assert!(equal(va, vb));
}

#[test]
fn test_prefix_is_not_identity_equal() {
    let data = [1, 2, 3];
    let v = Span::new(&data);
    // Same pointer, different count.
    assert_ne!(v, v.pop_back());
}

// =============================================================================
// Set operations (same-backing contract)
// =============================================================================

#[test]
fn test_union_of_overlapping_sub_spans() {
    let data = [0, 1, 2, 3, 4, 5, 6, 7];
    let v = Span::new(&data);
    let left = v.select(1, 4); // [1..5)
    let right = v.select(3, 4); // [3..7)
    assert_eq!(left.union(&right), v.select(1, 6));
    assert_eq!(right.union(&left), v.select(1, 6));
}

#[test]
fn test_union_with_empty_operand() {
    let data = [0, 1, 2, 3];
    let v = Span::new(&data);
    assert_eq!(v.union(&Span::empty()), v);
    assert_eq!(Span::empty().union(&v), v);
}

#[test]
fn test_intersect_overlap_and_disjoint() {
    let data = [0, 1, 2, 3, 4, 5, 6, 7];
    let v = Span::new(&data);
    let left = v.select(0, 5); // [0..5)
    let right = v.select(3, 5); // [3..8)
    assert_eq!(left.intersect(&right), v.select(3, 2));

    let lo = v.select(0, 2);
    let hi = v.select(5, 2);
    assert!(lo.intersect(&hi).is_empty());
    assert_eq!(lo.intersect(&hi), Span::empty());
}

#[test]
fn test_difference_splits_around_operand() {
    let data = [0, 1, 2, 3, 4, 5, 6, 7];
    let v = Span::new(&data);
    let mid = v.select(3, 2); // [3..5)
    let (left, right) = v.difference(&mid);
    assert_eq!(left, v.select(0, 3));
    assert_eq!(right, v.select(5, 3));

    let (all, none) = v.difference(&Span::empty());
    assert_eq!(all, v);
    assert!(none.is_empty());
}

// =============================================================================
// Cell spans (write side)
// =============================================================================

#[test]
fn test_from_mut_writes_through_cells() {
    let mut data = [0, 0, 0];
    let cells = Span::from_mut(&mut data);
    cells.at(1).set(9);
    assert_eq!(data, [0, 9, 0]);
}
