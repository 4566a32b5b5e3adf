//! Integration tests for persistent collections
//!
//! Tests the structural-sharing wrappers backing builder group lists.

use itemloom_foundation::{ImSet, ImVec};

// =============================================================================
// Persistent vectors
// =============================================================================

#[test]
fn vec_modifications_leave_originals_intact() {
    let a: ImVec<i32> = (0..5).collect();
    let b = a.push_back(5);
    let c = b.append([6, 7]);

    assert_eq!(a.len(), 5);
    assert_eq!(b.len(), 6);
    assert_eq!(c.len(), 8);
    assert_eq!(c.last(), Some(&7));
}

#[test]
fn vec_equality_is_elementwise_and_ordered() {
    let a: ImVec<&str> = ["x", "y"].into_iter().collect();
    let b: ImVec<&str> = ["x", "y"].into_iter().collect();
    let c: ImVec<&str> = ["y", "x"].into_iter().collect();

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn vec_iterates_in_insertion_order() {
    let v: ImVec<i32> = [3, 1, 2].into_iter().collect();
    let collected: Vec<_> = v.iter().copied().collect();
    assert_eq!(collected, vec![3, 1, 2]);
}

// =============================================================================
// Persistent sets
// =============================================================================

#[test]
fn set_insert_remove_are_persistent() {
    let empty: ImSet<&str> = ImSet::new();
    let one = empty.insert("a");
    let two = one.insert("b");
    let back = two.remove(&"b");

    assert!(empty.is_empty());
    assert_eq!(two.len(), 2);
    assert_eq!(back, one);
}

#[test]
fn set_equality_ignores_order() {
    let a: ImSet<i32> = [1, 2, 3].into_iter().collect();
    let b: ImSet<i32> = [3, 1, 2].into_iter().collect();
    assert_eq!(a, b);
}
