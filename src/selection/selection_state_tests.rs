//! Tests for the selection set

use super::*;
use crate::test_utils::test_helpers::{product, test_products};
use proptest::prelude::*;
use std::collections::HashSet;

// =========================================================================
// Unit Tests
// =========================================================================

#[test]
fn test_new_selection_is_empty() {
    let selection = SelectionSet::new();
    assert!(selection.is_empty());
    assert_eq!(selection.len(), 0);
    assert!(selection.list().is_empty());
}

#[test]
fn test_toggle_adds_then_removes() {
    let mut selection = SelectionSet::new();
    let cleanser = product(1, "Cleanser");

    assert!(selection.toggle(&cleanser));
    assert!(selection.contains(1));

    assert!(!selection.toggle(&cleanser));
    assert!(!selection.contains(1));
    assert!(selection.is_empty());
}

#[test]
fn test_list_keeps_insertion_order() {
    let mut selection = SelectionSet::new();
    let products = test_products();
    selection.toggle(&products[2]);
    selection.toggle(&products[0]);
    selection.toggle(&products[4]);

    let ids: Vec<_> = selection.list().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 1, 5]);
}

#[test]
fn test_retoggle_moves_to_end() {
    let mut selection = SelectionSet::new();
    let products = test_products();
    selection.toggle(&products[0]);
    selection.toggle(&products[1]);
    selection.toggle(&products[0]);
    selection.toggle(&products[0]);

    let ids: Vec<_> = selection.list().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[test]
fn test_remove_present_and_absent() {
    let mut selection = SelectionSet::new();
    selection.toggle(&product(1, "Cleanser"));
    selection.toggle(&product(2, "Toner"));

    let removed = selection.remove(1);
    assert_eq!(removed.map(|p| p.name), Some("Cleanser".to_string()));
    assert!(selection.remove(1).is_none());
    assert_eq!(selection.len(), 1);
}

#[test]
fn test_clear() {
    let mut selection = SelectionSet::new();
    for p in test_products() {
        selection.toggle(&p);
    }
    selection.clear();
    assert!(selection.is_empty());
}

// =========================================================================
// Property Tests
// =========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Toggling the same product twice leaves the set as it was
    #[test]
    fn prop_double_toggle_is_noop(
        initial in prop::collection::vec(0u32..20, 0..10),
        target in 0u32..20,
    ) {
        let mut selection = SelectionSet::new();
        for id in initial {
            selection.toggle(&product(id, "p"));
        }
        let before: Vec<_> = selection.list().iter().map(|p| p.id).collect();
        let was_selected = selection.contains(target);

        selection.toggle(&product(target, "p"));
        selection.toggle(&product(target, "p"));

        let after: Vec<_> = selection.list().iter().map(|p| p.id).collect();
        prop_assert_eq!(selection.contains(target), was_selected);
        if !was_selected {
            prop_assert_eq!(before, after);
        } else {
            // Re-adding appends, membership is unchanged
            let before_set: HashSet<_> = before.into_iter().collect();
            let after_set: HashSet<_> = after.into_iter().collect();
            prop_assert_eq!(before_set, after_set);
        }
    }

    // No sequence of toggles or removals produces duplicate ids
    #[test]
    fn prop_no_duplicate_ids(ops in prop::collection::vec((prop::bool::ANY, 0u32..8), 0..50)) {
        let mut selection = SelectionSet::new();
        for (is_toggle, id) in ops {
            if is_toggle {
                selection.toggle(&product(id, "p"));
            } else {
                selection.remove(id);
            }
        }

        let ids: Vec<_> = selection.list().iter().map(|p| p.id).collect();
        let unique: HashSet<_> = ids.iter().copied().collect();
        prop_assert_eq!(ids.len(), unique.len());
    }
}
