//! Red-black tree properties.

use crate::test_utils::distinct_keys;
use dsa_arena::engine::rbtree::RedBlackTree;
use dsa_arena::{Color, Diagnosis};
use proptest::prelude::*;

proptest! {
    /// Settled inserts always leave a valid tree holding every key in order.
    #[test]
    fn settled_inserts_keep_invariants(keys in distinct_keys(60)) {
        let mut tree = RedBlackTree::new();
        for &k in &keys {
            tree.insert_settled(k).unwrap();
            let report = tree.check_invariants();
            prop_assert!(report.is_valid(), "after {}: {:?}", k, report);
        }
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        prop_assert_eq!(tree.keys_in_order(), sorted);

        // height bound of a valid red-black tree
        let bound = 2 * (usize::BITS - (keys.len() + 1).leading_zeros()) as usize;
        prop_assert!(tree.height() <= bound.max(1));
    }

    /// Following the diagnosis step by step reaches the same valid state.
    #[test]
    fn guided_orders_always_settle(keys in distinct_keys(40)) {
        let mut tree = RedBlackTree::new();
        for &k in &keys {
            let report = tree.insert(k).unwrap();
            let mut pending = report.violation.then_some(report.node);
            while let Some(node) = pending {
                let c = match tree.diagnose(node).unwrap() {
                    Diagnosis::Recolor => tree.apply_recolor(node).unwrap(),
                    Diagnosis::Realign(_) => tree.apply_realign(node).unwrap(),
                    Diagnosis::Stable => break,
                };
                prop_assert!(c.accepted);
                pending = c.next_violation;
            }
            tree.finish_cycle();
            prop_assert!(tree.check_invariants().is_valid());
        }
    }

    /// A wrong order is refused and leaves the tree untouched.
    #[test]
    fn wrong_order_is_refused_without_change(keys in distinct_keys(40)) {
        let mut tree = RedBlackTree::new();
        for &k in &keys {
            let report = tree.insert(k).unwrap();
            if report.violation {
                let before = tree.snapshot();
                let c = match tree.diagnose(report.node).unwrap() {
                    Diagnosis::Recolor => tree.apply_realign(report.node).unwrap(),
                    Diagnosis::Realign(_) => tree.apply_recolor(report.node).unwrap(),
                    Diagnosis::Stable => unreachable!("violation reported"),
                };
                prop_assert!(!c.accepted);
                prop_assert!(c.reason.is_some());
                prop_assert_eq!(c.next_violation, Some(report.node));
                prop_assert_eq!(tree.snapshot(), before);
            }
            tree.settle(report.node).unwrap();
        }
    }

    /// Snapshots are read-only: taking one twice yields the same view.
    #[test]
    fn snapshot_is_idempotent(keys in distinct_keys(30)) {
        let mut tree = RedBlackTree::new();
        for &k in &keys {
            tree.insert_settled(k).unwrap();
        }
        let first = tree.snapshot();
        prop_assert_eq!(tree.snapshot(), first.clone());
        prop_assert_eq!(first.node_count(), keys.len());
        prop_assert_eq!(first.edge_count(), keys.len().saturating_sub(1));
    }
}

#[test]
fn root_is_black_after_every_settled_insert() {
    let mut tree = RedBlackTree::new();
    for k in [41, 38, 31, 12, 19, 8] {
        tree.insert_settled(k).unwrap();
        assert_eq!(tree.color_of(tree.root()), Color::Black);
    }
}

#[test]
fn duplicate_key_is_rejected() {
    let mut tree = RedBlackTree::new();
    tree.insert_settled(7).unwrap();
    assert!(tree.insert(7).is_err());
    assert_eq!(tree.len(), 1);
}
