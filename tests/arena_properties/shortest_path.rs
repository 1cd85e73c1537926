//! Shortest-path properties.

use crate::test_utils::{brute_force, edges, nodes, small_graph};
use dsa_arena::engine::RouteGraph;
use dsa_arena::{Arena, Cost};
use proptest::prelude::*;

proptest! {
    /// Dijkstra agrees with exhaustive search on every small graph.
    #[test]
    fn cost_matches_brute_force((n, raw) in small_graph(), s in 0usize..7, t in 0usize..7) {
        let (s, t) = (s % n, t % n);
        let graph = RouteGraph::build(&nodes(n), &edges(&raw)).unwrap();
        let got = graph.shortest_cost(&format!("n{}", s), &format!("n{}", t)).unwrap();
        let want = brute_force(n, &raw, s, t);
        prop_assert_eq!(got.finite().map(|c| c as i64), want);
    }

    /// The returned path is a real walk whose weights add up to the cost.
    #[test]
    fn path_weights_sum_to_cost((n, raw) in small_graph()) {
        let graph = RouteGraph::build(&nodes(n), &edges(&raw)).unwrap();
        let end = format!("n{}", n - 1);
        let sp = graph.shortest_path("n0", &end).unwrap();
        match sp.cost {
            Cost::Finite(cost) => {
                prop_assert_eq!(sp.path.first().map(String::as_str), Some("n0"));
                prop_assert_eq!(sp.path.last(), Some(&end));
                let mut total = 0u64;
                for hop in sp.path.windows(2) {
                    let w = graph.weight_between(&hop[0], &hop[1]).unwrap();
                    prop_assert!(w.is_some(), "{} and {} are not adjacent", hop[0], hop[1]);
                    total += u64::from(w.unwrap_or(0));
                }
                prop_assert_eq!(total, cost);
            }
            Cost::Unreachable => prop_assert!(sp.path.is_empty()),
        }
    }

    /// Start equal to end always costs zero.
    #[test]
    fn self_route_is_free((n, raw) in small_graph(), s in 0usize..7) {
        let id = format!("n{}", s % n);
        let graph = RouteGraph::build(&nodes(n), &edges(&raw)).unwrap();
        prop_assert_eq!(graph.shortest_cost(&id, &id).unwrap(), Cost::Finite(0));
    }

    /// Costs are symmetric on undirected graphs.
    #[test]
    fn cost_is_symmetric((n, raw) in small_graph()) {
        let graph = RouteGraph::build(&nodes(n), &edges(&raw)).unwrap();
        let last = format!("n{}", n - 1);
        prop_assert_eq!(
            graph.shortest_cost("n0", &last).unwrap(),
            graph.shortest_cost(&last, "n0").unwrap()
        );
    }
}

#[test]
fn isolated_target_is_unreachable_on_the_wire() {
    let arena = Arena::new();
    let result = arena
        .compute_shortest_cost(nodes(3), edges(&[(0, 1, 4)]), "n0", "n2")
        .unwrap();
    assert_eq!(result.optimal_cost, Cost::Unreachable);
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["optimalCost"], -1);
}

#[test]
fn negative_weight_is_rejected() {
    let arena = Arena::new();
    let err = arena
        .compute_shortest_cost(nodes(2), edges(&[(0, 1, -3)]), "n0", "n1")
        .unwrap_err();
    assert_eq!(err.kind(), "InvalidInput");
}
