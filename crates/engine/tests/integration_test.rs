//! Engine Integration Tests
//!
//! These tests drive both engines end-to-end through their public surface:
//! - Route Rally: build a level graph, walk it hop by hop, compare to Dijkstra
//! - Castle Defender: insert, diagnose, correct, snapshot
//! - Wire shapes of the results

use arena_core::Color;
use arena_engine::graph::levels::{builtin_levels, level};
use arena_engine::graph::route::{evaluate_route, RouteWalk};
use arena_engine::rbtree::{Diagnosis, Role, Shape};
use arena_engine::{compute, ComputeRequest, Cost, EdgeSpec, NodeSpec, RedBlackTree, RouteGraph};

/// Test: walking the optimal Pakistan route matches the computed optimum
#[test]
fn test_walk_matches_dijkstra_on_pakistan() {
    let lvl = level(1).unwrap();
    let graph = RouteGraph::from_request(&lvl.request()).unwrap();

    let mut walk = RouteWalk::new(&graph, &lvl.start, &lvl.end).unwrap();
    for hop in ["mul", "suk", "khi"] {
        walk.step(hop).unwrap();
    }
    assert!(walk.reached());

    let best = graph.shortest_path(&lvl.start, &lvl.end).unwrap();
    assert_eq!(best.cost, Cost::Finite(walk.cost()));
    assert_eq!(best.path, walk.path());
}

/// Test: a detour, undone hop by hop, can still finish optimally
#[test]
fn test_walk_undo_recovers_from_detour() {
    let lvl = level(3).unwrap();
    let graph = RouteGraph::from_request(&lvl.request()).unwrap();
    let mut walk = RouteWalk::new(&graph, "syd", "lon").unwrap();

    walk.step("tok").unwrap();
    assert!(walk.undo());
    assert_eq!(walk.current(), "syd");
    assert_eq!(walk.cost(), 0);

    for hop in ["sin", "dxb", "lon"] {
        walk.step(hop).unwrap();
    }
    assert_eq!(walk.cost(), 1350);
}

/// Test: every built-in level has a reachable destination and a consistent verdict
#[test]
fn test_every_level_is_solvable() {
    for lvl in builtin_levels() {
        let req = lvl.request();
        let result = compute(&req).unwrap();
        assert!(result.optimal_cost.is_reachable(), "level {}", lvl.id);

        let graph = RouteGraph::from_request(&req).unwrap();
        let verdict = evaluate_route(&graph, &result.optimal_path, &lvl.start, &lvl.end).unwrap();
        assert!(verdict.beats_optimum);
        assert_eq!(Cost::Finite(verdict.walked_cost), result.optimal_cost);
    }
}

/// Test: compute over a JSON request produces the camelCase wire result
#[test]
fn test_compute_json_round() {
    let req: ComputeRequest = serde_json::from_str(
        r#"{
            "nodes": [{"id": "a", "label": "A"}, {"id": "b", "label": "B"}, {"id": "c", "label": "C"}],
            "edges": [{"u": "a", "v": "b", "weight": 5}],
            "start": "a",
            "end": "c"
        }"#,
    )
    .unwrap();
    let value = serde_json::to_value(compute(&req).unwrap()).unwrap();
    assert_eq!(value["optimalCost"], -1);
    assert_eq!(value["optimalPath"], serde_json::json!([]));
}

/// Test: parallel edges take the cheapest, self-loops never help
#[test]
fn test_parallel_edges_and_self_loops() {
    let nodes = vec![NodeSpec::new("a", "A"), NodeSpec::new("b", "B")];
    let edges = vec![
        EdgeSpec::new("a", "b", 9),
        EdgeSpec::new("a", "b", 4),
        EdgeSpec::new("a", "a", 0),
    ];
    let graph = RouteGraph::build(&nodes, &edges).unwrap();
    assert_eq!(graph.shortest_cost("a", "b").unwrap(), Cost::Finite(4));
    assert_eq!(graph.weight_between("a", "b").unwrap(), Some(4));
}

/// Test: the classic 10/20/30 line is repaired with a single realign
#[test]
fn test_ascending_line_is_realigned() {
    let mut tree = RedBlackTree::new();
    tree.insert(10).unwrap();
    tree.insert(20).unwrap();
    let report = tree.insert(30).unwrap();
    assert!(report.violation);
    assert_eq!(report.uncle_color, None);

    assert_eq!(
        tree.diagnose(report.node).unwrap(),
        Diagnosis::Realign(Shape::RightRight)
    );

    let refused = tree.apply_recolor(report.node).unwrap();
    assert!(!refused.accepted);
    assert_eq!(refused.next_violation, Some(report.node));

    let done = tree.apply_realign(report.node).unwrap();
    assert!(done.accepted);
    assert_eq!(done.next_violation, None);

    let snap = tree.snapshot();
    let root = &snap.nodes[0];
    assert_eq!(root.key, 20);
    assert_eq!(root.color, Color::Black);
    assert_eq!(root.role, Role::Knight);
    assert_eq!(snap.by_key(10).unwrap().color, Color::Red);
    assert_eq!(snap.by_key(30).unwrap().color, Color::Red);
    assert!(tree.check_invariants().is_valid());
}

/// Test: a red uncle triggers a recolor that reaches the root
#[test]
fn test_red_uncle_recolor_reaches_root() {
    let mut tree = RedBlackTree::new();
    for k in [20, 10, 30] {
        tree.insert(k).unwrap();
    }
    let report = tree.insert(5).unwrap();
    assert_eq!(report.uncle_color, Some(Color::Red));
    assert_eq!(tree.diagnose(report.node).unwrap(), Diagnosis::Recolor);

    let c = tree.apply_recolor(report.node).unwrap();
    assert!(c.accepted);
    assert_eq!(c.next_violation, None);
    assert_eq!(tree.color_of(tree.root()), Color::Black);
    assert_eq!(tree.black_height(), 2);
    assert!(tree.check_invariants().is_valid());
}

/// Test: settling every insert keeps a long ascending run balanced
#[test]
fn test_settled_ascending_run_stays_shallow() {
    let mut tree = RedBlackTree::new();
    for k in 1..=127 {
        tree.insert_settled(k).unwrap();
    }
    assert_eq!(tree.len(), 127);
    assert!(tree.height() <= 14);
    assert_eq!(tree.keys_in_order(), (1..=127).collect::<Vec<_>>());
    assert!(tree.check_invariants().is_valid());
}

/// Test: snapshot serializes node ids as plain integers
#[test]
fn test_snapshot_wire_shape() {
    let mut tree = RedBlackTree::new();
    tree.insert(50).unwrap();
    tree.insert(25).unwrap();
    let value = serde_json::to_value(tree.snapshot()).unwrap();
    assert_eq!(value["nodes"][0]["id"], 0);
    assert_eq!(value["nodes"][1]["role"], "sorcerer");
    assert_eq!(value["edges"][0]["parentId"], 0);
    assert_eq!(value["edges"][0]["childId"], 1);
}
