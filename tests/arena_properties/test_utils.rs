//! Shared generators and oracles.

use dsa_arena::{EdgeSpec, NodeSpec};
use proptest::prelude::*;

/// Node ids "n0".."n{count-1}".
pub fn nodes(count: usize) -> Vec<NodeSpec> {
    (0..count)
        .map(|i| NodeSpec::new(format!("n{}", i), format!("Node {}", i)))
        .collect()
}

/// A small graph: node count and a list of (u, v, weight) triples.
pub fn small_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize, i64)>)> {
    (2usize..7).prop_flat_map(|n| {
        let edge = (0..n, 0..n, 0i64..50);
        (Just(n), prop::collection::vec(edge, 0..14))
    })
}

pub fn edges(raw: &[(usize, usize, i64)]) -> Vec<EdgeSpec> {
    raw.iter()
        .map(|&(u, v, w)| EdgeSpec::new(format!("n{}", u), format!("n{}", v), w))
        .collect()
}

/// Cheapest simple-path cost by exhaustive DFS. `None` when unreachable.
pub fn brute_force(n: usize, raw: &[(usize, usize, i64)], start: usize, end: usize) -> Option<i64> {
    fn dfs(
        at: usize,
        end: usize,
        raw: &[(usize, usize, i64)],
        seen: &mut Vec<bool>,
        cost: i64,
        best: &mut Option<i64>,
    ) {
        if at == end {
            *best = Some(best.map_or(cost, |b| b.min(cost)));
            return;
        }
        for &(u, v, w) in raw {
            let next = if u == at {
                v
            } else if v == at {
                u
            } else {
                continue;
            };
            if seen[next] {
                continue;
            }
            seen[next] = true;
            dfs(next, end, raw, seen, cost + w, best);
            seen[next] = false;
        }
    }

    let mut seen = vec![false; n];
    seen[start] = true;
    let mut best = None;
    dfs(start, end, raw, &mut seen, 0, &mut best);
    best
}

/// Keys without duplicates, in generation order.
pub fn distinct_keys(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-500i64..500, 0..max_len).prop_map(|mut keys| {
        let mut seen = std::collections::HashSet::new();
        keys.retain(|k| seen.insert(*k));
        keys
    })
}
