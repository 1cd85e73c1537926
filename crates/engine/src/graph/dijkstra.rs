//! Single-source shortest path with a binary-heap frontier.
//!
//! Stale frontier entries are never removed; they are skipped when their
//! cost exceeds the best recorded distance. The search stops as soon as the
//! target is extracted, which is sound because weights are non-negative and
//! extraction order is therefore non-decreasing.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::adjacency::AdjacencyList;

/// Distances and predecessors produced by one search.
#[derive(Debug, Clone)]
pub(crate) struct SearchOutcome {
    /// Cost to the target, or `None` when it was never reached.
    pub cost: Option<u64>,
    /// Node indices of one optimal path, start first. Empty when unreachable.
    pub path: Vec<usize>,
    /// Number of frontier entries extracted, stale ones included.
    pub extracted: usize,
}

/// Run Dijkstra's algorithm from `start` until `target` is settled.
///
/// Both indices must be valid for `adj`.
pub(crate) fn search(adj: &AdjacencyList, start: usize, target: usize) -> SearchOutcome {
    let n = adj.node_count();
    let mut dist = vec![u64::MAX; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut frontier: BinaryHeap<Reverse<(u64, usize)>> = BinaryHeap::new();
    let mut extracted = 0;

    dist[start] = 0;
    frontier.push(Reverse((0, start)));

    while let Some(Reverse((cost, u))) = frontier.pop() {
        extracted += 1;

        if cost > dist[u] {
            continue;
        }

        if u == target {
            tracing::debug!(target_index = target, cost, extracted, "target settled");
            return SearchOutcome {
                cost: Some(cost),
                path: reconstruct(&prev, start, target),
                extracted,
            };
        }

        for &(v, weight) in adj.neighbors(u) {
            let candidate = cost.saturating_add(u64::from(weight));
            if candidate < dist[v] {
                dist[v] = candidate;
                prev[v] = Some(u);
                frontier.push(Reverse((candidate, v)));
            }
        }
    }

    SearchOutcome {
        cost: None,
        path: Vec::new(),
        extracted,
    }
}

/// Walk the predecessor chain back from `target`.
fn reconstruct(prev: &[Option<usize>], start: usize, target: usize) -> Vec<usize> {
    let mut path = vec![target];
    let mut current = target;
    while current != start {
        match prev[current] {
            Some(p) => {
                path.push(p);
                current = p;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
