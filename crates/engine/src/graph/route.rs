//! Player routes: incremental walks over a [`RouteGraph`] and their scoring
//! against the optimum.

use serde::{Deserialize, Serialize};

use arena_core::{ArenaError, ArenaResult};

use super::types::Cost;
use super::RouteGraph;

/// A walk in progress from a fixed start toward a target.
///
/// Each hop must follow an edge from the current node to a node not yet
/// visited. Parallel edges are charged at their cheapest weight.
#[derive(Debug, Clone)]
pub struct RouteWalk<'g> {
    graph: &'g RouteGraph,
    target: usize,
    path: Vec<usize>,
    hops: Vec<u32>,
    cost: u64,
}

impl<'g> RouteWalk<'g> {
    /// Begin a walk at `start` heading for `target`.
    pub fn new(graph: &'g RouteGraph, start: &str, target: &str) -> ArenaResult<Self> {
        let start = graph.index_of(start)?;
        let target = graph.index_of(target)?;
        Ok(Self {
            graph,
            target,
            path: vec![start],
            hops: Vec::new(),
            cost: 0,
        })
    }

    /// Move to an adjacent, unvisited node. Returns the weight paid.
    pub fn step(&mut self, to: &str) -> ArenaResult<u32> {
        let next = self.graph.index_of(to)?;
        if self.path.contains(&next) {
            return Err(ArenaError::invalid_input(format!(
                "Node {} is already on the route",
                to
            )));
        }
        let weight = self
            .graph
            .adjacency
            .cheapest_between(self.current_index(), next)
            .ok_or_else(|| {
                ArenaError::invalid_input(format!(
                    "No road from {} to {}",
                    self.current(),
                    to
                ))
            })?;

        self.path.push(next);
        self.hops.push(weight);
        self.cost = self.cost.saturating_add(u64::from(weight));
        Ok(weight)
    }

    /// Take back the last hop and refund its weight.
    ///
    /// Returns false when only the start remains.
    pub fn undo(&mut self) -> bool {
        match self.hops.pop() {
            Some(weight) => {
                self.path.pop();
                self.cost -= u64::from(weight);
                true
            }
            None => false,
        }
    }

    /// True once the walk stands on the target.
    pub fn reached(&self) -> bool {
        self.current_index() == self.target
    }

    /// Id of the node the walk currently stands on.
    pub fn current(&self) -> &str {
        self.graph.id_of(self.current_index()).unwrap_or_default()
    }

    /// Total weight paid so far.
    pub fn cost(&self) -> u64 {
        self.cost
    }

    /// Visited node ids, start first.
    pub fn path(&self) -> Vec<String> {
        self.path
            .iter()
            .filter_map(|&i| self.graph.id_of(i).map(str::to_string))
            .collect()
    }

    fn current_index(&self) -> usize {
        // path always holds at least the start
        self.path[self.path.len() - 1]
    }
}

/// Score of a completed player route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteVerdict {
    /// Total weight of the player's route.
    pub walked_cost: u64,
    /// Minimum achievable cost.
    pub optimal_cost: Cost,
    /// One optimal route.
    pub optimal_path: Vec<String>,
    /// True when the player's route is no more expensive than the optimum.
    pub beats_optimum: bool,
}

/// Walk `route` over `graph` and compare it with the optimum.
///
/// The route must begin at `start`, end at `end`, and follow edges without
/// revisiting a node.
pub fn evaluate_route(
    graph: &RouteGraph,
    route: &[String],
    start: &str,
    end: &str,
) -> ArenaResult<RouteVerdict> {
    let (first, rest) = route
        .split_first()
        .ok_or_else(|| ArenaError::invalid_input("Route is empty"))?;
    if first != start {
        return Err(ArenaError::invalid_input(format!(
            "Route must start at {}, not {}",
            start, first
        )));
    }

    let mut walk = RouteWalk::new(graph, start, end)?;
    for hop in rest {
        walk.step(hop)?;
    }
    if !walk.reached() {
        return Err(ArenaError::invalid_input(format!(
            "Route ends at {}, not {}",
            walk.current(),
            end
        )));
    }

    let optimum = graph.shortest_path(start, end)?;
    let beats_optimum = optimum
        .cost
        .finite()
        .is_some_and(|best| walk.cost() <= best);

    tracing::debug!(
        walked = walk.cost(),
        optimal = %optimum.cost,
        beats_optimum,
        "route evaluated"
    );

    Ok(RouteVerdict {
        walked_cost: walk.cost(),
        optimal_cost: optimum.cost,
        optimal_path: optimum.path,
        beats_optimum,
    })
}
