//! Route Rally operations on the Arena API surface.

use arena_engine::graph::levels::LevelSummary;
use arena_engine::graph::route::RouteVerdict;
use arena_engine::graph::types::{ComputeRequest, ComputeResult, EdgeSpec, NodeSpec};

use super::Arena;
use crate::{Command, Error, Output, Result};

impl Arena {
    /// Minimum cost and one optimal path between `start` and `end`.
    pub fn compute_shortest_cost(
        &self,
        nodes: Vec<NodeSpec>,
        edges: Vec<EdgeSpec>,
        start: &str,
        end: &str,
    ) -> Result<ComputeResult> {
        match self.executor.execute(Command::ComputeShortestCost {
            nodes,
            edges,
            start: start.to_string(),
            end: end.to_string(),
        })? {
            Output::ShortestCost(result) => Ok(result),
            _ => Err(Error::Internal {
                reason: "Unexpected output for ComputeShortestCost".into(),
            }),
        }
    }

    /// Answer a full compute request.
    pub fn compute(&self, req: ComputeRequest) -> Result<ComputeResult> {
        self.compute_shortest_cost(req.nodes, req.edges, &req.start, &req.end)
    }

    /// Built-in maps.
    pub fn levels(&self) -> Result<Vec<LevelSummary>> {
        match self.executor.execute(Command::ListLevels)? {
            Output::Levels(levels) => Ok(levels),
            _ => Err(Error::Internal {
                reason: "Unexpected output for ListLevels".into(),
            }),
        }
    }

    /// Score a player route on a built-in map.
    pub fn check_route(&self, level: u32, route: &[&str]) -> Result<RouteVerdict> {
        match self.executor.execute(Command::CheckRoute {
            level,
            route: route.iter().map(|s| s.to_string()).collect(),
        })? {
            Output::RouteChecked(verdict) => Ok(verdict),
            _ => Err(Error::Internal {
                reason: "Unexpected output for CheckRoute".into(),
            }),
        }
    }
}
