//! Route Rally command handlers.

use arena_engine::graph::levels::{builtin_levels, level as builtin_level};
use arena_engine::graph::route::evaluate_route;
use arena_engine::graph::types::{ComputeRequest, EdgeSpec, NodeSpec};
use arena_engine::graph::{self, RouteGraph};

use crate::convert::convert_result;
use crate::{Output, Result};

/// Handle ComputeShortestCost command.
pub fn compute_shortest_cost(
    nodes: Vec<NodeSpec>,
    edges: Vec<EdgeSpec>,
    start: String,
    end: String,
) -> Result<Output> {
    let req = ComputeRequest {
        nodes,
        edges,
        start,
        end,
    };
    let result = convert_result(graph::compute(&req))?;
    Ok(Output::ShortestCost(result))
}

/// Handle ListLevels command.
pub fn list_levels() -> Result<Output> {
    Ok(Output::Levels(
        builtin_levels().iter().map(|l| l.summary()).collect(),
    ))
}

/// Handle CheckRoute command.
pub fn check_route(level: u32, route: Vec<String>) -> Result<Output> {
    let lvl = convert_result(builtin_level(level))?;
    let graph = convert_result(RouteGraph::build(&lvl.nodes, &lvl.edges))?;
    let verdict = convert_result(evaluate_route(&graph, &route, &lvl.start, &lvl.end))?;
    Ok(Output::RouteChecked(verdict))
}
