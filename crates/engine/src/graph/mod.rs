//! Shortest-path engine.
//!
//! Converts a client graph (named nodes + undirected weighted edges) into a
//! dense adjacency structure and answers single-target shortest-path queries.
//! A [`RouteGraph`] is built fresh per request and discarded afterwards.

pub mod adjacency;
pub mod dijkstra;
pub mod levels;
pub mod route;
pub mod types;

use std::collections::HashMap;

use arena_core::{ArenaError, ArenaResult};

use adjacency::{AdjacencyList, HalfEdge};
use types::*;

/// A validated graph with dense node indices.
#[derive(Debug, Clone)]
pub struct RouteGraph {
    /// node id → dense index (input order)
    index: HashMap<String, usize>,
    /// dense index → node spec
    nodes: Vec<NodeSpec>,
    adjacency: AdjacencyList,
}

impl RouteGraph {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Validate the input and build the adjacency structure.
    ///
    /// Rejects an empty node list, empty or duplicate ids, edges that
    /// reference undeclared nodes, and weights outside `0..=u32::MAX`.
    pub fn build(nodes: &[NodeSpec], edges: &[EdgeSpec]) -> ArenaResult<Self> {
        if nodes.is_empty() {
            return Err(ArenaError::EmptyGraph);
        }

        let mut index = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            validate_node_id(&node.id)?;
            if index.insert(node.id.clone(), i).is_some() {
                return Err(ArenaError::duplicate_node(&node.id));
            }
        }

        let mut adjacency = AdjacencyList::with_nodes(nodes.len());
        for edge in edges {
            let u = lookup(&index, &edge.u)?;
            let v = lookup(&index, &edge.v)?;
            let weight = validate_weight(edge)?;
            adjacency.add_undirected(u, v, weight);
        }

        tracing::debug!(
            nodes = nodes.len(),
            edges = adjacency.edge_count(),
            "route graph built"
        );

        Ok(Self {
            index,
            nodes: nodes.to_vec(),
            adjacency,
        })
    }

    /// Build from a compute request's node and edge lists.
    pub fn from_request(req: &ComputeRequest) -> ArenaResult<Self> {
        Self::build(&req.nodes, &req.edges)
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Dense index of a node id.
    pub fn index_of(&self, id: &str) -> ArenaResult<usize> {
        lookup(&self.index, id)
    }

    /// Node id at a dense index.
    pub fn id_of(&self, index: usize) -> Option<&str> {
        self.nodes.get(index).map(|n| n.id.as_str())
    }

    /// Node spec for an id.
    pub fn node(&self, id: &str) -> Option<&NodeSpec> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// All nodes in index order.
    pub fn nodes(&self) -> &[NodeSpec] {
        &self.nodes
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }

    /// Half-edges leaving the node at `index`.
    pub fn neighbors(&self, index: usize) -> &[HalfEdge] {
        self.adjacency.neighbors(index)
    }

    /// Cheapest edge weight between two node ids, if adjacent.
    pub fn weight_between(&self, u: &str, v: &str) -> ArenaResult<Option<u32>> {
        let u = self.index_of(u)?;
        let v = self.index_of(v)?;
        Ok(self.adjacency.cheapest_between(u, v))
    }

    // =========================================================================
    // Shortest path
    // =========================================================================

    /// Minimum cost and one optimal path from `start` to `end`.
    pub fn shortest_path(&self, start: &str, end: &str) -> ArenaResult<ShortestPath> {
        let s = self.index_of(start)?;
        let t = self.index_of(end)?;
        let outcome = dijkstra::search(&self.adjacency, s, t);

        let cost = match outcome.cost {
            Some(c) => Cost::Finite(c),
            None => Cost::Unreachable,
        };
        let path = outcome
            .path
            .iter()
            .map(|&i| self.nodes[i].id.clone())
            .collect();

        Ok(ShortestPath { cost, path })
    }

    /// Minimum cost from `start` to `end`.
    pub fn shortest_cost(&self, start: &str, end: &str) -> ArenaResult<Cost> {
        self.shortest_path(start, end).map(|sp| sp.cost)
    }
}

/// Build a graph and compute the minimum cost in one call.
pub fn compute_shortest_cost(
    nodes: &[NodeSpec],
    edges: &[EdgeSpec],
    start: &str,
    end: &str,
) -> ArenaResult<Cost> {
    RouteGraph::build(nodes, edges)?.shortest_cost(start, end)
}

/// Answer a compute request with cost and path.
pub fn compute(req: &ComputeRequest) -> ArenaResult<ComputeResult> {
    let graph = RouteGraph::from_request(req)?;
    graph.shortest_path(&req.start, &req.end).map(Into::into)
}

// =============================================================================
// Validation
// =============================================================================

fn lookup(index: &HashMap<String, usize>, id: &str) -> ArenaResult<usize> {
    index
        .get(id)
        .copied()
        .ok_or_else(|| ArenaError::node_not_found(id))
}

fn validate_node_id(id: &str) -> ArenaResult<()> {
    if id.is_empty() {
        return Err(ArenaError::invalid_input("Node ID must not be empty"));
    }
    Ok(())
}

fn validate_weight(edge: &EdgeSpec) -> ArenaResult<u32> {
    u32::try_from(edge.weight).map_err(|_| {
        ArenaError::invalid_input(format!(
            "Edge {}-{} has weight {}; weights must be between 0 and {}",
            edge.u,
            edge.v,
            edge.weight,
            u32::MAX
        ))
    })
}
