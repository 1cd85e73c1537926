//! Core graph types for the shortest-path engine.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Wire value used for an unreachable target.
pub const UNREACHABLE: i64 = -1;

/// A node as submitted by the client.
///
/// Only `id` participates in the computation. `label` and the optional
/// coordinates are presentation data carried through unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NodeSpec {
    /// Stable identifier, unique within one graph.
    pub id: String,
    /// Display label.
    #[serde(default)]
    pub label: String,
    /// Horizontal placement in the client's map, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// Vertical placement in the client's map, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

impl NodeSpec {
    /// Create a node with the given id and label.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            x: None,
            y: None,
        }
    }

    /// Attach map coordinates.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }
}

/// An undirected weighted edge as submitted by the client.
///
/// The weight is signed on the wire so that a negative weight can be
/// rejected explicitly instead of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EdgeSpec {
    /// One endpoint id.
    pub u: String,
    /// The other endpoint id.
    pub v: String,
    /// Traversal cost. Must be non-negative.
    #[serde(alias = "w")]
    pub weight: i64,
}

impl EdgeSpec {
    /// Create an edge between `u` and `v`.
    pub fn new(u: impl Into<String>, v: impl Into<String>, weight: i64) -> Self {
        Self {
            u: u.into(),
            v: v.into(),
            weight,
        }
    }
}

/// Outcome of a shortest-path search.
///
/// Serializes as a plain integer, with [`UNREACHABLE`] for `Unreachable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cost {
    /// Minimum total weight of a path to the target.
    Finite(u64),
    /// No path connects start and target.
    Unreachable,
}

impl Cost {
    /// The finite cost, if any.
    pub fn finite(self) -> Option<u64> {
        match self {
            Cost::Finite(c) => Some(c),
            Cost::Unreachable => None,
        }
    }

    /// True when the target was reachable.
    pub fn is_reachable(self) -> bool {
        matches!(self, Cost::Finite(_))
    }

    /// Wire encoding: the cost, or -1 when unreachable.
    pub fn to_wire(self) -> i64 {
        match self {
            Cost::Finite(c) => i64::try_from(c).unwrap_or(i64::MAX),
            Cost::Unreachable => UNREACHABLE,
        }
    }

    /// Decode the wire encoding. Any negative value means unreachable.
    pub fn from_wire(raw: i64) -> Self {
        if raw < 0 {
            Cost::Unreachable
        } else {
            Cost::Finite(raw as u64)
        }
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cost::Finite(c) => write!(f, "{}", c),
            Cost::Unreachable => write!(f, "unreachable"),
        }
    }
}

impl Serialize for Cost {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.to_wire())
    }
}

impl<'de> Deserialize<'de> for Cost {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(Cost::from_wire)
    }
}

/// Cost together with the node ids of one optimal path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPath {
    /// Minimum total weight.
    pub cost: Cost,
    /// Node ids from start to target inclusive. Empty when unreachable.
    pub path: Vec<String>,
}

/// Request body of the shortest-cost computation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ComputeRequest {
    /// Declared nodes, in index order.
    pub nodes: Vec<NodeSpec>,
    /// Undirected edges.
    pub edges: Vec<EdgeSpec>,
    /// Start node id.
    pub start: String,
    /// Target node id.
    pub end: String,
}

/// Response body of the shortest-cost computation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ComputeResult {
    /// Minimum cost, `-1` when unreachable.
    pub optimal_cost: Cost,
    /// Node ids of one optimal path.
    pub optimal_path: Vec<String>,
}

impl From<ShortestPath> for ComputeResult {
    fn from(sp: ShortestPath) -> Self {
        Self {
            optimal_cost: sp.cost,
            optimal_path: sp.path,
        }
    }
}
