//! Built-in Route Rally maps.
//!
//! Each level is a small undirected map with a fixed start and destination.
//! Coordinates are percentages of the client's map area.

use serde::{Deserialize, Serialize};

use arena_core::{ArenaError, ArenaResult};

use super::types::{ComputeRequest, EdgeSpec, NodeSpec};

/// A playable map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// 1-based level number.
    pub id: u32,
    /// Display title.
    pub title: String,
    /// Unit the edge weights are measured in.
    pub unit: String,
    /// Start node id.
    pub start: String,
    /// Destination node id.
    pub end: String,
    /// Map nodes.
    pub nodes: Vec<NodeSpec>,
    /// Map roads.
    pub edges: Vec<EdgeSpec>,
}

impl Level {
    /// Shortest-cost request for this level's start and destination.
    pub fn request(&self) -> ComputeRequest {
        ComputeRequest {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
            start: self.start.clone(),
            end: self.end.clone(),
        }
    }

    /// Listing entry for this level.
    pub fn summary(&self) -> LevelSummary {
        LevelSummary {
            id: self.id,
            title: self.title.clone(),
            unit: self.unit.clone(),
            start: self.start.clone(),
            end: self.end.clone(),
            node_count: self.nodes.len(),
            edge_count: self.edges.len(),
        }
    }
}

/// Compact description of a level for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelSummary {
    /// 1-based level number.
    pub id: u32,
    /// Display title.
    pub title: String,
    /// Unit the edge weights are measured in.
    pub unit: String,
    /// Start node id.
    pub start: String,
    /// Destination node id.
    pub end: String,
    /// Number of nodes.
    pub node_count: usize,
    /// Number of roads.
    pub edge_count: usize,
}

type RawNode = (&'static str, &'static str, f64, f64);
type RawEdge = (&'static str, &'static str, i64);

const PAKISTAN_NODES: &[RawNode] = &[
    ("isb", "Islamabad", 65.0, 15.0),
    ("pes", "Peshawar", 45.0, 10.0),
    ("lhr", "Lahore", 75.0, 35.0),
    ("mul", "Multan", 55.0, 50.0),
    ("que", "Quetta", 20.0, 55.0),
    ("suk", "Sukkur", 35.0, 65.0),
    ("khi", "Karachi", 30.0, 85.0),
];

const PAKISTAN_EDGES: &[RawEdge] = &[
    ("pes", "isb", 15),
    ("isb", "lhr", 25),
    ("isb", "mul", 45),
    ("lhr", "mul", 30),
    ("lhr", "suk", 80),
    ("mul", "suk", 40),
    ("mul", "que", 55),
    ("que", "suk", 25),
    ("suk", "khi", 45),
    ("que", "khi", 70),
];

const CAMPUS_NODES: &[RawNode] = &[
    ("gate", "Main Gate", 50.0, 90.0),
    ("audi", "Auditorium", 30.0, 70.0),
    ("lib", "Library", 70.0, 65.0),
    ("admin", "Admin", 50.0, 50.0),
    ("cs", "CS Dept", 20.0, 35.0),
    ("cafe", "SSC Cafe", 80.0, 35.0),
    ("mech", "Mech Dept", 50.0, 20.0),
];

const CAMPUS_EDGES: &[RawEdge] = &[
    ("gate", "audi", 5),
    ("gate", "lib", 8),
    ("gate", "admin", 10),
    ("audi", "cs", 6),
    ("audi", "admin", 4),
    ("admin", "lib", 3),
    ("admin", "mech", 7),
    ("lib", "cafe", 5),
    ("cafe", "mech", 6),
    ("cs", "mech", 5),
];

const WORLD_NODES: &[RawNode] = &[
    ("syd", "Sydney", 90.0, 85.0),
    ("sin", "Singapore", 75.0, 65.0),
    ("tok", "Tokyo", 85.0, 35.0),
    ("pek", "Beijing", 70.0, 30.0),
    ("dxb", "Dubai", 55.0, 45.0),
    ("mos", "Moscow", 50.0, 20.0),
    ("par", "Paris", 40.0, 25.0),
    ("lon", "London", 35.0, 20.0),
    ("nyc", "New York", 20.0, 35.0),
    ("lax", "Los Angeles", 10.0, 40.0),
    ("rio", "Rio", 25.0, 75.0),
    ("cpt", "Cape Town", 50.0, 80.0),
];

const WORLD_EDGES: &[RawEdge] = &[
    ("syd", "tok", 800),
    ("syd", "lax", 1200),
    ("tok", "lax", 600),
    ("lax", "nyc", 400),
    ("nyc", "lon", 500),
    ("syd", "sin", 400),
    ("sin", "dxb", 350),
    ("sin", "pek", 500),
    ("tok", "pek", 300),
    ("pek", "mos", 450),
    ("mos", "par", 300),
    ("par", "lon", 150),
    ("dxb", "lon", 600),
    ("dxb", "par", 550),
    ("dxb", "cpt", 700),
    ("cpt", "rio", 400),
    ("rio", "nyc", 800),
];

fn make_level(
    id: u32,
    title: &str,
    unit: &str,
    (start, end): (&str, &str),
    nodes: &[RawNode],
    edges: &[RawEdge],
) -> Level {
    Level {
        id,
        title: title.to_string(),
        unit: unit.to_string(),
        start: start.to_string(),
        end: end.to_string(),
        nodes: nodes
            .iter()
            .map(|&(id, label, x, y)| NodeSpec::new(id, label).at(x, y))
            .collect(),
        edges: edges
            .iter()
            .map(|&(u, v, w)| EdgeSpec::new(u, v, w))
            .collect(),
    }
}

/// All built-in levels, in play order.
pub fn builtin_levels() -> Vec<Level> {
    vec![
        make_level(
            1,
            "Pakistan Rally",
            "L",
            ("isb", "khi"),
            PAKISTAN_NODES,
            PAKISTAN_EDGES,
        ),
        make_level(
            2,
            "UET Blueprint",
            "Min",
            ("gate", "mech"),
            CAMPUS_NODES,
            CAMPUS_EDGES,
        ),
        make_level(
            3,
            "Global Network",
            "$",
            ("syd", "lon"),
            WORLD_NODES,
            WORLD_EDGES,
        ),
    ]
}

/// Look up a built-in level by number.
pub fn level(id: u32) -> ArenaResult<Level> {
    builtin_levels()
        .into_iter()
        .find(|l| l.id == id)
        .ok_or_else(|| ArenaError::invalid_input(format!("Unknown level: {}", id)))
}
