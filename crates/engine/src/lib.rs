//! Engines for DSA Arena
//!
//! This crate implements the two algorithmic cores behind the games:
//! - Graph: shortest-path cost over undirected weighted graphs (Route Rally)
//! - Red-black tree: insertion with step-wise fixup driven by the player (Castle Defender)
//!
//! Both engines are synchronous and hold no global state. A graph is built per
//! request; a tree lives as long as its owner keeps it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod graph;
pub mod rbtree;

pub use graph::types::{ComputeRequest, ComputeResult, Cost, EdgeSpec, NodeSpec, ShortestPath};
pub use graph::{compute, compute_shortest_cost, RouteGraph};
pub use rbtree::{NodeId, RedBlackTree};
