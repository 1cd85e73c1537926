//! Public types for the DSA Arena unified API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Route Rally
// ============================================================================

// Request and result shapes
pub use arena_engine::graph::types::{ComputeRequest, ComputeResult, Cost, EdgeSpec, NodeSpec};

// Built-in maps and route scoring
pub use arena_engine::graph::levels::{Level, LevelSummary};
pub use arena_engine::graph::route::{RouteVerdict, RouteWalk};

// ============================================================================
// Castle Defender
// ============================================================================

// Tree node coloring
pub use arena_core::Color;

// Tree handles and fixup vocabulary
pub use arena_engine::rbtree::{
    Correction, Diagnosis, InsertReport, InvariantReport, LayoutOptions, NodeId, Role, Shape,
    TreeSnapshot,
};

// Campaign state
pub use arena_executor::{CampaignStatus, Mission, Order, Phase};
