//! Commands accepted by the [`crate::Executor`].
//!
//! Commands serialize as JSON objects tagged by `"command"`:
//!
//! ```json
//! {"command": "CheckRoute", "level": 1, "route": ["isb", "mul", "suk", "khi"]}
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use arena_engine::graph::types::{EdgeSpec, NodeSpec};
use arena_engine::rbtree::NodeId;

use crate::session::Order;

/// A single request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command")]
pub enum Command {
    // =========================================================================
    // Route Rally
    // =========================================================================
    /// Minimum cost between two nodes of a client graph.
    ComputeShortestCost {
        /// Declared nodes.
        nodes: Vec<NodeSpec>,
        /// Undirected edges.
        edges: Vec<EdgeSpec>,
        /// Start node id.
        start: String,
        /// Target node id.
        end: String,
    },

    /// List the built-in maps.
    ListLevels,

    /// Score a player route on a built-in map.
    CheckRoute {
        /// Level number.
        level: u32,
        /// Node ids from start to destination.
        route: Vec<String>,
    },

    // =========================================================================
    // Castle Defender
    // =========================================================================
    /// Open a new campaign session and build the first mission.
    CampaignStart {
        /// Seed for reproducible missions.
        #[serde(default)]
        seed: Option<u64>,
    },

    /// Read a campaign's status.
    CampaignStatus {
        /// Session id.
        session: Uuid,
    },

    /// Insert a key into the session tree without rebalancing.
    TreeInsert {
        /// Session id.
        session: Uuid,
        /// Key to insert.
        key: i64,
    },

    /// Checked recolor at a node of the session tree.
    ApplyRecolor {
        /// Session id.
        session: Uuid,
        /// Violating node.
        node: NodeId,
    },

    /// Checked realign at a node of the session tree.
    ApplyRealign {
        /// Session id.
        session: Uuid,
        /// Violating node.
        node: NodeId,
    },

    /// Give a commander order to the active puzzle.
    CommanderOrder {
        /// Session id.
        session: Uuid,
        /// The order.
        order: Order,
    },

    /// Advance to the next mission.
    NextMission {
        /// Session id.
        session: Uuid,
    },

    /// Which order fixes the active puzzle.
    Hint {
        /// Session id.
        session: Uuid,
    },

    /// Positioned view of the session tree.
    Snapshot {
        /// Session id.
        session: Uuid,
    },

    /// Close a session.
    CampaignEnd {
        /// Session id.
        session: Uuid,
    },

    // =========================================================================
    // Configuration
    // =========================================================================
    /// Read the active configuration.
    ConfigGet,
}

impl Command {
    /// Variant name, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Command::ComputeShortestCost { .. } => "ComputeShortestCost",
            Command::ListLevels => "ListLevels",
            Command::CheckRoute { .. } => "CheckRoute",
            Command::CampaignStart { .. } => "CampaignStart",
            Command::CampaignStatus { .. } => "CampaignStatus",
            Command::TreeInsert { .. } => "TreeInsert",
            Command::ApplyRecolor { .. } => "ApplyRecolor",
            Command::ApplyRealign { .. } => "ApplyRealign",
            Command::CommanderOrder { .. } => "CommanderOrder",
            Command::NextMission { .. } => "NextMission",
            Command::Hint { .. } => "Hint",
            Command::Snapshot { .. } => "Snapshot",
            Command::CampaignEnd { .. } => "CampaignEnd",
            Command::ConfigGet => "ConfigGet",
        }
    }
}
