//! Results returned by the [`crate::Executor`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use arena_engine::graph::levels::LevelSummary;
use arena_engine::graph::route::RouteVerdict;
use arena_engine::graph::types::ComputeResult;
use arena_engine::rbtree::{Correction, Diagnosis, InsertReport, TreeSnapshot};

use crate::config::ArenaConfig;
use crate::session::CampaignStatus;

/// A successful command result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    /// Command completed with nothing to return.
    Unit,
    /// Minimum cost and one optimal path.
    ShortestCost(ComputeResult),
    /// Built-in maps.
    Levels(Vec<LevelSummary>),
    /// Score of a player route.
    RouteChecked(RouteVerdict),
    /// A new session.
    CampaignStarted {
        /// Session id for later commands.
        session: Uuid,
        /// Status after the first mission was built.
        status: CampaignStatus,
    },
    /// Campaign status.
    Campaign(CampaignStatus),
    /// Result of a raw insertion.
    Inserted(InsertReport),
    /// Result of a checked corrective order.
    Correction(Correction),
    /// Which order fixes the active puzzle.
    Hint(Diagnosis),
    /// Positioned tree.
    Snapshot(TreeSnapshot),
    /// Active configuration.
    Config(ArenaConfig),
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_engine::graph::types::Cost;

    #[test]
    fn unit_serializes_as_string() {
        assert_eq!(serde_json::to_string(&Output::Unit).unwrap(), "\"Unit\"");
    }

    #[test]
    fn shortest_cost_shape() {
        let out = Output::ShortestCost(ComputeResult {
            optimal_cost: Cost::Finite(3),
            optimal_path: vec!["a".into(), "b".into()],
        });
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["ShortestCost"]["optimalCost"], 3);
    }
}
