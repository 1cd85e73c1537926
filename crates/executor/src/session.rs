//! Castle Defender campaign sessions.
//!
//! A campaign owns one red-black tree and walks it through a series of
//! missions. Each mission builds one tower (inserts one key). When the new
//! tower sits under a RED parent the campaign enters the puzzle phase and
//! waits for commander orders; wrong orders cost integrity, and a siege is
//! lost when integrity reaches zero.
//!
//! ```text
//! Menu -> Building -> (Puzzle) -> Victory -> Building ... -> Completed
//!                        \-> SiegeLost
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use arena_engine::rbtree::{
    Correction, Diagnosis, InsertReport, LayoutOptions, NodeId, RedBlackTree, TreeSnapshot,
};

use crate::config::CampaignConfig;
use crate::convert::convert_result;
use crate::{Error, Result};

const MISSION_NAMES: [&str; 5] = [
    "Iron Outpost",
    "Shadow Keep",
    "Dragon's Peak",
    "Frost Spire",
    "Ember Fort",
];

/// Where a campaign stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Not started.
    Menu,
    /// A tower is going up.
    Building,
    /// A double-red awaits commander orders.
    Puzzle,
    /// The current mission is stable.
    Victory,
    /// Every mission is done.
    Completed,
    /// Integrity reached zero.
    SiegeLost,
}

/// Corrective order given by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    /// Recolor parent, uncle and grandparent.
    Recolor,
    /// Rotate node, parent and grandparent.
    Realign,
}

/// One mission: a tower key to build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    /// Mission number, 1-based.
    pub level: u32,
    /// Display name.
    pub name: String,
    /// Tower key.
    pub key: i64,
}

/// Public view of a campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignStatus {
    /// Current phase.
    pub phase: Phase,
    /// Current mission number, 0 before the campaign starts.
    pub level: u32,
    /// Missions in the campaign.
    pub levels: u32,
    /// Accumulated score.
    pub score: u64,
    /// Integrity left in the current mission.
    pub integrity: f64,
    /// Current mission.
    pub mission: Option<Mission>,
    /// Node holding the active violation.
    pub active_node: Option<NodeId>,
    /// Towers standing.
    pub towers: usize,
    /// Last event, for display.
    pub message: String,
}

/// One Castle Defender game.
#[derive(Debug, Clone)]
pub struct Campaign {
    config: CampaignConfig,
    layout: LayoutOptions,
    tree: RedBlackTree,
    rng: StdRng,
    phase: Phase,
    level: u32,
    score: u64,
    integrity: f64,
    mission: Option<Mission>,
    active: Option<NodeId>,
    message: String,
}

impl Campaign {
    /// A campaign in the menu phase.
    pub fn new(config: CampaignConfig, layout: LayoutOptions) -> Self {
        let integrity = config.starting_integrity;
        Self {
            config,
            layout,
            tree: RedBlackTree::new(),
            rng: StdRng::from_entropy(),
            phase: Phase::Menu,
            level: 0,
            score: 0,
            integrity,
            mission: None,
            active: None,
            message: "Commander! The realm awaits your strategy.".into(),
        }
    }

    // =========================================================================
    // Campaign flow
    // =========================================================================

    /// Reset everything and build the first mission.
    ///
    /// A seed makes mission keys and names reproducible.
    pub fn start(&mut self, seed: Option<u64>) -> Result<CampaignStatus> {
        self.rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        self.tree.clear();
        self.score = 0;
        self.integrity = self.config.starting_integrity;
        self.active = None;
        tracing::info!(?seed, levels = self.config.levels, "campaign started");
        let key = self.fresh_key()?;
        self.begin_mission(1, key)?;
        Ok(self.status())
    }

    /// Advance to the next mission, or finish the campaign after the last.
    pub fn next_mission(&mut self) -> Result<CampaignStatus> {
        if self.phase != Phase::Victory {
            return Err(Error::invalid_state(format!(
                "next mission requires a won mission, campaign is {:?}",
                self.phase
            )));
        }
        if self.tree.find_double_red().is_some() {
            return Err(Error::invalid_state(
                "resolve the pending violation before the next mission",
            ));
        }
        if self.level >= self.config.levels {
            self.phase = Phase::Completed;
            self.mission = None;
            self.message = format!("Campaign complete! Final honor: {}", self.score);
            tracing::info!(score = self.score, "campaign completed");
            return Ok(self.status());
        }
        let key = self.fresh_key()?;
        self.begin_mission(self.level + 1, key)?;
        Ok(self.status())
    }

    /// Build `key` as mission `level`. Campaign fields change only once the
    /// tower stands.
    fn begin_mission(&mut self, level: u32, key: i64) -> Result<()> {
        let report = convert_result(self.tree.insert(key))?;
        let name = format!(
            "{} #{}",
            MISSION_NAMES[self.rng.gen_range(0..MISSION_NAMES.len())],
            level
        );
        tracing::debug!(level, key, name = %name, "mission generated");
        self.level = level;
        self.integrity = self.config.starting_integrity;
        self.mission = Some(Mission { level, name, key });
        self.phase = Phase::Building;
        self.settle_build(&report);
        Ok(())
    }

    /// A key in the configured range not yet in the tree.
    fn fresh_key(&mut self) -> Result<i64> {
        let (min, max) = (self.config.key_min, self.config.key_max);
        let span = max.abs_diff(min).saturating_add(1);
        let used = self
            .tree
            .keys_in_order()
            .into_iter()
            .filter(|k| (min..=max).contains(k))
            .count() as u64;
        if used >= span {
            return Err(Error::invalid_state(format!(
                "no unused tower keys left in {}..={}",
                min, max
            )));
        }
        loop {
            let key = self.rng.gen_range(min..=max);
            if !self.tree.contains(key) {
                return Ok(key);
            }
        }
    }

    fn settle_build(&mut self, report: &InsertReport) {
        if report.violation {
            self.phase = Phase::Puzzle;
            self.active = Some(report.node);
            self.message = "VIOLATION: Double Red! Magic interference detected!".into();
            tracing::debug!(key = report.key, node = %report.node, "mission needs correction");
        } else {
            self.tree.finish_cycle();
            self.complete_level();
        }
    }

    fn complete_level(&mut self) {
        self.active = None;
        self.score += self.integrity.max(0.0).floor() as u64;
        self.phase = Phase::Victory;
        self.message = "Sector Stabilized! Honor increased.".into();
        tracing::debug!(level = self.level, score = self.score, "mission won");
    }

    // =========================================================================
    // Puzzle
    // =========================================================================

    /// Apply a commander order to the active violation.
    ///
    /// A wrong order leaves the tree untouched and costs integrity.
    pub fn order(&mut self, order: Order) -> Result<CampaignStatus> {
        let node = self.require_puzzle()?;
        let correction = match order {
            Order::Recolor => convert_result(self.tree.apply_recolor(node))?,
            Order::Realign => convert_result(self.tree.apply_realign(node))?,
        };

        if correction.accepted {
            match correction.next_violation {
                Some(up) => {
                    self.active = Some(up);
                    self.message = "Violation moved up! Stabilize the Grandparent!".into();
                }
                None => self.complete_level(),
            }
        } else {
            self.integrity = (self.integrity - self.config.wrong_move_penalty).max(0.0);
            let reason = correction.reason.unwrap_or_default();
            tracing::warn!(?order, integrity = self.integrity, "wrong order");
            if self.integrity <= 0.0 {
                self.phase = Phase::SiegeLost;
                self.active = None;
                self.message = format!("The castle has fallen. {}", reason);
                tracing::info!(level = self.level, score = self.score, "siege lost");
            } else {
                self.message = format!("WRONG TACTIC! The walls are crumbling! {}", reason);
            }
        }
        Ok(self.status())
    }

    /// Which order fixes the active violation.
    pub fn hint(&self) -> Result<Diagnosis> {
        let node = self.require_puzzle()?;
        convert_result(self.tree.diagnose(node))
    }

    fn require_puzzle(&self) -> Result<NodeId> {
        match (self.phase, self.active) {
            (Phase::Puzzle, Some(node)) => Ok(node),
            _ => Err(Error::invalid_state(format!(
                "no violation to correct, campaign is {:?}",
                self.phase
            ))),
        }
    }

    // =========================================================================
    // Direct tree access
    // =========================================================================

    /// Insert a key into the session tree without touching the campaign.
    pub fn insert(&mut self, key: i64) -> Result<InsertReport> {
        self.refuse_during_puzzle()?;
        convert_result(self.tree.insert(key))
    }

    /// Checked recolor on the session tree.
    pub fn apply_recolor(&mut self, node: NodeId) -> Result<Correction> {
        self.refuse_during_puzzle()?;
        convert_result(self.tree.apply_recolor(node))
    }

    /// Checked realign on the session tree.
    pub fn apply_realign(&mut self, node: NodeId) -> Result<Correction> {
        self.refuse_during_puzzle()?;
        convert_result(self.tree.apply_realign(node))
    }

    fn refuse_during_puzzle(&self) -> Result<()> {
        if self.phase == Phase::Puzzle {
            return Err(Error::invalid_state(
                "the campaign puzzle is active; use commander orders",
            ));
        }
        Ok(())
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// Current status.
    pub fn status(&self) -> CampaignStatus {
        CampaignStatus {
            phase: self.phase,
            level: self.level,
            levels: self.config.levels,
            score: self.score,
            integrity: self.integrity,
            mission: self.mission.clone(),
            active_node: self.active,
            towers: self.tree.len(),
            message: self.message.clone(),
        }
    }

    /// Positioned view of the tree.
    pub fn snapshot(&self) -> TreeSnapshot {
        self.tree.snapshot_with(&self.layout)
    }

    /// The session tree.
    pub fn tree(&self) -> &RedBlackTree {
        &self.tree
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }
}
