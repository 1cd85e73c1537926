//! Castle Defender session handle.

use uuid::Uuid;

use arena_engine::rbtree::{Correction, Diagnosis, InsertReport, NodeId, TreeSnapshot};

use super::Arena;
use crate::session::{CampaignStatus, Order};
use crate::{Command, Error, Executor, Output, Result};

impl Arena {
    /// Open a campaign and build its first mission.
    pub fn campaign_start(&self, seed: Option<u64>) -> Result<(Castle<'_>, CampaignStatus)> {
        match self.executor.execute(Command::CampaignStart { seed })? {
            Output::CampaignStarted { session, status } => {
                Ok((Castle::new(&self.executor, session), status))
            }
            _ => Err(Error::Internal {
                reason: "Unexpected output for CampaignStart".into(),
            }),
        }
    }

    /// Handle for an existing session.
    pub fn castle(&self, session: Uuid) -> Castle<'_> {
        Castle::new(&self.executor, session)
    }
}

/// Handle for one campaign session.
///
/// Obtained via [`Arena::campaign_start`] or [`Arena::castle`].
#[derive(Debug, Clone, Copy)]
pub struct Castle<'a> {
    executor: &'a Executor,
    session: Uuid,
}

impl<'a> Castle<'a> {
    pub(crate) fn new(executor: &'a Executor, session: Uuid) -> Self {
        Self { executor, session }
    }

    /// Session id.
    pub fn session(&self) -> Uuid {
        self.session
    }

    /// Current status.
    pub fn status(&self) -> Result<CampaignStatus> {
        self.campaign(
            Command::CampaignStatus {
                session: self.session,
            },
            "CampaignStatus",
        )
    }

    /// Give a commander order to the active puzzle.
    pub fn order(&self, order: Order) -> Result<CampaignStatus> {
        self.campaign(
            Command::CommanderOrder {
                session: self.session,
                order,
            },
            "CommanderOrder",
        )
    }

    /// Advance to the next mission.
    pub fn next_mission(&self) -> Result<CampaignStatus> {
        self.campaign(
            Command::NextMission {
                session: self.session,
            },
            "NextMission",
        )
    }

    /// Which order fixes the active puzzle.
    pub fn hint(&self) -> Result<Diagnosis> {
        match self.executor.execute(Command::Hint {
            session: self.session,
        })? {
            Output::Hint(diagnosis) => Ok(diagnosis),
            _ => Err(Error::Internal {
                reason: "Unexpected output for Hint".into(),
            }),
        }
    }

    /// Positioned view of the tree.
    pub fn snapshot(&self) -> Result<TreeSnapshot> {
        match self.executor.execute(Command::Snapshot {
            session: self.session,
        })? {
            Output::Snapshot(snap) => Ok(snap),
            _ => Err(Error::Internal {
                reason: "Unexpected output for Snapshot".into(),
            }),
        }
    }

    /// Insert a key without rebalancing.
    pub fn insert(&self, key: i64) -> Result<InsertReport> {
        match self.executor.execute(Command::TreeInsert {
            session: self.session,
            key,
        })? {
            Output::Inserted(report) => Ok(report),
            _ => Err(Error::Internal {
                reason: "Unexpected output for TreeInsert".into(),
            }),
        }
    }

    /// Checked recolor at `node`.
    pub fn apply_recolor(&self, node: NodeId) -> Result<Correction> {
        self.correction(
            Command::ApplyRecolor {
                session: self.session,
                node,
            },
            "ApplyRecolor",
        )
    }

    /// Checked realign at `node`.
    pub fn apply_realign(&self, node: NodeId) -> Result<Correction> {
        self.correction(
            Command::ApplyRealign {
                session: self.session,
                node,
            },
            "ApplyRealign",
        )
    }

    /// Close the session.
    pub fn end(self) -> Result<()> {
        match self.executor.execute(Command::CampaignEnd {
            session: self.session,
        })? {
            Output::Unit => Ok(()),
            _ => Err(Error::Internal {
                reason: "Unexpected output for CampaignEnd".into(),
            }),
        }
    }

    fn campaign(&self, cmd: Command, name: &str) -> Result<CampaignStatus> {
        match self.executor.execute(cmd)? {
            Output::Campaign(status) => Ok(status),
            _ => Err(Error::Internal {
                reason: format!("Unexpected output for {}", name),
            }),
        }
    }

    fn correction(&self, cmd: Command, name: &str) -> Result<Correction> {
        match self.executor.execute(cmd)? {
            Output::Correction(c) => Ok(c),
            _ => Err(Error::Internal {
                reason: format!("Unexpected output for {}", name),
            }),
        }
    }
}
