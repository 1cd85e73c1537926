//! Castle Defender command handlers.

use uuid::Uuid;

use arena_engine::rbtree::NodeId;

use crate::executor::Executor;
use crate::session::Order;
use crate::{Output, Result};

/// Handle CampaignStart command: open a session and build the first mission.
pub fn campaign_start(ex: &Executor, seed: Option<u64>) -> Result<Output> {
    let (session, mut campaign) = ex.open_session();
    let status = campaign.start(seed)?;
    ex.insert_session(session, campaign);
    Ok(Output::CampaignStarted { session, status })
}

/// Handle CampaignStatus command.
pub fn campaign_status(ex: &Executor, session: Uuid) -> Result<Output> {
    ex.with_session(session, |c| Ok(Output::Campaign(c.status())))
}

/// Handle TreeInsert command.
pub fn tree_insert(ex: &Executor, session: Uuid, key: i64) -> Result<Output> {
    ex.with_session(session, |c| c.insert(key).map(Output::Inserted))
}

/// Handle ApplyRecolor command.
pub fn apply_recolor(ex: &Executor, session: Uuid, node: NodeId) -> Result<Output> {
    ex.with_session(session, |c| c.apply_recolor(node).map(Output::Correction))
}

/// Handle ApplyRealign command.
pub fn apply_realign(ex: &Executor, session: Uuid, node: NodeId) -> Result<Output> {
    ex.with_session(session, |c| c.apply_realign(node).map(Output::Correction))
}

/// Handle CommanderOrder command.
pub fn commander_order(ex: &Executor, session: Uuid, order: Order) -> Result<Output> {
    ex.with_session(session, |c| c.order(order).map(Output::Campaign))
}

/// Handle NextMission command.
pub fn next_mission(ex: &Executor, session: Uuid) -> Result<Output> {
    ex.with_session(session, |c| c.next_mission().map(Output::Campaign))
}

/// Handle Hint command.
pub fn hint(ex: &Executor, session: Uuid) -> Result<Output> {
    ex.with_session(session, |c| c.hint().map(Output::Hint))
}

/// Handle Snapshot command.
pub fn snapshot(ex: &Executor, session: Uuid) -> Result<Output> {
    ex.with_session(session, |c| Ok(Output::Snapshot(c.snapshot())))
}

/// Handle CampaignEnd command.
pub fn campaign_end(ex: &Executor, session: Uuid) -> Result<Output> {
    ex.close_session(session)?;
    Ok(Output::Unit)
}
