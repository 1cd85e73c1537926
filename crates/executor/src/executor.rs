//! Command dispatch and session registry.

use dashmap::DashMap;
use uuid::Uuid;

use crate::config::ArenaConfig;
use crate::handlers;
use crate::session::Campaign;
use crate::{Command, Error, Output, Result};

/// Executes [`Command`]s against the engines and the open campaign sessions.
///
/// Sessions are independent; a session is only ever touched by the request
/// currently holding its entry.
#[derive(Debug, Default)]
pub struct Executor {
    config: ArenaConfig,
    sessions: DashMap<Uuid, Campaign>,
}

impl Executor {
    /// Executor with the given configuration. The configuration is validated.
    pub fn new(config: ArenaConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            sessions: DashMap::new(),
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Number of open sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Execute one command.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        let name = cmd.name();
        let result = self.dispatch(cmd);
        match &result {
            Ok(_) => tracing::debug!(command = name, "command executed"),
            Err(e) if e.is_client_error() => {
                tracing::debug!(command = name, error = %e, "command rejected")
            }
            Err(e) => tracing::warn!(command = name, error = %e, "command failed"),
        }
        result
    }

    /// Parse a JSON command, execute it, and serialize the output.
    pub fn execute_json(&self, raw: &str) -> Result<String> {
        let cmd: Command = serde_json::from_str(raw)?;
        let output = self.execute(cmd)?;
        Ok(serde_json::to_string(&output)?)
    }

    fn dispatch(&self, cmd: Command) -> Result<Output> {
        match cmd {
            Command::ComputeShortestCost {
                nodes,
                edges,
                start,
                end,
            } => handlers::route::compute_shortest_cost(nodes, edges, start, end),
            Command::ListLevels => handlers::route::list_levels(),
            Command::CheckRoute { level, route } => handlers::route::check_route(level, route),

            Command::CampaignStart { seed } => handlers::castle::campaign_start(self, seed),
            Command::CampaignStatus { session } => {
                handlers::castle::campaign_status(self, session)
            }
            Command::TreeInsert { session, key } => {
                handlers::castle::tree_insert(self, session, key)
            }
            Command::ApplyRecolor { session, node } => {
                handlers::castle::apply_recolor(self, session, node)
            }
            Command::ApplyRealign { session, node } => {
                handlers::castle::apply_realign(self, session, node)
            }
            Command::CommanderOrder { session, order } => {
                handlers::castle::commander_order(self, session, order)
            }
            Command::NextMission { session } => handlers::castle::next_mission(self, session),
            Command::Hint { session } => handlers::castle::hint(self, session),
            Command::Snapshot { session } => handlers::castle::snapshot(self, session),
            Command::CampaignEnd { session } => handlers::castle::campaign_end(self, session),

            Command::ConfigGet => handlers::config::config_get(self),
        }
    }

    // =========================================================================
    // Sessions
    // =========================================================================

    pub(crate) fn open_session(&self) -> (Uuid, Campaign) {
        let id = Uuid::new_v4();
        let campaign = Campaign::new(self.config.campaign.clone(), self.config.layout);
        (id, campaign)
    }

    pub(crate) fn insert_session(&self, id: Uuid, campaign: Campaign) {
        self.sessions.insert(id, campaign);
        tracing::info!(session = %id, open = self.sessions.len(), "session opened");
    }

    pub(crate) fn with_session<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Campaign) -> Result<T>,
    ) -> Result<T> {
        let mut entry = self
            .sessions
            .get_mut(&id)
            .ok_or_else(|| session_not_found(id))?;
        f(entry.value_mut())
    }

    pub(crate) fn close_session(&self, id: Uuid) -> Result<()> {
        self.sessions
            .remove(&id)
            .map(|_| tracing::info!(session = %id, "session closed"))
            .ok_or_else(|| session_not_found(id))
    }
}

fn session_not_found(id: Uuid) -> Error {
    Error::SessionNotFound {
        session: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CampaignConfig;

    #[test]
    fn invalid_config_rejected() {
        let config = ArenaConfig {
            campaign: CampaignConfig {
                levels: 0,
                ..CampaignConfig::default()
            },
            ..ArenaConfig::default()
        };
        assert!(matches!(Executor::new(config), Err(Error::Config { .. })));
    }

    #[test]
    fn unknown_session() {
        let ex = Executor::default();
        let err = ex
            .execute(Command::CampaignStatus {
                session: Uuid::new_v4(),
            })
            .unwrap_err();
        assert_eq!(err.kind(), "SessionNotFound");
    }

    #[test]
    fn execute_json_round_trip() {
        let ex = Executor::default();
        let out = ex.execute_json(r#"{"command":"ListLevels"}"#).unwrap();
        assert!(out.starts_with(r#"{"Levels":"#));
        let err = ex.execute_json("{").unwrap_err();
        assert_eq!(err.kind(), "Serialization");
    }

    #[test]
    fn sessions_open_and_close() {
        let ex = Executor::default();
        let session = match ex.execute(Command::CampaignStart { seed: Some(1) }).unwrap() {
            Output::CampaignStarted { session, .. } => session,
            other => panic!("Expected CampaignStarted, got {:?}", other),
        };
        assert_eq!(ex.session_count(), 1);
        assert_eq!(
            ex.execute(Command::CampaignEnd { session }).unwrap(),
            Output::Unit
        );
        assert_eq!(ex.session_count(), 0);
        assert!(ex.execute(Command::CampaignEnd { session }).is_err());
    }
}
