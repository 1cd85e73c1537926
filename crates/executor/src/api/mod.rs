//! Typed API over the command executor.
//!
//! [`Arena`] wraps an [`Executor`] and exposes one method per command, so
//! callers never build [`Command`](crate::Command) values by hand.
//!
//! ```text
//! use arena_executor::Arena;
//!
//! let arena = Arena::new();
//! let result = arena.compute_shortest_cost(nodes, edges, "isb", "khi")?;
//!
//! let (castle, status) = arena.campaign_start(Some(42))?;
//! castle.order(Order::Realign)?;
//! ```

mod castle;
mod route;

pub use castle::Castle;

use crate::config::ArenaConfig;
use crate::{Executor, Result};

/// Entry point for embedding the arena.
#[derive(Debug, Default)]
pub struct Arena {
    executor: Executor,
}

impl Arena {
    /// Arena with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arena with an explicit configuration. The configuration is validated.
    pub fn with_config(config: ArenaConfig) -> Result<Self> {
        Ok(Self {
            executor: Executor::new(config)?,
        })
    }

    /// The underlying executor, for raw command access.
    pub fn executor(&self) -> &Executor {
        &self.executor
    }
}
