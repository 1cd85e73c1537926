//! Command execution layer for DSA Arena
//!
//! Every game operation enters through one boundary:
//! - [`Command`]: a serializable request
//! - [`Executor::execute`]: dispatch to the engines and session registry
//! - [`Output`] or [`Error`]: a serializable response
//!
//! [`Arena`] is a typed facade over the same boundary. Campaign sessions
//! ([`session::Campaign`]) are keyed by UUID and live until ended.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod command;
pub mod config;
pub mod convert;
pub mod error;
pub mod executor;
pub mod handlers;
pub mod output;
pub mod session;

pub use api::{Arena, Castle};
pub use command::Command;
pub use config::{ArenaConfig, CampaignConfig};
pub use error::{Error, Result};
pub use executor::Executor;
pub use output::Output;
pub use session::{Campaign, CampaignStatus, Mission, Order, Phase};
