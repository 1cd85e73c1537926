//! DSA Arena
//!
//! Engines behind two learning games:
//! - Route Rally: find the cheapest route across a weighted map, scored
//!   against Dijkstra's optimum
//! - Castle Defender: a red-black tree campaign where the player chooses
//!   each fixup step after an insertion
//!
//! # Quick start
//!
//! ```no_run
//! use dsa_arena::{Arena, Order, Phase};
//!
//! let arena = Arena::new();
//! let verdict = arena.check_route(1, &["isb", "mul", "suk", "khi"])?;
//! assert!(verdict.beats_optimum);
//!
//! let (castle, status) = arena.campaign_start(Some(7))?;
//! if status.phase == Phase::Puzzle {
//!     castle.order(Order::Recolor)?;
//! }
//! castle.end()?;
//! # Ok::<(), dsa_arena::Error>(())
//! ```

#![warn(missing_docs)]

pub mod types;

pub use arena_core as core;
pub use arena_engine as engine;
pub use arena_executor as executor;

pub use arena_executor::{Arena, ArenaConfig, CampaignConfig, Castle, Command, Error, Output, Result};
pub use types::*;
