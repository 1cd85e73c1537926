//! Core types for DSA Arena
//!
//! This crate defines the pieces shared by every other crate in the workspace:
//! - ArenaError / ArenaResult: the error taxonomy of both engines
//! - Color: red-black node coloring
//!
//! It has no knowledge of graphs or trees beyond these shared definitions.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;

pub use error::{ArenaError, ArenaResult};
pub use types::Color;
