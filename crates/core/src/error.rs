//! Error taxonomy for the arena engines.
//!
//! Errors fall in two groups:
//! - Client input errors: malformed graphs, unknown node ids, duplicate keys.
//!   These are rejections; no engine state has been mutated when one is returned.
//! - Internal errors: a broken engine invariant. These indicate a bug.
//!
//! Rule violations in the tree puzzle (choosing the wrong corrective action)
//! are NOT errors. They are reported as values by the engine.

use thiserror::Error;

/// Result type for engine operations.
pub type ArenaResult<T> = std::result::Result<T, ArenaError>;

/// Errors produced by the shortest-path and red-black tree engines.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ArenaError {
    /// Input failed validation before any computation ran.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// What was wrong with the input.
        message: String,
    },

    /// A graph was submitted without any nodes.
    #[error("graph must contain at least one node")]
    EmptyGraph,

    /// A node identifier was referenced but never declared.
    #[error("node not found: {id}")]
    NodeNotFound {
        /// The unknown identifier.
        id: String,
    },

    /// The same node identifier was declared twice.
    #[error("duplicate node id: {id}")]
    DuplicateNode {
        /// The repeated identifier.
        id: String,
    },

    /// A tree node handle does not refer to a live node.
    #[error("tree node not found: #{id}")]
    TreeNodeNotFound {
        /// The stale or foreign handle.
        id: usize,
    },

    /// The key is already present in the tree.
    #[error("key {key} is already in the tree")]
    DuplicateKey {
        /// The rejected key.
        key: i64,
    },

    /// An engine invariant was broken.
    #[error("internal error: {message}")]
    Internal {
        /// Description of the broken invariant.
        message: String,
    },
}

impl ArenaError {
    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ArenaError::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a NodeNotFound error.
    pub fn node_not_found(id: impl Into<String>) -> Self {
        ArenaError::NodeNotFound { id: id.into() }
    }

    /// Create a DuplicateNode error.
    pub fn duplicate_node(id: impl Into<String>) -> Self {
        ArenaError::DuplicateNode { id: id.into() }
    }

    /// Create a TreeNodeNotFound error.
    pub fn tree_node_not_found(id: usize) -> Self {
        ArenaError::TreeNodeNotFound { id }
    }

    /// Create an Internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ArenaError::Internal {
            message: message.into(),
        }
    }

    /// True when the error was caused by the caller's input rather than the engine.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ArenaError::Internal { .. })
    }
}
