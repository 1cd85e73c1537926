//! Error conversion from engine error types.
//!
//! This module provides conversions from [`ArenaError`] to the executor's
//! [`Error`] type.

use crate::Error;
use arena_core::ArenaError;

/// Convert an ArenaError to an executor Error.
impl From<ArenaError> for Error {
    fn from(err: ArenaError) -> Self {
        match err {
            // Not Found errors
            ArenaError::NodeNotFound { id } => Error::NodeNotFound { node: id },
            ArenaError::TreeNodeNotFound { id } => Error::NodeNotFound {
                node: format!("#{}", id),
            },

            // Validation errors
            ArenaError::InvalidInput { message } => Error::InvalidInput { reason: message },
            ArenaError::EmptyGraph => Error::InvalidInput {
                reason: "Graph must contain at least one node".into(),
            },
            ArenaError::DuplicateNode { id } => Error::InvalidInput {
                reason: format!("Duplicate node id: {}", id),
            },
            ArenaError::DuplicateKey { key } => Error::InvalidInput {
                reason: format!("Key {} is already in the tree", key),
            },

            // System errors
            ArenaError::Internal { message } => Error::Internal { reason: message },
        }
    }
}

/// Convert an arena_core::ArenaResult to an executor Result.
pub fn convert_result<T>(result: arena_core::ArenaResult<T>) -> crate::Result<T> {
    result.map_err(Error::from)
}
