//! Executor error type.
//!
//! Every failure that crosses the command boundary is one of these variants.
//! Engine errors are mapped in [`crate::convert`].

use thiserror::Error;

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by [`crate::Executor::execute`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    /// The request failed validation.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong.
        reason: String,
    },

    /// A graph or tree node was referenced but does not exist.
    #[error("node not found: {node}")]
    NodeNotFound {
        /// The unknown node.
        node: String,
    },

    /// No campaign session with this id.
    #[error("session not found: {session}")]
    SessionNotFound {
        /// The unknown session id.
        session: String,
    },

    /// The command is not allowed in the session's current phase.
    #[error("invalid state: {reason}")]
    InvalidState {
        /// Why the command was refused.
        reason: String,
    },

    /// Configuration could not be loaded or failed validation.
    #[error("config error: {reason}")]
    Config {
        /// What was wrong with the configuration.
        reason: String,
    },

    /// A command or output could not be (de)serialized.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Underlying serializer message.
        reason: String,
    },

    /// Reading a file failed.
    #[error("I/O error: {reason}")]
    Io {
        /// Underlying I/O message.
        reason: String,
    },

    /// An engine invariant was broken.
    #[error("internal error: {reason}")]
    Internal {
        /// Description.
        reason: String,
    },
}

impl Error {
    /// Short machine-readable name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidInput { .. } => "InvalidInput",
            Error::NodeNotFound { .. } => "NodeNotFound",
            Error::SessionNotFound { .. } => "SessionNotFound",
            Error::InvalidState { .. } => "InvalidState",
            Error::Config { .. } => "Config",
            Error::Serialization { .. } => "Serialization",
            Error::Io { .. } => "Io",
            Error::Internal { .. } => "Internal",
        }
    }

    /// True when the caller can fix the request and retry.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Error::Internal { .. } | Error::Io { .. })
    }

    pub(crate) fn invalid_state(reason: impl Into<String>) -> Self {
        Error::InvalidState {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization {
            reason: err.to_string(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io {
            reason: err.to_string(),
        }
    }
}
