//! Error types for session construction and command registration.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("A session titled '{0}' is already active")]
    DuplicateTitle(String),

    #[error("Invalid command name {0:?}: must be a single non-empty token")]
    InvalidName(String),

    #[error("Command '{0}' has no subcommands")]
    EmptyGroup(String),

    #[error("Command '{group}' declares subcommand '{name}' more than once")]
    DuplicateSubcommand { group: String, name: String },
}

pub type Result<T> = std::result::Result<T, SessionError>;
