use thiserror::Error;

/// Errors raised by the value table, the agent and its configuration
///
/// All of these are programmer or configuration errors. None of them is recoverable, so callers
/// are expected to propagate them up and abort the run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("state was never observed by the value table")]
    UnknownState,

    #[error("invalid action {action}: must be in the range [0, {num_actions})")]
    InvalidAction { action: usize, num_actions: usize },

    #[error("invalid configuration: {message}")]
    Configuration { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
