/// Implemented RL algorithms
pub mod algo;

/// Agent configuration
pub mod config;

/// Error types
pub mod error;

/// Environment
pub mod env;

/// Exploration policies
pub mod exploration;

/// Training statistics
pub mod stats;

/// Testing environments
pub mod gym;

mod util;

pub use config::AgentConfig;
pub use error::{Error, Result};
