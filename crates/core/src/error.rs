//! Configuration errors.
//!
//! Every game operation is infallible once a [`GameState`](crate::GameState)
//! exists; the only failures are rejected settings at startup.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The pool cannot fill every ticket without repeating a number.
    #[error("invalid configuration: pool_max {pool_max} is smaller than the {required} numbers needed for all tickets")]
    InvalidConfiguration { pool_max: u32, required: u32 },

    /// An environment variable is set but does not parse.
    #[error("invalid value {value:?} for {key}")]
    InvalidEnv { key: &'static str, value: String },
}
