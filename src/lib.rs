//! TUI Bingo (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_bingo::{core,session,input,term,types}`
//! and adds the application glue: command-line parsing, environment
//! configuration and logging setup.

pub mod cli;
pub mod config;
pub mod logging;

pub use tui_bingo_core as core;
pub use tui_bingo_input as input;
pub use tui_bingo_session as session;
pub use tui_bingo_term as term;
pub use tui_bingo_types as types;

pub use config::AppConfig;
