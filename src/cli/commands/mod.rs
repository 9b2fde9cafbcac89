//! CLI command handlers for `NuTranscript`.
//!
//! Each subcommand is implemented in its own submodule.

pub mod analyze;
pub mod config;
pub mod search;
