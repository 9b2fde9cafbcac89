//! Core transcript analysis: models, loaders, extraction and reporting

pub mod analyzer;
pub mod catalog;
pub mod config;
pub mod models;
pub mod report;
pub mod requirements;
pub mod search;
pub mod sequence;
pub mod transcript;

/// Returns the current version of the `NuTranscript` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
