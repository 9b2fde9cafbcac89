//! Report format implementations
//!
//! Provides exporters for the supported report formats: plain text and JSON.

pub mod json;
pub mod text;

pub use json::JsonReporter;
pub use text::TextReporter;

use super::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Human-readable text grouped by department
    #[default]
    Text,
    /// Machine-readable JSON with full relationship records
    Json,
}

impl ReportFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
        }
    }

    /// Render `ctx` in this format
    ///
    /// # Errors
    /// Returns an error if rendering fails
    pub fn render(self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        match self {
            Self::Text => TextReporter::new().render(ctx),
            Self::Json => JsonReporter::new().render(ctx),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "txt" | "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown report format: {s}")),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("TXT".parse::<ReportFormat>(), Ok(ReportFormat::Text));
        assert_eq!("json".parse::<ReportFormat>(), Ok(ReportFormat::Json));
        assert!("pdf".parse::<ReportFormat>().is_err());
        assert_eq!(ReportFormat::Json.extension(), "json");
        assert_eq!(ReportFormat::default().to_string(), "text");
    }
}
