//! JSON report generator

use crate::core::models::{CourseId, GpaRecord, RelationshipMap};
use crate::core::report::{ReportContext, ReportGenerator};
use serde::Serialize;
use std::error::Error;

#[derive(Serialize)]
struct SearchSection<'a> {
    keyword: &'a str,
    matches: Vec<String>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    gpa: &'a GpaRecord,
    completed_courses: Vec<&'a CourseId>,
    courses: &'a RelationshipMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<SearchSection<'a>>,
}

/// JSON report generator
pub struct JsonReporter;

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let report = JsonReport {
            gpa: ctx.gpa,
            completed_courses: ctx.completed.iter().collect(),
            courses: ctx.relationships,
            search: ctx.keyword.map(|keyword| SearchSection {
                keyword,
                matches: ctx.search_matches().unwrap_or_default(),
            }),
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}
