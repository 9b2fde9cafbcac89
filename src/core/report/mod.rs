//! Report generation for transcript analysis
//!
//! Reports are rendered from a [`ReportContext`] that borrows the analyzer's
//! results. Text reports follow a fixed layout (GPA, courses grouped by
//! department, optional keyword search); JSON reports carry the full
//! relationship records.

pub mod formats;
pub mod summary;

use crate::core::models::gpa::format_gpa;
use crate::core::models::{CourseId, GpaRecord, RelationshipMap, RelationshipRecord};
use crate::core::search::search_keyword;
use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fs;
use std::path::Path;

pub use formats::{JsonReporter, ReportFormat, TextReporter};
pub use summary::advisor_summary;

/// Data context for report generation
///
/// Aggregates everything a report needs so every format renders from the
/// same data.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Relationship record per course
    pub relationships: &'a RelationshipMap,
    /// GPA values found in the transcript
    pub gpa: &'a GpaRecord,
    /// Courses recognized in the transcript
    pub completed: &'a BTreeSet<CourseId>,
    /// Transcript text, used for keyword search
    pub transcript_text: &'a str,
    /// Keyword to search for, if any
    pub keyword: Option<&'a str>,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(
        relationships: &'a RelationshipMap,
        gpa: &'a GpaRecord,
        completed: &'a BTreeSet<CourseId>,
        transcript_text: &'a str,
    ) -> Self {
        Self {
            relationships,
            gpa,
            completed,
            transcript_text,
            keyword: None,
        }
    }

    /// Add a keyword search section
    #[must_use]
    pub const fn with_keyword(mut self, keyword: Option<&'a str>) -> Self {
        self.keyword = keyword;
        self
    }

    /// `(label, value)` pairs with values formatted for display
    #[must_use]
    pub fn gpa_lines(&self) -> Vec<(&'static str, String)> {
        self.gpa
            .iter()
            .map(|(kind, value)| (kind.label(), format_gpa(value)))
            .collect()
    }

    /// Courses with a known department, grouped by department (alphabetical)
    /// and ordered by course number within each.
    #[must_use]
    pub fn courses_by_department(&self) -> BTreeMap<&'a str, Vec<(&'a CourseId, &'a RelationshipRecord)>> {
        let mut departments: BTreeMap<&str, Vec<_>> = BTreeMap::new();
        for (id, record) in self.relationships {
            if !record.field.is_empty() {
                departments.entry(record.field.as_str()).or_default().push((id, record));
            }
        }
        for courses in departments.values_mut() {
            courses.sort_by_key(|(_, record)| record.number);
        }
        departments
    }

    /// Keyword matches, or `None` when no keyword was given
    #[must_use]
    pub fn search_matches(&self) -> Option<Vec<String>> {
        self.keyword
            .map(|keyword| search_keyword(self.transcript_text, keyword))
    }

    /// Number of completed courses
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }
}

/// Returns `true` when a display name only repeats the course id
/// (e.g., "ElE 235" for `ELE235`).
#[must_use]
pub fn name_repeats_id(name: &str, id: &CourseId) -> bool {
    CourseId::normalize(name) == *id
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;

    /// Generate a report to a file, creating parent directories as needed
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(output_path, content)?;
        Ok(())
    }
}
