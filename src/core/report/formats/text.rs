//! Plain-text report generator
//!
//! Renders `templates/analysis_report.txt` with askama. Every line of the
//! layout is built here so the template only arranges them.

use crate::core::report::{name_repeats_id, ReportContext, ReportGenerator};
use askama::Template;
use std::error::Error;

/// Separator printed after each search match
const MATCH_SEPARATOR_WIDTH: usize = 50;

struct GpaLine {
    label: &'static str,
    value: String,
}

struct CourseLine {
    status: &'static str,
    heading: String,
    description: String,
}

struct DepartmentSection {
    name: String,
    courses: Vec<CourseLine>,
}

#[derive(Template)]
#[template(path = "analysis_report.txt", escape = "none")]
struct AnalysisReportTemplate {
    gpa_lines: Vec<GpaLine>,
    departments: Vec<DepartmentSection>,
    has_search: bool,
    keyword: String,
    matches: Vec<String>,
    separator: String,
}

/// Text report generator
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn departments(ctx: &ReportContext) -> Vec<DepartmentSection> {
        ctx.courses_by_department()
            .into_iter()
            .map(|(department, courses)| DepartmentSection {
                name: department.to_string(),
                courses: courses
                    .into_iter()
                    .map(|(id, record)| {
                        let heading = if record.name.is_empty() || name_repeats_id(&record.name, id) {
                            id.to_string()
                        } else {
                            format!("{id}: {}", record.name)
                        };
                        let description = if record.description == record.name {
                            String::new()
                        } else {
                            record.description.clone()
                        };
                        CourseLine {
                            status: if record.completed { "✓" } else { "○" },
                            heading,
                            description,
                        }
                    })
                    .collect(),
            })
            .collect()
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let matches = ctx.search_matches();
        let template = AnalysisReportTemplate {
            gpa_lines: ctx
                .gpa_lines()
                .into_iter()
                .map(|(label, value)| GpaLine { label, value })
                .collect(),
            departments: Self::departments(ctx),
            has_search: matches.is_some(),
            keyword: ctx.keyword.unwrap_or_default().to_string(),
            matches: matches.unwrap_or_default(),
            separator: "-".repeat(MATCH_SEPARATOR_WIDTH),
        };
        Ok(template.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analyzer::CourseAnalyzer;

    fn analyzed() -> (CourseAnalyzer, String) {
        let mut analyzer = CourseAnalyzer::new();
        analyzer.load_requirements_str(r#"{"Major":["MATH 101","MATH 301","ElE 235"]}"#);
        let text = "MATH 101 Calculus I A 4\nCumulative GPA: 3.75".to_string();
        analyzer.extract_courses_from_text(&text);
        (analyzer, text)
    }

    #[test]
    fn test_layout() {
        let (analyzer, text) = analyzed();
        let relationships = analyzer.analyze_course_relationships();
        let ctx = ReportContext::new(&relationships, analyzer.gpa(), analyzer.completed(), &text);
        let report = TextReporter::new().render(&ctx).expect("render");

        assert!(report.starts_with(
            "=== TRANSCRIPT ANALYSIS RESULTS ===\n\nGPA INFORMATION:\n  Cumulative GPA: 3.75\n\n=== COURSES ===\n\n"
        ));
        assert!(report.contains("\n== ELE DEPARTMENT COURSES ==\n\n• ○ ELE235\n  Description: Intermediate ELE course\n"));
        assert!(report.contains("\n• ✓ MATH101\n  Description: Calculus I A\n"));
        assert!(report.contains("\n• ○ MATH301\n  Description: Advanced MATH course\n"));
        assert!(report.find("== ELE").expect("ele") < report.find("== MATH").expect("math"));
        assert!(!report.contains("SEARCH RESULTS"));
    }

    #[test]
    fn test_search_section() {
        let (analyzer, text) = analyzed();
        let relationships = analyzer.analyze_course_relationships();
        let ctx = ReportContext::new(&relationships, analyzer.gpa(), analyzer.completed(), &text);

        let report = TextReporter::new()
            .render(&ctx.clone().with_keyword(Some("calculus")))
            .expect("render");
        assert!(report.contains("\n\n=== SEARCH RESULTS FOR 'calculus' ===\n\nMatch 1:\n"));
        assert!(report.contains("MATH 101 >>> Calculus <<< I A 4"));
        assert!(report.contains(&"-".repeat(50)));

        let report = TextReporter::new()
            .render(&ctx.with_keyword(Some("biology")))
            .expect("render");
        assert!(report.contains("\nNo matches found for 'biology'"));
    }
}
