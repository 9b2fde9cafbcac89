//! Plain-text summary of a transcript for a downstream advisor

use super::ReportContext;
use crate::core::models::gpa::format_gpa;

/// Two-paragraph summary: completed courses, then GPA values.
///
/// ```text
/// Courses completed: CSCI111, MATH101
///
/// GPA information: Cumulative GPA: 3.75
/// ```
#[must_use]
pub fn advisor_summary(ctx: &ReportContext) -> String {
    let courses = if ctx.completed.is_empty() {
        "none found".to_string()
    } else {
        ctx.completed
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };

    let gpa = if ctx.gpa.is_empty() {
        "none found".to_string()
    } else {
        ctx.gpa
            .iter()
            .map(|(kind, value)| format!("{kind}: {}", format_gpa(value)))
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!("Courses completed: {courses}\n\nGPA information: {gpa}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{CourseId, GpaKind, GpaRecord, RelationshipMap};
    use std::collections::BTreeSet;

    #[test]
    fn lists_courses_and_gpa() {
        let relationships = RelationshipMap::new();
        let completed: BTreeSet<CourseId> =
            ["MATH 101", "CSCI111"].into_iter().map(CourseId::normalize).collect();
        let mut gpa = GpaRecord::new();
        gpa.record(GpaKind::Semester, 3.4);
        gpa.record(GpaKind::Cumulative, 3.75);

        let ctx = ReportContext::new(&relationships, &gpa, &completed, "");
        assert_eq!(
            advisor_summary(&ctx),
            "Courses completed: CSCI111, MATH101\n\nGPA information: Cumulative GPA: 3.75, Semester GPA: 3.4\n"
        );
    }

    #[test]
    fn empty_transcript() {
        let relationships = RelationshipMap::new();
        let completed = BTreeSet::new();
        let gpa = GpaRecord::new();
        let ctx = ReportContext::new(&relationships, &gpa, &completed, "");
        assert!(advisor_summary(&ctx).contains("Courses completed: none found"));
    }
}
