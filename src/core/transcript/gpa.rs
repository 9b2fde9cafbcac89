//! GPA extraction
//!
//! Runs four patterns over the lowercased text and labels each hit from the
//! words around it. Labelling looks at a fixed window, so a value near an
//! unrelated label (e.g., a semester GPA on the line above "Cumulative") can
//! be filed under that label; later hits overwrite earlier ones.

use crate::core::models::{GpaKind, GpaRecord};
use crate::debug;
use regex::Regex;
use std::sync::LazyLock;

/// Characters of context on each side of a match used for labelling
const CONTEXT_WINDOW: usize = 30;

/// Patterns in application order; the value is always the last group.
static GPA_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"gpa[:\s]+([0-9]+\.[0-9]+)",
        r"([0-9]+\.[0-9]+)\s+gpa",
        r"(overall|cumulative|cum)[\s-]*gpa[:\s]+([0-9]+\.[0-9]+)",
        r"(term|semester|sem)[\s-]*gpa[:\s]+([0-9]+\.[0-9]+)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("Invalid GPA regex"))
    .collect()
});

/// Label a GPA hit from its surrounding text.
#[must_use]
pub fn classify_context(context: &str) -> GpaKind {
    if ["cumulative", "cum", "overall"].iter().any(|w| context.contains(w)) {
        GpaKind::Cumulative
    } else if ["semester", "term", "sem"].iter().any(|w| context.contains(w)) {
        GpaKind::Semester
    } else if context.contains("major") {
        GpaKind::Major
    } else {
        GpaKind::Unlabeled
    }
}

/// `text[start..end]` widened by [`CONTEXT_WINDOW`] characters on each side.
fn context_around(text: &str, start: usize, end: usize) -> &str {
    let from = text[..start]
        .char_indices()
        .rev()
        .nth(CONTEXT_WINDOW - 1)
        .map_or(0, |(i, _)| i);
    let to = text[end..]
        .char_indices()
        .nth(CONTEXT_WINDOW)
        .map_or(text.len(), |(i, _)| end + i);
    &text[from..to]
}

/// Extract labelled GPA values from transcript text.
#[must_use]
pub fn extract_gpa(text: &str) -> GpaRecord {
    let lower = text.to_lowercase();
    let mut record = GpaRecord::new();

    for pattern in GPA_PATTERNS.iter() {
        for caps in pattern.captures_iter(&lower) {
            let (Some(whole), Some(value)) = (caps.get(0), caps.iter().flatten().last()) else {
                continue;
            };
            let Ok(gpa) = value.as_str().parse::<f64>() else {
                debug!("Skipping unparseable GPA value '{}'", value.as_str());
                continue;
            };
            let kind = classify_context(context_around(&lower, whole.start(), whole.end()));
            record.record(kind, gpa);
        }
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cumulative_gpa_with_colon() {
        let record = extract_gpa("Cumulative GPA: 3.75");
        assert_eq!(record.len(), 1);
        assert_eq!(record.get(GpaKind::Cumulative), Some(3.75));
    }

    #[test]
    fn value_before_keyword_is_unlabeled() {
        let record = extract_gpa("Final standing 3.20 GPA");
        assert_eq!(record.get(GpaKind::Unlabeled), Some(3.2));
    }

    #[test]
    fn separate_labels_are_kept_apart() {
        let text = format!(
            "Term GPA: 3.40\n{}\nMajor GPA: 3.90",
            "-".repeat(CONTEXT_WINDOW * 2)
        );
        let record = extract_gpa(&text);
        assert_eq!(record.get(GpaKind::Semester), Some(3.4));
        assert_eq!(record.get(GpaKind::Major), Some(3.9));
        assert_eq!(record.get(GpaKind::Cumulative), None);
    }

    #[test]
    fn classification_order() {
        assert_eq!(classify_context("overall term gpa"), GpaKind::Cumulative);
        assert_eq!(classify_context("sem gpa major"), GpaKind::Semester);
        assert_eq!(classify_context("major gpa"), GpaKind::Major);
        assert_eq!(classify_context("gpa"), GpaKind::Unlabeled);
    }

    #[test]
    fn no_gpa_in_text() {
        assert!(extract_gpa("MATH 101 Calculus I A 4").is_empty());
        assert!(extract_gpa("GPA: pending").is_empty());
    }

    #[test]
    fn window_respects_multibyte_text() {
        let record = extract_gpa("Überblick · Cumulative GPA: 3.10 · Schüler");
        assert_eq!(record.get(GpaKind::Cumulative), Some(3.1));
    }

    fn dashed(dashes: usize) -> String {
        format!("Cumulative{} GPA: 3.75", "–".repeat(dashes))
    }

    #[test]
    fn window_counts_characters_not_bytes() {
        assert_eq!(extract_gpa(&dashed(10)).get(GpaKind::Cumulative), Some(3.75));
        // "Cumulative" + 19 dashes + space fills the window exactly.
        assert_eq!(extract_gpa(&dashed(19)).get(GpaKind::Cumulative), Some(3.75));

        let record = extract_gpa(&dashed(20));
        assert_eq!(record.get(GpaKind::Cumulative), None);
        assert_eq!(record.get(GpaKind::Unlabeled), Some(3.75));
    }
}
