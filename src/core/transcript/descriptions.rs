//! Course titles from transcript lines
//!
//! Transcript rows usually read `DEPT NUM Title ... Grade Credits`. The title
//! is the text after the code up to the first digit.

use crate::core::models::course::parse_course_number;
use crate::core::models::CourseId;
use regex::Regex;
use std::sync::LazyLock;

/// Course code anywhere in a line (no word boundaries; OCR often glues tokens).
static LINE_COURSE_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([A-Z]{2,4})[- ]?([0-9]{3}[A-Z]?)").expect("Invalid line course code regex")
});

/// Shortest run of non-digit text (before trimming) accepted as a title
const MIN_DESCRIPTION_CHARS: usize = 4;

/// A title found next to a course code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionMatch {
    /// Canonical id of the code on the line
    pub course: CourseId,
    /// Uppercase department letters
    pub department: String,
    /// Numeric course number
    pub number: Option<u32>,
    /// Title text, trimmed
    pub description: String,
}

/// Title for a single line, if the line has a code followed by text.
#[must_use]
pub fn describe_line(line: &str) -> Option<DescriptionMatch> {
    let caps = LINE_COURSE_CODE.captures(line)?;
    let whole = caps.get(0)?;
    let department = caps.get(1)?.as_str().to_ascii_uppercase();
    let number_text = caps.get(2)?.as_str();

    let rest = line[whole.end()..].trim();
    // The minimum applies to the run before the first digit, spaces included.
    let run = rest
        .split(|c: char| c.is_ascii_digit())
        .next()
        .unwrap_or_default();
    let title = run.trim();
    if run.chars().count() < MIN_DESCRIPTION_CHARS || title.is_empty() {
        return None;
    }

    Some(DescriptionMatch {
        course: CourseId::normalize(&format!("{department}{number_text}")),
        department,
        number: parse_course_number(number_text),
        description: title.to_string(),
    })
}

/// Titles for every line of `text` that has one, in line order.
#[must_use]
pub fn extract_descriptions(text: &str) -> Vec<DescriptionMatch> {
    text.lines().filter_map(describe_line).collect()
}
