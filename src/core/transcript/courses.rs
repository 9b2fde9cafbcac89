//! Course-code extraction from OCR text
//!
//! OCR output mixes real course codes with headers, terms and page noise that
//! share the same letters-then-digits shape. Matches pass two filters: a
//! block list of words known to produce false positives, and an allow list of
//! real department abbreviations.

use crate::core::models::CourseId;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Word-bounded course code: 2–4 letter department, optional space or hyphen,
/// three digits and an optional letter suffix.
static COURSE_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b([A-Z]{2,4})[- ]?([0-9]{3}[A-Z]?)\b").expect("Invalid course code regex")
});

/// Department tokens that match the code shape but are transcript words.
pub const FALSE_POSITIVE_DEPARTMENTS: &[&str] = &[
    "FALL", "USED", "FRON", "MMER", "WWSL", "AND", "BOX", "TO", "IN", "OF", "MS",
];

/// Department abbreviations accepted as real courses.
pub const KNOWN_DEPARTMENTS: &[&str] = &[
    "MATH", "PHYS", "CHEM", "BIO", "BIOL", "CSCI", "CS", "ENGL", "HIST", "ECON", "PSYC", "SOC",
    "PHIL", "SPAN", "FR", "GER", "CHIN", "JAPN", "COMM", "ANTH", "POLI", "GEOG", "GEOL", "ART",
    "MUS", "THEA", "PE", "EDUC", "NURS", "ENGR", "STAT", "ASTR", "WRIT", "SPCH", "LIBA", "HON",
    "ELE", "BISC", "LAT", "ASTRO",
];

/// Returns `true` if `department` (any case) passes both filters.
#[must_use]
pub fn is_accepted_department(department: &str) -> bool {
    let upper = department.to_ascii_uppercase();
    !FALSE_POSITIVE_DEPARTMENTS.contains(&upper.as_str())
        && KNOWN_DEPARTMENTS.contains(&upper.as_str())
}

/// Find every accepted course code in `text`.
#[must_use]
pub fn extract_course_codes(text: &str) -> BTreeSet<CourseId> {
    COURSE_CODE
        .captures_iter(text)
        .filter_map(|caps| {
            let department = caps.get(1)?.as_str();
            let number = caps.get(2)?.as_str();
            is_accepted_department(department)
                .then(|| CourseId::normalize(&format!("{department}{number}")))
        })
        .collect()
}
