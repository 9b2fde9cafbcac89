//! Course identity and course records

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::sync::LazyLock;

/// Department letters followed by the course number and an optional letter suffix.
static COURSE_PARTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]+)([0-9]+[A-Za-z]*)").expect("Invalid course parts regex")
});

/// Sort position for courses whose number cannot be parsed.
pub const UNNUMBERED_SORT_KEY: u32 = 999;

/// Canonical course identifier (e.g., "MATH301")
///
/// Always uppercase with no whitespace, so every spelling of a course
/// ("Math 301", "MATH  301", "math301") collapses to one key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(String);

impl CourseId {
    /// Normalize a raw course string: strip all whitespace and uppercase.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        Self(
            raw.chars()
                .filter(|c| !c.is_whitespace())
                .flat_map(char::to_uppercase)
                .collect(),
        )
    }

    /// The canonical key as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the id of an empty or all-whitespace string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Split into department letters and number text (e.g. `("MATH", "101A")`).
    #[must_use]
    pub fn parts(&self) -> Option<(&str, &str)> {
        let caps = COURSE_PARTS.captures(&self.0)?;
        let dept = caps.get(1)?.as_str();
        let number = caps.get(2)?.as_str();
        Some((dept, number))
    }

    /// Department code, if the id has the `letters+digits` shape.
    #[must_use]
    pub fn department(&self) -> Option<&str> {
        self.parts().map(|(dept, _)| dept)
    }

    /// Leading numeric part of the course number (`"101A"` → `101`).
    ///
    /// `None` when the id has no number or the digits overflow.
    #[must_use]
    pub fn number(&self) -> Option<u32> {
        self.parts().and_then(|(_, number)| parse_course_number(number))
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for CourseId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CourseId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CourseId {
    fn from(raw: &str) -> Self {
        Self::normalize(raw)
    }
}

/// Parse the leading digits of a course number (`"235L"` → `235`).
#[must_use]
pub fn parse_course_number(number: &str) -> Option<u32> {
    let end = number
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(number.len());
    number[..end].parse().ok()
}

/// Coarse classification of a course by its number range
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LevelTier {
    /// Numbers below 200
    Introductory,
    /// 200–299
    Intermediate,
    /// 300–399
    Advanced,
    /// 400 and above
    SeniorGraduate,
}

impl LevelTier {
    /// Tier for a numeric course number.
    #[must_use]
    pub const fn from_number(number: u32) -> Self {
        match number {
            0..=199 => Self::Introductory,
            200..=299 => Self::Intermediate,
            300..=399 => Self::Advanced,
            _ => Self::SeniorGraduate,
        }
    }

    /// Level number, 1 (introductory) through 4 (senior/graduate).
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::Introductory => 1,
            Self::Intermediate => 2,
            Self::Advanced => 3,
            Self::SeniorGraduate => 4,
        }
    }

    /// Display name of the tier
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Introductory => "Introductory",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::SeniorGraduate => "Senior/Graduate",
        }
    }
}

impl fmt::Display for LevelTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Label describing where a course number sits in a typical progression.
#[must_use]
pub const fn level_relation_label(number: Option<u32>) -> &'static str {
    match number {
        None => "Unknown",
        Some(0..=199) => "Introductory/Fundamental",
        Some(200..=299) => "Intermediate/Core",
        Some(300..=399) => "Advanced/Specialized",
        Some(_) => "Senior/Graduate",
    }
}

/// Everything known about a single course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Display name in its original formatting (e.g., "ElE 235")
    pub name: String,

    /// Department code (e.g., "MATH")
    pub department: Option<String>,

    /// Numeric course number (e.g., 235 for "ElE 235L")
    pub number: Option<u32>,

    /// Level tier derived from the number
    pub tier: Option<LevelTier>,

    /// Credit hours, when a catalog provides them
    pub credits: Option<f32>,

    /// Course title or description text
    pub description: Option<String>,

    /// Requirement-group labels this course counts toward
    pub groups: Vec<String>,
}

impl CourseRecord {
    /// Minimal record holding only a display name
    #[must_use]
    pub const fn named(name: String) -> Self {
        Self {
            name,
            department: None,
            number: None,
            tier: None,
            credits: None,
            description: None,
            groups: Vec::new(),
        }
    }

    /// Build a record from a display name and its canonical id.
    ///
    /// Department, number and tier are filled when the id has the
    /// `letters+digits` shape; otherwise only the name is kept.
    #[must_use]
    pub fn from_id(name: String, id: &CourseId) -> Self {
        let mut record = Self::named(name);
        if let Some((dept, number)) = id.parts() {
            if let Some(number) = parse_course_number(number) {
                record.department = Some(dept.to_string());
                record.set_number(number);
            }
        }
        record
    }

    /// Set the course number and its derived tier together.
    pub fn set_number(&mut self, number: u32) {
        self.number = Some(number);
        self.tier = Some(LevelTier::from_number(number));
    }

    /// Add a requirement-group label (no duplicates)
    pub fn add_group(&mut self, label: &str) {
        if !self.groups.iter().any(|g| g == label) {
            self.groups.push(label.to_string());
        }
    }

    /// Set the description only when none is present.
    ///
    /// Returns `true` if the description was written.
    pub fn fill_description(&mut self, description: &str) -> bool {
        if self.has_description() || description.trim().is_empty() {
            return false;
        }
        self.description = Some(description.to_string());
        true
    }

    /// Returns `true` when a non-empty description is stored
    #[must_use]
    pub fn has_description(&self) -> bool {
        self.description.as_deref().is_some_and(|d| !d.is_empty())
    }

    /// Merge another encounter of the same course into this record.
    ///
    /// Non-empty fields are never replaced by empty ones; groups are unioned.
    pub fn enrich(&mut self, other: &Self) {
        if self.name.is_empty() && !other.name.is_empty() {
            self.name.clone_from(&other.name);
        }
        if self.department.is_none() {
            self.department.clone_from(&other.department);
        }
        if self.number.is_none() {
            if let Some(number) = other.number {
                self.set_number(number);
            }
        }
        if self.credits.is_none() {
            self.credits = other.credits;
        }
        if let Some(description) = &other.description {
            self.fill_description(description);
        }
        for group in &other.groups {
            self.add_group(group);
        }
    }

    /// Description to show: the stored one, or a generic "<Tier> <DEPT> course".
    #[must_use]
    pub fn display_description(&self) -> String {
        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            return description.to_string();
        }
        match (self.tier, self.department.as_deref()) {
            (Some(tier), Some(dept)) => format!("{tier} {dept} course"),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_whitespace_and_uppercases() {
        assert_eq!(CourseId::normalize("ElE 235").as_str(), "ELE235");
        assert_eq!(CourseId::normalize("  math\t301 ").as_str(), "MATH301");
        assert_eq!(CourseId::normalize("CS 101a").as_str(), "CS101A");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["Math 302", "csci111", " PHYS  211L ", "Lab", ""] {
            let once = CourseId::normalize(raw);
            let twice = CourseId::normalize(once.as_str());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_parts() {
        let id = CourseId::normalize("Math 101A");
        assert_eq!(id.parts(), Some(("MATH", "101A")));
        assert_eq!(id.department(), Some("MATH"));
        assert_eq!(id.number(), Some(101));

        let bare = CourseId::normalize("Elective");
        assert_eq!(bare.parts(), None);
        assert_eq!(bare.number(), None);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(LevelTier::from_number(199), LevelTier::Introductory);
        assert_eq!(LevelTier::from_number(200), LevelTier::Intermediate);
        assert_eq!(LevelTier::from_number(299), LevelTier::Intermediate);
        assert_eq!(LevelTier::from_number(300), LevelTier::Advanced);
        assert_eq!(LevelTier::from_number(399), LevelTier::Advanced);
        assert_eq!(LevelTier::from_number(400), LevelTier::SeniorGraduate);
        assert_eq!(LevelTier::SeniorGraduate.name(), "Senior/Graduate");
        assert_eq!(LevelTier::Advanced.level(), 3);
    }

    #[test]
    fn test_level_relation_label() {
        assert_eq!(level_relation_label(Some(101)), "Introductory/Fundamental");
        assert_eq!(level_relation_label(Some(250)), "Intermediate/Core");
        assert_eq!(level_relation_label(Some(301)), "Advanced/Specialized");
        assert_eq!(level_relation_label(Some(500)), "Senior/Graduate");
        assert_eq!(level_relation_label(None), "Unknown");
    }

    #[test]
    fn test_record_from_id() {
        let id = CourseId::normalize("ElE 235");
        let record = CourseRecord::from_id("ElE 235".to_string(), &id);
        assert_eq!(record.name, "ElE 235");
        assert_eq!(record.department.as_deref(), Some("ELE"));
        assert_eq!(record.number, Some(235));
        assert_eq!(record.tier, Some(LevelTier::Intermediate));
        assert_eq!(record.display_description(), "Intermediate ELE course");
    }

    #[test]
    fn test_record_from_unparseable_id_keeps_name_only() {
        let id = CourseId::normalize("MATH 99999999999");
        let record = CourseRecord::from_id("MATH 99999999999".to_string(), &id);
        assert_eq!(record.name, "MATH 99999999999");
        assert!(record.department.is_none());
        assert!(record.number.is_none());
        assert_eq!(record.display_description(), "");
    }

    #[test]
    fn test_fill_description_only_when_absent() {
        let mut record = CourseRecord::named("MATH 101".to_string());
        assert!(record.fill_description("Calculus I"));
        assert!(!record.fill_description("Something Else"));
        assert_eq!(record.description.as_deref(), Some("Calculus I"));
    }

    #[test]
    fn test_enrich_never_blanks_fields() {
        let mut record = CourseRecord::from_id("MATH 101".to_string(), &"MATH101".into());
        record.fill_description("Calculus I");
        record.add_group("Core");

        let mut other = CourseRecord::named(String::new());
        other.add_group("Major");
        other.credits = Some(4.0);
        record.enrich(&other);

        assert_eq!(record.name, "MATH 101");
        assert_eq!(record.description.as_deref(), Some("Calculus I"));
        assert_eq!(record.groups, vec!["Core".to_string(), "Major".to_string()]);
        assert_eq!(record.credits, Some(4.0));
    }
}
