//! Per-course relationship snapshot

use super::CourseId;
use serde::Serialize;
use std::collections::BTreeMap;

/// Prerequisites of a course and how many are already done
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrerequisiteStatus {
    /// All prerequisites
    pub list: Vec<CourseId>,
    /// The prerequisites found in the completed set
    pub completed: Vec<CourseId>,
    /// `true` when there are no prerequisites or all are completed
    pub all_completed: bool,
}

/// Derived view of one course against the transcript
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationshipRecord {
    /// Display name
    pub name: String,
    /// Department code, empty when unknown
    pub field: String,
    /// Level number 1–4, 0 when unknown
    pub level: u8,
    /// Tier name (e.g., "Advanced"), empty when unknown
    pub level_name: String,
    /// Numeric course number, 0 when unknown
    pub number: u32,
    /// Progression label (e.g., "Intermediate/Core")
    pub level_relation: String,
    /// Course description or generic tier text
    pub description: String,
    /// Found in the transcript
    pub completed: bool,
    /// Prerequisite satisfaction
    pub prerequisites: PrerequisiteStatus,
    /// Courses that list this one as a prerequisite
    pub next_courses: Vec<CourseId>,
    /// Other courses in the same department
    pub related_courses: Vec<CourseId>,
    /// Requirement groups this course counts toward
    pub groups: Vec<String>,
}

/// Relationship records keyed by course id
pub type RelationshipMap = BTreeMap<CourseId, RelationshipRecord>;
