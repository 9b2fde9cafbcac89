//! Department sequences and inferred prerequisites
//!
//! Courses in a department are ordered by number. Courses whose numbers are
//! close (gap of at most [`MAX_INFERRED_GAP`]) are assumed to form a sequence,
//! so the lower one becomes a prerequisite of the higher one. This is a
//! structural approximation: it can link unrelated tracks that happen to have
//! nearby numbers, and never links widely spaced courses.

use crate::core::models::course::UNNUMBERED_SORT_KEY;
use crate::core::models::{CourseId, CourseRecord, EdgeOrigin, PrerequisiteGraph};
use std::collections::{BTreeMap, BTreeSet};

/// Largest number gap treated as a direct sequence (e.g., 101 → 102)
pub const MAX_INFERRED_GAP: u32 = 10;

/// Course ids of each department, ordered by course number
pub type DepartmentSequences = BTreeMap<String, Vec<CourseId>>;

/// Department and sort number of a course.
///
/// Record fields win over what can be parsed from the id; a course with no
/// parseable number sorts as [`UNNUMBERED_SORT_KEY`].
fn placement(id: &CourseId, records: &BTreeMap<CourseId, CourseRecord>) -> Option<(String, u32)> {
    let record = records.get(id);
    let department = record
        .and_then(|r| r.department.clone())
        .filter(|d| !d.is_empty())
        .or_else(|| id.department().map(str::to_string))?;
    let number = record
        .and_then(|r| r.number)
        .or_else(|| id.number())
        .unwrap_or(UNNUMBERED_SORT_KEY);
    Some((department, number))
}

fn ordered_departments(
    universe: &BTreeSet<CourseId>,
    records: &BTreeMap<CourseId, CourseRecord>,
) -> BTreeMap<String, Vec<(CourseId, u32)>> {
    let mut departments: BTreeMap<String, Vec<(CourseId, u32)>> = BTreeMap::new();
    for id in universe {
        if let Some((department, number)) = placement(id, records) {
            departments
                .entry(department)
                .or_default()
                .push((id.clone(), number));
        }
    }
    for courses in departments.values_mut() {
        courses.sort_by(|(a_id, a_num), (b_id, b_num)| a_num.cmp(b_num).then_with(|| a_id.cmp(b_id)));
    }
    departments.retain(|_, courses| courses.len() >= 2);
    departments
}

/// Build the ordered course list of every department with two or more courses.
#[must_use]
pub fn build_department_sequences(
    universe: &BTreeSet<CourseId>,
    records: &BTreeMap<CourseId, CourseRecord>,
) -> DepartmentSequences {
    ordered_departments(universe, records)
        .into_iter()
        .map(|(department, courses)| {
            (
                department,
                courses.into_iter().map(|(id, _)| id).collect(),
            )
        })
        .collect()
}

/// Add inferred prerequisite edges for close course numbers.
///
/// For every ordered pair (earlier, later) in a department with
/// `later - earlier <= MAX_INFERRED_GAP`, earlier becomes a prerequisite of
/// later. Existing edges are left alone.
///
/// # Returns
/// The number of new edges added
pub fn infer_prerequisites(
    universe: &BTreeSet<CourseId>,
    records: &BTreeMap<CourseId, CourseRecord>,
    graph: &mut PrerequisiteGraph,
) -> usize {
    let mut added = 0;
    for courses in ordered_departments(universe, records).values() {
        for (i, (earlier, earlier_num)) in courses.iter().enumerate() {
            for (later, later_num) in &courses[i + 1..] {
                if later_num - earlier_num > MAX_INFERRED_GAP {
                    // Sorted by number, so every later course is further away.
                    break;
                }
                if graph.add_prerequisite(later, earlier, EdgeOrigin::Inferred) {
                    added += 1;
                }
            }
        }
    }
    added
}
