//! Course analyzer
//!
//! Owns every collection built from requirements, catalogs and transcripts:
//! the course universe, per-course records, the prerequisite graph, department
//! sequences, the completed set and the GPA record. Loads accumulate; nothing
//! is ever removed. Relationship records are derived on demand.

use crate::core::catalog::{parse_catalog_csv, Catalog};
use crate::core::models::course::level_relation_label;
use crate::core::models::{
    CourseId, CourseRecord, EdgeOrigin, GpaRecord, PrerequisiteGraph, PrerequisiteStatus,
    RelationshipMap, RelationshipRecord,
};
use crate::core::requirements::{
    parse_requirements_file, parse_requirements_str, CourseExpr, RequirementGroup,
    RequirementsDocument,
};
use crate::core::sequence::{build_department_sequences, infer_prerequisites, DepartmentSequences};
use crate::core::transcript::{extract_course_codes, extract_descriptions, extract_gpa};
use crate::{debug, error, info, verbose};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::Path;

/// Outcome of loading a requirements document or catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Courses that were new to the universe
    pub courses_added: usize,
    /// Prerequisite edges that were new to the graph
    pub edges_added: usize,
    /// Entries or rows skipped because of their shape
    pub skipped_entries: usize,
    /// Why the load failed, if it did
    pub error: Option<String>,
}

impl LoadSummary {
    fn failed(message: String) -> Self {
        Self {
            error: Some(message),
            ..Self::default()
        }
    }

    /// Returns `true` if the source was read and parsed
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

impl fmt::Display for LoadSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            Some(message) => write!(f, "load failed: {message}"),
            None => write!(
                f,
                "{} new courses, {} new prerequisite links, {} skipped entries",
                self.courses_added, self.edges_added, self.skipped_entries
            ),
        }
    }
}

/// Reconciles requirements, catalogs and transcripts into one course model
#[derive(Debug, Clone, Default)]
pub struct CourseAnalyzer {
    universe: BTreeSet<CourseId>,
    records: BTreeMap<CourseId, CourseRecord>,
    graph: PrerequisiteGraph,
    sequences: DepartmentSequences,
    groups: Vec<RequirementGroup>,
    completed: BTreeSet<CourseId>,
    gpa: GpaRecord,
}

impl CourseAnalyzer {
    /// Create an empty analyzer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ----- Loading -----

    /// Load a requirements JSON file.
    ///
    /// Failures are logged and reported in the summary; state loaded before
    /// the failure is kept.
    pub fn load_requirements_file<P: AsRef<Path>>(&mut self, path: P) -> LoadSummary {
        let path = path.as_ref();
        match parse_requirements_file(path) {
            Ok(document) => {
                let summary = self.load_requirements_document(&document);
                info!("Loaded requirements from {}: {summary}", path.display());
                summary
            }
            Err(e) => {
                let message = format!("Failed to load requirements '{}': {e}", path.display());
                error!("{message}");
                LoadSummary::failed(message)
            }
        }
    }

    /// Load a requirements document from JSON text
    pub fn load_requirements_str(&mut self, json: &str) -> LoadSummary {
        match parse_requirements_str(json) {
            Ok(document) => self.load_requirements_document(&document),
            Err(e) => {
                let message = format!("Failed to parse requirements: {e}");
                error!("{message}");
                LoadSummary::failed(message)
            }
        }
    }

    /// Add an already-parsed requirements document, then run sequence inference.
    pub fn load_requirements_document(&mut self, document: &RequirementsDocument) -> LoadSummary {
        let courses_before = self.universe.len();
        let edges_before = self.graph.edge_count();

        for group in &document.groups {
            if !self.groups.contains(group) {
                self.groups.push(group.clone());
            }
            for entry in &group.courses {
                self.add_requirement_entry(entry, &group.label);
            }
        }

        self.sequences = build_department_sequences(&self.universe, &self.records);
        let inferred = infer_prerequisites(&self.universe, &self.records, &mut self.graph);
        debug!(
            "Built {} department sequences, inferred {inferred} prerequisite links",
            self.sequences.len()
        );

        LoadSummary {
            courses_added: self.universe.len() - courses_before,
            edges_added: self.graph.edge_count() - edges_before,
            skipped_entries: document.skipped_entries,
            error: None,
        }
    }

    fn add_requirement_entry(&mut self, entry: &str, label: &str) {
        let expr = CourseExpr::parse(entry);
        if expr.is_empty() {
            debug!("Skipping empty course entry in '{label}'");
            return;
        }
        for course in expr.courses() {
            let mut record = CourseRecord::from_id(course.to_string(), &CourseId::normalize(course));
            record.add_group(label);
            self.register_course(course, record);
        }
        for (earlier, later) in expr.sequence_pairs() {
            let (earlier, later) = (CourseId::normalize(earlier), CourseId::normalize(later));
            if !earlier.is_empty() && !later.is_empty() {
                self.graph
                    .add_prerequisite(&later, &earlier, EdgeOrigin::Explicit);
            }
        }
    }

    /// Add a course to the universe, creating or enriching its record.
    fn register_course(&mut self, raw: &str, record: CourseRecord) -> Option<CourseId> {
        let id = CourseId::normalize(raw);
        if id.is_empty() {
            return None;
        }
        self.universe.insert(id.clone());
        self.graph.add_course(&id);
        self.records
            .entry(id.clone())
            .and_modify(|existing| existing.enrich(&record))
            .or_insert(record);
        Some(id)
    }

    /// Load a course catalog CSV file.
    ///
    /// Department sequences are rebuilt; no prerequisites are inferred.
    pub fn load_catalog_file<P: AsRef<Path>>(&mut self, path: P) -> LoadSummary {
        let path = path.as_ref();
        match parse_catalog_csv(path) {
            Ok(catalog) => {
                let summary = self.load_catalog(&catalog);
                info!("Loaded catalog from {}: {summary}", path.display());
                summary
            }
            Err(e) => {
                let message = format!("Failed to load course catalog '{}': {e}", path.display());
                error!("{message}");
                LoadSummary::failed(message)
            }
        }
    }

    /// Add an already-parsed catalog.
    pub fn load_catalog(&mut self, catalog: &Catalog) -> LoadSummary {
        let courses_before = self.universe.len();
        let edges_before = self.graph.edge_count();

        for row in &catalog.rows {
            let name = if row.name.is_empty() {
                row.id.to_string()
            } else {
                row.name.clone()
            };
            let mut record = CourseRecord::from_id(name, &row.id);
            record.credits = row.credits;
            if row.field.is_some() {
                record.department.clone_from(&row.field);
            }
            record.description.clone_from(&row.description);
            self.register_course(row.id.as_str(), record);

            for prerequisite in &row.prerequisites {
                let record = CourseRecord::from_id(prerequisite.to_string(), prerequisite);
                self.register_course(prerequisite.as_str(), record);
                self.graph
                    .add_prerequisite(&row.id, prerequisite, EdgeOrigin::Catalog);
            }
        }
        self.sequences = build_department_sequences(&self.universe, &self.records);

        LoadSummary {
            courses_added: self.universe.len() - courses_before,
            edges_added: self.graph.edge_count() - edges_before,
            skipped_entries: catalog.skipped_rows,
            error: None,
        }
    }

    // ----- Transcript extraction -----

    /// Find completed courses in transcript text.
    ///
    /// Also fills course titles and merges any GPA values found.
    ///
    /// # Returns
    /// The courses recognized in this text (not the whole completed set)
    pub fn extract_courses_from_text(&mut self, text: &str) -> BTreeSet<CourseId> {
        let found = extract_course_codes(text);
        self.completed.extend(found.iter().cloned());
        verbose!("Recognized {} course codes in transcript text", found.len());

        self.extract_course_descriptions(text);

        let gpa = extract_gpa(text);
        for (kind, value) in gpa.iter() {
            debug!("{kind}: {value}");
        }
        self.gpa.merge(&gpa);
        found
    }

    /// Fill course descriptions from transcript lines.
    ///
    /// Existing descriptions are kept. Courses without a record get a minimal
    /// one named after the description.
    ///
    /// # Returns
    /// Description per course id, as found in the text
    pub fn extract_course_descriptions(&mut self, text: &str) -> BTreeMap<CourseId, String> {
        let mut found = BTreeMap::new();
        for matched in extract_descriptions(text) {
            match self.records.get_mut(&matched.course) {
                Some(record) => {
                    record.fill_description(&matched.description);
                }
                None => {
                    let mut record = CourseRecord::named(matched.description.clone());
                    record.department = Some(matched.department.clone());
                    if let Some(number) = matched.number {
                        record.set_number(number);
                    }
                    record.description = Some(matched.description.clone());
                    self.records.insert(matched.course.clone(), record);
                }
            }
            found.insert(matched.course, matched.description);
        }
        found
    }

    /// Extract GPA values from `text` and merge them into the analyzer's record.
    pub fn extract_gpa(&mut self, text: &str) -> GpaRecord {
        let gpa = extract_gpa(text);
        self.gpa.merge(&gpa);
        gpa
    }

    // ----- Derived views -----

    /// Map each universe course to the transcript strings that name it.
    ///
    /// Both sides are compared without whitespace and case.
    #[must_use]
    pub fn map_to_requirement_courses<S: AsRef<str>>(
        &self,
        transcript_courses: &[S],
    ) -> BTreeMap<CourseId, BTreeSet<String>> {
        let mut mapping: BTreeMap<CourseId, BTreeSet<String>> = BTreeMap::new();
        for raw in transcript_courses {
            let raw = raw.as_ref();
            let id = CourseId::normalize(raw);
            if self.universe.contains(&id) {
                mapping.entry(id).or_default().insert(raw.to_string());
            }
        }
        mapping
    }

    /// Relationship record for every universe course that has a record.
    #[must_use]
    pub fn analyze_course_relationships(&self) -> RelationshipMap {
        self.universe
            .iter()
            .filter_map(|id| {
                let record = self.records.get(id)?;
                Some((id.clone(), self.relationship_of(id, record)))
            })
            .collect()
    }

    fn relationship_of(&self, id: &CourseId, record: &CourseRecord) -> RelationshipRecord {
        let prerequisites = self.graph.prerequisites_of(id.as_str());
        let completed_prerequisites: Vec<CourseId> = prerequisites
            .iter()
            .filter(|p| self.completed.contains(*p))
            .cloned()
            .collect();
        let all_completed = completed_prerequisites.len() == prerequisites.len();

        let mut next_courses = self.graph.dependents_of(id.as_str());
        next_courses.sort();

        let field = record.department.clone().unwrap_or_default();
        let related_courses = self
            .sequences
            .get(&field)
            .map(|sequence| sequence.iter().filter(|c| *c != id).cloned().collect())
            .unwrap_or_default();

        RelationshipRecord {
            name: record.name.clone(),
            field,
            level: record.tier.map_or(0, |t| t.level()),
            level_name: record.tier.map(|t| t.name().to_string()).unwrap_or_default(),
            number: record.number.unwrap_or(0),
            level_relation: level_relation_label(record.number).to_string(),
            description: record.display_description(),
            completed: self.completed.contains(id),
            prerequisites: PrerequisiteStatus {
                list: prerequisites,
                completed: completed_prerequisites,
                all_completed,
            },
            next_courses,
            related_courses,
            groups: record.groups.clone(),
        }
    }

    // ----- Accessors -----

    /// Every course named by a loaded requirements document or catalog
    #[must_use]
    pub const fn universe(&self) -> &BTreeSet<CourseId> {
        &self.universe
    }

    /// Record for a course
    #[must_use]
    pub fn record(&self, course: &str) -> Option<&CourseRecord> {
        self.records.get(course)
    }

    /// All course records, including transcript-only ones
    #[must_use]
    pub const fn records(&self) -> &BTreeMap<CourseId, CourseRecord> {
        &self.records
    }

    /// The prerequisite graph
    #[must_use]
    pub const fn graph(&self) -> &PrerequisiteGraph {
        &self.graph
    }

    /// Department sequences from the last load
    #[must_use]
    pub const fn sequences(&self) -> &DepartmentSequences {
        &self.sequences
    }

    /// Requirement groups in load order
    #[must_use]
    pub fn groups(&self) -> &[RequirementGroup] {
        &self.groups
    }

    /// Courses recognized in any transcript so far
    #[must_use]
    pub const fn completed(&self) -> &BTreeSet<CourseId> {
        &self.completed
    }

    /// GPA values gathered from all transcripts
    #[must_use]
    pub const fn gpa(&self) -> &GpaRecord {
        &self.gpa
    }
}
