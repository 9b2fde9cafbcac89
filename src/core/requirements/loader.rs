//! Requirements document parsing
//!
//! Walks the classified node tree and flattens it into labelled
//! [`RequirementGroup`]s. Label paths join category, subcategory and choice
//! names with `" - "` (e.g., "General Education - Science - Lab").

use super::node::{CourseList, RequirementNode};
use crate::debug;
use serde_json::Value;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Separator between label path components
const LABEL_SEPARATOR: &str = " - ";

/// A named bucket of course entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementGroup {
    /// Label path (e.g., "Major Requirements - Core")
    pub label: String,
    /// Number of entries that must be satisfied, when the document says
    pub required: Option<u32>,
    /// Raw entries as written (may contain `&` or `|`)
    pub courses: Vec<String>,
}

/// Flattened requirements document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequirementsDocument {
    /// Groups in document order
    pub groups: Vec<RequirementGroup>,
    /// Entries skipped because of their shape
    pub skipped_entries: usize,
}

impl RequirementsDocument {
    /// Total number of raw course entries across all groups
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|g| g.courses.len()).sum()
    }
}

/// Parse a requirements document from a JSON string
///
/// # Errors
/// Returns an error if the text is not valid JSON or the top level is not an object.
pub fn parse_requirements_str(json: &str) -> Result<RequirementsDocument, Box<dyn Error>> {
    let value: Value = serde_json::from_str(json)?;
    parse_requirements_value(&value)
}

/// Parse a requirements document from a JSON file
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn parse_requirements_file<P: AsRef<Path>>(
    path: P,
) -> Result<RequirementsDocument, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    parse_requirements_str(&content)
}

/// Flatten an already-parsed JSON value
///
/// # Errors
/// Returns an error if the top level is not an object.
pub fn parse_requirements_value(value: &Value) -> Result<RequirementsDocument, Box<dyn Error>> {
    let RequirementNode::Category(categories) = RequirementNode::classify(value) else {
        return Err("Requirements document must be a JSON object of categories".into());
    };

    let mut document = RequirementsDocument::default();
    let mut path = Vec::new();
    for (name, node) in &categories {
        path.push(name.as_str());
        walk(node, &mut path, &mut document);
        path.pop();
    }
    Ok(document)
}

fn walk<'a>(node: &'a RequirementNode, path: &mut Vec<&'a str>, document: &mut RequirementsDocument) {
    match node {
        RequirementNode::List(list)
        | RequirementNode::CountedList(list)
        | RequirementNode::CourseObject(list) => push_group(list, path, document),
        RequirementNode::Choices(children) | RequirementNode::Category(children) => {
            for (name, child) in children {
                path.push(name.as_str());
                walk(child, path, document);
                path.pop();
            }
        }
        RequirementNode::Unrecognized(kind) => {
            debug!(
                "Skipping requirements entry '{}': unrecognized {kind}",
                path.join(LABEL_SEPARATOR)
            );
            document.skipped_entries += 1;
        }
    }
}

fn push_group(list: &CourseList, path: &[&str], document: &mut RequirementsDocument) {
    document.skipped_entries += list.skipped;
    if list.courses.is_empty() {
        return;
    }
    document.groups.push(RequirementGroup {
        label: path.join(LABEL_SEPARATOR),
        required: list.required,
        courses: list.courses.clone(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "Major Requirements": ["3", "CSCI 111", "CSCI 211", "ElE 235 & ElE 236"],
        "General Education": {
            "Writing": {"courses": ["WRIT 101"]},
            "Science": {"choices": {"Lab": [1, "CHEM 101", "BIOL 101"]}},
            "Math": ["Math 302 | Math 401"]
        },
        "Notes": "free text"
    }"#;

    #[test]
    fn flattens_all_encodings() {
        let doc = parse_requirements_str(SAMPLE).expect("valid document");
        let labels: Vec<&str> = doc.groups.iter().map(|g| g.label.as_str()).collect();

        assert!(labels.contains(&"Major Requirements"));
        assert!(labels.contains(&"General Education - Writing"));
        assert!(labels.contains(&"General Education - Science - Lab"));
        assert!(labels.contains(&"General Education - Math"));
        assert_eq!(doc.entry_count(), 7);
        assert_eq!(doc.skipped_entries, 1);
    }

    #[test]
    fn keeps_required_counts() {
        let doc = parse_requirements_str(SAMPLE).expect("valid document");
        let major = doc
            .groups
            .iter()
            .find(|g| g.label == "Major Requirements")
            .expect("major group");
        assert_eq!(major.required, Some(3));
        assert_eq!(major.courses.len(), 3);

        let writing = doc
            .groups
            .iter()
            .find(|g| g.label == "General Education - Writing")
            .expect("writing group");
        assert_eq!(writing.required, None);
    }

    #[test]
    fn rejects_non_object_documents() {
        assert!(parse_requirements_str(r#"["MATH 101"]"#).is_err());
        assert!(parse_requirements_str("{not json").is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(parse_requirements_file("does/not/exist.json").is_err());
    }
}
