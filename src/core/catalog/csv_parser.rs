//! CSV parser for course catalogs
//!
//! Expected header (column order is free, names are case-insensitive):
//! `course_id,course_name,credits,field,description,prerequisites`.
//! Fields may be double-quoted; the prerequisite column holds a
//! comma-separated list, so it is normally quoted.

use crate::core::models::CourseId;
use std::error::Error;
use std::fs;
use std::path::Path;

/// One catalog row
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRow {
    /// Normalized course id
    pub id: CourseId,
    /// Course title (may be empty)
    pub name: String,
    /// Credit hours
    pub credits: Option<f32>,
    /// Field or department
    pub field: Option<String>,
    /// Catalog description
    pub description: Option<String>,
    /// Prerequisite course ids
    pub prerequisites: Vec<CourseId>,
}

/// Parsed catalog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    /// Rows in file order
    pub rows: Vec<CatalogRow>,
    /// Rows without a course id
    pub skipped_rows: usize,
}

/// Parse a catalog CSV file
///
/// # Arguments
/// * `path` - Path to the CSV file
///
/// # Returns
/// The catalog rows found in the file
///
/// # Errors
/// Returns an error if the file cannot be read or has no `course_id` column
pub fn parse_catalog_csv<P: AsRef<Path>>(path: P) -> Result<Catalog, Box<dyn Error>> {
    let content = fs::read_to_string(path.as_ref())
        .map_err(|e| format!("Failed to read catalog '{}': {e}", path.as_ref().display()))?;
    parse_catalog_str(&content)
}

/// Parse catalog CSV content
///
/// # Errors
/// Returns an error if there is no header line or it lacks `course_id`
pub fn parse_catalog_str(content: &str) -> Result<Catalog, Box<dyn Error>> {
    let mut lines = content.lines().filter(|line| !line.trim().is_empty());
    let header_line = lines.next().ok_or("Catalog CSV is empty")?;
    let headers = parse_csv_line(header_line);
    if !headers.iter().any(|h| h.eq_ignore_ascii_case("course_id")) {
        return Err("Catalog CSV header has no 'course_id' column".into());
    }

    let mut catalog = Catalog::default();
    for line in lines {
        let fields = parse_csv_line(line);
        match parse_row(&fields, &headers) {
            Some(row) => catalog.rows.push(row),
            None => catalog.skipped_rows += 1,
        }
    }
    Ok(catalog)
}

fn parse_row(fields: &[String], headers: &[String]) -> Option<CatalogRow> {
    let id = CourseId::normalize(get_field(fields, "course_id", headers)?);
    if id.is_empty() {
        return None;
    }

    let non_empty = |name: &str| {
        get_field(fields, name, headers)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    };

    Some(CatalogRow {
        name: non_empty("course_name").unwrap_or_default(),
        credits: get_field(fields, "credits", headers).and_then(|c| c.parse::<f32>().ok()),
        field: non_empty("field"),
        description: non_empty("description"),
        prerequisites: get_field(fields, "prerequisites", headers)
            .map(parse_prerequisites)
            .unwrap_or_default(),
        id,
    })
}

/// Split a CSV line into trimmed fields, honouring double quotes (`""` is a literal quote).
fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current).trim().to_string()),
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

/// Get a field value by header name
fn get_field<'a>(fields: &'a [String], header_name: &str, headers: &[String]) -> Option<&'a str> {
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(header_name))
        .and_then(|idx| fields.get(idx))
        .map(String::as_str)
}

/// Prerequisite ids from a comma- or semicolon-separated list.
/// Parenthesised notes are dropped ("MATH 101 (or coreq)" → MATH101).
fn parse_prerequisites(list: &str) -> Vec<CourseId> {
    list.split([',', ';'])
        .map(|entry| entry.split('(').next().unwrap_or(entry))
        .map(CourseId::normalize)
        .filter(|id| !id.is_empty())
        .collect()
}
