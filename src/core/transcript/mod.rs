//! Transcript text processing: sources, course codes, titles and GPA.

pub mod courses;
pub mod descriptions;
pub mod gpa;
pub mod source;

pub use courses::{extract_course_codes, is_accepted_department};
pub use descriptions::{extract_descriptions, DescriptionMatch};
pub use gpa::extract_gpa;
pub use source::{source_for_path, OcrPages, PlainTextFile, TextSource};
