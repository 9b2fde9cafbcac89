//! `NuTranscript` library
//!
//! Reconciles OCR-derived academic transcripts against a degree-requirements
//! document. The entry point is [`CourseAnalyzer`]: load requirements (and
//! optionally a course catalog), feed it transcript text, then ask for the
//! relationship records or render a report.
//!
//! ```no_run
//! use nu_transcript::CourseAnalyzer;
//!
//! let mut analyzer = CourseAnalyzer::new();
//! analyzer.load_requirements_file("json/requirementsDB.json");
//! analyzer.extract_courses_from_text("MATH 101 Calculus I A 4");
//! let relationships = analyzer.analyze_course_relationships();
//! ```

pub mod core;
pub mod logger;

pub use core::analyzer::{CourseAnalyzer, LoadSummary};
pub use core::config;
pub use core::get_version;
