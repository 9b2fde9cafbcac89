//! Data models for `NuTranscript`

pub mod course;
pub mod gpa;
pub mod graph;
pub mod relationship;

pub use course::{CourseId, CourseRecord, LevelTier};
pub use gpa::{GpaKind, GpaRecord};
pub use graph::{EdgeOrigin, PrerequisiteEdge, PrerequisiteGraph};
pub use relationship::{PrerequisiteStatus, RelationshipMap, RelationshipRecord};
