//! Degree-requirements documents
//!
//! Parses nested requirement JSON into labelled groups of course expressions.

pub mod expr;
pub mod loader;
pub mod node;

pub use expr::CourseExpr;
pub use loader::{
    parse_requirements_file, parse_requirements_str, parse_requirements_value, RequirementGroup,
    RequirementsDocument,
};
pub use node::{CourseList, RequirementNode};
