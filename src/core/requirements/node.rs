//! Shape classification for requirements document nodes
//!
//! Requirements documents encode course lists several ways. Each JSON node is
//! classified once into a [`RequirementNode`] and the loader dispatches on the
//! variant instead of re-inspecting the raw value.

use serde_json::{Map, Value};

/// Key holding a plain course list inside an object node
const COURSES_KEY: &str = "courses";
/// Key holding named choice groups inside an object node
const CHOICES_KEY: &str = "choices";

/// Course strings of one list, with the required count when the list has one
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseList {
    /// Number of courses that must be taken, from a count prefix
    pub required: Option<u32>,
    /// Raw course strings (e.g., "ElE 235 & ElE 236")
    pub courses: Vec<String>,
    /// Entries that were not strings or were blank
    pub skipped: usize,
}

/// A classified requirements node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequirementNode {
    /// `["MATH 101", "MATH 102"]`
    List(CourseList),
    /// `[2, "MATH 101", "MATH 102"]` or `["2", ...]`
    CountedList(CourseList),
    /// `{"courses": [...]}`
    CourseObject(CourseList),
    /// `{"choices": {"name": [1, ...], ...}}`
    Choices(Vec<(String, RequirementNode)>),
    /// Any other object: nested named categories
    Category(Vec<(String, RequirementNode)>),
    /// A value with no course-list meaning (number, bool, null, ...)
    Unrecognized(&'static str),
}

impl RequirementNode {
    /// Classify a JSON value.
    #[must_use]
    pub fn classify(value: &Value) -> Self {
        match value {
            Value::Array(items) => Self::classify_list(items),
            Value::Object(map) => Self::classify_object(map),
            Value::Null => Self::Unrecognized("null"),
            Value::Bool(_) => Self::Unrecognized("boolean"),
            Value::Number(_) => Self::Unrecognized("number"),
            Value::String(_) => Self::Unrecognized("string"),
        }
    }

    fn classify_list(items: &[Value]) -> Self {
        match items.split_first() {
            Some((first, rest)) => match required_count(first) {
                Some(required) => {
                    let mut list = collect_courses(rest);
                    list.required = Some(required);
                    Self::CountedList(list)
                }
                None => Self::List(collect_courses(items)),
            },
            None => Self::List(CourseList::default()),
        }
    }

    fn classify_object(map: &Map<String, Value>) -> Self {
        if let Some(courses) = map.get(COURSES_KEY) {
            return match Self::classify(courses) {
                Self::List(list) | Self::CountedList(list) => Self::CourseObject(list),
                _ => Self::Unrecognized("non-list courses"),
            };
        }

        if let Some(choices) = map.get(CHOICES_KEY) {
            return match choices {
                Value::Object(named) => Self::Choices(
                    named
                        .iter()
                        .map(|(name, value)| {
                            let node = match value {
                                Value::Array(items) => Self::classify_list(items),
                                _ => Self::Unrecognized("non-list choice"),
                            };
                            (name.clone(), node)
                        })
                        .collect(),
                ),
                _ => Self::Unrecognized("non-object choices"),
            };
        }

        Self::Category(
            map.iter()
                .map(|(name, value)| (name.clone(), Self::classify(value)))
                .collect(),
        )
    }

    /// The course list carried by a list-like node
    #[must_use]
    pub const fn course_list(&self) -> Option<&CourseList> {
        match self {
            Self::List(list) | Self::CountedList(list) | Self::CourseObject(list) => Some(list),
            Self::Choices(_) | Self::Category(_) | Self::Unrecognized(_) => None,
        }
    }
}

/// A leading integer (or all-digit string) is a required-count prefix.
fn required_count(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => {
            let trimmed = s.trim();
            if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
                trimmed.parse().ok()
            } else {
                None
            }
        }
        _ => None,
    }
}

fn collect_courses(items: &[Value]) -> CourseList {
    let mut list = CourseList::default();
    for item in items {
        match item.as_str().map(str::trim) {
            Some(course) if !course.is_empty() => list.courses.push(course.to_string()),
            _ => list.skipped += 1,
        }
    }
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classifies_direct_list() {
        let node = RequirementNode::classify(&json!(["MATH 101", "MATH 102"]));
        assert_eq!(
            node,
            RequirementNode::List(CourseList {
                required: None,
                courses: vec!["MATH 101".into(), "MATH 102".into()],
                skipped: 0,
            })
        );
    }

    #[test]
    fn classifies_counted_list_with_string_count() {
        let node = RequirementNode::classify(&json!(["2", "CSCI111", "CSCI211"]));
        let RequirementNode::CountedList(list) = node else {
            panic!("expected counted list");
        };
        assert_eq!(list.required, Some(2));
        assert_eq!(list.courses, vec!["CSCI111", "CSCI211"]);
    }

    #[test]
    fn classifies_counted_list_with_integer_count() {
        let node = RequirementNode::classify(&json!([1, "PHYS 211", 3.5, ""]));
        let RequirementNode::CountedList(list) = node else {
            panic!("expected counted list");
        };
        assert_eq!(list.required, Some(1));
        assert_eq!(list.courses, vec!["PHYS 211"]);
        assert_eq!(list.skipped, 2);
    }

    #[test]
    fn classifies_courses_object() {
        let node = RequirementNode::classify(&json!({"courses": ["ENGL 101"]}));
        assert!(matches!(node, RequirementNode::CourseObject(ref l) if l.courses == ["ENGL 101"]));
    }

    #[test]
    fn classifies_choices() {
        let node = RequirementNode::classify(&json!({
            "choices": {"Lab": [1, "CHEM 101", "BIOL 101"], "Bad": "CHEM 102"}
        }));
        let RequirementNode::Choices(choices) = node else {
            panic!("expected choices");
        };
        assert_eq!(choices.len(), 2);
        let bad = choices.iter().find(|(name, _)| name == "Bad").expect("bad choice");
        assert!(matches!(bad.1, RequirementNode::Unrecognized(_)));
        let lab = choices.iter().find(|(name, _)| name == "Lab").expect("lab choice");
        assert_eq!(lab.1.course_list().map(|l| l.required), Some(Some(1)));
    }

    #[test]
    fn nested_objects_are_categories() {
        let node = RequirementNode::classify(&json!({"Science": {"courses": []}, "Note": 5}));
        let RequirementNode::Category(children) = node else {
            panic!("expected category");
        };
        assert_eq!(children.len(), 2);
        assert!(children
            .iter()
            .any(|(_, n)| matches!(n, RequirementNode::Unrecognized("number"))));
    }
}
