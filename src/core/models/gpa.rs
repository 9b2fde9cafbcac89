//! GPA values found in transcript text

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Which GPA a value refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GpaKind {
    /// Overall / cumulative GPA
    #[serde(rename = "Cumulative GPA")]
    Cumulative,
    /// Single term or semester GPA
    #[serde(rename = "Semester GPA")]
    Semester,
    /// GPA within the major
    #[serde(rename = "Major GPA")]
    Major,
    /// GPA with no recognizable qualifier
    #[serde(rename = "GPA")]
    Unlabeled,
}

impl GpaKind {
    /// Human-readable label (e.g., "Cumulative GPA")
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cumulative => "Cumulative GPA",
            Self::Semester => "Semester GPA",
            Self::Major => "Major GPA",
            Self::Unlabeled => "GPA",
        }
    }
}

impl fmt::Display for GpaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// GPA values keyed by kind. Recording a kind again replaces the old value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GpaRecord {
    values: BTreeMap<GpaKind, f64>,
}

impl GpaRecord {
    /// Create an empty record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value, replacing any earlier value of the same kind.
    pub fn record(&mut self, kind: GpaKind, value: f64) {
        self.values.insert(kind, value);
    }

    /// Value recorded for `kind`
    #[must_use]
    pub fn get(&self, kind: GpaKind) -> Option<f64> {
        self.values.get(&kind).copied()
    }

    /// Merge `other` into this record; values in `other` win.
    pub fn merge(&mut self, other: &Self) {
        for (kind, value) in &other.values {
            self.values.insert(*kind, *value);
        }
    }

    /// Returns `true` if no GPA was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of recorded kinds
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Iterate over `(kind, value)` pairs in kind order
    pub fn iter(&self) -> impl Iterator<Item = (GpaKind, f64)> + '_ {
        self.values.iter().map(|(kind, value)| (*kind, *value))
    }
}

/// Format a GPA the way transcripts print it: `3.75`, `4.0`.
#[must_use]
pub fn format_gpa(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_value_per_kind_wins() {
        let mut gpa = GpaRecord::new();
        gpa.record(GpaKind::Semester, 3.1);
        gpa.record(GpaKind::Semester, 3.6);
        gpa.record(GpaKind::Cumulative, 3.4);

        assert_eq!(gpa.len(), 2);
        assert_eq!(gpa.get(GpaKind::Semester), Some(3.6));
        assert_eq!(gpa.get(GpaKind::Major), None);
    }

    #[test]
    fn serializes_with_labels() {
        let mut gpa = GpaRecord::new();
        gpa.record(GpaKind::Cumulative, 3.75);
        let json = serde_json::to_string(&gpa).expect("serialize");
        assert_eq!(json, r#"{"Cumulative GPA":3.75}"#);
    }

    #[test]
    fn formats_like_transcripts() {
        assert_eq!(format_gpa(3.75), "3.75");
        assert_eq!(format_gpa(4.0), "4.0");
    }

    #[test]
    fn parsed_values_print_back_unchanged() {
        for text in ["3.58", "3.45", "2.999", "0.5", "4.0"] {
            let value: f64 = text.parse().expect("decimal");
            assert_eq!(format_gpa(value), text);
        }
        // Trailing zeros beyond the first decimal are not kept.
        assert_eq!(format_gpa("3.10".parse().expect("decimal")), "3.1");
    }
}
