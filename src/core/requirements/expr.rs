//! Course expressions inside requirement entries
//!
//! `"ElE 235 & ElE 236"` is a chain: each segment must precede the next.
//! `"Math 302 | Math 401"` lists alternatives with no ordering between them.

/// Separator for sequenced (co-requisite chain) courses
const CHAIN_SEPARATOR: char = '&';
/// Separator for alternative courses
const ALTERNATIVE_SEPARATOR: char = '|';

/// A parsed requirement entry: chain segments, each a set of alternatives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseExpr {
    segments: Vec<Vec<String>>,
}

impl CourseExpr {
    /// Parse a raw entry. Blank pieces are dropped.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let segments = raw
            .split(CHAIN_SEPARATOR)
            .map(|segment| {
                segment
                    .split(ALTERNATIVE_SEPARATOR)
                    .map(str::trim)
                    .filter(|course| !course.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .filter(|alternatives| !alternatives.is_empty())
            .collect();
        Self { segments }
    }

    /// Every course named in the expression, in order of appearance
    pub fn courses(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().flatten().map(String::as_str)
    }

    /// `(earlier, later)` pairs implied by the chain.
    ///
    /// Every alternative of one segment precedes every alternative of the next.
    #[must_use]
    pub fn sequence_pairs(&self) -> Vec<(&str, &str)> {
        self.segments
            .windows(2)
            .flat_map(|pair| {
                pair[0].iter().flat_map(move |earlier| {
                    pair[1]
                        .iter()
                        .map(move |later| (earlier.as_str(), later.as_str()))
                })
            })
            .collect()
    }

    /// Returns `true` if the entry named no course at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_links_consecutive_courses() {
        let expr = CourseExpr::parse("ElE 235 & ElE 236 & ElE 237");
        assert_eq!(
            expr.courses().collect::<Vec<_>>(),
            vec!["ElE 235", "ElE 236", "ElE 237"]
        );
        assert_eq!(
            expr.sequence_pairs(),
            vec![("ElE 235", "ElE 236"), ("ElE 236", "ElE 237")]
        );
    }

    #[test]
    fn alternatives_have_no_order() {
        let expr = CourseExpr::parse("Math 302 | Math 401");
        assert_eq!(expr.courses().count(), 2);
        assert!(expr.sequence_pairs().is_empty());
    }

    #[test]
    fn mixed_expression_links_every_alternative() {
        let expr = CourseExpr::parse("PHYS 211 | PHYS 221 & PHYS 212");
        assert_eq!(
            expr.sequence_pairs(),
            vec![("PHYS 211", "PHYS 212"), ("PHYS 221", "PHYS 212")]
        );
    }

    #[test]
    fn blank_pieces_are_dropped() {
        assert!(CourseExpr::parse("  &  | ").is_empty());
        let expr = CourseExpr::parse("CHEM 101 & ");
        assert_eq!(expr.courses().collect::<Vec<_>>(), vec!["CHEM 101"]);
        assert!(expr.sequence_pairs().is_empty());
    }
}
