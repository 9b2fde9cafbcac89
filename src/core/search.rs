//! Keyword-in-context search over transcript text

use regex::{Regex, RegexBuilder};

/// Lines of context kept on each side of a matching line
const CONTEXT_LINES: usize = 1;

fn keyword_pattern(keyword: &str) -> Option<Regex> {
    if keyword.is_empty() {
        return None;
    }
    RegexBuilder::new(&regex::escape(keyword))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Every line containing `keyword` (any case), with one line of context on
/// each side. Occurrences in the matching line are marked `>>> word <<<`.
///
/// Marking is case-insensitive like the line match, so `"gpa"` marks
/// `>>> GPA <<<` in its original case rather than only exact-case hits.
///
/// # Returns
/// One excerpt per matching line, lines joined with `\n`
#[must_use]
pub fn search_keyword(text: &str, keyword: &str) -> Vec<String> {
    let Some(pattern) = keyword_pattern(keyword) else {
        return Vec::new();
    };
    let lines: Vec<&str> = text.lines().collect();

    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| pattern.is_match(line))
        .map(|(i, line)| {
            let start = i.saturating_sub(CONTEXT_LINES);
            let end = (i + CONTEXT_LINES + 1).min(lines.len());
            lines[start..end]
                .iter()
                .enumerate()
                .map(|(offset, context)| {
                    if start + offset == i {
                        mark(&pattern, line)
                    } else {
                        (*context).to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect()
}

/// Wrap every occurrence in `line` as `>>> word <<<`, keeping its case.
fn mark(pattern: &Regex, line: &str) -> String {
    let mut marked = String::with_capacity(line.len() + 8);
    let mut last = 0;
    for found in pattern.find_iter(line) {
        marked.push_str(&line[last..found.start()]);
        marked.push_str(">>> ");
        marked.push_str(found.as_str());
        marked.push_str(" <<<");
        last = found.end();
    }
    marked.push_str(&line[last..]);
    marked
}
