//! Search command handler

use nu_transcript::core::search::search_keyword;
use nu_transcript::core::transcript::source_for_path;
use nu_transcript::error;
use std::path::Path;

/// Run the search command: print every match with its context.
pub fn run(transcript: &Path, keyword: &str) {
    let text = match source_for_path(transcript).and_then(|source| source.read_text()) {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read transcript {}: {e}", transcript.display());
            eprintln!("✗ Failed to read {}: {e}", transcript.display());
            std::process::exit(1);
        }
    };

    let matches = search_keyword(&text, keyword);
    if matches.is_empty() {
        println!("No matches found for '{keyword}'");
        return;
    }

    println!("=== SEARCH RESULTS FOR '{keyword}' ===\n");
    for (i, excerpt) in matches.iter().enumerate() {
        println!("Match {}:\n{excerpt}\n{}", i + 1, "-".repeat(50));
    }
}
