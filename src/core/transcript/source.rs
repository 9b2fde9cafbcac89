//! Where transcript text comes from
//!
//! The analyzer only ever sees a `String`. A [`TextSource`] hides whether that
//! text was read from a file or assembled from OCR output, so an OCR engine
//! can be swapped in without touching extraction.

use regex::Regex;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Course-code shape used to keep OCR fragments
static CODE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]{2,4}[- ]?[0-9]{3}").expect("Invalid code shape regex"));

/// Decimal number (GPA, credits) used to keep OCR fragments
static DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\.[0-9]+").expect("Invalid decimal regex"));

/// Fragments longer than this are kept regardless of content
const LONG_FRAGMENT_CHARS: usize = 15;

/// Anything that can produce transcript text
pub trait TextSource {
    /// Produce the full transcript text
    ///
    /// # Errors
    /// Returns an error if the underlying input cannot be read.
    fn read_text(&self) -> Result<String, Box<dyn Error>>;

    /// Short description for log messages
    fn describe(&self) -> String;
}

/// A UTF-8 text file
#[derive(Debug, Clone)]
pub struct PlainTextFile {
    path: PathBuf,
}

impl PlainTextFile {
    /// Source reading `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl TextSource for PlainTextFile {
    fn read_text(&self) -> Result<String, Box<dyn Error>> {
        fs::read_to_string(&self.path)
            .map_err(|e| format!("Failed to read transcript '{}': {e}", self.path.display()).into())
    }

    fn describe(&self) -> String {
        format!("text file {}", self.path.display())
    }
}

/// OCR output: one list of recognized fragments per page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OcrPages {
    pages: Vec<Vec<String>>,
}

impl OcrPages {
    /// Source over already-recognized pages
    #[must_use]
    pub const fn new(pages: Vec<Vec<String>>) -> Self {
        Self { pages }
    }

    /// Parse a JSON dump shaped like `[["fragment", ...], ...]`
    ///
    /// # Errors
    /// Returns an error if the JSON does not have that shape.
    pub fn from_json_str(json: &str) -> Result<Self, Box<dyn Error>> {
        let pages: Vec<Vec<String>> = serde_json::from_str(json)
            .map_err(|e| format!("OCR dump must be a list of pages of text fragments: {e}"))?;
        Ok(Self::new(pages))
    }

    /// Read and parse a JSON dump from disk
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read OCR dump '{}': {e}", path.as_ref().display()))?;
        Self::from_json_str(&content)
    }

    /// Number of pages
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Join the relevant fragments: spaces within a page, newlines between pages.
    #[must_use]
    pub fn assemble(&self) -> String {
        self.pages
            .iter()
            .map(|page| {
                page.iter()
                    .map(String::as_str)
                    .filter(|fragment| is_relevant_fragment(fragment))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl TextSource for OcrPages {
    fn read_text(&self) -> Result<String, Box<dyn Error>> {
        Ok(self.assemble())
    }

    fn describe(&self) -> String {
        format!("OCR output ({} pages)", self.page_count())
    }
}

/// Returns `true` if an OCR fragment may carry course or GPA information.
#[must_use]
pub fn is_relevant_fragment(fragment: &str) -> bool {
    CODE_SHAPE.is_match(fragment)
        || fragment.to_ascii_lowercase().contains("gpa")
        || DECIMAL.is_match(fragment)
        || fragment.chars().count() > LONG_FRAGMENT_CHARS
}

/// Pick a source for a transcript path: `.json` files are OCR dumps.
///
/// # Errors
/// Returns an error if an OCR dump cannot be read or parsed.
pub fn source_for_path<P: AsRef<Path>>(path: P) -> Result<Box<dyn TextSource>, Box<dyn Error>> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        Ok(Box::new(OcrPages::from_json_file(path)?))
    } else {
        Ok(Box::new(PlainTextFile::new(path)))
    }
}
