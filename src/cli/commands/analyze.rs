//! Analyze command handler
//!
//! Loads the requirements document (and optional catalog), extracts courses
//! and GPA from the transcript and writes a report.

use nu_transcript::config::Config;
use nu_transcript::core::models::gpa::format_gpa;
use nu_transcript::core::report::{advisor_summary, ReportContext, ReportFormat};
use nu_transcript::core::transcript::source_for_path;
use nu_transcript::logger::is_verbose_enabled;
use nu_transcript::{error, info, warn, CourseAnalyzer};
use std::path::{Path, PathBuf};

/// Requirements locations tried when neither the flag nor the config names one
const FALLBACK_REQUIREMENTS: [&str; 2] = ["./json/requirementsDB.json", "../json/requirementsDB.json"];

/// Options for one analyze run
pub struct AnalyzeOptions<'a> {
    /// Transcript text file or OCR dump
    pub transcript: &'a Path,
    /// Requirements document given on the command line
    pub requirements: Option<&'a Path>,
    /// Course catalog CSV
    pub catalog: Option<&'a Path>,
    /// Keyword to search for
    pub keyword: Option<&'a str>,
    /// Report output path
    pub output: Option<&'a Path>,
    /// Report format
    pub format: ReportFormat,
    /// Print the advisor summary
    pub summary: bool,
}

/// Run the analyze command.
pub fn run(options: &AnalyzeOptions, config: &Config) {
    if let Err(err) = analyze(options, config) {
        error!("Analysis failed for {}: {err}", options.transcript.display());
        eprintln!("{err}");
        std::process::exit(1);
    }
}

/// Pick the requirements document: the flag, then the config value, then
/// the conventional `json/requirementsDB.json` locations.
pub fn resolve_requirements_path(flag: Option<&Path>, config: &Config) -> Option<PathBuf> {
    if let Some(path) = flag {
        return Some(path.to_path_buf());
    }
    let configured = (!config.paths.requirements.is_empty())
        .then(|| PathBuf::from(&config.paths.requirements))
        .filter(|path| path.exists());
    configured.or_else(|| {
        FALLBACK_REQUIREMENTS
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    })
}

/// Default report path: `<reports_dir>/<transcript stem>_analysis.<ext>`
pub fn default_output_path(transcript: &Path, reports_dir: &Path, format: ReportFormat) -> PathBuf {
    let stem = transcript
        .file_stem()
        .map_or_else(|| "transcript".to_string(), |s| s.to_string_lossy().to_string());
    reports_dir.join(format!("{stem}_analysis.{}", format.extension()))
}

fn analyze(options: &AnalyzeOptions, config: &Config) -> Result<(), String> {
    let source = source_for_path(options.transcript)
        .map_err(|e| format!("✗ Failed to open {}: {e}", options.transcript.display()))?;
    let text = source
        .read_text()
        .map_err(|e| format!("✗ Failed to read {}: {e}", options.transcript.display()))?;
    info!("Transcript loaded from {}", source.describe());

    let mut analyzer = CourseAnalyzer::new();
    match resolve_requirements_path(options.requirements, config) {
        Some(path) => {
            let summary = analyzer.load_requirements_file(&path);
            if let Some(err) = &summary.error {
                eprintln!("✗ {err}");
            } else if is_verbose_enabled() {
                println!("✓ Requirements loaded from {}: {summary}", path.display());
            }
        }
        None => warn!("No requirements document found; continuing without requirements"),
    }
    if let Some(catalog) = options.catalog {
        let summary = analyzer.load_catalog_file(catalog);
        if let Some(err) = &summary.error {
            eprintln!("✗ {err}");
        }
    }

    let found = analyzer.extract_courses_from_text(&text);
    let relationships = analyzer.analyze_course_relationships();

    if !analyzer.gpa().is_empty() {
        println!("\nGPA Information:");
        for (kind, value) in analyzer.gpa().iter() {
            println!("  {kind}: {}", format_gpa(value));
        }
    }
    let required_done = relationships.values().filter(|r| r.completed).count();
    println!("\n✓ Found {} courses in transcript", found.len());
    println!(
        "✓ {required_done} of {} requirement courses completed",
        relationships.len()
    );

    let ctx = ReportContext::new(&relationships, analyzer.gpa(), analyzer.completed(), &text)
        .with_keyword(options.keyword);
    let output_path = options.output.map_or_else(
        || {
            default_output_path(
                options.transcript,
                Path::new(&config.paths.reports_dir),
                options.format,
            )
        },
        Path::to_path_buf,
    );
    let content = options
        .format
        .render(&ctx)
        .map_err(|e| format!("✗ Failed to render {} report: {e}", options.format))?;
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            format!("✗ Failed to create reports directory {}: {e}", parent.display())
        })?;
    }
    std::fs::write(&output_path, content)
        .map_err(|e| format!("✗ Failed to write {}: {e}", output_path.display()))?;
    println!("✓ Report generated: {}", output_path.display());

    if options.summary {
        println!("\n{}", advisor_summary(&ctx));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_output_path() {
        let path = default_output_path(
            Path::new("scans/fall_2024.json"),
            Path::new("/reports"),
            ReportFormat::Text,
        );
        assert_eq!(path, PathBuf::from("/reports/fall_2024_analysis.txt"));
    }

    #[test]
    fn test_requirements_flag_wins() {
        let config = Config::from_defaults();
        let path = resolve_requirements_path(Some(Path::new("mine.json")), &config);
        assert_eq!(path, Some(PathBuf::from("mine.json")));
    }

    #[test]
    fn test_requirements_from_config_when_present() {
        let dir = TempDir::new().expect("temp dir");
        let file = dir.path().join("req.json");
        std::fs::write(&file, "{}").expect("write");

        let mut config = Config::from_defaults();
        config.paths.requirements = file.to_string_lossy().to_string();
        assert_eq!(resolve_requirements_path(None, &config), Some(file));
    }
}
