//! CLI argument definitions for `NuTranscript`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use nu_transcript::config::ConfigOverrides;
use nu_transcript::core::report::ReportFormat;
use nu_transcript::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

/// Report format argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum FormatArg {
    /// Plain text grouped by department
    Text,
    /// JSON with full relationship records
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `requirements`, `reports_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Analyze a transcript against degree requirements.
    ///
    /// Extracts completed courses and GPA, relates them to the requirements
    /// document and writes a report. `.json` transcripts are read as OCR page
    /// dumps; anything else as plain text.
    Analyze {
        /// Transcript text file or OCR JSON dump
        #[arg(value_name = "TRANSCRIPT")]
        transcript: PathBuf,

        /// Requirements JSON document (defaults to config `requirements`)
        #[arg(short, long, value_name = "FILE")]
        requirements: Option<PathBuf>,

        /// Course catalog CSV to load alongside the requirements
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,

        /// Keyword to search for in the transcript
        #[arg(short, long, value_name = "KEYWORD")]
        keyword: Option<String>,

        /// Report output path (defaults to `<reports_dir>/<name>_analysis.<ext>`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format
        #[arg(short, long, value_enum, default_value_t = FormatArg::Text)]
        format: FormatArg,

        /// Print the advisor summary (completed courses and GPA)
        #[arg(long)]
        summary: bool,
    },
    /// Search a transcript for a keyword.
    ///
    /// Prints each matching line with one line of context on either side.
    Search {
        /// Transcript text file or OCR JSON dump
        #[arg(value_name = "TRANSCRIPT")]
        transcript: PathBuf,

        /// Keyword (case-insensitive)
        #[arg(value_name = "KEYWORD")]
        keyword: String,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "nutranscript",
    about = "NuTranscript command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config requirements document
    #[arg(long = "config-requirements", value_name = "FILE")]
    pub config_requirements: Option<PathBuf>,

    /// Override config requirements document (short form)
    #[arg(long = "requirements-file", value_name = "FILE")]
    pub requirements_file: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

fn path_string(path: Option<&PathBuf>) -> Option<String> {
    path.map(|p| p.to_string_lossy().to_string())
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--reports-dir`) take precedence over long-form
    /// flags (e.g., `--config-reports-dir`) when both are provided.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: path_string(self.config_log_file.as_ref()),
            verbose: self.config_verbose,
            requirements: path_string(
                self.requirements_file
                    .as_ref()
                    .or(self.config_requirements.as_ref()),
            ),
            reports_dir: path_string(self.reports_dir.as_ref().or(self.config_reports_dir.as_ref())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli(command: Command) -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            config_requirements: None,
            requirements_file: None,
            config_reports_dir: None,
            reports_dir: None,
            command,
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = bare_cli(Command::Config { subcommand: None }).to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.requirements.is_none());
        assert!(overrides.reports_dir.is_none());
    }

    #[test]
    fn test_short_form_precedence_over_long_form() {
        let mut cli = bare_cli(Command::Config { subcommand: None });
        cli.config_level = Some(LogLevelArg::Info);
        cli.config_verbose = Some(true);
        cli.config_requirements = Some(PathBuf::from("/long/req.json"));
        cli.requirements_file = Some(PathBuf::from("/short/req.json"));
        cli.config_reports_dir = Some(PathBuf::from("/long/reports"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level.as_deref(), Some("info"));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.requirements.as_deref(), Some("/short/req.json"));
        assert_eq!(overrides.reports_dir.as_deref(), Some("/long/reports"));
    }

    #[test]
    fn test_parse_analyze_command() {
        let cli = Cli::try_parse_from([
            "nutranscript",
            "--debug",
            "analyze",
            "transcript.txt",
            "-r",
            "req.json",
            "-k",
            "GPA",
            "-f",
            "json",
            "--summary",
        ])
        .expect("valid arguments");

        assert!(cli.debug_flag);
        match cli.command {
            Command::Analyze {
                transcript,
                requirements,
                keyword,
                format,
                summary,
                catalog,
                output,
            } => {
                assert_eq!(transcript, PathBuf::from("transcript.txt"));
                assert_eq!(requirements, Some(PathBuf::from("req.json")));
                assert_eq!(keyword.as_deref(), Some("GPA"));
                assert_eq!(format, FormatArg::Json);
                assert!(summary);
                assert!(catalog.is_none());
                assert!(output.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_search_command() {
        let cli = Cli::try_parse_from(["nutranscript", "search", "t.json", "calculus"])
            .expect("valid arguments");
        assert!(matches!(
            cli.command,
            Command::Search { ref keyword, .. } if keyword == "calculus"
        ));
    }
}
