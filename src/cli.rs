//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Report format options
//!
//! # Example
//!
//! ```rust
//! use chatstats::cli::OutputFormat;
//! use chatstats::format::ReportFormat;
//!
//! let format: ReportFormat = OutputFormat::Json.into();
//! assert_eq!(format, ReportFormat::Json);
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{AnalyzerConfig, DEFAULT_TOP_WORDS};
use crate::core::{OVERALL, Selection};

/// Analyze a WhatsApp chat export: message, word, media and link counts,
/// timelines, activity maps, busiest users, common words and emoji.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstats chat.txt
    chatstats chat.txt --user Alice
    chatstats chat.txt --format json -o report.json
    chatstats chat.txt --records records.csv
    chatstats chat.txt --list-users")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: PathBuf,

    /// Analyze one sender instead of the whole chat
    #[arg(short, long, value_name = "USER", default_value = OVERALL)]
    pub user: String,

    /// Whitespace-separated stopword file (defaults to the bundled list)
    #[arg(long, value_name = "PATH")]
    pub stopwords: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also export the parsed record table (.csv, .jsonl or .ndjson)
    #[arg(long, value_name = "PATH")]
    pub records: Option<PathBuf>,

    /// Print the selectable users and exit
    #[arg(long)]
    pub list_users: bool,

    /// How many common words to report
    #[arg(long, value_name = "N", default_value_t = DEFAULT_TOP_WORDS)]
    pub top_words: usize,

    /// Log filter (error, warn, info, debug, trace). RUST_LOG takes precedence.
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}

impl Args {
    /// The sender selection requested on the command line.
    pub fn selection(&self) -> Selection {
        Selection::from_name(&self.user)
    }

    /// Analyzer settings derived from the flags.
    pub fn analyzer_config(&self) -> AnalyzerConfig {
        AnalyzerConfig::new().with_top_words(self.top_words)
    }
}

/// Report format options.
///
/// - [`Text`](OutputFormat::Text) - Human-readable sections
/// - [`Json`](OutputFormat::Json) - One pretty-printed object, for scripts and charting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text (default)
    #[default]
    #[value(alias = "txt")]
    Text,

    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::ReportFormat {
    fn from(format: OutputFormat) -> crate::format::ReportFormat {
        match format {
            OutputFormat::Text => crate::format::ReportFormat::Text,
            OutputFormat::Json => crate::format::ReportFormat::Json,
        }
    }
}
