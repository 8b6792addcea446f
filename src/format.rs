//! Format types for reports and record exports.
//!
//! These types don't depend on CLI frameworks, so library users can render a
//! [`Report`] or export the record table without pulling in `clap`.
//!
//! - [`ReportFormat`] - how a [`Report`] is rendered (plain text or JSON)
//! - [`RecordFormat`] - how the parsed record table is exported (CSV or JSONL)
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "json-output")]
//! # fn example() -> chatstats::Result<()> {
//! use chatstats::core::{Analyzer, Selection};
//! use chatstats::format::{ReportFormat, render_report};
//! use chatstats::parser::parse;
//! use chatstats::stopwords::StopWords;
//!
//! let records = parse("1/1/23, 09:00 - Alice: Hello there\n");
//! let report = Analyzer::new(StopWords::bundled()).report(&Selection::Overall, &records);
//!
//! let text = render_report(&report, ReportFormat::Text)?;
//! assert!(text.contains("Total Messages: 1"));
//!
//! let json = render_report(&report, ReportFormat::Json)?;
//! assert!(json.starts_with('{'));
//! # Ok(())
//! # }
//! ```

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::core::Report;
use crate::error::{ChatstatsError, Result};
use crate::record::ChatRecord;

/// How many senders and emoji the text report lists.
const TEXT_TOP_N: usize = 5;

/// Rendering of a [`Report`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ReportFormat {
    /// Human-readable sections (default)
    #[default]
    Text,

    /// A single pretty-printed JSON object
    Json,
}

impl ReportFormat {
    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "json"]
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "Text"),
            ReportFormat::Json => write!(f, "JSON"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                ReportFormat::all_names().join(", ")
            )),
        }
    }
}

/// Export format for the parsed record table.
///
/// # Example
///
/// ```rust
/// use chatstats::format::RecordFormat;
///
/// let format = RecordFormat::from_path("records.ndjson").unwrap();
/// assert_eq!(format, RecordFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum RecordFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// JSON Lines, one record per line. Also known as NDJSON.
    Jsonl,
}

impl RecordFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            RecordFormat::Csv => "csv",
            RecordFormat::Jsonl => "jsonl",
        }
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            RecordFormat::Csv => "text/csv",
            RecordFormat::Jsonl => "application/x-ndjson",
        }
    }

    /// Detects format from a file path based on extension.
    pub fn from_path(path: &str) -> Result<Self> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match ext.as_str() {
            "csv" => Ok(RecordFormat::Csv),
            "jsonl" | "ndjson" => Ok(RecordFormat::Jsonl),
            _ => Err(ChatstatsError::invalid_format(
                "records",
                format!("Unknown file extension: '.{ext}'. Expected one of: csv, jsonl, ndjson"),
            )),
        }
    }
}

impl std::fmt::Display for RecordFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordFormat::Csv => write!(f, "CSV"),
            RecordFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

#[cfg(not(all(feature = "csv-output", feature = "json-output")))]
fn missing_feature(format: &'static str, feature: &str) -> ChatstatsError {
    ChatstatsError::invalid_format(
        format,
        format!("this format requires the '{feature}' feature to be enabled"),
    )
}

/// Writes records to `path`, choosing the format from its extension.
///
/// # Errors
///
/// Returns an error if:
/// - The extension is not `.csv`, `.jsonl` or `.ndjson`
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_records(records: &[ChatRecord], path: &str) -> Result<RecordFormat> {
    let format = RecordFormat::from_path(path)?;
    match format {
        #[cfg(feature = "csv-output")]
        RecordFormat::Csv => crate::core::output::write_csv(records, path)?,
        #[cfg(feature = "json-output")]
        RecordFormat::Jsonl => crate::core::output::write_jsonl(records, path)?,
        #[cfg(not(feature = "csv-output"))]
        RecordFormat::Csv => return Err(missing_feature("records", "csv-output")),
        #[cfg(not(feature = "json-output"))]
        RecordFormat::Jsonl => return Err(missing_feature("records", "json-output")),
    }
    Ok(format)
}

/// Renders a report as a string.
///
/// # Errors
///
/// JSON rendering fails if the `json-output` feature is disabled.
pub fn render_report(report: &Report, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(report)),
        #[cfg(feature = "json-output")]
        ReportFormat::Json => crate::core::output::to_json(report),
        #[cfg(not(feature = "json-output"))]
        ReportFormat::Json => Err(missing_feature("report", "json-output")),
    }
}

/// Plain-text report: one titled section per view.
fn render_text(report: &Report) -> String {
    let mut out = String::new();
    // writing into a String never fails
    let _ = render_text_into(&mut out, report);
    out
}

fn render_text_into(out: &mut String, report: &Report) -> std::fmt::Result {
    writeln!(out, "📊 Chat statistics: {}", report.user)?;
    writeln!(out, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
    writeln!(out, "   Total Messages: {}", report.stats.messages)?;
    writeln!(out, "   Total Words:    {}", report.stats.words)?;
    writeln!(out, "   Media Shared:   {}", report.stats.media)?;
    writeln!(out, "   Links Shared:   {}", report.stats.links)?;

    writeln!(out)?;
    writeln!(out, "📅 Monthly Timeline")?;
    for point in &report.monthly_timeline {
        writeln!(out, "   {:<16} {}", point.label, point.messages)?;
    }

    writeln!(out)?;
    writeln!(out, "📆 Daily Timeline")?;
    for point in &report.daily_timeline {
        writeln!(out, "   {}  {}", point.date, point.messages)?;
    }

    writeln!(out)?;
    writeln!(out, "🗓️  Most Busy Day")?;
    for day in &report.weekday_activity {
        writeln!(out, "   {:<10} {}", day.name, day.messages)?;
    }

    writeln!(out)?;
    writeln!(out, "🌙 Most Busy Month")?;
    for month in &report.month_activity {
        writeln!(out, "   {:<10} {}", month.name, month.messages)?;
    }

    writeln!(out)?;
    writeln!(out, "🔥 Weekly Activity Map")?;
    match report.heatmap.peak() {
        Some((day, hour, count)) => writeln!(
            out,
            "   Peak: {} {} ({} messages)",
            day,
            report.heatmap.columns()[hour],
            count
        )?,
        None => writeln!(out, "   No activity")?,
    }
    for (day, row) in report.heatmap.rows().iter().zip(report.heatmap.cells()) {
        let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
        writeln!(out, "   {:<10} {}", day, cells.join(" "))?;
    }

    if let Some(busy) = &report.busy_users {
        writeln!(out)?;
        writeln!(out, "👥 Most Busy Users")?;
        for (count, share) in busy.counts.iter().zip(&busy.percentages).take(TEXT_TOP_N) {
            writeln!(
                out,
                "   {:<20} {:>6}  {:>6.2}%",
                count.sender, count.messages, share.percent
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "💬 Most Common Words")?;
    if report.common_words.is_empty() {
        writeln!(out, "   No words found")?;
    }
    for word in &report.common_words {
        writeln!(out, "   {:<20} {}", word.word, word.count)?;
    }

    writeln!(out)?;
    writeln!(out, "😀 Emoji Analysis")?;
    if report.emojis.is_empty() {
        writeln!(out, "   No emojis found")?;
    }
    for emoji in report.emojis.iter().take(TEXT_TOP_N) {
        writeln!(out, "   {}  {}", emoji.emoji, emoji.frequency)?;
    }

    Ok(())
}
