//! # Chatstats
//!
//! A Rust library for parsing WhatsApp chat exports and computing descriptive
//! statistics over them.
//!
//! ## Overview
//!
//! Chatstats turns an Android-style WhatsApp TXT export
//! (`D/M/YY, H:MM - Sender: text`) into a table of [`ChatRecord`]s and
//! computes a fixed set of views over it:
//! - message, word, media and link counts
//! - the busiest senders and their share of the conversation
//! - monthly and daily timelines
//! - weekday, month and weekday-by-hour activity
//! - common words (stopwords removed) and emoji frequency
//!
//! Every view works for the whole chat or for a single sender.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstats::prelude::*;
//!
//! let export = "\
//! 1/1/23, 09:00 - Alice: Hello there 😀
//! 1/1/23, 09:05 - Bob: <Media omitted>
//! 1/1/23, 09:06 - Alice added Carol
//! ";
//!
//! let records = parse(export);
//! let analyzer = Analyzer::new(StopWords::bundled());
//!
//! let stats = analyzer.fetch_stats(&Selection::Overall, &records);
//! assert_eq!(stats.messages, 3);
//! assert_eq!(stats.media, 1);
//!
//! let report = analyzer.report(&Selection::user("Alice"), &records);
//! assert_eq!(report.emojis[0].emoji, "😀");
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - Export text to records
//!   - [`WhatsAppParser`](parser::WhatsAppParser), [`ParseReport`](parser::ParseReport)
//! - [`record`] - [`ChatRecord`] and its derived calendar fields
//! - [`core`] - Aggregation views
//!   - [`core::filter`] - [`Selection`](core::Selection) and the shared filter step
//!   - [`core::analyzer`] - [`Analyzer`](core::Analyzer) and [`Report`](core::Report)
//!   - [`core::output`] - Record table (CSV / JSONL) and report (JSON) writers
//! - [`stopwords`] - Stopword lists (bundled or loaded from a file)
//! - [`config`] - [`AnalyzerConfig`](config::AnalyzerConfig)
//! - [`format`] - Report rendering and record export dispatch
//! - [`cli`] - CLI types (feature `cli`)
//! - [`error`] - Unified error types ([`ChatstatsError`], [`Result`])
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod parser;
pub mod record;
pub mod stopwords;

// Re-export the main types at the crate root for convenience
pub use error::{ChatstatsError, Result};
pub use record::ChatRecord;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatstats::prelude::*;
/// ```
pub mod prelude {
    // Records and parsing
    pub use crate::ChatRecord;
    pub use crate::parser::{ParseReport, WhatsAppParser, parse};

    // Error types
    pub use crate::error::{ChatstatsError, Result};

    // Configuration and dependencies
    pub use crate::config::AnalyzerConfig;
    pub use crate::stopwords::StopWords;

    // Analysis
    pub use crate::core::{Analyzer, Report, Selection, selectable_users};

    // Rendering
    pub use crate::format::{RecordFormat, ReportFormat, render_report, write_records};

    // Output (file writers and string converters)
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};
}
