//! WhatsApp TXT export parser.
//!
//! Android exports prefix every logical message with `D/M/YY, H:MM - `:
//!
//! ```text
//! 4/2/22, 18:24 - Alice: Hello there
//! 4/2/22, 18:25 - Bob: first line
//! continued on a second line
//! 4/2/22, 18:26 - Alice added Carol
//! ```
//!
//! The text is split on these prefixes. Everything between two prefixes is
//! one message, so embedded line breaks stay with their message. Anything
//! before the first prefix (the encryption notice, for instance) is dropped.
//! Entries whose prefix does not form a real `DD/MM/YY, HH:MM` date are
//! dropped as well; parsing never fails on malformed input.
//!
//! # Example
//!
//! ```rust
//! use chatstats::parser::parse;
//!
//! let records = parse("1/1/23, 09:00 - Alice: Hello there\n1/1/23, 09:06 - Alice added Bob\n");
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].sender(), "Alice");
//! assert!(records[1].is_notification());
//! ```

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use regex::Regex;
use tracing::{debug, info};

use crate::error::Result;
use crate::record::{ChatRecord, GROUP_NOTIFICATION};

/// Message prefix: day/month/2-digit-year, 24-hour time, then ` - `.
const PREFIX_PATTERN: &str = r"\d{1,2}/\d{1,2}/\d{2}, \d{1,2}:\d{2} - ";

/// Day-first, 2-digit year, 24-hour clock. Independent of host locale.
const TIMESTAMP_FORMAT: &str = "%d/%m/%y, %H:%M";

/// Separates the sender from the message body.
const SENDER_DELIMITER: &str = ": ";

/// Parsed records plus the number of entries that were discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Records in the order they appear in the export.
    pub records: Vec<ChatRecord>,
    /// Entries whose prefix matched but whose date-time was not a valid
    /// calendar value.
    pub dropped: usize,
}

impl ParseReport {
    /// Total number of prefixed entries seen in the input.
    pub fn entries_seen(&self) -> usize {
        self.records.len() + self.dropped
    }

    pub fn into_records(self) -> Vec<ChatRecord> {
        self.records
    }
}

/// Parser for WhatsApp TXT exports.
///
/// # Example
///
/// ```rust,no_run
/// use chatstats::parser::WhatsAppParser;
///
/// let parser = WhatsAppParser::new();
/// let records = parser.parse("WhatsApp Chat with Family.txt".as_ref())?;
/// # Ok::<(), chatstats::ChatstatsError>(())
/// ```
#[derive(Debug, Clone)]
pub struct WhatsAppParser {
    prefix: Regex,
}

impl WhatsAppParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self {
            prefix: Regex::new(PREFIX_PATTERN).expect("message prefix pattern is valid"),
        }
    }

    /// Human-readable name of the supported format.
    pub fn name(&self) -> &'static str {
        "WhatsApp"
    }

    /// Reads and parses an export file.
    pub fn parse(&self, path: &Path) -> Result<Vec<ChatRecord>> {
        let content = fs::read_to_string(path)?;
        Ok(self.parse_str(&content))
    }

    /// Parses export text already held in memory.
    pub fn parse_str(&self, content: &str) -> Vec<ChatRecord> {
        self.parse_with_report(content).into_records()
    }

    /// Parses export text and reports how many entries were discarded.
    pub fn parse_with_report(&self, content: &str) -> ParseReport {
        let prefixes: Vec<_> = self.prefix.find_iter(content).collect();
        let mut report = ParseReport {
            records: Vec::with_capacity(prefixes.len()),
            dropped: 0,
        };

        for (i, prefix) in prefixes.iter().enumerate() {
            let body_end = prefixes
                .get(i + 1)
                .map_or(content.len(), |next| next.start());
            let body = strip_trailing_newline(&content[prefix.end()..body_end]);
            let stamp = prefix.as_str().trim_matches(|c| c == ' ' || c == '-');

            let Some(timestamp) = parse_timestamp(stamp) else {
                debug!("Dropping entry with invalid timestamp '{}'", stamp);
                report.dropped += 1;
                continue;
            };

            let (sender, text) = split_sender(body);
            report.records.push(ChatRecord::new(timestamp, sender, text));
        }

        info!(
            "Parsed {} records ({} dropped) from {} bytes",
            report.records.len(),
            report.dropped,
            content.len()
        );

        report
    }
}

impl Default for WhatsAppParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses export text with a default [`WhatsAppParser`].
pub fn parse(content: &str) -> Vec<ChatRecord> {
    WhatsAppParser::new().parse_str(content)
}

/// Parses `DD/MM/YY, HH:MM` (day and month may be single digits).
pub fn parse_timestamp(stamp: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).ok()
}

/// Splits a body on the first `": "`. Bodies without one are group events.
fn split_sender(body: &str) -> (&str, &str) {
    body.split_once(SENDER_DELIMITER)
        .unwrap_or((GROUP_NOTIFICATION, body))
}

fn strip_trailing_newline(body: &str) -> &str {
    body.strip_suffix("\r\n")
        .or_else(|| body.strip_suffix('\n'))
        .unwrap_or(body)
}
