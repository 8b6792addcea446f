//! Output writers.
//!
//! This module provides writers for the parsed record table and for reports:
//! - [`write_csv`] / [`to_csv`] - record table, semicolon delimited - requires `csv-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - record table, one JSON object per line - requires `json-output` feature
//! - [`write_json`] / [`to_json`] - a full [`Report`](crate::core::Report) - requires `json-output` feature
//!
//! Record writers emit the same columns: the raw timestamp, sender and
//! message, followed by every derived calendar field. Charting tools can
//! consume them directly.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatstats::Result<()> {
//! use chatstats::core::output::{to_csv, write_jsonl};
//! use chatstats::parser::parse;
//!
//! let records = parse("1/1/23, 09:00 - Alice: Hello there\n");
//!
//! write_jsonl(&records, "records.jsonl")?;
//! let csv_string = to_csv(&records)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

#[cfg(any(feature = "csv-output", feature = "json-output"))]
use serde::Serialize;

#[cfg(any(feature = "csv-output", feature = "json-output"))]
use crate::record::ChatRecord;

/// Timestamp layout used by every record writer.
#[cfg(any(feature = "csv-output", feature = "json-output"))]
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One flattened row of the record table.
#[cfg(any(feature = "csv-output", feature = "json-output"))]
#[derive(Debug, Serialize)]
struct RecordRow<'a> {
    timestamp: String,
    sender: &'a str,
    message: &'a str,
    year: i32,
    month: &'static str,
    month_num: u32,
    day: u32,
    hour: u32,
    minute: u32,
    weekday: &'static str,
    date: String,
}

#[cfg(any(feature = "csv-output", feature = "json-output"))]
impl<'a> RecordRow<'a> {
    fn from_record(record: &'a ChatRecord) -> Self {
        let parts = record.parts();
        Self {
            timestamp: record.timestamp().format(TIMESTAMP_FORMAT).to_string(),
            sender: record.sender(),
            message: record.text(),
            year: parts.year,
            month: parts.month,
            month_num: parts.month_num,
            day: parts.day,
            hour: parts.hour,
            minute: parts.minute,
            weekday: parts.weekday_name(),
            date: parts.date.to_string(),
        }
    }
}
