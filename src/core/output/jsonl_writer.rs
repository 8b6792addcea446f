//! JSON Lines (JSONL) output writer for the record table.
//!
//! One record per line, which suits notebooks and dataframe loaders that
//! read newline-delimited JSON.

use std::fs::File;
use std::io::{BufWriter, Write};

use super::RecordRow;
use crate::error::Result;
use crate::record::ChatRecord;

/// Writes records to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"timestamp":"2023-01-01 09:00","sender":"Alice","message":"Hello","year":2023,...}
/// ```
pub fn write_jsonl(records: &[ChatRecord], output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    for record in records {
        let line = serde_json::to_string(&RecordRow::from_record(record))?;
        writeln!(writer, "{line}")?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts records to a JSONL string.
pub fn to_jsonl(records: &[ChatRecord]) -> Result<String> {
    let mut output = String::new();

    for record in records {
        output.push_str(&serde_json::to_string(&RecordRow::from_record(record))?);
        output.push('\n');
    }

    Ok(output)
}
