//! JSON output writer for reports.

use std::fs::File;
use std::io::Write;

use crate::core::analyzer::Report;
use crate::error::Result;

/// Writes a report to a JSON file (pretty-printed).
pub fn write_json(report: &Report, output_path: &str) -> Result<()> {
    let json = to_json(report)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}

/// Converts a report to a pretty-printed JSON string.
///
/// Same format as [`write_json`], but returns a String instead of writing to file.
pub fn to_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
