//! CSV output writer for the record table.

use std::fs::File;
use std::io::Write;

use super::RecordRow;
use crate::error::Result;
use crate::record::ChatRecord;

const HEADER: [&str; 11] = [
    "Timestamp",
    "Sender",
    "Message",
    "Year",
    "Month",
    "MonthNum",
    "Day",
    "Hour",
    "Minute",
    "Weekday",
    "Date",
];

/// Writes records to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Timestamp`, `Sender`, `Message`, then the derived
///   `Year`, `Month`, `MonthNum`, `Day`, `Hour`, `Minute`, `Weekday`, `Date`
/// - Multi-line messages are quoted
/// - Encoding: UTF-8
pub fn write_csv(records: &[ChatRecord], output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(records, file)
}

/// Converts records to a CSV string.
///
/// Same format as [`write_csv`], but returns a String instead of writing to file.
pub fn to_csv(records: &[ChatRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(records, &mut buffer)?;
    Ok(String::from_utf8(buffer).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?)
}

fn write_records<W: Write>(records: &[ChatRecord], sink: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(sink);

    writer.write_record(HEADER)?;

    for record in records {
        writer.write_record(build_record(&RecordRow::from_record(record)))?;
    }

    writer.flush()?;
    Ok(())
}

/// Build CSV fields for a single row, in [`HEADER`] order.
fn build_record(row: &RecordRow<'_>) -> [String; 11] {
    [
        row.timestamp.clone(),
        row.sender.to_string(),
        row.message.to_string(),
        row.year.to_string(),
        row.month.to_string(),
        row.month_num.to_string(),
        row.day.to_string(),
        row.hour.to_string(),
        row.minute.to_string(),
        row.weekday.to_string(),
        row.date.clone(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use tempfile::NamedTempFile;

    #[test]
    fn test_to_csv_header_and_rows() {
        let records = parse("4/2/22, 18:24 - Alice: Hello\n4/2/22, 18:25 - Bob joined\n");
        let csv = to_csv(&records).unwrap();
        let mut lines = csv.lines();

        assert_eq!(
            lines.next().unwrap(),
            "Timestamp;Sender;Message;Year;Month;MonthNum;Day;Hour;Minute;Weekday;Date"
        );
        assert_eq!(
            lines.next().unwrap(),
            "2022-02-04 18:24;Alice;Hello;2022;February;2;4;18;24;Friday;2022-02-04"
        );
        assert!(lines.next().unwrap().starts_with("2022-02-04 18:25;group_notification;Bob joined;"));
    }

    #[test]
    fn test_csv_quotes_multiline_and_delimiters() {
        let records = parse("4/2/22, 18:24 - Alice: one; two\nthree\n");
        let csv = to_csv(&records).unwrap();
        assert!(csv.contains("\"one; two\nthree\""));
    }

    #[test]
    fn test_write_csv_file() {
        let records = parse("4/2/22, 18:24 - Alice: Hello\n");
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        write_csv(&records, path).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("Alice;Hello"));
    }

    #[test]
    fn test_empty_records_write_header_only() {
        let csv = to_csv(&[]).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }
}
