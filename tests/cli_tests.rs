//! Additional tests for CLI and format types to improve coverage

use chatstats::cli::{Args, OutputFormat};
use chatstats::core::Selection;
use chatstats::format::{RecordFormat, ReportFormat};
use clap::Parser;
use std::str::FromStr;

#[test]
fn test_report_format_from_str_all_variants() {
    assert!(ReportFormat::from_str("text").is_ok());
    assert!(ReportFormat::from_str("txt").is_ok());
    assert!(ReportFormat::from_str("json").is_ok());

    // Case variations
    assert!(ReportFormat::from_str("TEXT").is_ok());
    assert!(ReportFormat::from_str("Json").is_ok());
}

#[test]
fn test_report_format_from_str_errors() {
    assert!(ReportFormat::from_str("").is_err());
    assert!(ReportFormat::from_str("csv").is_err());
    assert!(ReportFormat::from_str("yaml").is_err());

    let message = ReportFormat::from_str("yaml").unwrap_err();
    assert!(message.contains("text, json"));
}

#[test]
fn test_record_format_from_path_errors() {
    assert!(RecordFormat::from_path("records").is_err());
    assert!(RecordFormat::from_path("records.json").is_err());
    assert!(RecordFormat::from_path("records.txt").is_err());
}

#[test]
fn test_output_format_equality_and_copy() {
    let format = OutputFormat::Json;
    let copied = format; // Copy, not clone
    assert_eq!(format, copied);
    assert_ne!(OutputFormat::Json, OutputFormat::Text);
}

#[test]
fn test_output_format_hash() {
    use std::collections::HashSet;

    let mut set = HashSet::new();
    set.insert(OutputFormat::Json);
    set.insert(OutputFormat::Text);
    set.insert(OutputFormat::Json); // duplicate

    assert_eq!(set.len(), 2);
}

#[test]
fn test_output_format_into_report_format() {
    assert_eq!(ReportFormat::from(OutputFormat::default()), ReportFormat::Text);
    assert_eq!(ReportFormat::from(OutputFormat::Json), ReportFormat::Json);
}

#[test]
fn test_args_txt_alias() {
    let args = Args::try_parse_from(["chatstats", "chat.txt", "--format", "txt"]).unwrap();
    assert_eq!(args.format, OutputFormat::Text);
}

#[test]
fn test_args_overall_user_is_no_filter() {
    let args = Args::try_parse_from(["chatstats", "chat.txt", "-u", "Overall"]).unwrap();
    assert_eq!(args.selection(), Selection::Overall);
}

#[test]
fn test_args_rejects_non_numeric_top_words() {
    assert!(Args::try_parse_from(["chatstats", "chat.txt", "--top-words", "many"]).is_err());
}

#[test]
fn test_selection_from_str() {
    assert_eq!(Selection::from_str("Overall").unwrap(), Selection::Overall);
    assert_eq!(Selection::from_str("Bob").unwrap(), Selection::user("Bob"));
    assert_eq!(Selection::user("Bob").to_string(), "Bob");
}
