//! # chatstats CLI
//!
//! Command-line interface for the chatstats library.

use std::fs;
use std::io::IsTerminal;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use chatstats::cli::Args;
use chatstats::core::{Analyzer, selectable_users};
use chatstats::format::{ReportFormat, render_report, write_records};
use chatstats::parser::WhatsAppParser;
use chatstats::stopwords::StopWords;
use chatstats::{ChatstatsError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    setup_logging(&args.log_level);

    // Step 1: Stopwords and analyzer settings (both fatal before any output is written)
    let stopwords = match &args.stopwords {
        Some(path) => StopWords::from_file(path)?,
        None => StopWords::bundled(),
    };
    debug!("Loaded {} stopwords", stopwords.len());
    let analyzer = Analyzer::with_config(stopwords, args.analyzer_config())?;

    // Step 2: Parse
    let parser = WhatsAppParser::new();
    let content = fs::read_to_string(&args.input)?;
    let parse_start = Instant::now();
    let report = parser.parse_with_report(&content);
    debug!(
        "{} parse of {} took {:.2}s",
        parser.name(),
        args.input.display(),
        parse_start.elapsed().as_secs_f64()
    );
    if report.dropped > 0 {
        warn!("{} entries had unparseable timestamps", report.dropped);
    }
    let records = report.into_records();

    if args.list_users {
        for user in selectable_users(&records) {
            println!("{user}");
        }
        return Ok(());
    }

    // Step 3: Optional record table export
    if let Some(path) = &args.records {
        let path = path.to_str().ok_or_else(|| {
            ChatstatsError::invalid_config(format!(
                "records path is not valid UTF-8: {}",
                path.display()
            ))
        })?;
        let format = write_records(&records, path)?;
        info!("Wrote {} records as {} to {}", records.len(), format, path);
    }

    // Step 4: Analyze
    let selection = args.selection();
    if !selection.is_overall() && !records.iter().any(|r| selection.matches(r)) {
        warn!("No messages from '{}'", selection);
    }
    let summary = analyzer.report(&selection, &records);

    // Step 5: Render
    let format: ReportFormat = args.format.into();
    let rendered = render_report(&summary, format)?;
    match &args.output {
        Some(path) => {
            fs::write(path, rendered.as_bytes())?;
            info!("Report ({}) saved to {}", format, path.display());
        }
        None => print!("{rendered}"),
    }

    debug!("Done in {:.2}s", total_start.elapsed().as_secs_f64());
    Ok(())
}

/// Initialise the global `tracing` subscriber on stderr.
///
/// `RUST_LOG` wins over `--log-level` when set. Unknown levels fall back to
/// `warn`.
fn setup_logging(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level.to_lowercase()))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .init();
}
