//! Aggregation views over parsed chat records.
//!
//! This module contains:
//! - [`filter`] - The shared per-sender selection step
//! - [`stats`] - Headline counts and most active users
//! - [`words`] - Common words, word-cloud text and emoji frequency
//! - [`timeline`] - Monthly and daily message counts
//! - [`activity`] - Weekday, month and weekday-by-hour activity
//! - [`analyzer`] - [`Analyzer`] and the bundled [`Report`]
//! - [`output`] - Record table and report writers
//!
//! Every view takes the full record slice plus a [`Selection`] and never
//! fails: empty input yields zero counts and empty lists.
//!
//! # Quick Start
//!
//! ```rust
//! use chatstats::core::{Selection, activity_heatmap, monthly_timeline};
//! use chatstats::parser::parse;
//!
//! let records = parse("2/1/23, 09:15 - Alice: good morning\n");
//! let heatmap = activity_heatmap(&Selection::Overall, &records);
//! assert_eq!(heatmap.total(), 1);
//! assert_eq!(monthly_timeline(&Selection::Overall, &records)[0].label, "January 2023");
//! ```

pub mod activity;
pub mod analyzer;
pub mod filter;
pub mod output;
pub mod stats;
mod tally;
pub mod timeline;
pub mod words;

pub use activity::{
    ActivityHeatmap, NamedCount, activity_heatmap, month_activity, period_label, weekday_activity,
};
pub use analyzer::{Analyzer, Report};
pub use filter::{OVERALL, Selection, select, selectable_users};
pub use stats::{
    BusyUsers, ChatStats, LinkDetector, UserCount, UserShare, fetch_stats, most_busy_users,
};
pub use timeline::{DailyPoint, MonthlyPoint, daily_timeline, monthly_timeline};
pub use words::{EmojiCount, WordCount, emoji_frequency, most_common_words, wordcloud_corpus};

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
