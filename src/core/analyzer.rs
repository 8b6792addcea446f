//! The analyzer: injected dependencies plus every aggregation view.
//!
//! [`Analyzer`] is built once, with the stopword list and link detector it
//! needs, and then queried any number of times. It holds no mutable state;
//! every view borrows the record slice and returns a fresh result.
//!
//! # Example
//!
//! ```rust
//! use chatstats::core::{Analyzer, Selection};
//! use chatstats::parser::parse;
//! use chatstats::stopwords::StopWords;
//!
//! let records = parse("1/1/23, 09:00 - Alice: Hello there\n1/1/23, 09:05 - Bob: <Media omitted>\n");
//! let analyzer = Analyzer::new(StopWords::bundled());
//!
//! let stats = analyzer.fetch_stats(&Selection::Overall, &records);
//! assert_eq!(stats.messages, 2);
//! assert_eq!(stats.media, 1);
//! ```

use serde::Serialize;
use tracing::debug;

use super::activity::{self, ActivityHeatmap, NamedCount};
use super::filter::Selection;
use super::stats::{self, BusyUsers, ChatStats, LinkDetector};
use super::timeline::{self, DailyPoint, MonthlyPoint};
use super::words::{self, EmojiCount, WordCount};
use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::record::ChatRecord;
use crate::stopwords::StopWords;

/// Computes summary views over parsed records.
#[derive(Debug)]
pub struct Analyzer {
    stopwords: StopWords,
    links: LinkDetector,
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Creates an analyzer with default settings.
    pub fn new(stopwords: StopWords) -> Self {
        let config = AnalyzerConfig::default();
        Self {
            stopwords,
            links: LinkDetector::new(config.bare_domain_links),
            config,
        }
    }

    /// Creates an analyzer with custom settings.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::InvalidConfig`](crate::ChatstatsError::InvalidConfig)
    /// if `config` fails validation.
    pub fn with_config(stopwords: StopWords, config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            stopwords,
            links: LinkDetector::new(config.bare_domain_links),
            config,
        })
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn stopwords(&self) -> &StopWords {
        &self.stopwords
    }

    /// Message, word, media and link counts.
    pub fn fetch_stats(&self, selection: &Selection, records: &[ChatRecord]) -> ChatStats {
        stats::fetch_stats(selection, records, &self.links, &self.config.media_placeholder)
    }

    /// Senders ranked by message count, group notifications excluded.
    pub fn most_busy_users(&self, records: &[ChatRecord]) -> BusyUsers {
        stats::most_busy_users(records)
    }

    /// The most frequent non-stopword words (at most `top_words`).
    pub fn most_common_words(&self, selection: &Selection, records: &[ChatRecord]) -> Vec<WordCount> {
        words::most_common_words(
            selection,
            records,
            &self.stopwords,
            &self.config.media_placeholder,
            self.config.top_words,
        )
    }

    /// Cleaned text for a word-cloud renderer.
    pub fn wordcloud_corpus(&self, selection: &Selection, records: &[ChatRecord]) -> String {
        words::wordcloud_corpus(
            selection,
            records,
            &self.stopwords,
            &self.config.media_placeholder,
        )
    }

    pub fn emoji_frequency(&self, selection: &Selection, records: &[ChatRecord]) -> Vec<EmojiCount> {
        words::emoji_frequency(selection, records)
    }

    pub fn monthly_timeline(&self, selection: &Selection, records: &[ChatRecord]) -> Vec<MonthlyPoint> {
        timeline::monthly_timeline(selection, records)
    }

    pub fn daily_timeline(&self, selection: &Selection, records: &[ChatRecord]) -> Vec<DailyPoint> {
        timeline::daily_timeline(selection, records)
    }

    pub fn weekday_activity(&self, selection: &Selection, records: &[ChatRecord]) -> Vec<NamedCount> {
        activity::weekday_activity(selection, records)
    }

    pub fn month_activity(&self, selection: &Selection, records: &[ChatRecord]) -> Vec<NamedCount> {
        activity::month_activity(selection, records)
    }

    pub fn activity_heatmap(&self, selection: &Selection, records: &[ChatRecord]) -> ActivityHeatmap {
        activity::activity_heatmap(selection, records)
    }

    /// Runs every view for `selection`.
    ///
    /// The busy-users ranking compares senders against each other, so it is
    /// only filled in for [`Selection::Overall`].
    pub fn report(&self, selection: &Selection, records: &[ChatRecord]) -> Report {
        debug!(
            "Building report for '{}' over {} records",
            selection,
            records.len()
        );

        Report {
            user: selection.label().to_string(),
            stats: self.fetch_stats(selection, records),
            monthly_timeline: self.monthly_timeline(selection, records),
            daily_timeline: self.daily_timeline(selection, records),
            weekday_activity: self.weekday_activity(selection, records),
            month_activity: self.month_activity(selection, records),
            heatmap: self.activity_heatmap(selection, records),
            busy_users: selection
                .is_overall()
                .then(|| self.most_busy_users(records)),
            common_words: self.most_common_words(selection, records),
            emojis: self.emoji_frequency(selection, records),
        }
    }
}

/// Every view for one selection, ready to render or serialize.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// `"Overall"` or the selected sender.
    pub user: String,
    pub stats: ChatStats,
    pub monthly_timeline: Vec<MonthlyPoint>,
    pub daily_timeline: Vec<DailyPoint>,
    pub weekday_activity: Vec<NamedCount>,
    pub month_activity: Vec<NamedCount>,
    pub heatmap: ActivityHeatmap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busy_users: Option<BusyUsers>,
    pub common_words: Vec<WordCount>,
    pub emojis: Vec<EmojiCount>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    const CHAT: &str = "1/1/23, 09:00 - Alice: Hello there 😀\n\
                        1/1/23, 09:05 - Bob: <Media omitted>\n\
                        1/1/23, 09:06 - Alice added Bob\n\
                        2/1/23, 21:10 - Bob: pizza pizza https://pizza.example\n\
                        3/2/23, 08:00 - Alice: pizza time\n";

    #[test]
    fn test_with_config_validates() {
        let err = Analyzer::with_config(StopWords::empty(), AnalyzerConfig::new().with_top_words(0))
            .unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_top_words_limit_is_applied() {
        let analyzer =
            Analyzer::with_config(StopWords::empty(), AnalyzerConfig::new().with_top_words(1))
                .unwrap();
        let words = analyzer.most_common_words(&Selection::Overall, &parse(CHAT));
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn test_overall_report() {
        let records = parse(CHAT);
        let analyzer = Analyzer::new(StopWords::from_text("there"));
        let report = analyzer.report(&Selection::Overall, &records);

        assert_eq!(report.user, "Overall");
        assert_eq!(report.stats.messages, 5);
        assert_eq!(report.stats.media, 1);
        assert_eq!(report.stats.links, 1);
        assert_eq!(report.heatmap.total(), 5);
        assert_eq!(report.monthly_timeline.len(), 2);
        assert_eq!(report.daily_timeline.len(), 3);

        let busy = report.busy_users.as_ref().unwrap();
        assert_eq!(busy.counts.len(), 2);

        // the https message is skipped, so only "pizza time" contributes pizza
        assert_eq!(report.common_words[0].word, "hello");
        assert!(report.common_words.iter().any(|w| w.word == "pizza" && w.count == 1));
        assert_eq!(report.emojis.len(), 1);
    }

    #[test]
    fn test_user_report_has_no_busy_users() {
        let records = parse(CHAT);
        let analyzer = Analyzer::new(StopWords::empty());
        let report = analyzer.report(&Selection::user("Bob"), &records);

        assert_eq!(report.user, "Bob");
        assert!(report.busy_users.is_none());
        assert_eq!(report.stats.messages, 2);
        assert!(report.emojis.is_empty());
    }

    #[test]
    fn test_report_on_empty_input() {
        let analyzer = Analyzer::new(StopWords::empty());
        let report = analyzer.report(&Selection::Overall, &[]);

        assert_eq!(report.stats, ChatStats::default());
        assert!(report.monthly_timeline.is_empty());
        assert!(report.daily_timeline.is_empty());
        assert!(report.weekday_activity.is_empty());
        assert!(report.month_activity.is_empty());
        assert_eq!(report.heatmap.total(), 0);
        assert!(report.common_words.is_empty());
        assert!(report.emojis.is_empty());
        assert_eq!(report.busy_users, Some(BusyUsers::default()));
    }

    #[test]
    fn test_wordcloud_uses_injected_stopwords() {
        let analyzer = Analyzer::new(StopWords::from_text("pizza"));
        let corpus = analyzer.wordcloud_corpus(&Selection::Overall, &parse(CHAT));
        assert!(!corpus.split(' ').any(|w| w == "pizza"));
        assert!(corpus.contains("hello"));
    }
}
