//! Headline counts and per-user activity.

use std::fmt;

use linkify::{LinkFinder, LinkKind};
use serde::Serialize;

use super::filter::{Selection, select};
use super::tally::Tally;
use crate::record::{ChatRecord, MEDIA_OMITTED};

/// Headline numbers for a selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChatStats {
    /// Number of records.
    pub messages: usize,
    /// Whitespace-separated tokens across every text, placeholders and
    /// group notifications included.
    pub words: usize,
    /// Records whose text is exactly the media placeholder.
    pub media: usize,
    /// URLs found across every text.
    pub links: usize,
}

/// Finds URLs in message text.
///
/// Recognises `http(s)://` URLs and, unless disabled, scheme-less domains
/// such as `www.example.com`.
pub struct LinkDetector {
    finder: LinkFinder,
}

impl LinkDetector {
    pub fn new(bare_domains: bool) -> Self {
        let mut finder = LinkFinder::new();
        finder.kinds(&[LinkKind::Url]);
        finder.url_must_have_scheme(!bare_domains);
        Self { finder }
    }

    /// Number of URLs in `text`.
    pub fn count(&self, text: &str) -> usize {
        self.finder.links(text).count()
    }
}

impl fmt::Debug for LinkDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkDetector").finish_non_exhaustive()
    }
}

impl Default for LinkDetector {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Computes [`ChatStats`] for the records in `selection`.
pub fn fetch_stats(
    selection: &Selection,
    records: &[ChatRecord],
    links: &LinkDetector,
    media_placeholder: &str,
) -> ChatStats {
    select(records, selection)
        .into_iter()
        .fold(ChatStats::default(), |mut stats, record| {
            let text = record.text();
            stats.messages += 1;
            stats.words += text.split_whitespace().count();
            stats.media += usize::from(text == media_placeholder);
            stats.links += links.count(text);
            stats
        })
}

/// Same as [`fetch_stats`] with the standard placeholder.
pub fn fetch_default_stats(
    selection: &Selection,
    records: &[ChatRecord],
    links: &LinkDetector,
) -> ChatStats {
    fetch_stats(selection, records, links, MEDIA_OMITTED)
}

/// Messages sent by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserCount {
    pub sender: String,
    pub messages: usize,
}

/// A user's share of all human-sent messages, in percent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserShare {
    pub sender: String,
    /// Rounded to two decimal places.
    pub percent: f64,
}

/// Ranking of the most active senders.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BusyUsers {
    /// Message counts, highest first.
    pub counts: Vec<UserCount>,
    /// Same order as `counts`.
    pub percentages: Vec<UserShare>,
}

impl BusyUsers {
    /// The `n` most active senders.
    pub fn top(&self, n: usize) -> &[UserCount] {
        &self.counts[..n.min(self.counts.len())]
    }
}

/// Ranks senders by message count. Group notifications are left out
/// entirely, including from the percentage denominator.
pub fn most_busy_users(records: &[ChatRecord]) -> BusyUsers {
    let tally: Tally<&str> = records
        .iter()
        .filter(|r| !r.is_notification())
        .map(ChatRecord::sender)
        .collect();
    let total = tally.total();
    let ranked = tally.into_ranked();

    let percentages = ranked
        .iter()
        .map(|&(sender, messages)| UserShare {
            sender: sender.to_string(),
            percent: round2(messages as f64 / total as f64 * 100.0),
        })
        .collect();
    let counts = ranked
        .into_iter()
        .map(|(sender, messages)| UserCount {
            sender: sender.to_string(),
            messages,
        })
        .collect();

    BusyUsers {
        counts,
        percentages,
    }
}

/// Two-decimal rounding with ties to even, so an exact `3.125` becomes `3.12`.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
