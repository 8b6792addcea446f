//! Word and emoji frequency views.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::filter::{Selection, select};
use super::tally::Tally;
use crate::record::ChatRecord;
use crate::stopwords::StopWords;

/// Messages containing this substring are left out of word counts.
const LINK_MARKER: &str = "http";

/// Whole-token match on the Unicode Letter category. Combining marks such as
/// Devanagari vowel signs are not letters, so tokens carrying them are rejected.
static LETTERS_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A\p{L}+\z").expect("letter pattern is valid"));

/// A word and how many times it was used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// An emoji and how many times it was used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiCount {
    pub emoji: String,
    pub frequency: usize,
}

/// Texts that carry real words: no media placeholder, no links.
fn wordy_texts<'a>(
    selected: Vec<&'a ChatRecord>,
    media_placeholder: &'a str,
) -> impl Iterator<Item = &'a str> {
    selected
        .into_iter()
        .map(ChatRecord::text)
        .filter(move |text| !text.contains(media_placeholder) && !text.contains(LINK_MARKER))
}

/// Most frequent words, highest count first, at most `limit` entries.
///
/// Messages containing the media placeholder or `"http"` are skipped. The
/// remaining text is lowercased and split on whitespace; only purely
/// alphabetic tokens that are not stopwords are counted. Equal counts keep
/// the order in which words were first seen.
pub fn most_common_words(
    selection: &Selection,
    records: &[ChatRecord],
    stopwords: &StopWords,
    media_placeholder: &str,
    limit: usize,
) -> Vec<WordCount> {
    let mut tally = Tally::new();
    for text in wordy_texts(select(records, selection), media_placeholder) {
        for word in text.to_lowercase().split_whitespace() {
            if is_alphabetic(word) && !stopwords.contains(word) {
                tally.add(word.to_string());
            }
        }
    }

    let mut ranked = tally.into_ranked();
    ranked.truncate(limit);
    ranked
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect()
}

/// Text for a word-cloud renderer: every message without the media
/// placeholder, lowercased, stopwords removed, joined by single spaces.
///
/// Unlike [`most_common_words`] this keeps non-alphabetic tokens and
/// messages with links.
pub fn wordcloud_corpus(
    selection: &Selection,
    records: &[ChatRecord],
    stopwords: &StopWords,
    media_placeholder: &str,
) -> String {
    let mut corpus = String::new();
    for record in select(records, selection) {
        if record.text().contains(media_placeholder) {
            continue;
        }
        for word in record.text().to_lowercase().split_whitespace() {
            if stopwords.contains(word) {
                continue;
            }
            if !corpus.is_empty() {
                corpus.push(' ');
            }
            corpus.push_str(word);
        }
    }
    corpus
}

/// Emoji usage, most frequent first. Empty when no emoji were used.
pub fn emoji_frequency(selection: &Selection, records: &[ChatRecord]) -> Vec<EmojiCount> {
    let tally: Tally<char> = select(records, selection)
        .into_iter()
        .flat_map(|record| record.text().chars())
        .filter(|&ch| is_emoji(ch))
        .collect();

    tally
        .into_ranked()
        .into_iter()
        .map(|(ch, frequency)| EmojiCount {
            emoji: ch.to_string(),
            frequency,
        })
        .collect()
}

/// Returns `true` if `ch` on its own is a known emoji code point.
///
/// Skin tone modifiers and hair style components count as emoji too, even
/// though they only render attached to a base emoji.
pub fn is_emoji(ch: char) -> bool {
    if ch.is_ascii() {
        return false;
    }
    if matches!(ch, '\u{1F3FB}'..='\u{1F3FF}' | '\u{1F9B0}'..='\u{1F9B3}') {
        return true;
    }
    let mut buf = [0u8; 4];
    emojis::get(ch.encode_utf8(&mut buf)).is_some()
}

fn is_alphabetic(word: &str) -> bool {
    LETTERS_ONLY.is_match(word)
}
