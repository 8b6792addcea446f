//! Stopword list used by the word-frequency views.
//!
//! The list is plain text: words separated by any whitespace. It is loaded
//! once, before analysis starts, and handed to the
//! [`Analyzer`](crate::core::Analyzer). A list that cannot be read is a
//! configuration error, never silently replaced by an empty set.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ChatstatsError, Result};

/// Hinglish and English stopwords shipped with the crate.
const BUNDLED: &str = include_str!("../assets/stop_hinglish.txt");

/// An immutable set of words excluded from frequency counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Builds a set from whitespace-separated text.
    pub fn from_text(text: &str) -> Self {
        Self {
            words: text.split_whitespace().map(str::to_string).collect(),
        }
    }

    /// Loads a word list from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::Stopwords`] if the file is missing or unreadable.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| ChatstatsError::stopwords(path, e))?;
        let words = Self::from_text(&text);
        debug!("Loaded {} stopwords from {}", words.len(), path.display());
        Ok(words)
    }

    /// The list bundled with the crate.
    pub fn bundled() -> Self {
        Self::from_text(BUNDLED)
    }

    /// Set with no words; every alphabetic token counts.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
