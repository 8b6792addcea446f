//! Configuration for the analyzer.
//!
//! Plain builder structs with no CLI framework dependencies, so library users
//! can construct them directly or deserialize them from their own settings.
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::AnalyzerConfig;
//!
//! let config = AnalyzerConfig::new()
//!     .with_top_words(10)
//!     .with_bare_domain_links(false);
//!
//! assert_eq!(config.top_words, 10);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ChatstatsError, Result};
use crate::record::MEDIA_OMITTED;

/// Number of entries returned by the common-words view unless overridden.
pub const DEFAULT_TOP_WORDS: usize = 20;

/// Settings shared by every aggregation view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Literal body that marks an omitted attachment (default: `<Media omitted>`)
    pub media_placeholder: String,

    /// Maximum entries returned by the common-words view (default: 20)
    pub top_words: usize,

    /// Count bare domains such as `example.com` as links, not only
    /// `http(s)://` URLs (default: true)
    pub bare_domain_links: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            media_placeholder: MEDIA_OMITTED.to_string(),
            top_words: DEFAULT_TOP_WORDS,
            bare_domain_links: true,
        }
    }
}

impl AnalyzerConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the media placeholder literal.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholder = placeholder.into();
        self
    }

    /// Sets how many common words are returned.
    #[must_use]
    pub fn with_top_words(mut self, limit: usize) -> Self {
        self.top_words = limit;
        self
    }

    /// Enables or disables scheme-less link detection.
    #[must_use]
    pub fn with_bare_domain_links(mut self, enabled: bool) -> Self {
        self.bare_domain_links = enabled;
        self
    }

    /// Checks that the settings are usable.
    pub fn validate(&self) -> Result<()> {
        if self.top_words == 0 {
            return Err(ChatstatsError::invalid_config(
                "top_words must be at least 1",
            ));
        }
        if self.media_placeholder.trim().is_empty() {
            return Err(ChatstatsError::invalid_config(
                "media_placeholder must not be blank",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.media_placeholder, "<Media omitted>");
        assert_eq!(config.top_words, 20);
        assert!(config.bare_domain_links);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = AnalyzerConfig::new()
            .with_media_placeholder("<attached>")
            .with_top_words(5)
            .with_bare_domain_links(false);
        assert_eq!(config.media_placeholder, "<attached>");
        assert_eq!(config.top_words, 5);
        assert!(!config.bare_domain_links);
    }

    #[test]
    fn test_validate_rejects_zero_top_words() {
        let err = AnalyzerConfig::new().with_top_words(0).validate().unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_validate_rejects_blank_placeholder() {
        let err = AnalyzerConfig::new()
            .with_media_placeholder("  ")
            .validate()
            .unwrap_err();
        assert!(err.is_config());
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_partial_deserialize_uses_defaults() {
        let config: AnalyzerConfig = serde_json::from_str(r#"{"top_words": 7}"#).unwrap();
        assert_eq!(config.top_words, 7);
        assert_eq!(config.media_placeholder, "<Media omitted>");
        assert!(config.bare_domain_links);
    }
}
