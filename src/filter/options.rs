//! Filter and pipeline configuration.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Locales with a built-in terminating phrase list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    /// French web pages
    #[default]
    French,
}

impl Locale {
    /// Get the terminating phrases for this locale, already folded.
    pub fn terminating_phrases(&self) -> &'static [&'static str] {
        match self {
            Locale::French => &["accessibilite", "mentions legales"],
        }
    }

    /// Get the short code of this locale.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::French => "fr",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "fr" | "french" | "francais" | "français" => Ok(Locale::French),
            other => Err(Error::UnknownLocale(other.to_string())),
        }
    }
}

/// Options for terminating-phrase detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminatingOptions {
    /// Phrases whose presence marks a short block as end-of-text
    pub phrases: Vec<String>,

    /// Only blocks with fewer words than this are inspected
    pub max_words: usize,
}

impl TerminatingOptions {
    /// Create options with the default locale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create options from a locale preset.
    pub fn for_locale(locale: Locale) -> Self {
        Self {
            phrases: locale
                .terminating_phrases()
                .iter()
                .map(|p| p.to_string())
                .collect(),
            max_words: 20,
        }
    }

    /// Replace the phrase list.
    pub fn with_phrases<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.phrases = phrases.into_iter().map(Into::into).collect();
        self
    }

    /// Append a phrase.
    pub fn add_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.phrases.push(phrase.into());
        self
    }

    /// Set the word-count threshold.
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }
}

impl Default for TerminatingOptions {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

/// Options for assembling the standard filter chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    /// Terminating-phrase detection
    pub terminating: TerminatingOptions,

    /// Word threshold accepted by the before-title filter (currently inert)
    pub title_min_words: usize,

    /// Content words required before an end-of-text marker takes effect
    pub end_of_text_min_words: usize,

    /// Label the block matching the document title
    pub match_title: bool,

    /// Suppress content before the title block
    pub ignore_before_title: bool,

    /// Suppress content after an end-of-text marker
    pub ignore_after_content: bool,

    /// Upper bound on chain passes when running until stable
    pub max_passes: usize,
}

impl PipelineOptions {
    /// Create new pipeline options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a locale's phrases to the terminating phrase list.
    ///
    /// Phrases already configured, including caller-added ones, are kept;
    /// the locale's phrases are appended unless already present.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        let phrases = &mut self.terminating.phrases;
        for phrase in locale.terminating_phrases() {
            if !phrases.iter().any(|p| p == phrase) {
                phrases.push(phrase.to_string());
            }
        }
        self
    }

    /// Set terminating options.
    pub fn with_terminating(mut self, terminating: TerminatingOptions) -> Self {
        self.terminating = terminating;
        self
    }

    /// Set the before-title word threshold.
    pub fn with_title_min_words(mut self, min_words: usize) -> Self {
        self.title_min_words = min_words;
        self
    }

    /// Set the end-of-text word threshold.
    pub fn with_end_of_text_min_words(mut self, min_words: usize) -> Self {
        self.end_of_text_min_words = min_words;
        self
    }

    /// Enable or disable title matching.
    pub fn with_title_matching(mut self, enabled: bool) -> Self {
        self.match_title = enabled;
        self
    }

    /// Enable or disable before-title suppression.
    pub fn with_ignore_before_title(mut self, enabled: bool) -> Self {
        self.ignore_before_title = enabled;
        self
    }

    /// Enable or disable after-content suppression.
    pub fn with_ignore_after_content(mut self, enabled: bool) -> Self {
        self.ignore_after_content = enabled;
        self
    }

    /// Set the maximum number of chain passes.
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    /// Check the options for values no chain can run with.
    pub fn validate(&self) -> Result<()> {
        if self.max_passes == 0 {
            return Err(Error::InvalidOptions(
                "max_passes must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            terminating: TerminatingOptions::default(),
            title_min_words: 60,
            end_of_text_min_words: 60,
            match_title: true,
            ignore_before_title: true,
            ignore_after_content: true,
            max_passes: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parse() {
        assert_eq!("fr".parse::<Locale>().unwrap(), Locale::French);
        assert_eq!(" French ".parse::<Locale>().unwrap(), Locale::French);
        assert!(matches!(
            "klingon".parse::<Locale>(),
            Err(Error::UnknownLocale(_))
        ));
    }

    #[test]
    fn test_locale_display_parses_back() {
        for locale in [Locale::French] {
            assert_eq!(locale.to_string(), locale.code());
            assert_eq!(locale.to_string().parse::<Locale>().unwrap(), locale);
        }
    }

    #[test]
    fn test_terminating_defaults() {
        let options = TerminatingOptions::default();
        assert_eq!(options.max_words, 20);
        assert_eq!(
            options.phrases,
            vec!["accessibilite".to_string(), "mentions legales".to_string()]
        );
    }

    #[test]
    fn test_terminating_builder() {
        let options = TerminatingOptions::new()
            .with_phrases(["plan du site"])
            .add_phrase("Crédits")
            .with_max_words(12);
        assert_eq!(options.phrases.len(), 2);
        assert_eq!(options.max_words, 12);
    }

    #[test]
    fn test_pipeline_defaults() {
        let options = PipelineOptions::default();
        assert_eq!(options.title_min_words, 60);
        assert_eq!(options.end_of_text_min_words, 60);
        assert!(options.match_title);
        assert!(options.ignore_before_title);
        assert!(options.ignore_after_content);
        assert_eq!(options.max_passes, 4);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_pipeline_with_locale_keeps_threshold() {
        let options = PipelineOptions::new()
            .with_terminating(TerminatingOptions::new().with_max_words(8))
            .with_locale(Locale::French);
        assert_eq!(options.terminating.max_words, 8);
    }

    #[test]
    fn test_pipeline_with_locale_keeps_added_phrases() {
        let options = PipelineOptions::new()
            .with_terminating(TerminatingOptions::new().with_phrases(["plan du site"]))
            .with_locale(Locale::French);
        assert_eq!(
            options.terminating.phrases,
            vec![
                "plan du site".to_string(),
                "accessibilite".to_string(),
                "mentions legales".to_string(),
            ]
        );

        let again = options.clone().with_locale(Locale::French);
        assert_eq!(again.terminating.phrases, options.terminating.phrases);
    }

    #[test]
    fn test_pipeline_zero_passes_rejected() {
        let options = PipelineOptions::new().with_max_passes(0);
        assert!(matches!(options.validate(), Err(Error::InvalidOptions(_))));
    }

    #[test]
    fn test_pipeline_options_from_json() {
        let options: PipelineOptions =
            serde_json::from_str(r#"{"match_title": false, "terminating": {"max_words": 10}}"#)
                .unwrap();
        assert!(!options.match_title);
        assert_eq!(options.terminating.max_words, 10);
        assert_eq!(options.terminating.phrases.len(), 2);
        assert_eq!(options.max_passes, 4);
    }
}
