//! Detection of blocks that announce the end of the article text.

use super::{BoilerplateFilter, Locale, TerminatingOptions};
use crate::error::Result;
use crate::model::{Label, TextDocument};
use crate::text::fold_diacritics;

/// Labels short blocks that look like end-of-article markers.
///
/// A block qualifies when its word count is below the configured
/// threshold and its folded text (NFD, marks removed, lower-cased)
/// contains one of the terminating phrases. Matching blocks get
/// [`Label::IndicatesEndOfText`]; content flags are never touched. A
/// downstream [`IgnoreBlocksAfterContentFilter`](super::IgnoreBlocksAfterContentFilter)
/// acts on the label.
#[derive(Debug, Clone)]
pub struct TerminatingBlocksFinder {
    phrases: Vec<String>,
    max_words: usize,
}

impl TerminatingBlocksFinder {
    /// Create a finder from options.
    ///
    /// Phrases are folded the same way as block text, so accented and
    /// unaccented spellings are interchangeable. Empty phrases are dropped
    /// since they would match every short block.
    pub fn new(options: TerminatingOptions) -> Self {
        let phrases = options
            .phrases
            .iter()
            .map(|p| fold_diacritics(p.trim()))
            .filter(|p| !p.is_empty())
            .collect();
        Self {
            phrases,
            max_words: options.max_words,
        }
    }

    /// Create a finder for a locale preset.
    pub fn for_locale(locale: Locale) -> Self {
        Self::new(TerminatingOptions::for_locale(locale))
    }

    /// Get the folded phrase list.
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Get the word-count threshold.
    pub fn max_words(&self) -> usize {
        self.max_words
    }

    /// Check if a piece of text contains a terminating phrase.
    pub fn is_terminating(&self, text: &str) -> bool {
        let folded = fold_diacritics(text.trim());
        self.phrases.iter().any(|p| folded.contains(p.as_str()))
    }
}

impl Default for TerminatingBlocksFinder {
    fn default() -> Self {
        Self::new(TerminatingOptions::default())
    }
}

impl BoilerplateFilter for TerminatingBlocksFinder {
    fn name(&self) -> &str {
        "TerminatingBlocksFinder"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        let mut labeled = 0usize;

        for block in doc.blocks.iter_mut() {
            if block.word_count >= self.max_words || !self.is_terminating(&block.text) {
                continue;
            }
            if block.add_label(Label::IndicatesEndOfText) {
                log::trace!("End-of-text marker: {:?}", block.text.trim());
                labeled += 1;
            }
        }

        log::debug!("TerminatingBlocksFinder: labeled {} blocks", labeled);
        Ok(labeled > 0)
    }
}
