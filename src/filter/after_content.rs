//! Suppression of trailing boilerplate after an end-of-text marker.

use super::BoilerplateFilter;
use crate::error::Result;
use crate::model::{Label, TextDocument};

/// Marks every block from the first effective end-of-text marker onward
/// as non-content.
///
/// A block labeled [`Label::IndicatesEndOfText`] only takes effect once at
/// least `min_words` words of content have been seen before it (the
/// marker block counts itself if it is content). Earlier markers are
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IgnoreBlocksAfterContentFilter {
    min_words: usize,
}

impl IgnoreBlocksAfterContentFilter {
    /// Create a filter with a minimum content-word threshold.
    pub fn new(min_words: usize) -> Self {
        Self { min_words }
    }

    /// Get the content-word threshold.
    pub fn min_words(&self) -> usize {
        self.min_words
    }
}

impl Default for IgnoreBlocksAfterContentFilter {
    fn default() -> Self {
        Self::new(60)
    }
}

impl BoilerplateFilter for IgnoreBlocksAfterContentFilter {
    fn name(&self) -> &str {
        "IgnoreBlocksAfterContentFilter"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        let mut changed = false;
        let mut content_words = 0usize;
        let mut end_of_text: Option<usize> = None;

        for (idx, block) in doc.blocks.iter_mut().enumerate() {
            if block.is_content {
                content_words += block.word_count;
            }
            if end_of_text.is_none()
                && block.has_label(&Label::IndicatesEndOfText)
                && content_words >= self.min_words
            {
                end_of_text = Some(idx);
            }
            if end_of_text.is_some() && block.set_is_content(false) {
                changed = true;
            }
        }

        match end_of_text {
            Some(idx) => log::debug!(
                "IgnoreBlocksAfterContentFilter: end of text at block {}",
                idx
            ),
            None => log::debug!("IgnoreBlocksAfterContentFilter: no effective end-of-text marker"),
        }
        Ok(changed)
    }
}
