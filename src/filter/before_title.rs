//! Suppression of content that precedes the title block.

use super::BoilerplateFilter;
use crate::error::Result;
use crate::model::{Label, TextDocument};

/// Marks content blocks outside the title-anchored span as non-content.
///
/// Until the first [`Label::Title`] block is seen, every content block is
/// downgraded immediately. From then on content blocks are held in a
/// buffer of provisional keeps; each further title block downgrades and
/// clears that buffer. Only content following the last title survives.
///
/// A document without any title block loses all of its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IgnoreBlocksBeforeTitleFilter {
    min_words: usize,
}

impl IgnoreBlocksBeforeTitleFilter {
    /// Create a filter with a minimum word threshold.
    ///
    /// The threshold is accepted for configuration compatibility but does
    /// not currently influence the result: suppression before the first
    /// title is unconditional.
    pub fn new(min_words: usize) -> Self {
        Self { min_words }
    }

    /// Get the configured word threshold (currently inert).
    pub fn min_words(&self) -> usize {
        self.min_words
    }
}

impl Default for IgnoreBlocksBeforeTitleFilter {
    fn default() -> Self {
        Self::new(60)
    }
}

impl BoilerplateFilter for IgnoreBlocksBeforeTitleFilter {
    fn name(&self) -> &str {
        "IgnoreBlocksBeforeTitleFilter"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        let mut changed = false;
        let mut found_title = false;
        // Indices of blocks provisionally kept since the last title.
        let mut buffer: Vec<usize> = Vec::new();

        for idx in 0..doc.blocks.len() {
            if doc.blocks[idx].has_label(&Label::Title) {
                found_title = true;
                for &held in &buffer {
                    if doc.blocks[held].set_is_content(false) {
                        log::trace!("Flushed block {} on title at {}", held, idx);
                        changed = true;
                    }
                }
                buffer.clear();
            }

            let block = &mut doc.blocks[idx];
            if !block.is_content {
                continue;
            }
            if found_title {
                buffer.push(idx);
            } else {
                block.set_is_content(false);
                log::trace!("Suppressed block {} before title", idx);
                changed = true;
            }
        }

        log::debug!(
            "IgnoreBlocksBeforeTitleFilter: title_found={}, kept={}, changed={}",
            found_title,
            buffer.len(),
            changed
        );
        Ok(changed)
    }
}
