//! Text block type.

use super::Label;
use crate::text::count_words;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One contiguous unit of extracted text.
///
/// Blocks are created and initially classified upstream. Filters in this
/// crate read the text, word count and labels, and only ever downgrade
/// `is_content` or add labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BlockRecord")]
pub struct TextBlock {
    /// Raw text content
    pub text: String,

    /// Number of words, precomputed by the segmenter
    pub word_count: usize,

    /// Whether the block is currently considered main content
    pub is_content: bool,

    /// Labels attached by filters
    pub labels: BTreeSet<Label>,
}

impl TextBlock {
    /// Create a content block with an explicit word count.
    pub fn new(text: impl Into<String>, word_count: usize) -> Self {
        Self {
            text: text.into(),
            word_count,
            is_content: true,
            labels: BTreeSet::new(),
        }
    }

    /// Create a content block, counting its words.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let word_count = count_words(&text);
        Self::new(text, word_count)
    }

    /// Set the initial content flag.
    pub fn with_content(mut self, is_content: bool) -> Self {
        self.is_content = is_content;
        self
    }

    /// Attach a label.
    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.insert(label);
        self
    }

    /// Check if the block carries a label.
    pub fn has_label(&self, label: &Label) -> bool {
        self.labels.contains(label)
    }

    /// Add a label, returning `true` if it was not already present.
    pub fn add_label(&mut self, label: Label) -> bool {
        self.labels.insert(label)
    }

    /// Set the content flag, returning `true` if the flag changed.
    pub fn set_is_content(&mut self, is_content: bool) -> bool {
        let changed = self.is_content != is_content;
        self.is_content = is_content;
        changed
    }

    /// Check if the block has no visible text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Serialized block shape; absent fields get sensible defaults.
#[derive(Deserialize)]
struct BlockRecord {
    text: String,
    #[serde(default)]
    word_count: Option<usize>,
    #[serde(default = "default_is_content")]
    is_content: bool,
    #[serde(default)]
    labels: BTreeSet<Label>,
}

fn default_is_content() -> bool {
    true
}

impl From<BlockRecord> for TextBlock {
    fn from(record: BlockRecord) -> Self {
        let word_count = record
            .word_count
            .unwrap_or_else(|| count_words(&record.text));
        Self {
            text: record.text,
            word_count,
            is_content: record.is_content,
            labels: record.labels,
        }
    }
}
