//! Document-level types.

use super::TextBlock;
use serde::{Deserialize, Serialize};

/// An ordered sequence of text blocks.
///
/// Insertion order is reading order; every "before"/"after" decision made
/// by the filters is relative to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDocument {
    /// Document title (e.g. the HTML `<title>`), if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Blocks in reading order
    #[serde(default)]
    pub blocks: Vec<TextBlock>,
}

impl TextDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from blocks.
    pub fn from_blocks(blocks: Vec<TextBlock>) -> Self {
        Self {
            title: None,
            blocks,
        }
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Append a block.
    pub fn add_block(&mut self, block: TextBlock) {
        self.blocks.push(block);
    }

    /// Get the blocks in reading order.
    pub fn blocks(&self) -> &[TextBlock] {
        &self.blocks
    }

    /// Get mutable access to the blocks.
    pub fn blocks_mut(&mut self) -> &mut [TextBlock] {
        &mut self.blocks
    }

    /// Get the number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate over the blocks currently flagged as content.
    pub fn content_blocks(&self) -> impl Iterator<Item = &TextBlock> {
        self.blocks.iter().filter(|b| b.is_content)
    }

    /// Get the text of all content blocks, one block per line.
    pub fn content_text(&self) -> String {
        self.content_blocks()
            .map(|b| b.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Get the total word count of all content blocks.
    pub fn content_word_count(&self) -> usize {
        self.content_blocks().map(|b| b.word_count).sum()
    }

    /// Render a one-line-per-block overview for debugging.
    ///
    /// Each line starts with `[+]` for content or `[-]` for boilerplate,
    /// followed by the block's labels and text.
    pub fn debug_string(&self) -> String {
        let mut lines = Vec::with_capacity(self.blocks.len());
        for block in &self.blocks {
            let flag = if block.is_content { "[+]" } else { "[-]" };
            let labels = block
                .labels
                .iter()
                .map(|l| l.as_str())
                .collect::<Vec<_>>()
                .join(",");
            lines.push(format!(
                "{} ({} words) [{}] {}",
                flag,
                block.word_count,
                labels,
                block.text.trim()
            ));
        }
        lines.join("\n")
    }
}
