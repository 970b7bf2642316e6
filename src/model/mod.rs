//! Document model types for block-level content classification.
//!
//! A [`TextDocument`] is an ordered list of [`TextBlock`]s handed over by
//! an external segmenter. Filters communicate through per-block
//! [`Label`]s and the per-block content flag.

mod block;
mod document;
mod label;

pub use block::TextBlock;
pub use document::TextDocument;
pub use label::Label;
