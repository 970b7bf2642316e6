//! # unboil
//!
//! Locale-aware boilerplate removal for segmented web-page text.
//!
//! Given a document already split into ordered text blocks, unboil
//! decides which blocks belong to the article and which are navigation,
//! legal notices or footers. It is one stage of a larger extraction
//! pipeline: segmentation, word counting and title detection happen
//! upstream, and the filters here refine the shared document in place.
//!
//! ## Quick Start
//!
//! ```
//! use unboil::model::{Label, TextBlock, TextDocument};
//!
//! fn main() -> unboil::Result<()> {
//!     let mut doc = TextDocument::from_blocks(vec![
//!         TextBlock::with_text("Accueil | Actualités | Contact"),
//!         TextBlock::with_text("Le titre de l'article").with_label(Label::Title),
//!         TextBlock::with_text("Le premier paragraphe de l'article."),
//!     ]);
//!
//!     let changed = unboil::filter_document(&mut doc)?;
//!     assert!(changed);
//!     assert_eq!(
//!         doc.content_text(),
//!         "Le titre de l'article\nLe premier paragraphe de l'article."
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Terminating phrases**: short blocks such as "Mentions légales" are
//!   labeled as end-of-text markers, accent- and case-insensitively
//! - **Title anchoring**: content before the title block is discarded
//! - **Trailing boilerplate**: everything after an end-of-text marker is
//!   discarded once enough article text has been seen
//! - **Composable chain**: filters share one trait and can be combined
//!   or re-run until the document stops changing

pub mod error;
pub mod filter;
pub mod json;
pub mod model;
pub mod text;

// Re-export commonly used types
pub use error::{Error, Result};
pub use filter::{
    BoilerplateFilter, ChainReport, FilterChain, IgnoreBlocksAfterContentFilter,
    IgnoreBlocksBeforeTitleFilter, Locale, PipelineOptions, TerminatingBlocksFinder,
    TerminatingOptions, TitleMatchClassifier,
};
pub use json::JsonFormat;
pub use model::{Label, TextBlock, TextDocument};

use std::path::Path;

/// Read a JSON-encoded document from a file.
///
/// # Example
///
/// ```no_run
/// use unboil::read_document;
///
/// let doc = read_document("page.json").unwrap();
/// println!("Blocks: {}", doc.len());
/// ```
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<TextDocument> {
    let json = std::fs::read_to_string(path)?;
    json::from_json(&json)
}

/// Decode a document from a JSON string.
pub fn document_from_json(json: &str) -> Result<TextDocument> {
    json::from_json(json)
}

/// Encode a document as JSON.
pub fn document_to_json(doc: &TextDocument, format: JsonFormat) -> Result<String> {
    json::to_json(doc, format)
}

/// Run the default pipeline over a document once.
///
/// Returns `true` if any filter changed the document.
pub fn filter_document(doc: &mut TextDocument) -> Result<bool> {
    FilterChain::from_options(&PipelineOptions::default())?.process(doc)
}

/// Builder for configuring and running the filter pipeline.
///
/// # Example
///
/// ```
/// use unboil::{Locale, Unboil};
/// use unboil::model::{Label, TextBlock, TextDocument};
///
/// let mut doc = TextDocument::from_blocks(vec![
///     TextBlock::with_text("Headline").with_label(Label::Title),
///     TextBlock::with_text("Body text."),
///     TextBlock::with_text("Site map"),
/// ]);
///
/// let report = Unboil::new()
///     .with_locale(Locale::French)
///     .with_phrases(["site map"])
///     .until_stable()
///     .process(&mut doc)?;
///
/// assert!(report.converged);
/// assert!(doc.blocks[2].has_label(&Label::IndicatesEndOfText));
/// # Ok::<(), unboil::Error>(())
/// ```
pub struct Unboil {
    options: PipelineOptions,
    until_stable: bool,
}

impl Unboil {
    /// Create a new builder with the default pipeline.
    pub fn new() -> Self {
        Self {
            options: PipelineOptions::default(),
            until_stable: false,
        }
    }

    /// Add a locale's terminating phrases, keeping phrases added earlier.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.options = self.options.with_locale(locale);
        self
    }

    /// Add terminating phrases on top of the locale's list.
    pub fn with_phrases<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options
            .terminating
            .phrases
            .extend(phrases.into_iter().map(Into::into));
        self
    }

    /// Set the word threshold for terminating-phrase detection.
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.options.terminating.max_words = max_words;
        self
    }

    /// Set the content words required before an end-of-text marker counts.
    pub fn with_end_of_text_min_words(mut self, min_words: usize) -> Self {
        self.options = self.options.with_end_of_text_min_words(min_words);
        self
    }

    /// Enable or disable title matching.
    pub fn with_title_matching(mut self, enabled: bool) -> Self {
        self.options = self.options.with_title_matching(enabled);
        self
    }

    /// Replace all pipeline options.
    pub fn with_options(mut self, options: PipelineOptions) -> Self {
        self.options = options;
        self
    }

    /// Re-run the chain until no filter reports a change.
    pub fn until_stable(mut self) -> Self {
        self.until_stable = true;
        self
    }

    /// Get the configured options.
    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Build the filter chain.
    pub fn chain(&self) -> Result<FilterChain> {
        FilterChain::from_options(&self.options)
    }

    /// Run the pipeline over a document.
    pub fn process(&self, doc: &mut TextDocument) -> Result<ChainReport> {
        let chain = self.chain()?;
        let max_passes = if self.until_stable {
            self.options.max_passes
        } else {
            1
        };
        chain.process_until_stable(doc, max_passes)
    }
}

impl Default for Unboil {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unboil_builder() {
        let unboil = Unboil::new()
            .with_phrases(["plan du site"])
            .with_max_words(10)
            .with_title_matching(false)
            .until_stable();

        assert_eq!(unboil.options().terminating.phrases.len(), 3);
        assert_eq!(unboil.options().terminating.max_words, 10);
        assert!(!unboil.options().match_title);
        assert!(unboil.until_stable);
    }

    #[test]
    fn test_locale_and_phrases_in_either_order() {
        let phrases_first = Unboil::new()
            .with_phrases(["plan du site"])
            .with_locale(Locale::French);
        let locale_first = Unboil::new()
            .with_locale(Locale::French)
            .with_phrases(["plan du site"]);

        for unboil in [&phrases_first, &locale_first] {
            let phrases = &unboil.options().terminating.phrases;
            assert_eq!(phrases.len(), 3);
            assert!(phrases.iter().any(|p| p == "plan du site"));
        }

        let mut doc = TextDocument::from_blocks(vec![TextBlock::with_text("Plan du site")]);
        phrases_first.with_title_matching(false).process(&mut doc).unwrap();
        assert!(doc.blocks[0].has_label(&Label::IndicatesEndOfText));
    }

    #[test]
    fn test_unboil_builder_default() {
        let builder = Unboil::default();
        assert!(!builder.until_stable);
        assert_eq!(builder.chain().unwrap().len(), 4);
    }

    #[test]
    fn test_single_pass_report() {
        let mut doc = TextDocument::from_blocks(vec![TextBlock::with_text("Body")]);
        let report = Unboil::new().process(&mut doc).unwrap();
        assert_eq!(report.passes, 1);
        assert!(!report.converged);
        assert!(report.changed());
        assert!(!doc.blocks[0].is_content);
    }

    #[test]
    fn test_invalid_options_fail_fast() {
        let mut doc = TextDocument::new();
        let result = Unboil::new()
            .with_options(PipelineOptions::new().with_max_passes(0))
            .until_stable()
            .process(&mut doc);
        assert!(matches!(result, Err(Error::InvalidOptions(_))));
    }

    #[test]
    fn test_filter_document_empty() {
        let mut doc = TextDocument::new();
        assert!(!filter_document(&mut doc).unwrap());
    }

    #[test]
    fn test_read_document_missing_file() {
        let result = read_document("/nonexistent/unboil/page.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
