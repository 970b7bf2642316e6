//! Block classification filters.
//!
//! Each filter inspects a [`TextDocument`] in reading order and mutates it
//! in place, adding labels or downgrading content flags. Filters are
//! immutable value objects; any state needed during a pass lives on the
//! stack of that pass, so one instance can be shared across documents and
//! threads.
//!
//! # Example
//!
//! ```
//! use unboil::filter::{FilterChain, IgnoreBlocksBeforeTitleFilter, TerminatingBlocksFinder};
//! use unboil::model::{Label, TextBlock, TextDocument};
//!
//! let mut doc = TextDocument::from_blocks(vec![
//!     TextBlock::with_text("Accueil"),
//!     TextBlock::with_text("Le titre").with_label(Label::Title),
//!     TextBlock::with_text("Le corps de l'article."),
//!     TextBlock::with_text("Mentions légales"),
//! ]);
//!
//! let chain = FilterChain::new()
//!     .with_filter(TerminatingBlocksFinder::default())
//!     .with_filter(IgnoreBlocksBeforeTitleFilter::default());
//!
//! assert!(chain.process(&mut doc)?);
//! assert!(!doc.blocks[0].is_content);
//! assert!(doc.blocks[3].has_label(&Label::IndicatesEndOfText));
//! # Ok::<(), unboil::Error>(())
//! ```

mod after_content;
mod before_title;
mod options;
mod terminating;
mod title_match;

pub use after_content::IgnoreBlocksAfterContentFilter;
pub use before_title::IgnoreBlocksBeforeTitleFilter;
pub use options::{Locale, PipelineOptions, TerminatingOptions};
pub use terminating::TerminatingBlocksFinder;
pub use title_match::TitleMatchClassifier;

use crate::error::Result;
use crate::model::TextDocument;

/// A single stage of the boilerplate-removal pipeline.
///
/// `process` returns `Ok(true)` when the document was modified. The flag
/// is a dirty signal for the driver, not an error indicator.
pub trait BoilerplateFilter: Send + Sync {
    /// Get the name of this filter.
    fn name(&self) -> &str;

    /// Process a document in place.
    fn process(&self, doc: &mut TextDocument) -> Result<bool>;
}

/// An ordered list of filters applied one after another.
pub struct FilterChain {
    filters: Vec<Box<dyn BoilerplateFilter>>,
}

impl FilterChain {
    /// Create a new empty chain.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Assemble the standard chain described by `options`.
    ///
    /// Stage order: title matching, terminating-phrase detection,
    /// before-title suppression, after-content suppression.
    pub fn from_options(options: &PipelineOptions) -> Result<Self> {
        options.validate()?;

        let mut chain = Self::new();
        if options.match_title {
            chain.add(TitleMatchClassifier::new());
        }
        chain.add(TerminatingBlocksFinder::new(options.terminating.clone()));
        if options.ignore_before_title {
            chain.add(IgnoreBlocksBeforeTitleFilter::new(options.title_min_words));
        }
        if options.ignore_after_content {
            chain.add(IgnoreBlocksAfterContentFilter::new(
                options.end_of_text_min_words,
            ));
        }
        Ok(chain)
    }

    /// Append a filter.
    pub fn add<F: BoilerplateFilter + 'static>(&mut self, filter: F) {
        self.filters.push(Box::new(filter));
    }

    /// Append a filter, builder style.
    pub fn with_filter<F: BoilerplateFilter + 'static>(mut self, filter: F) -> Self {
        self.add(filter);
        self
    }

    /// Get the number of filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Check if the chain has no filters.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Get the filter names in execution order.
    pub fn names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Run every filter once, in order.
    ///
    /// Returns `true` if any filter changed the document. The first error
    /// aborts the chain.
    pub fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        let mut changed = false;
        for filter in &self.filters {
            changed |= filter.process(doc)?;
        }
        Ok(changed)
    }

    /// Re-run the chain until no filter reports a change.
    ///
    /// Stops after `max_passes` passes even if the document is still
    /// changing; [`ChainReport::converged`] tells the two cases apart.
    pub fn process_until_stable(
        &self,
        doc: &mut TextDocument,
        max_passes: usize,
    ) -> Result<ChainReport> {
        let mut report = ChainReport::new(&self.names());

        while report.passes < max_passes {
            report.passes += 1;
            let mut changed = false;
            for (idx, filter) in self.filters.iter().enumerate() {
                if filter.process(doc)? {
                    report.changes[idx].passes_changed += 1;
                    changed = true;
                }
            }
            log::debug!("Filter chain pass {}: changed={}", report.passes, changed);
            if !changed {
                report.converged = true;
                break;
            }
        }

        Ok(report)
    }
}

impl Default for FilterChain {
    fn default() -> Self {
        Self::new()
    }
}

impl BoilerplateFilter for FilterChain {
    fn name(&self) -> &str {
        "FilterChain"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        FilterChain::process(self, doc)
    }
}

/// Per-filter outcome of a convergence run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChanges {
    /// Filter name
    pub filter: String,
    /// Number of passes in which the filter reported a change
    pub passes_changed: usize,
}

/// Outcome of [`FilterChain::process_until_stable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainReport {
    /// Number of passes run
    pub passes: usize,
    /// Whether the last pass left the document unchanged
    pub converged: bool,
    /// Change counts, in chain order
    pub changes: Vec<FilterChanges>,
}

impl ChainReport {
    fn new(names: &[&str]) -> Self {
        Self {
            passes: 0,
            converged: false,
            changes: names
                .iter()
                .map(|name| FilterChanges {
                    filter: name.to_string(),
                    passes_changed: 0,
                })
                .collect(),
        }
    }

    /// Check if any filter changed the document during the run.
    pub fn changed(&self) -> bool {
        self.changes.iter().any(|c| c.passes_changed > 0)
    }
}
