//! Integration tests for the assembled pipeline.

use unboil::filter::{BoilerplateFilter, FilterChain, PipelineOptions};
use unboil::model::{Label, TextBlock, TextDocument};
use unboil::{Error, Result, Unboil};

/// Filter that records how often it ran.
struct CountingFilter {
    calls: std::sync::atomic::AtomicUsize,
}

impl CountingFilter {
    fn new() -> Self {
        Self {
            calls: std::sync::atomic::AtomicUsize::new(0),
        }
    }
}

impl BoilerplateFilter for CountingFilter {
    fn name(&self) -> &str {
        "CountingFilter"
    }

    fn process(&self, _doc: &mut TextDocument) -> Result<bool> {
        self.calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        Ok(false)
    }
}

/// A French news page: navigation, headline, article, footer.
fn news_page() -> TextDocument {
    let body = "Le gouvernement a présenté mercredi un projet de loi qui doit \
                encadrer les loyers dans les grandes villes. Les associations \
                de locataires saluent une avancée tandis que les propriétaires \
                dénoncent une mesure inefficace et coûteuse pour le marché.";
    let mut doc = TextDocument::new().with_title("Encadrement des loyers : le projet de loi présenté | Le Quotidien");
    doc.add_block(TextBlock::with_text("Accueil Politique Économie Culture"));
    doc.add_block(TextBlock::with_text("Se connecter"));
    doc.add_block(TextBlock::with_text(
        "Encadrement des loyers : le projet de loi présenté",
    ));
    doc.add_block(TextBlock::with_text(body));
    doc.add_block(TextBlock::with_text(body));
    doc.add_block(TextBlock::with_text("Mentions légales"));
    doc.add_block(TextBlock::with_text("Accessibilité : non conforme"));
    doc.add_block(TextBlock::with_text("© Le Quotidien"));
    doc
}

#[test]
fn test_default_pipeline_on_news_page() {
    let mut doc = news_page();
    let changed = unboil::filter_document(&mut doc).unwrap();

    assert!(changed);
    assert!(doc.blocks[2].has_label(&Label::Title));
    assert!(doc.blocks[5].has_label(&Label::IndicatesEndOfText));
    assert!(doc.blocks[6].has_label(&Label::IndicatesEndOfText));

    let flags: Vec<bool> = doc.blocks.iter().map(|b| b.is_content).collect();
    assert_eq!(
        flags,
        vec![false, false, true, true, true, false, false, false]
    );
    assert!(doc.content_text().starts_with("Encadrement des loyers"));
}

#[test]
fn test_until_stable_on_news_page() {
    let mut doc = news_page();
    let report = Unboil::new().until_stable().process(&mut doc).unwrap();

    assert!(report.converged);
    assert_eq!(report.passes, 2);
    assert!(report.changed());
    for change in &report.changes {
        assert!(change.passes_changed <= 1, "{} changed twice", change.filter);
    }
}

#[test]
fn test_custom_chain_runs_in_order() {
    let chain = FilterChain::new()
        .with_filter(CountingFilter::new())
        .with_filter(unboil::TerminatingBlocksFinder::default());
    let mut doc = news_page();

    assert!(chain.process(&mut doc).unwrap());
    assert_eq!(chain.names(), vec!["CountingFilter", "TerminatingBlocksFinder"]);
}

#[test]
fn test_quiet_chain_converges_after_one_pass() {
    let chain = FilterChain::new().with_filter(CountingFilter::new());
    let mut doc = news_page();

    let report = chain.process_until_stable(&mut doc, 3).unwrap();
    assert_eq!(report.passes, 1);
    assert!(report.converged);
    assert!(!report.changed());
}

#[test]
fn test_pipeline_without_title_matching_drops_everything() {
    let options = PipelineOptions::new().with_title_matching(false);
    let chain = FilterChain::from_options(&options).unwrap();
    let mut doc = news_page();

    chain.process(&mut doc).unwrap();
    assert_eq!(doc.content_blocks().count(), 0);
}

#[test]
fn test_zero_passes_rejected() {
    let options = PipelineOptions::new().with_max_passes(0);
    assert!(matches!(
        FilterChain::from_options(&options),
        Err(Error::InvalidOptions(_))
    ));
}
