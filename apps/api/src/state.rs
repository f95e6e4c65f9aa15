use std::sync::Arc;

use crate::analysis::extract::TextExtractor;
use crate::analysis::scorer::SkillTaxonomy;
use crate::config::Config;
use crate::resumes::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: ResumeStore,
    /// Pluggable PDF text extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
    pub taxonomy: Arc<SkillTaxonomy>,
    pub config: Config,
}
