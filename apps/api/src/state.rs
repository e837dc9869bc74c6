use std::sync::Arc;

use crate::analysis::analyzer::ResumeAnalyzer;
use crate::ats::matcher::KeywordMatcher;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable resume analyzer. Default: MockAnalyzer.
    pub analyzer: Arc<dyn ResumeAnalyzer>,
    /// Keyword matcher over the reference skill list.
    pub matcher: Arc<KeywordMatcher>,
}

impl AppState {
    pub fn new(config: Config, analyzer: Arc<dyn ResumeAnalyzer>) -> Self {
        Self {
            config,
            analyzer,
            matcher: Arc::new(KeywordMatcher::default()),
        }
    }
}
