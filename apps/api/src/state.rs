use std::sync::Arc;

use crate::analysis::similarity::SemanticScorer;
use crate::analysis::skills::SkillExtractor;
use crate::analysis::suggest::Advisor;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything here is built once at startup and shared read-only; requests
/// never mutate it.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub skills: Arc<SkillExtractor>,
    pub advisor: Arc<Advisor>,
    /// Pluggable semantic scorer. Default: `HashedNgramScorer`. A model-backed
    /// backend can be swapped in here without touching handlers.
    pub scorer: Arc<dyn SemanticScorer>,
}
