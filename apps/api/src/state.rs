use std::sync::Arc;

use crate::config::Config;
use crate::matching::engine::MatchEngine;
use crate::repository::{InternshipRepository, MatchRepository, StudentRepository};
use crate::resume::fields::ResumeFieldExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub students: Arc<dyn StudentRepository>,
    pub internships: Arc<dyn InternshipRepository>,
    pub matches: Arc<dyn MatchRepository>,
    pub engine: MatchEngine,
    /// Analyzer may be absent; extraction then yields empty profiles.
    pub extractor: Arc<ResumeFieldExtractor>,
}
