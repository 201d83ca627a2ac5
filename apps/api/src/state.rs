use std::sync::Arc;

use crate::config::Config;
use crate::document::PdfCompiler;
use crate::enhancement::EnhancementService;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    /// Pluggable enhancer. Simulated unless GROQ_API_KEY is set.
    pub enhancer: Arc<dyn EnhancementService>,
    pub compiler: PdfCompiler,
    pub config: Config,
}
