use std::sync::Arc;

use crate::analysis::rubric::Rubric;
use crate::llm_client::ChatBackend;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// LLM transport handle, constructed once at startup. Absent when no
    /// GROQ_API_KEY is configured — the analyze handler then reports a
    /// configuration error instead of degrading to fallback.
    pub llm: Option<Arc<dyn ChatBackend>>,
    /// Built-in rubric, validated at startup. Read-only; shared across
    /// concurrent requests without synchronization.
    pub rubric: Arc<Rubric>,
}
