use std::sync::Arc;

use crate::jd::JobFetcher;
use crate::llm_client::CompletionClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data; every request runs its own pipeline.
#[derive(Clone)]
pub struct AppState {
    /// Job page retrieval. Default: `HttpJobFetcher`.
    pub fetcher: Arc<dyn JobFetcher>,
    /// Chat-completion backend shared by the aligner and the scorer. Default: `OpenAiClient`.
    pub llm: Arc<dyn CompletionClient>,
}
