pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
pub mod routes;

use std::sync::Arc;

pub use config::Config;
pub use routes::AppState;

use pantry_recipe::CorpusStore;
use pantry_suggest::{DisabledSuggester, OpenAiConfig, OpenAiSuggester, SuggestionService};

/// Picks the suggestion backend for `config`: the OpenAI client when an API key is
/// set, otherwise a stand-in that reports the feature as unavailable.
pub fn suggestion_service(config: &Config) -> anyhow::Result<SuggestionService> {
    if !config.ai.is_enabled() {
        tracing::warn!("no AI api key configured, /api/ai-recipes is disabled");
        return Ok(SuggestionService::new(DisabledSuggester));
    }

    let suggester = OpenAiSuggester::new(OpenAiConfig {
        api_key: config.ai.api_key.to_owned(),
        base_url: config.ai.base_url.to_owned(),
        model: config.ai.model.to_owned(),
        timeout: config.ai.timeout(),
    })?;

    Ok(SuggestionService::new(suggester))
}

/// Create app router for testing
///
/// Builds the router around an already prepared corpus and suggestion backend,
/// without binding a listener.
pub fn create_app(
    config: Config,
    corpus: Arc<CorpusStore>,
    suggestions: SuggestionService,
) -> axum::Router {
    routes::router(AppState {
        config,
        corpus,
        suggestions,
    })
}
