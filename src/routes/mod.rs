use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use pantry_recipe::{CorpusStore, PrepareOptions};
use pantry_suggest::SuggestionService;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

mod corpus;
mod health;
mod recipes;
mod suggestions;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub corpus: Arc<CorpusStore>,
    pub suggestions: SuggestionService,
}

impl AppState {
    pub fn prepare_options(&self) -> PrepareOptions {
        PrepareOptions {
            step_label: self.config.corpus.step_label.to_owned(),
        }
    }
}

pub fn router(app_state: AppState) -> Router {
    let mut router = Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/api/recipes", post(recipes::action))
        .route("/api/ai-recipes", post(suggestions::action));

    if app_state.config.corpus.reload_enabled {
        router = router.route("/api/corpus/reload", post(corpus::reload));
    }

    if let Some(dir) = &app_state.config.server.static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
