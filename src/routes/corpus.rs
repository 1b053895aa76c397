use axum::{Json, extract::State};
use pantry_recipe::Corpus;
use serde_json::{Value, json};

use crate::{error::AppError, routes::AppState};

/// POST /api/corpus/reload - re-read the corpus file and swap it in
///
/// Requests already running keep the corpus they started with. A failed load
/// leaves the current corpus in place.
pub async fn reload(State(app): State<AppState>) -> Result<Json<Value>, AppError> {
    let path = app.config.corpus.path.to_owned();
    let options = app.prepare_options();

    let corpus = tokio::task::spawn_blocking(move || Corpus::load(path, &options))
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))??;

    let recipes = corpus.len();
    app.corpus.replace(corpus);

    tracing::info!(recipes, "recipe corpus reloaded");

    Ok(Json(json!({ "recipes": recipes })))
}
