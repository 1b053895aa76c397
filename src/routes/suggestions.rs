use axum::{Json, extract::State};
use pantry_suggest::Suggestion;
use serde::Deserialize;

use crate::{error::AppError, routes::AppState};

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct SuggestInput {
    pub ingredients: Option<String>,
}

/// POST /api/ai-recipes - free-text recipe ideas from the language model
pub async fn action(
    State(app): State<AppState>,
    input: Option<Json<SuggestInput>>,
) -> Result<Json<Suggestion>, AppError> {
    let input = input.map(|Json(input)| input).unwrap_or_default();
    let ingredients = input.ingredients.unwrap_or_default();
    let suggestion = app.suggestions.generate(&ingredients).await?;

    Ok(Json(suggestion))
}
