use axum::{Json, extract::State};
use pantry_recipe::{MatchResult, RankOptions};
use serde::Deserialize;

use crate::routes::AppState;

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchInput {
    pub ingredients: Option<String>,
    pub full_match_only: bool,
}

/// POST /api/recipes - rank the corpus against a comma separated ingredient list
pub async fn action(
    State(app): State<AppState>,
    input: Option<Json<MatchInput>>,
) -> Json<Vec<MatchResult>> {
    let input = input.map(|Json(input)| input).unwrap_or_default();
    let corpus = app.corpus.snapshot();
    let ingredients = input.ingredients.unwrap_or_default();

    let results = corpus.rank(
        &ingredients,
        RankOptions {
            full_match_only: input.full_match_only,
        },
    );

    tracing::debug!(
        ingredients = %ingredients,
        full_match_only = input.full_match_only,
        results = results.len(),
        "matched recipes"
    );

    Json(results)
}
