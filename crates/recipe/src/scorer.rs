use crate::{MatchResult, Query, Recipe};

/// Scores one recipe by the share of its canonical ingredients present in the query.
///
/// Every occurrence of an ingredient counts, so a recipe listing "salt" twice needs
/// both to be matched for a full score. A recipe without canonical ingredients
/// scores exactly `0`.
pub fn score(recipe: &Recipe, query: &Query) -> MatchResult {
    let (matched, missing): (Vec<String>, Vec<String>) = recipe
        .canonical_ingredients
        .iter()
        .cloned()
        .partition(|ingredient| query.contains(ingredient));

    let total = recipe.canonical_ingredients.len();
    let score = if total > 0 {
        matched.len() as f64 / total as f64
    } else {
        0.0
    };

    MatchResult {
        id: recipe.id.clone(),
        name: recipe.title.clone(),
        image: recipe.image.clone(),
        time: recipe.time_minutes.clone(),
        tags: recipe.tags.clone(),
        instructions: recipe.instructions_text.clone(),
        score,
        matched,
        missing,
    }
}
