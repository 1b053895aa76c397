use crate::{MatchResult, Query, Recipe, scorer::score};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankOptions {
    /// Keep only recipes whose every ingredient is in the query.
    pub full_match_only: bool,
}

/// Scores every recipe and returns the matches, best first.
///
/// Results scoring `0` are dropped. Equal scores keep their corpus order.
pub fn rank<'a>(
    recipes: impl IntoIterator<Item = &'a Recipe>,
    query: &Query,
    options: RankOptions,
) -> Vec<MatchResult> {
    let mut results: Vec<MatchResult> = recipes
        .into_iter()
        .map(|recipe| score(recipe, query))
        .filter(|result| result.score > 0.0)
        .filter(|result| !options.full_match_only || result.is_full_match())
        .collect();

    // stable: ties stay in corpus order
    results.sort_by(|a, b| b.score.total_cmp(&a.score));

    results
}
