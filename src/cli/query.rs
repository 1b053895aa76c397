use anyhow::Result;
use pantry_recipe::RankOptions;

use crate::Config;

/// Ranks the configured corpus against `ingredients` and prints the JSON result.
#[tracing::instrument(skip(config))]
pub fn match_ingredients(config: &Config, ingredients: &str, full_match_only: bool) -> Result<()> {
    let corpus = super::load_corpus(config)?;
    let results = corpus.rank(ingredients, RankOptions { full_match_only });

    println!("{}", serde_json::to_string_pretty(&results)?);

    Ok(())
}

/// Loads the corpus and reports how usable it is.
#[tracing::instrument(skip(config))]
pub fn check(config: &Config) -> Result<()> {
    let corpus = super::load_corpus(config)?;
    let unmatchable = corpus
        .recipes()
        .iter()
        .filter(|r| r.canonical_ingredients.is_empty())
        .count();

    println!("{}: {} recipes", config.corpus.path, corpus.len());
    if unmatchable > 0 {
        println!("{unmatchable} recipes have no ingredients and will never match");
    }

    Ok(())
}
