use std::path::Path;

use serde_json::Value;

use crate::{
    MatchResult, PrepareOptions, RankOptions, Recipe, RecipeError, RecipeResult, normalize,
    prepare_recipe, rank,
};

/// The prepared, read-only recipe collection.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    recipes: Vec<Recipe>,
}

impl Corpus {
    /// Prepares every record. A malformed record degrades instead of failing the corpus.
    pub fn prepare(records: &[Value], options: &PrepareOptions) -> Self {
        let recipes = records
            .iter()
            .enumerate()
            .map(|(index, record)| prepare_recipe(index, record, options))
            .collect();

        Self { recipes }
    }

    /// Reads and prepares the corpus file at `path`.
    pub fn load(path: impl AsRef<Path>, options: &PrepareOptions) -> RecipeResult<Self> {
        let path = path.as_ref();
        let records = load_records(path)?;
        let corpus = Self::prepare(&records, options);

        tracing::info!(
            path = %path.display(),
            recipes = corpus.len(),
            "recipe corpus loaded"
        );

        Ok(corpus)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Normalizes `ingredients` and ranks the corpus against it.
    pub fn rank(&self, ingredients: &str, options: RankOptions) -> Vec<MatchResult> {
        rank(&self.recipes, &normalize(ingredients), options)
    }
}

/// Reads the raw recipe records from a JSON file.
///
/// Fails only when the file cannot be read or is not JSON at all; an unexpected
/// document shape yields an empty record list.
pub fn load_records(path: impl AsRef<Path>) -> RecipeResult<Vec<Value>> {
    let path = path.as_ref();

    let content = std::fs::read_to_string(path).map_err(|source| RecipeError::Io {
        path: path.to_owned(),
        source,
    })?;

    let document: Value = serde_json::from_str(&content).map_err(|source| RecipeError::Parse {
        path: path.to_owned(),
        source,
    })?;

    Ok(records_from_document(document))
}

/// Accepts either a bare array of records or an object with a `recipes` array.
pub fn records_from_document(document: Value) -> Vec<Value> {
    match document {
        Value::Array(records) => records,
        Value::Object(mut fields) => match fields.remove("recipes") {
            Some(Value::Array(records)) => records,
            _ => {
                tracing::error!(
                    "recipe corpus has no 'recipes' array, expected an array or {{ recipes: [...] }}"
                );
                Vec::new()
            }
        },
        _ => {
            tracing::error!(
                "recipe corpus has unexpected format, expected an array or {{ recipes: [...] }}"
            );
            Vec::new()
        }
    }
}
