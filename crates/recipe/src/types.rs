use std::fmt;

use serde::Serialize;
use serde_json::Number;

/// Stable recipe identifier.
///
/// Source records carry either a numeric or a string `id`; records without one
/// get their position in the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RecipeId {
    Number(Number),
    Text(String),
}

impl From<usize> for RecipeId {
    fn from(index: usize) -> Self {
        RecipeId::Number(Number::from(index))
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeId::Number(n) => write!(f, "{n}"),
            RecipeId::Text(s) => f.write_str(s),
        }
    }
}

/// A prepared corpus entry. Built once by [`crate::prepare_recipe`], never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub image: String,
    pub time_minutes: Option<Number>,
    pub tags: Vec<String>,
    /// Display names as found in the source, blanks included.
    pub ingredients: Vec<Option<String>>,
    /// Lowercased, trimmed, non-empty ingredient names in source order. Duplicates kept.
    pub canonical_ingredients: Vec<String>,
    pub instructions_text: String,
}

/// One scored recipe for one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub id: RecipeId,
    pub name: String,
    pub image: String,
    pub time: Option<Number>,
    pub tags: Vec<String>,
    pub instructions: String,
    pub score: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl MatchResult {
    pub fn is_full_match(&self) -> bool {
        self.missing.is_empty() && !self.matched.is_empty()
    }
}
