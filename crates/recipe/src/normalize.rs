use std::collections::HashSet;

/// Canonical form of an ingredient name: lowercased and trimmed.
///
/// Returns `None` when nothing is left, so blank entries never take part in matching.
pub fn canonical_ingredient(name: &str) -> Option<String> {
    let canonical = name.to_lowercase().trim().to_owned();
    (!canonical.is_empty()).then_some(canonical)
}

/// A normalized ingredient query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub raw_text: String,
    pub tokens: HashSet<String>,
}

impl Query {
    pub fn contains(&self, ingredient: &str) -> bool {
        self.tokens.contains(ingredient)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Splits a comma separated ingredient list into a token set.
pub fn normalize(raw_text: &str) -> Query {
    let tokens = raw_text.split(',').filter_map(canonical_ingredient).collect();

    Query {
        raw_text: raw_text.to_owned(),
        tokens,
    }
}
