use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::{Result, SuggestError};

/// Turns a raw ingredient list into a free-text block of recipe ideas.
#[async_trait]
pub trait RecipeSuggester: Send + Sync {
    async fn suggest(&self, ingredients: &str) -> Result<String>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub text: String,
}

#[derive(Clone)]
pub struct SuggestionService {
    suggester: Arc<dyn RecipeSuggester>,
}

impl SuggestionService {
    pub fn new(suggester: impl RecipeSuggester + 'static) -> Self {
        Self {
            suggester: Arc::new(suggester),
        }
    }

    /// Rejects blank input, otherwise forwards the raw text unchanged.
    pub async fn generate(&self, ingredients: &str) -> Result<Suggestion> {
        if ingredients.trim().is_empty() {
            return Err(SuggestError::EmptyInput);
        }

        match self.suggester.suggest(ingredients).await {
            Ok(text) => Ok(Suggestion { text }),
            Err(err) => {
                tracing::error!(err = %err, "recipe suggestion failed");
                Err(err)
            }
        }
    }
}
