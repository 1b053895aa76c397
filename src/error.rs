use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pantry_recipe::RecipeError;
use pantry_suggest::SuggestError;
use serde_json::json;
use thiserror::Error;

pub const EMPTY_INGREDIENTS_MESSAGE: &str = "Skicka med ingredienser i request-body.";
pub const SUGGESTION_FAILED_MESSAGE: &str = "Kunde inte generera AI-recept just nu.";
pub const SUGGESTION_DISABLED_MESSAGE: &str = "AI-recept är inte aktiverade på den här servern.";
pub const CORPUS_FAILED_MESSAGE: &str = "Kunde inte läsa in receptsamlingen.";
pub const INTERNAL_ERROR_MESSAGE: &str = "Ett oväntat fel inträffade. Försök igen senare.";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Recipe corpus error: {0}")]
    Corpus(#[from] RecipeError),

    #[error("Suggestion error: {0}")]
    Suggestion(#[from] SuggestError),

    #[error("Internal server error")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, message) = match self {
            AppError::Suggestion(SuggestError::EmptyInput) => {
                (StatusCode::BAD_REQUEST, EMPTY_INGREDIENTS_MESSAGE)
            }
            AppError::Suggestion(SuggestError::NotConfigured) => {
                (StatusCode::SERVICE_UNAVAILABLE, SUGGESTION_DISABLED_MESSAGE)
            }
            AppError::Suggestion(e) => {
                tracing::error!("Suggestion upstream error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, SUGGESTION_FAILED_MESSAGE)
            }
            AppError::Corpus(e) => {
                tracing::error!("Recipe corpus error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, CORPUS_FAILED_MESSAGE)
            }
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
        };

        (status_code, Json(json!({ "error": message }))).into_response()
    }
}
