//! Free-text recipe suggestions from a language model.
//!
//! The model is reached through the [`RecipeSuggester`] capability so that callers
//! and tests can swap the HTTP client for anything else.

mod error;
mod openai;
pub mod prompt;
mod service;

pub use error::*;
pub use openai::*;
pub use service::*;
