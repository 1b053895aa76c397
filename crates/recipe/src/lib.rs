//! Ingredient matching engine.
//!
//! A [`Corpus`] is built once from raw recipe records and then queried many times:
//! each query is normalized into a token set, every recipe is scored by ingredient
//! coverage, and the non-zero results are returned best match first.

pub mod corpus;
pub mod error;
pub mod normalize;
pub mod prepare;
pub mod ranker;
pub mod scorer;
pub mod store;
pub mod types;

pub use corpus::*;
pub use error::{RecipeError, RecipeResult};
pub use normalize::*;
pub use prepare::*;
pub use ranker::*;
pub use scorer::*;
pub use store::*;
pub use types::*;
