use std::path::PathBuf;

use thiserror::Error;

pub type RecipeResult<T> = Result<T, RecipeError>;

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("failed to read recipe corpus {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("recipe corpus {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
