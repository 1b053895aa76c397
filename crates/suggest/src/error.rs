#[derive(Debug, thiserror::Error)]
pub enum SuggestError {
    #[error("no ingredients given")]
    EmptyInput,

    #[error("recipe suggestions are not configured")]
    NotConfigured,

    #[error("upstream returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("{0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, SuggestError>;
