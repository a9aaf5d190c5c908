use thiserror::Error;

/// Errors raised while reading host values from text.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),
}
