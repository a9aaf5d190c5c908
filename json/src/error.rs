use thiserror::Error;

/// Errors raised while turning a result tree into a byte buffer.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to serialize result tree: {0}")]
    Serialize(#[from] serde_json::Error),
}
