use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The request was rejected before reaching the router.
    #[error(transparent)]
    Params(#[from] kairo_params::Error),
    /// The router answered with an error status. Displays as the router's
    /// machine-readable code.
    #[error("{code}")]
    Engine { code: String, message: Option<String> },
    #[error("router result has no 'code' entry")]
    MissingCode,
    #[error(transparent)]
    Render(#[from] kairo_json::Error),
    #[error("failed to open routing engine: {0}")]
    Open(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, Error>;
