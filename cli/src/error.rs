use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("{0}")]
    Input(#[from] kairo_dynamic::Error),

    #[error("{0}")]
    Params(#[from] kairo_params::Error),

    #[error("render error: {0}")]
    Render(#[from] kairo_json::Error),

    #[error("{0}")]
    Engine(#[from] kairo_engine::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub(crate) type Result<T> = std::result::Result<T, Error>;
