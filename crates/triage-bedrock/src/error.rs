use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssessError {
    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("unsupported media type: {0}")]
    UnsupportedMedia(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
