use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("duplicate sign identifier across systems: {0}")]
    DuplicateSign(String),

    #[error("unknown clinical sign: {0}")]
    UnknownSign(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
