use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unsupported image type: {0}")]
    UnsupportedImageType(String),

    #[error("invalid data URI: {0}")]
    InvalidDataUri(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
