use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpenAiError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<reqwest::Error> for OpenAiError {
    fn from(e: reqwest::Error) -> Self {
        OpenAiError::Transport(e.to_string())
    }
}
