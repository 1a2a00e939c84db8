use thiserror::Error;

use atelier_core::error::CoreError;
use atelier_openai::error::OpenAiError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("iteration {0} not found")]
    NotFound(u32),

    #[error("iteration {0} is not the most recent record; only the last record may be discarded")]
    NotLast(u32),

    #[error(transparent)]
    Image(#[from] CoreError),

    #[error("model call failed: {0}")]
    Model(#[from] OpenAiError),
}
