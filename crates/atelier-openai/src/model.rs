//! The seam between the submit pipeline and the remote model.
//!
//! Methods return boxed futures for dyn compatibility, so the session can
//! hold any model implementation — the real client or a test stub.

use std::future::Future;
use std::pin::Pin;

use atelier_core::models::token_count::TokenCount;

use crate::client::ChatClient;
use crate::content::ContentBlock;
use crate::error::OpenAiError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The raw reply from one model call.
#[derive(Debug, Clone)]
pub struct ModelReply {
    pub text: String,
    pub usage: Option<TokenCount>,
}

/// A remote model that can critique a portrait submission.
pub trait CritiqueModel: Send + Sync {
    fn evaluate<'a>(
        &'a self,
        system_prompt: &'a str,
        user_content: &'a [ContentBlock],
    ) -> BoxFuture<'a, Result<ModelReply, OpenAiError>>;
}

impl CritiqueModel for ChatClient {
    fn evaluate<'a>(
        &'a self,
        system_prompt: &'a str,
        user_content: &'a [ContentBlock],
    ) -> BoxFuture<'a, Result<ModelReply, OpenAiError>> {
        Box::pin(async move {
            let (text, usage) = self.request_evaluation(system_prompt, user_content).await?;
            Ok(ModelReply { text, usage })
        })
    }
}
