//! Chat-completions client.
//!
//! One POST per evaluation: bearer-token auth, a fixed model identifier,
//! and a low temperature for determinism. No retry and no client-side
//! timeout beyond the transport default — a failure surfaces immediately
//! so the caller can roll back its placeholder record.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use atelier_core::models::token_count::TokenCount;

use crate::content::ContentBlock;
use crate::error::OpenAiError;

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const MODEL_ID: &str = "gpt-4o";
pub const TEMPERATURE: f32 = 0.1;
pub const MAX_TOKENS: u32 = 6000;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<RequestMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct RequestMessage<'a> {
    role: &'a str,
    content: MessageContent<'a>,
}

/// The system message is plain text; the user message is a block sequence.
#[derive(Serialize)]
#[serde(untagged)]
enum MessageContent<'a> {
    Text(&'a str),
    Blocks(&'a [ContentBlock]),
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[derive(Deserialize)]
struct Usage {
    prompt_tokens: u64,
    completion_tokens: u64,
}

/// Client for the remote critique model.
pub struct ChatClient {
    http: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl ChatClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_api_url(api_key, DEFAULT_API_URL)
    }

    /// Point the client at a non-default endpoint (used by tests and
    /// OpenAI-compatible gateways).
    pub fn with_api_url(api_key: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            api_url: api_url.into(),
        }
    }

    /// Send one evaluation request and return the raw reply text plus
    /// token usage.
    pub async fn request_evaluation(
        &self,
        system_prompt: &str,
        user_content: &[ContentBlock],
    ) -> Result<(String, Option<TokenCount>), OpenAiError> {
        let request = ChatRequest {
            model: MODEL_ID,
            messages: vec![
                RequestMessage {
                    role: "system",
                    content: MessageContent::Text(system_prompt),
                },
                RequestMessage {
                    role: "user",
                    content: MessageContent::Blocks(user_content),
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        info!(model = MODEL_ID, blocks = user_content.len(), "requesting evaluation");

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "chat completions call failed");
            return Err(OpenAiError::Api {
                status: status.as_u16(),
                body: truncate(body),
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| OpenAiError::ResponseParse(e.to_string()))?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| OpenAiError::ResponseParse("no choices in response".to_string()))?;

        let usage = parsed.usage.map(|u| TokenCount {
            input: u.prompt_tokens,
            output: u.completion_tokens,
        });

        info!(
            total_tokens = usage.map(|u| u.total()).unwrap_or(0),
            "evaluation received"
        );

        Ok((choice.message.content, usage))
    }
}

fn truncate(body: String) -> String {
    const LIMIT: usize = 1024;
    if body.len() > LIMIT {
        let mut end = LIMIT;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body
    }
}
