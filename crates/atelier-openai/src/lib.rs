//! atelier-openai
//!
//! Model invocation and structured output handling: comparison context
//! selection, prompt assembly, the chat-completions client, and the
//! tolerant parse/extract path for the model's JSON critiques.

pub mod client;
pub mod content;
pub mod context;
pub mod error;
pub mod extract;
pub mod model;
pub mod parse;
pub mod prompts;
pub mod tokens;
