use async_trait::async_trait;

use crate::domain::{ChatError, Prompt};

/// One single-message request to a generative text service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    max_tokens: u32,
    prompt: String,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            max_tokens,
            prompt: prompt.into(),
        }
    }

    pub fn from_prompt(prompt: &Prompt) -> Self {
        Self::new(prompt.text(), prompt.max_tokens())
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    /// Content of the single user-role message.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

/// An interface for sending a prompt to an LLM and receiving its text response.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details. Each call to [`ChatClient::complete`] is exactly one attempt.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send `request` as a single user message and return the text of the
    /// first content element, unmodified.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ChatError>;

    /// Model identifier sent with every request.
    fn model_name(&self) -> &str;
}
