use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::{ChatClient, CompletionRequest};
use crate::domain::ChatError;

enum Behavior {
    Reply(String),
    Fail(ChatError),
    Echo,
}

/// A scripted [`ChatClient`] that never touches the network.
///
/// Records every request it receives so tests can inspect prompts and count
/// attempts. The CLI uses [`MockChatClient::echo`] for offline runs.
pub struct MockChatClient {
    behavior: Behavior,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockChatClient {
    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Always succeed with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_behavior(Behavior::Reply(text.into()))
    }

    /// Always fail with `error`.
    pub fn failing(error: ChatError) -> Self {
        Self::with_behavior(Behavior::Fail(error))
    }

    /// Return each prompt back as the response.
    pub fn echo() -> Self {
        Self::with_behavior(Behavior::Echo)
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or_default()
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.requests.lock().ok().and_then(|r| r.last().cloned())
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::echo()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ChatError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        match &self.behavior {
            Behavior::Reply(text) => Ok(text.clone()),
            Behavior::Fail(error) => Err(error.clone()),
            Behavior::Echo => Ok(request.prompt().to_string()),
        }
    }

    fn model_name(&self) -> &str {
        "mock-chat"
    }
}
