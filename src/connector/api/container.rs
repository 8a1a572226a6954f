use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::{ChatClient, GenerationClient};
use crate::connector::{AnthropicClient, AnthropicConfig, MockChatClient};

#[derive(Debug, Clone, Default)]
pub struct ContainerConfig {
    /// Answer every call locally by echoing the rendered prompt.
    pub mock: bool,
    /// Overrides `ANTHROPIC_MODEL`.
    pub model: Option<String>,
    /// Overrides `ANTHROPIC_BASE_URL`.
    pub base_url: Option<String>,
}

/// Process-wide wiring: the chat client is built once and shared by every
/// controller for the lifetime of the process.
pub struct Container {
    chat_client: Arc<dyn ChatClient>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        let chat_client: Arc<dyn ChatClient> = if config.mock {
            debug!("Using mock chat client");
            Arc::new(MockChatClient::echo())
        } else {
            let mut anthropic = AnthropicConfig::from_env();
            if let Some(model) = config.model.as_deref() {
                anthropic = anthropic.with_model(model);
            }
            if let Some(base_url) = config.base_url.as_deref() {
                anthropic = anthropic.with_base_url(base_url);
            }
            if !anthropic.has_api_key() {
                warn!("ANTHROPIC_API_KEY is not set; the service will likely reject requests");
            }
            debug!(
                "Using Anthropic client at {} (model={})",
                anthropic.base_url, anthropic.model
            );
            Arc::new(AnthropicClient::new(anthropic))
        };

        Self {
            chat_client,
            config,
        }
    }

    /// Wire an explicit chat client, bypassing environment configuration.
    pub fn with_chat_client(config: ContainerConfig, chat_client: Arc<dyn ChatClient>) -> Self {
        Self {
            chat_client,
            config,
        }
    }

    pub fn generation_client(&self) -> GenerationClient {
        GenerationClient::new(self.chat_client.clone())
    }

    pub fn model_name(&self) -> &str {
        self.chat_client.model_name()
    }

    pub fn is_mock(&self) -> bool {
        self.config.mock
    }
}
