use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::{ChatClient, CompletionRequest};
use crate::domain::ChatError;

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_MODEL: &str = "claude-3-sonnet-20240229";
const MESSAGES_PATH: &str = "/v1/messages";
const ANTHROPIC_API_VERSION: &str = "2023-06-01";

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<ApiMessage<'a>>,
}

#[derive(serde::Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    content: Vec<ContentBlock>,
}

/// Non-text blocks carry no `text` field.
#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

/// Connection settings for [`AnthropicClient`], read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnthropicConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl AnthropicConfig {
    /// Read configuration from the environment:
    ///
    /// | Variable             | Default                     | Purpose              |
    /// |----------------------|-----------------------------|----------------------|
    /// | `ANTHROPIC_API_KEY`  | `""` (empty)                | Credential           |
    /// | `ANTHROPIC_BASE_URL` | `https://api.anthropic.com` | Endpoint base        |
    /// | `ANTHROPIC_MODEL`    | `claude-3-sonnet-20240229`  | Model identifier     |
    ///
    /// A missing key is not an error here; the service rejects the call.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: std::env::var("ANTHROPIC_API_KEY").unwrap_or_default(),
            model: std::env::var("ANTHROPIC_MODEL").unwrap_or(defaults.model),
            base_url: std::env::var("ANTHROPIC_BASE_URL").unwrap_or(defaults.base_url),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

/// HTTP client for the Anthropic Messages API (and compatible endpoints).
///
/// Every [`ChatClient::complete`] call is one `POST /v1/messages` with a single
/// user message. There is no retry and no connectivity probe; the timeout is
/// whatever reqwest uses by default.
pub struct AnthropicClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    /// Full endpoint URL (base + MESSAGES_PATH).
    url: String,
}

impl AnthropicClient {
    pub fn new(config: AnthropicConfig) -> Self {
        let url = format!("{}{}", config.base_url.trim_end_matches('/'), MESSAGES_PATH);
        Self {
            client: reqwest::Client::builder().build().unwrap_or_default(),
            api_key: config.api_key,
            model: config.model,
            url,
        }
    }

    pub fn from_env() -> Self {
        Self::new(AnthropicConfig::from_env())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ChatClient for AnthropicClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ChatError> {
        let body = ApiRequest {
            model: &self.model,
            max_tokens: request.max_tokens(),
            messages: vec![ApiMessage {
                role: "user",
                content: request.prompt(),
            }],
        };

        debug!("AnthropicClient: POST {} (model={})", self.url, self.model);

        let response = self
            .client
            .post(&self.url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_API_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatError::network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("AnthropicClient: API returned {status}: {body}");
            return Err(ChatError::from_status(status.as_u16(), body));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| ChatError::malformed(e.to_string()))?;

        api_response
            .content
            .into_iter()
            .next()
            .and_then(|block| block.text)
            .ok_or(ChatError::EmptyResponse)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
