pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{ChatClient, CompletionRequest, GenerationClient};

pub use cli::Commands;

pub use connector::{
    AnthropicClient, AnthropicConfig, Container, ContainerConfig, MockChatClient, Router,
};

pub use domain::{
    ChatError, DomainError, GenerationRequest, Prompt, StructuredData, TemplateKind,
};
