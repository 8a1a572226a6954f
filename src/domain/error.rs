use thiserror::Error;

use super::TemplateKind;

/// Failure of a single round trip to the generation service.
///
/// Kept as diagnostic detail behind [`DomainError::GenerationFailed`]; callers
/// only ever see the per-operation message unless they walk `source()`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("authentication rejected ({status}): {body}")]
    Authentication { status: u16, body: String },

    #[error("rate limited ({status}): {body}")]
    RateLimited { status: u16, body: String },

    #[error("service returned {status}: {body}")]
    Service { status: u16, body: String },

    #[error("failed to parse response: {0}")]
    MalformedResponse(String),

    #[error("response contained no text content")]
    EmptyResponse,
}

impl ChatError {
    /// Classify a non-success HTTP status.
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        match status {
            401 | 403 => Self::Authentication { status, body },
            429 => Self::RateLimited { status, body },
            _ => Self::Service { status, body },
        }
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{}", .kind.failure_message())]
    GenerationFailed {
        kind: TemplateKind,
        #[source]
        cause: ChatError,
    },

    #[error("A request for {0} is already pending")]
    CallPending(TemplateKind),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DomainError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn generation_failed(kind: TemplateKind, cause: ChatError) -> Self {
        Self::GenerationFailed { kind, cause }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    pub fn is_generation_failure(&self) -> bool {
        matches!(self, Self::GenerationFailed { .. })
    }

    pub fn is_call_pending(&self) -> bool {
        matches!(self, Self::CallPending(_))
    }

    /// The underlying service failure, if this error came from a round trip.
    pub fn cause(&self) -> Option<&ChatError> {
        match self {
            Self::GenerationFailed { cause, .. } => Some(cause),
            _ => None,
        }
    }
}
