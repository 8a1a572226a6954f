use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error, info, warn};

use crate::application::{ChatClient, CompletionRequest};
use crate::domain::{DomainError, GenerationRequest, Prompt, StructuredData, TemplateKind};

/// Turns structured team-building parameters into prompts and runs each one
/// as a single round trip against the injected [`ChatClient`].
///
/// Calls are independent: nothing is cached or retained between them. Any
/// service failure is logged and collapsed into
/// [`DomainError::GenerationFailed`], whose message names only the operation.
pub struct GenerationClient {
    chat_client: Arc<dyn ChatClient>,
    single_flight: bool,
    pending: AtomicBool,
}

/// Clears the pending flag when a single-flight call ends, however it ends.
struct PendingGuard<'a>(&'a AtomicBool);

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl GenerationClient {
    pub fn new(chat_client: Arc<dyn ChatClient>) -> Self {
        Self {
            chat_client,
            single_flight: false,
            pending: AtomicBool::new(false),
        }
    }

    /// Reject a call with [`DomainError::CallPending`] while another call on
    /// this client is still outstanding.
    pub fn with_single_flight(mut self) -> Self {
        self.single_flight = true;
        self
    }

    pub fn is_single_flight(&self) -> bool {
        self.single_flight
    }

    pub fn model_name(&self) -> &str {
        self.chat_client.model_name()
    }

    pub async fn generate_team_building_ideas(
        &self,
        team_size: u32,
        duration: impl Into<String>,
        budget_per_person: u32,
        preferences: Vec<String>,
    ) -> Result<String, DomainError> {
        let request = GenerationRequest::team_building_ideas(
            team_size,
            duration,
            budget_per_person,
            preferences,
        );
        self.generate(&request).await
    }

    pub async fn create_custom_activity(
        &self,
        description: impl Into<String>,
        constraints: StructuredData,
    ) -> Result<String, DomainError> {
        let request = GenerationRequest::custom_activity(description, constraints);
        self.generate(&request).await
    }

    pub async fn analyze_team_dynamics(
        &self,
        team_info: StructuredData,
    ) -> Result<String, DomainError> {
        let request = GenerationRequest::team_dynamics_analysis(team_info);
        self.generate(&request).await
    }

    /// Render `request`, send it once, and return the response text as-is.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<String, DomainError> {
        let kind = request.kind();
        let prompt = Prompt::render(request)?;
        let _guard = self.begin(kind)?;

        info!(
            "{} (model={}, max_tokens={})",
            capitalize(kind.activity()),
            self.chat_client.model_name(),
            prompt.max_tokens()
        );
        debug!("Rendered prompt:\n{}", prompt);

        let start_time = Instant::now();
        let completion = CompletionRequest::from_prompt(&prompt);

        match self.chat_client.complete(&completion).await {
            Ok(text) => {
                debug!(
                    "Received {} bytes for {} in {:?}",
                    text.len(),
                    kind,
                    start_time.elapsed()
                );
                Ok(text)
            }
            Err(cause) => {
                error!("Error {}: {}", kind.activity(), cause);
                Err(DomainError::generation_failed(kind, cause))
            }
        }
    }

    fn begin(&self, kind: TemplateKind) -> Result<Option<PendingGuard<'_>>, DomainError> {
        if !self.single_flight {
            return Ok(None);
        }

        if self
            .pending
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("Rejected {} request: another call is still pending", kind);
            return Err(DomainError::CallPending(kind));
        }

        Ok(Some(PendingGuard(&self.pending)))
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
