use std::sync::Arc;

use tracing::debug;

use crate::agents::prompts;
use crate::agents::{CompletionRequest, CompletionService, ModelProfile, PipelineError};

/// Single-stage agents: one prompt, one call to the fast model
#[derive(Clone)]
pub struct Tutor {
    service: Arc<dyn CompletionService>,
    profile: ModelProfile,
}

impl Tutor {
    pub fn new(service: Arc<dyn CompletionService>, profile: ModelProfile) -> Self {
        Self { service, profile }
    }

    pub async fn explain_subject(&self, subject: &str) -> Result<String, PipelineError> {
        self.ask(prompts::subject_explanation(subject)).await
    }

    pub async fn give_feedback(&self, input: &str) -> Result<String, PipelineError> {
        self.ask(prompts::student_feedback(input)).await
    }

    pub async fn motivate(&self, mood: &str) -> Result<String, PipelineError> {
        self.ask(prompts::motivation(mood)).await
    }

    async fn ask(&self, prompt: String) -> Result<String, PipelineError> {
        debug!("Tutor prompt: {}", prompt);
        let text = self
            .service
            .complete(CompletionRequest::new(prompt, self.profile.clone()))
            .await?;
        Ok(text)
    }
}
