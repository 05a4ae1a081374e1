pub mod groq;
pub mod planner;
pub mod prompts;
pub mod tutor;

#[cfg(test)]
pub(crate) mod mock;

use async_trait::async_trait;

pub use planner::{PlannerPipeline, ValidationVerdict};
pub use tutor::Tutor;

/// Fast, cheap model used for classification and the single-stage agents
pub const FAST_MODEL: &str = "llama-3.1-8b-instant";
/// Larger model used for roadmap generation
pub const PLANNER_MODEL: &str = "llama-3.3-70b-versatile";

/// Per-call model configuration sent to the completion service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelProfile {
    pub model: String,
    pub max_tokens: u64,
    /// Constrain the output to a JSON object
    pub json_output: bool,
}

impl ModelProfile {
    pub fn classifier(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            max_tokens: 150,
            json_output: true,
        }
    }

    pub fn planner(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            max_tokens: 1024,
            json_output: false,
        }
    }

    pub fn tutor(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            max_tokens: 200,
            json_output: false,
        }
    }
}

/// Model names for the fast and planner stages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelCatalog {
    pub fast: String,
    pub planner: String,
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self {
            fast: FAST_MODEL.to_string(),
            planner: PLANNER_MODEL.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub prompt: String,
    pub profile: ModelProfile,
}

impl CompletionRequest {
    pub fn new(prompt: String, profile: ModelProfile) -> Self {
        Self { prompt, profile }
    }
}

/// Transport or provider failure, carrying the provider's message verbatim
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct CompletionError(pub String);

/// A single-prompt, single-response text completion backend
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError>;
}

/// Failure outcomes of the agents, each mapped to its own HTTP status
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The classifier decided the input is not a learning topic
    #[error("Input is not a valid learning topic. Reason: {0}")]
    Rejected(String),
    #[error("{0}")]
    Upstream(String),
    /// The classifier answered, but not with the expected JSON object
    #[error("Classifier returned malformed output: {0}")]
    MalformedResponse(String),
}

impl From<CompletionError> for PipelineError {
    fn from(err: CompletionError) -> Self {
        PipelineError::Upstream(err.0)
    }
}
