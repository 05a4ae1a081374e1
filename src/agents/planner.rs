use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::agents::prompts;
use crate::agents::{CompletionRequest, CompletionService, ModelProfile, PipelineError};

const DEFAULT_REASON: &str = "Invalid input";

/// The classifier's decision about a planner query
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValidationVerdict {
    /// A missing flag counts as "not a topic"
    #[serde(rename = "is_topic", alias = "isTopic", default)]
    pub is_topic: bool,
    #[serde(default)]
    reason: Option<String>,
}

impl ValidationVerdict {
    /// Parse the classifier's raw output. Non-JSON, non-object output, or a
    /// topic flag that is not a boolean, is a `MalformedResponse`.
    pub fn parse(raw: &str) -> Result<Self, PipelineError> {
        let value: serde_json::Value = serde_json::from_str(raw.trim())
            .map_err(|e| PipelineError::MalformedResponse(e.to_string()))?;
        if !value.is_object() {
            return Err(PipelineError::MalformedResponse(
                "expected a JSON object".to_string(),
            ));
        }
        serde_json::from_value(value).map_err(|e| PipelineError::MalformedResponse(e.to_string()))
    }

    pub fn reason(&self) -> &str {
        self.reason.as_deref().unwrap_or(DEFAULT_REASON)
    }
}

/// Validate-then-generate pipeline behind the `/planner` route.
///
/// A cheap classification call gates the expensive roadmap generation call.
#[derive(Clone)]
pub struct PlannerPipeline {
    service: Arc<dyn CompletionService>,
    classifier: ModelProfile,
    planner: ModelProfile,
}

impl PlannerPipeline {
    pub fn new(
        service: Arc<dyn CompletionService>,
        classifier: ModelProfile,
        planner: ModelProfile,
    ) -> Self {
        Self {
            service,
            classifier,
            planner,
        }
    }

    /// Classify, gate, then generate. Returns the roadmap text unchanged.
    pub async fn plan(&self, query: &str) -> Result<String, PipelineError> {
        let verdict = self.classify(query).await?;
        if !verdict.is_topic {
            info!("Query rejected by classifier: {}", verdict.reason());
            return Err(PipelineError::Rejected(verdict.reason().to_string()));
        }

        self.generate(query).await
    }

    pub async fn classify(&self, query: &str) -> Result<ValidationVerdict, PipelineError> {
        let prompt = prompts::topic_classification(query);
        debug!("Classification prompt: {}", prompt);

        let raw = self
            .service
            .complete(CompletionRequest::new(prompt, self.classifier.clone()))
            .await?;
        debug!("Classifier output: {}", raw);

        let verdict = ValidationVerdict::parse(&raw).inspect_err(|e| {
            warn!("Could not parse classifier output: {}", e);
        })?;
        info!(
            "Classifier verdict: is_topic={} reason={}",
            verdict.is_topic,
            verdict.reason()
        );
        Ok(verdict)
    }

    /// Generation step alone, without the classifier gate
    pub async fn generate(&self, query: &str) -> Result<String, PipelineError> {
        let prompt = prompts::learning_roadmap(query);
        let plan = self
            .service
            .complete(CompletionRequest::new(prompt, self.planner.clone()))
            .await?;
        info!("Generated plan with {} characters", plan.len());
        Ok(plan)
    }
}
