use serde::{Deserialize, Serialize};

/// Request payload for the planner endpoint
#[derive(Debug, Deserialize)]
pub struct PlannerRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct PlannerResponse {
    pub plan: String,
}

#[derive(Debug, Deserialize)]
pub struct SubjectRequest {
    pub subject: String,
}

#[derive(Debug, Serialize)]
pub struct SubjectResponse {
    pub subject_explanation: String,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub input: String,
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub feedback: String,
}

#[derive(Debug, Deserialize)]
pub struct MotivationRequest {
    pub mood: String,
}

#[derive(Debug, Serialize)]
pub struct MotivationResponse {
    pub motivation: String,
}

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: String,
}

impl WelcomeResponse {
    pub fn new() -> Self {
        Self {
            message: "Welcome to LearnBuddy Multi-Agent API!".to_string(),
        }
    }
}

impl Default for WelcomeResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Response payload for the health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            message: "Service is healthy".to_string(),
        }
    }
}
