use crate::app::AppState;
use crate::error::AppResult;
use crate::models::{
    FeedbackRequest, FeedbackResponse, HealthResponse, MotivationRequest, MotivationResponse,
    PlannerRequest, PlannerResponse, SubjectRequest, SubjectResponse, WelcomeResponse,
};
use axum::{extract::Json, extract::State, response::Json as ResponseJson};
use tracing::{debug, info};

pub async fn home() -> ResponseJson<WelcomeResponse> {
    ResponseJson(WelcomeResponse::new())
}

/// Health check handler
/// Returns the service status and health information
pub async fn health_check() -> AppResult<ResponseJson<HealthResponse>> {
    debug!("Health check endpoint called");
    Ok(ResponseJson(HealthResponse::ok()))
}

/// Planner handler: classifies the query, then generates a learning roadmap
pub async fn planner_handler(
    State(state): State<AppState>,
    Json(payload): Json<PlannerRequest>,
) -> AppResult<ResponseJson<PlannerResponse>> {
    info!("Planner endpoint called with query: {}", payload.query);

    let plan = state.planner.plan(&payload.query).await?;

    info!("Successfully generated plan, returning response");
    Ok(ResponseJson(PlannerResponse { plan }))
}

pub async fn subject_handler(
    State(state): State<AppState>,
    Json(payload): Json<SubjectRequest>,
) -> AppResult<ResponseJson<SubjectResponse>> {
    info!("Subject endpoint called with subject: {}", payload.subject);
    let subject_explanation = state.tutor.explain_subject(&payload.subject).await?;
    Ok(ResponseJson(SubjectResponse {
        subject_explanation,
    }))
}

pub async fn feedback_handler(
    State(state): State<AppState>,
    Json(payload): Json<FeedbackRequest>,
) -> AppResult<ResponseJson<FeedbackResponse>> {
    info!("Feedback endpoint called");
    let feedback = state.tutor.give_feedback(&payload.input).await?;
    Ok(ResponseJson(FeedbackResponse { feedback }))
}

pub async fn motivation_handler(
    State(state): State<AppState>,
    Json(payload): Json<MotivationRequest>,
) -> AppResult<ResponseJson<MotivationResponse>> {
    info!("Motivation endpoint called with mood: {}", payload.mood);
    let motivation = state.tutor.motivate(&payload.mood).await?;
    Ok(ResponseJson(MotivationResponse { motivation }))
}
