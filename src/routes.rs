use crate::app::AppState;
use crate::handlers::{
    feedback_handler, health_check, home, motivation_handler, planner_handler, subject_handler,
};
use axum::{Router, routing::get, routing::post};

/// Creates and configures all application routes
pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
        .route("/planner", post(planner_handler))
        .route("/subject", post(subject_handler))
        .route("/feedback", post(feedback_handler))
        .route("/motivation", post(motivation_handler))
}
