pub mod health;
pub mod students;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assessment::handlers as assessment;
use crate::coach::handlers as coach;
use crate::recommendation::handlers as recommendation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/students/:id", get(students::handle_get_student))
        // Assessment API
        .route("/api/v1/questions", get(assessment::handle_list_questions))
        .route(
            "/api/v1/assessments/sessions",
            post(assessment::handle_start_session),
        )
        .route(
            "/api/v1/assessments/sessions/:id/responses",
            post(assessment::handle_submit_response),
        )
        .route(
            "/api/v1/assessments/sessions/:id/complete",
            post(assessment::handle_complete_session),
        )
        .route(
            "/api/v1/assessments/result",
            get(assessment::handle_get_result),
        )
        // Recommendation API
        .route("/api/v1/careers", get(recommendation::handle_list_careers))
        .route(
            "/api/v1/recommendations",
            get(recommendation::handle_list_recommendations),
        )
        .route(
            "/api/v1/recommendations/generate",
            post(recommendation::handle_generate),
        )
        .route(
            "/api/v1/recommendations/subjects",
            get(recommendation::handle_subject_recommendations),
        )
        // Coach API
        .route(
            "/api/v1/coach/learning-style",
            get(coach::handle_learning_style),
        )
        .route("/api/v1/coach/chat", post(coach::handle_chat))
        .route(
            "/api/v1/coach/conversations",
            get(coach::handle_list_conversations),
        )
        .route(
            "/api/v1/coach/conversations/:id/messages",
            get(coach::handle_list_messages),
        )
        .with_state(state)
}
