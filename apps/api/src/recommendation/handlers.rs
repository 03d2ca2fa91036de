//! Axum route handlers for the Recommendation API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::catalog::{CareerRow, StudentRecommendationRow, SubjectRow};
use crate::recommendation::engine::{
    attach_details, generate_recommendations, RecommendationDetail,
};
use crate::recommendation::subjects::recommend_subjects;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct StudentIdQuery {
    pub student_id: Uuid,
}

/// GET /api/v1/careers
pub async fn handle_list_careers(
    State(state): State<AppState>,
) -> Result<Json<Vec<CareerRow>>, AppError> {
    let careers = sqlx::query_as::<_, CareerRow>("SELECT * FROM careers ORDER BY seq")
        .fetch_all(&state.db)
        .await?;
    Ok(Json(careers))
}

#[derive(Deserialize)]
pub struct GenerateRequest {
    pub student_id: Uuid,
    pub top_n: Option<i64>,
}

/// POST /api/v1/recommendations/generate
///
/// Runs the engine and replaces the student's stored recommendations.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<Vec<RecommendationDetail>>, AppError> {
    let top_n = req.top_n.unwrap_or(state.config.default_top_n);
    if top_n <= 0 {
        return Err(AppError::Validation("top_n must be positive".to_string()));
    }
    let details = generate_recommendations(&state.db, req.student_id, top_n).await?;
    Ok(Json(details))
}

/// GET /api/v1/recommendations?student_id=
///
/// The stored ranked list, highest overall score first.
pub async fn handle_list_recommendations(
    State(state): State<AppState>,
    Query(params): Query<StudentIdQuery>,
) -> Result<Json<Vec<RecommendationDetail>>, AppError> {
    let rows = sqlx::query_as::<_, StudentRecommendationRow>(
        "SELECT * FROM student_recommendations
         WHERE student_id = $1
         ORDER BY overall_score DESC",
    )
    .bind(params.student_id)
    .fetch_all(&state.db)
    .await?;

    let details = attach_details(&state.db, rows).await?;
    Ok(Json(details))
}

/// GET /api/v1/recommendations/subjects?student_id=
pub async fn handle_subject_recommendations(
    State(state): State<AppState>,
    Query(params): Query<StudentIdQuery>,
) -> Result<Json<Vec<SubjectRow>>, AppError> {
    let subjects = recommend_subjects(&state.db, params.student_id).await?;
    Ok(Json(subjects))
}
