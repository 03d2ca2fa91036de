//! Student profile read endpoint. Profiles are written by the external
//! identity service; the API only reads them alongside the subject set.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::catalog::SubjectRow;
use crate::models::student::StudentRow;
use crate::state::AppState;

#[derive(Serialize)]
pub struct StudentProfileResponse {
    #[serde(flatten)]
    pub student: StudentRow,
    pub subjects: Vec<SubjectRow>,
}

/// GET /api/v1/students/:id
pub async fn handle_get_student(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
) -> Result<Json<StudentProfileResponse>, AppError> {
    let student = sqlx::query_as::<_, StudentRow>("SELECT * FROM students WHERE id = $1")
        .bind(student_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Student {student_id} not found")))?;

    let subjects = sqlx::query_as::<_, SubjectRow>(
        "SELECT s.* FROM subjects s
         JOIN student_subjects ss ON ss.subject_id = s.id
         WHERE ss.student_id = $1
         ORDER BY s.name",
    )
    .bind(student_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(StudentProfileResponse { student, subjects }))
}
