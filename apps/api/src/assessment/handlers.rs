//! Axum route handlers for the Assessment API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::assessment::sessions;
use crate::errors::AppError;
use crate::models::assessment::{
    AnswerChoiceRow, AssessmentResultRow, AssessmentSessionRow, PersonalityTypeRow,
    QuestionResponseRow, QuestionRow,
};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct StudentIdQuery {
    pub student_id: Uuid,
}

#[derive(Serialize)]
pub struct QuestionWithChoices {
    #[serde(flatten)]
    pub question: QuestionRow,
    pub choices: Vec<AnswerChoiceRow>,
}

/// GET /api/v1/questions
///
/// The full question bank with answer choices, in presentation order.
pub async fn handle_list_questions(
    State(state): State<AppState>,
) -> Result<Json<Vec<QuestionWithChoices>>, AppError> {
    let questions = sqlx::query_as::<_, QuestionRow>(
        "SELECT * FROM questions ORDER BY position, text",
    )
    .fetch_all(&state.db)
    .await?;

    let choices = sqlx::query_as::<_, AnswerChoiceRow>(
        "SELECT * FROM answer_choices ORDER BY question_id, position, text",
    )
    .fetch_all(&state.db)
    .await?;

    let listing = questions
        .into_iter()
        .map(|question| {
            let choices = choices
                .iter()
                .filter(|c| c.question_id == question.id)
                .cloned()
                .collect();
            QuestionWithChoices { question, choices }
        })
        .collect();

    Ok(Json(listing))
}

#[derive(Deserialize)]
pub struct StartSessionRequest {
    pub student_id: Uuid,
}

/// POST /api/v1/assessments/sessions
///
/// Starts a session, or returns the student's existing open session.
pub async fn handle_start_session(
    State(state): State<AppState>,
    Json(req): Json<StartSessionRequest>,
) -> Result<Json<AssessmentSessionRow>, AppError> {
    let session = sessions::start_session(&state.db, req.student_id).await?;
    Ok(Json(session))
}

#[derive(Deserialize)]
pub struct SubmitResponseRequest {
    pub question_id: Uuid,
    pub answer_id: Uuid,
    #[serde(default)]
    pub response_time_secs: i32,
}

#[derive(Serialize)]
pub struct SubmitResponseReply {
    pub status: &'static str,
    pub response: QuestionResponseRow,
}

/// POST /api/v1/assessments/sessions/:id/responses
pub async fn handle_submit_response(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<SubmitResponseRequest>,
) -> Result<Json<SubmitResponseReply>, AppError> {
    let response = sessions::submit_response(
        &state.db,
        session_id,
        req.question_id,
        req.answer_id,
        req.response_time_secs,
    )
    .await?;
    Ok(Json(SubmitResponseReply {
        status: "response saved",
        response,
    }))
}

#[derive(Serialize)]
pub struct AssessmentResultResponse {
    #[serde(flatten)]
    pub result: AssessmentResultRow,
    pub personality_type: PersonalityTypeRow,
}

/// POST /api/v1/assessments/sessions/:id/complete
///
/// Runs the classifier and persists the result; the minimum-response gate
/// applies.
pub async fn handle_complete_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<AssessmentResultResponse>, AppError> {
    let result =
        sessions::complete_session(&state.db, session_id, state.config.min_responses).await?;
    let personality_type = fetch_personality_type(&state, result.personality_type_id).await?;
    Ok(Json(AssessmentResultResponse {
        result,
        personality_type,
    }))
}

/// GET /api/v1/assessments/result?student_id=
pub async fn handle_get_result(
    State(state): State<AppState>,
    Query(params): Query<StudentIdQuery>,
) -> Result<Json<AssessmentResultResponse>, AppError> {
    let result = sqlx::query_as::<_, AssessmentResultRow>(
        "SELECT * FROM assessment_results WHERE student_id = $1",
    )
    .bind(params.student_id)
    .fetch_optional(&state.db)
    .await?
    .ok_or(AppError::NoAssessmentResult(params.student_id))?;

    let personality_type = fetch_personality_type(&state, result.personality_type_id).await?;
    Ok(Json(AssessmentResultResponse {
        result,
        personality_type,
    }))
}

async fn fetch_personality_type(
    state: &AppState,
    id: Uuid,
) -> Result<PersonalityTypeRow, AppError> {
    sqlx::query_as::<_, PersonalityTypeRow>("SELECT * FROM personality_types WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Personality type {id} not found")))
}
