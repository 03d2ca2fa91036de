//! Axum route handlers for the Coach API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::assessment::mbti::MbtiType;
use crate::coach::learning_style::{learning_style_for, LearningStyle};
use crate::coach::CoachContext;
use crate::errors::AppError;
use crate::models::student::{ConversationRow, MessageRow};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct StudentIdQuery {
    pub student_id: Uuid,
}

#[derive(Serialize)]
pub struct LearningStyleResponse {
    pub personality_type: String,
    pub style: LearningStyle,
    pub description: &'static str,
    pub study_recommendations: &'static str,
}

/// GET /api/v1/coach/learning-style?student_id=
pub async fn handle_learning_style(
    State(state): State<AppState>,
    Query(params): Query<StudentIdQuery>,
) -> Result<Json<LearningStyleResponse>, AppError> {
    let mbti = resolve_mbti(&state, params.student_id).await?;
    let style = learning_style_for(mbti);
    Ok(Json(LearningStyleResponse {
        personality_type: mbti.to_string(),
        style,
        description: style.description(),
        study_recommendations: style.study_recommendations(),
    }))
}

#[derive(Deserialize)]
pub struct ChatRequest {
    pub student_id: Uuid,
    pub conversation_id: Option<Uuid>,
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub conversation_id: Uuid,
    pub reply: String,
}

/// POST /api/v1/coach/chat
///
/// One chat turn: stores the student message, generates the coach reply,
/// stores it, and returns it. Requires a completed assessment.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if req.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    let mbti = resolve_mbti(&state, req.student_id).await?;
    let conversation = resolve_conversation(&state, &req).await?;

    sqlx::query("INSERT INTO messages (conversation_id, content, is_from_coach) VALUES ($1, $2, FALSE)")
        .bind(conversation.id)
        .bind(&req.message)
        .execute(&state.db)
        .await?;

    let context = CoachContext { mbti };
    let reply = state.coach.reply(&context, &req.message).await?;

    sqlx::query("INSERT INTO messages (conversation_id, content, is_from_coach) VALUES ($1, $2, TRUE)")
        .bind(conversation.id)
        .bind(&reply)
        .execute(&state.db)
        .await?;
    sqlx::query("UPDATE conversations SET updated_at = now() WHERE id = $1")
        .bind(conversation.id)
        .execute(&state.db)
        .await?;

    Ok(Json(ChatResponse {
        conversation_id: conversation.id,
        reply,
    }))
}

/// GET /api/v1/coach/conversations?student_id=
pub async fn handle_list_conversations(
    State(state): State<AppState>,
    Query(params): Query<StudentIdQuery>,
) -> Result<Json<Vec<ConversationRow>>, AppError> {
    let conversations = sqlx::query_as::<_, ConversationRow>(
        "SELECT * FROM conversations WHERE student_id = $1 ORDER BY updated_at DESC",
    )
    .bind(params.student_id)
    .fetch_all(&state.db)
    .await?;
    Ok(Json(conversations))
}

/// GET /api/v1/coach/conversations/:id/messages
pub async fn handle_list_messages(
    State(state): State<AppState>,
    Path(conversation_id): Path<Uuid>,
) -> Result<Json<Vec<MessageRow>>, AppError> {
    let messages = sqlx::query_as::<_, MessageRow>(
        "SELECT * FROM messages WHERE conversation_id = $1 ORDER BY created_at",
    )
    .bind(conversation_id)
    .fetch_all(&state.db)
    .await?;
    Ok(Json(messages))
}

/// The student's personality type, from their completed assessment.
async fn resolve_mbti(state: &AppState, student_id: Uuid) -> Result<MbtiType, AppError> {
    let code: Option<String> = sqlx::query_scalar(
        "SELECT pt.code
         FROM assessment_results r
         JOIN personality_types pt ON pt.id = r.personality_type_id
         WHERE r.student_id = $1",
    )
    .bind(student_id)
    .fetch_optional(&state.db)
    .await?;
    let code = code.ok_or(AppError::NoAssessmentResult(student_id))?;
    code.parse()
        .map_err(|_| AppError::UnknownPersonalityType(code))
}

async fn resolve_conversation(
    state: &AppState,
    req: &ChatRequest,
) -> Result<ConversationRow, AppError> {
    if let Some(id) = req.conversation_id {
        let conversation = sqlx::query_as::<_, ConversationRow>(
            "SELECT * FROM conversations WHERE id = $1 AND student_id = $2",
        )
        .bind(id)
        .bind(req.student_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Conversation {id} not found")))?;
        return Ok(conversation);
    }

    // title from the opening message, truncated on a char boundary
    let title: String = req.message.chars().take(60).collect();
    let conversation = sqlx::query_as::<_, ConversationRow>(
        "INSERT INTO conversations (student_id, title) VALUES ($1, $2) RETURNING *",
    )
    .bind(req.student_id)
    .bind(title)
    .fetch_one(&state.db)
    .await?;
    Ok(conversation)
}
