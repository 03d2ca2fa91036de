//! Assessment session lifecycle: start, submit responses, complete.
//!
//! Sessions move one way, in_progress -> completed, and only through a
//! successful classification. The result upsert and the session flag flip
//! share one transaction so a student is never left half-scored.

use anyhow::anyhow;
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::assessment::classifier::{classify, ScoredResponse};
use crate::assessment::mbti::Dimension;
use crate::errors::AppError;
use crate::models::assessment::{
    AssessmentResultRow, AssessmentSessionRow, PersonalityTypeRow, QuestionResponseRow,
};

/// Returns the student's open session, creating one if none exists.
pub async fn start_session(
    pool: &PgPool,
    student_id: Uuid,
) -> Result<AssessmentSessionRow, AppError> {
    let existing = sqlx::query_as::<_, AssessmentSessionRow>(
        "SELECT * FROM assessment_sessions
         WHERE student_id = $1 AND is_completed = FALSE
         ORDER BY started_at DESC LIMIT 1",
    )
    .bind(student_id)
    .fetch_optional(pool)
    .await?;

    if let Some(session) = existing {
        return Ok(session);
    }

    let session = sqlx::query_as::<_, AssessmentSessionRow>(
        "INSERT INTO assessment_sessions (student_id) VALUES ($1) RETURNING *",
    )
    .bind(student_id)
    .fetch_one(pool)
    .await?;

    info!("Started assessment session {} for student {student_id}", session.id);
    Ok(session)
}

/// Upserts one response per (session, question). The chosen answer must
/// belong to the question, and the session must still be open.
pub async fn submit_response(
    pool: &PgPool,
    session_id: Uuid,
    question_id: Uuid,
    answer_id: Uuid,
    response_time_secs: i32,
) -> Result<QuestionResponseRow, AppError> {
    let session = fetch_session(pool, session_id).await?;
    if session.is_completed {
        return Err(AppError::Validation(format!(
            "Session {session_id} is already completed"
        )));
    }

    let answer_belongs: Option<i32> =
        sqlx::query_scalar("SELECT 1 FROM answer_choices WHERE id = $1 AND question_id = $2")
            .bind(answer_id)
            .bind(question_id)
            .fetch_optional(pool)
            .await?;
    if answer_belongs.is_none() {
        return Err(AppError::InvalidResponse(format!(
            "Answer {answer_id} does not belong to question {question_id}"
        )));
    }

    let response = sqlx::query_as::<_, QuestionResponseRow>(
        "INSERT INTO question_responses (session_id, question_id, answer_id, response_time_secs)
         VALUES ($1, $2, $3, $4)
         ON CONFLICT (session_id, question_id)
         DO UPDATE SET answer_id = EXCLUDED.answer_id,
                       response_time_secs = EXCLUDED.response_time_secs
         RETURNING *",
    )
    .bind(session_id)
    .bind(question_id)
    .bind(answer_id)
    .bind(response_time_secs)
    .fetch_one(pool)
    .await?;

    Ok(response)
}

/// Completes a session: gates on the minimum response count, classifies,
/// upserts the one-per-student result, and flips the session flag.
pub async fn complete_session(
    pool: &PgPool,
    session_id: Uuid,
    min_responses: i64,
) -> Result<AssessmentResultRow, AppError> {
    let session = fetch_session(pool, session_id).await?;
    if session.is_completed {
        return Err(AppError::Validation(format!(
            "Session {session_id} is already completed"
        )));
    }

    let answered: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM question_responses WHERE session_id = $1")
            .bind(session_id)
            .fetch_one(pool)
            .await?;
    if answered < min_responses {
        return Err(AppError::InsufficientResponses {
            answered,
            required: min_responses,
        });
    }

    let responses = fetch_scored_responses(pool, session_id).await?;
    let classification = classify(&responses);

    let mut tx = pool.begin().await?;

    let personality_type =
        resolve_personality_type(&mut tx, classification.mbti.as_str()).await?;

    let result = sqlx::query_as::<_, AssessmentResultRow>(
        "INSERT INTO assessment_results
             (student_id, personality_type_id, ei_score, sn_score, tf_score, jp_score, confidence)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         ON CONFLICT (student_id)
         DO UPDATE SET personality_type_id = EXCLUDED.personality_type_id,
                       ei_score = EXCLUDED.ei_score,
                       sn_score = EXCLUDED.sn_score,
                       tf_score = EXCLUDED.tf_score,
                       jp_score = EXCLUDED.jp_score,
                       confidence = EXCLUDED.confidence
         RETURNING *",
    )
    .bind(session.student_id)
    .bind(personality_type.id)
    .bind(classification.scores.ei)
    .bind(classification.scores.sn)
    .bind(classification.scores.tf)
    .bind(classification.scores.jp)
    .bind(classification.confidence)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query(
        "UPDATE assessment_sessions
         SET is_completed = TRUE, completed_at = now()
         WHERE id = $1",
    )
    .bind(session_id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    info!(
        "Session {session_id} completed: {} (confidence {:.2})",
        classification.mbti, classification.confidence
    );
    Ok(result)
}

/// Responses joined to their question's dimension and answer value.
async fn fetch_scored_responses(
    pool: &PgPool,
    session_id: Uuid,
) -> Result<Vec<ScoredResponse>, AppError> {
    let rows: Vec<(String, i32)> = sqlx::query_as(
        "SELECT q.category, a.value
         FROM question_responses r
         JOIN questions q ON q.id = r.question_id
         JOIN answer_choices a ON a.id = r.answer_id
         WHERE r.session_id = $1",
    )
    .bind(session_id)
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|(category, value)| {
            let dimension = Dimension::parse(&category)
                .ok_or_else(|| anyhow!("question has unknown dimension category '{category}'"))?;
            Ok(ScoredResponse { dimension, value })
        })
        .collect()
}

/// Resolves the classified code against the personality_types catalog.
/// A missing code falls back to the first catalog entry (defined degenerate
/// case); an empty catalog is an error.
async fn resolve_personality_type(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    mbti_code: &str,
) -> Result<PersonalityTypeRow, AppError> {
    let exact = sqlx::query_as::<_, PersonalityTypeRow>(
        "SELECT * FROM personality_types WHERE code = $1",
    )
    .bind(mbti_code)
    .fetch_optional(&mut **tx)
    .await?;

    if let Some(row) = exact {
        return Ok(row);
    }

    warn!("Personality type {mbti_code} missing from catalog; using fallback entry");
    sqlx::query_as::<_, PersonalityTypeRow>(
        "SELECT * FROM personality_types ORDER BY code LIMIT 1",
    )
    .fetch_optional(&mut **tx)
    .await?
    .ok_or_else(|| AppError::UnknownPersonalityType(mbti_code.to_string()))
}

async fn fetch_session(pool: &PgPool, session_id: Uuid) -> Result<AssessmentSessionRow, AppError> {
    sqlx::query_as::<_, AssessmentSessionRow>("SELECT * FROM assessment_sessions WHERE id = $1")
        .bind(session_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))
}
