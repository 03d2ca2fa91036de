use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuestionRow {
    pub id: Uuid,
    pub text: String,
    /// Dimension category code: EI, SN, TF or JP.
    pub category: String,
    pub position: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AnswerChoiceRow {
    pub id: Uuid,
    pub question_id: Uuid,
    pub text: String,
    /// Signed polarity and strength, -3..=+3.
    pub value: i32,
    pub position: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AssessmentSessionRow {
    pub id: Uuid,
    pub student_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub is_completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuestionResponseRow {
    pub id: Uuid,
    pub session_id: Uuid,
    pub question_id: Uuid,
    pub answer_id: Uuid,
    pub response_time_secs: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PersonalityTypeRow {
    pub id: Uuid,
    /// Four-letter MBTI code, e.g. INTJ.
    pub code: String,
    pub name: String,
    pub description: String,
    pub strengths: String,
    pub weaknesses: String,
    pub career_recommendations: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AssessmentResultRow {
    pub id: Uuid,
    pub student_id: Uuid,
    pub personality_type_id: Uuid,
    pub ei_score: i32,
    pub sn_score: i32,
    pub tf_score: i32,
    pub jp_score: i32,
    /// 0.00..=1.00, rounded to two decimals.
    pub confidence: f64,
    pub created_at: DateTime<Utc>,
}
