use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SubjectRow {
    pub id: Uuid,
    pub name: String,
    /// KCSE subject code.
    pub code: String,
    pub category: String,
    pub difficulty: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CareerRow {
    pub id: Uuid,
    /// Catalog insertion order; ranking ties keep this order.
    pub seq: i64,
    pub name: String,
    pub description: String,
    pub category: String,
    pub average_salary: Option<f64>,
    pub job_outlook: String,
    pub kenyan_market_demand: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CareerPersonalityMatchRow {
    pub id: Uuid,
    pub career_id: Uuid,
    pub personality_type_id: Uuid,
    /// Catalog-defined affinity in [0, 1].
    pub compatibility_score: f64,
    pub rationale: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StudentRecommendationRow {
    pub id: Uuid,
    pub student_id: Uuid,
    pub career_id: Uuid,
    pub personality_match_score: f64,
    pub academic_match_score: f64,
    pub overall_score: f64,
    pub reasoning: String,
    pub created_at: DateTime<Utc>,
}

/// Kenyan market demand label on a career. Drives one clause of the
/// recommendation reasoning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketDemand {
    Growing,
    Stable,
    Declining,
}

impl MarketDemand {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "growing" => Some(MarketDemand::Growing),
            "stable" => Some(MarketDemand::Stable),
            "declining" => Some(MarketDemand::Declining),
            _ => None,
        }
    }
}
