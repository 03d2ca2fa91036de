//! Recommendation Engine — scores every career in the catalog against a
//! student's personality type and subject set, ranks, and persists the
//! top-N as replaceable per-(student, career) records.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::catalog::{
    CareerPersonalityMatchRow, CareerRow, MarketDemand, StudentRecommendationRow, SubjectRow,
};
use crate::recommendation::reasoning::build_reasoning;

/// Compatibility used when the catalog has no entry for a
/// (career, personality type) pair. Open-combination policy, not an error.
pub const DEFAULT_COMPATIBILITY: f64 = 0.5;

/// Overall score weights: personality 60%, academics 40%.
pub const PERSONALITY_WEIGHT: f64 = 0.6;
pub const ACADEMIC_WEIGHT: f64 = 0.4;

/// One career with its subject requirements and per-type compatibility,
/// assembled from the catalog tables. Subject lists keep a stable order so
/// downstream output is reproducible.
#[derive(Debug, Clone)]
pub struct CareerProfile {
    pub career: CareerRow,
    pub required_subjects: Vec<Uuid>,
    pub recommended_subjects: Vec<Uuid>,
    /// personality_type_id -> compatibility score
    pub compatibility: HashMap<Uuid, f64>,
}

/// Scoring output for one career, ready to persist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCareer {
    pub career_id: Uuid,
    pub personality_score: f64,
    pub academic_score: f64,
    pub overall_score: f64,
    pub reasoning: String,
}

/// Compatibility from the catalog join, defaulting for open combinations.
pub fn personality_match(profile: &CareerProfile, personality_type_id: Uuid) -> f64 {
    profile
        .compatibility
        .get(&personality_type_id)
        .copied()
        .unwrap_or(DEFAULT_COMPATIBILITY)
}

/// Academic suitability. Missing any required subject is a hard gate to 0.0;
/// otherwise the overlap ratio with the recommended set, or 1.0 when the
/// career recommends nothing specific.
pub fn academic_match(profile: &CareerProfile, student_subjects: &HashSet<Uuid>) -> f64 {
    let meets_required = profile
        .required_subjects
        .iter()
        .all(|s| student_subjects.contains(s));
    if !meets_required {
        return 0.0;
    }

    if profile.recommended_subjects.is_empty() {
        return 1.0;
    }

    let overlap = profile
        .recommended_subjects
        .iter()
        .filter(|s| student_subjects.contains(s))
        .count();
    overlap as f64 / profile.recommended_subjects.len() as f64
}

/// Scores every career and ranks descending by overall score. The sort is
/// stable, so ties keep catalog iteration order.
pub fn score_catalog(
    profiles: &[CareerProfile],
    personality_type_id: Uuid,
    student_subjects: &HashSet<Uuid>,
) -> Vec<ScoredCareer> {
    let mut scored: Vec<ScoredCareer> = profiles
        .iter()
        .map(|profile| {
            let personality_score = personality_match(profile, personality_type_id);
            let academic_score = academic_match(profile, student_subjects);
            let overall_score =
                PERSONALITY_WEIGHT * personality_score + ACADEMIC_WEIGHT * academic_score;
            let reasoning = build_reasoning(
                &profile.career.name,
                MarketDemand::parse(&profile.career.kenyan_market_demand),
                personality_score,
                academic_score,
            );
            ScoredCareer {
                career_id: profile.career.id,
                personality_score,
                academic_score,
                overall_score,
                reasoning,
            }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.overall_score
            .partial_cmp(&a.overall_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored
}

/// A persisted recommendation joined with its career and subject snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationDetail {
    #[serde(flatten)]
    pub recommendation: StudentRecommendationRow,
    pub career: CareerRow,
    pub recommended_subjects: Vec<SubjectRow>,
}

/// Loads the full career catalog with subject requirements and
/// compatibility rows, in catalog (seq) order.
pub async fn load_catalog(pool: &PgPool) -> Result<Vec<CareerProfile>, AppError> {
    let careers =
        sqlx::query_as::<_, CareerRow>("SELECT * FROM careers ORDER BY seq").fetch_all(pool).await?;

    let required: Vec<(Uuid, Uuid)> = sqlx::query_as(
        "SELECT crs.career_id, crs.subject_id
         FROM career_required_subjects crs
         JOIN subjects s ON s.id = crs.subject_id
         ORDER BY crs.career_id, s.name",
    )
    .fetch_all(pool)
    .await?;

    let recommended: Vec<(Uuid, Uuid)> = sqlx::query_as(
        "SELECT crs.career_id, crs.subject_id
         FROM career_recommended_subjects crs
         JOIN subjects s ON s.id = crs.subject_id
         ORDER BY crs.career_id, s.name",
    )
    .fetch_all(pool)
    .await?;

    let matches = sqlx::query_as::<_, CareerPersonalityMatchRow>(
        "SELECT * FROM career_personality_matches",
    )
    .fetch_all(pool)
    .await?;

    let profiles = careers
        .into_iter()
        .map(|career| {
            let required_subjects = required
                .iter()
                .filter(|(c, _)| *c == career.id)
                .map(|(_, s)| *s)
                .collect();
            let recommended_subjects = recommended
                .iter()
                .filter(|(c, _)| *c == career.id)
                .map(|(_, s)| *s)
                .collect();
            let compatibility = matches
                .iter()
                .filter(|m| m.career_id == career.id)
                .map(|m| (m.personality_type_id, m.compatibility_score))
                .collect();
            CareerProfile {
                career,
                required_subjects,
                recommended_subjects,
                compatibility,
            }
        })
        .collect();

    Ok(profiles)
}

/// The student's declared subject set.
pub async fn load_student_subjects(
    pool: &PgPool,
    student_id: Uuid,
) -> Result<HashSet<Uuid>, AppError> {
    let rows: Vec<(Uuid,)> =
        sqlx::query_as("SELECT subject_id FROM student_subjects WHERE student_id = $1")
            .bind(student_id)
            .fetch_all(pool)
            .await?;
    Ok(rows.into_iter().map(|(id,)| id).collect())
}

/// Runs the engine for one student and replaces their stored top-N.
///
/// The whole write is one transaction: either every (student, career) row
/// and its subject snapshot is updated, or none are.
pub async fn generate_recommendations(
    pool: &PgPool,
    student_id: Uuid,
    top_n: i64,
) -> Result<Vec<RecommendationDetail>, AppError> {
    let personality_type_id: Uuid = sqlx::query_scalar(
        "SELECT personality_type_id FROM assessment_results WHERE student_id = $1",
    )
    .bind(student_id)
    .fetch_optional(pool)
    .await?
    .ok_or(AppError::NoAssessmentResult(student_id))?;

    let profiles = load_catalog(pool).await?;
    let student_subjects = load_student_subjects(pool, student_id).await?;

    let mut scored = score_catalog(&profiles, personality_type_id, &student_subjects);
    scored.truncate(top_n.max(0) as usize);

    let by_career: HashMap<Uuid, &CareerProfile> =
        profiles.iter().map(|p| (p.career.id, p)).collect();

    let mut tx = pool.begin().await?;
    let mut stored = Vec::with_capacity(scored.len());

    for entry in &scored {
        let row = sqlx::query_as::<_, StudentRecommendationRow>(
            "INSERT INTO student_recommendations
                 (student_id, career_id, personality_match_score, academic_match_score,
                  overall_score, reasoning)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (student_id, career_id)
             DO UPDATE SET personality_match_score = EXCLUDED.personality_match_score,
                           academic_match_score = EXCLUDED.academic_match_score,
                           overall_score = EXCLUDED.overall_score,
                           reasoning = EXCLUDED.reasoning
             RETURNING *",
        )
        .bind(student_id)
        .bind(entry.career_id)
        .bind(entry.personality_score)
        .bind(entry.academic_score)
        .bind(entry.overall_score)
        .bind(&entry.reasoning)
        .fetch_one(&mut *tx)
        .await?;

        // snapshot the career's recommended subjects onto the recommendation
        sqlx::query("DELETE FROM recommendation_subjects WHERE recommendation_id = $1")
            .bind(row.id)
            .execute(&mut *tx)
            .await?;
        if let Some(profile) = by_career.get(&entry.career_id) {
            for subject_id in &profile.recommended_subjects {
                sqlx::query(
                    "INSERT INTO recommendation_subjects (recommendation_id, subject_id)
                     VALUES ($1, $2) ON CONFLICT DO NOTHING",
                )
                .bind(row.id)
                .bind(subject_id)
                .execute(&mut *tx)
                .await?;
            }
        }

        stored.push(row);
    }

    tx.commit().await?;
    info!(
        "Generated {} recommendations for student {student_id}",
        stored.len()
    );

    attach_details(pool, stored).await
}

/// Joins stored recommendation rows with their career and subject snapshot.
pub async fn attach_details(
    pool: &PgPool,
    rows: Vec<StudentRecommendationRow>,
) -> Result<Vec<RecommendationDetail>, AppError> {
    let career_ids: Vec<Uuid> = rows.iter().map(|r| r.career_id).collect();
    let careers = sqlx::query_as::<_, CareerRow>("SELECT * FROM careers WHERE id = ANY($1)")
        .bind(&career_ids)
        .fetch_all(pool)
        .await?;
    let careers: HashMap<Uuid, CareerRow> = careers.into_iter().map(|c| (c.id, c)).collect();

    let rec_ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
    let subject_links: Vec<(Uuid, Uuid)> = sqlx::query_as(
        "SELECT recommendation_id, subject_id FROM recommendation_subjects
         WHERE recommendation_id = ANY($1)",
    )
    .bind(&rec_ids)
    .fetch_all(pool)
    .await?;
    let subject_ids: Vec<Uuid> = subject_links.iter().map(|(_, s)| *s).collect();
    let subjects =
        sqlx::query_as::<_, SubjectRow>("SELECT * FROM subjects WHERE id = ANY($1) ORDER BY name")
            .bind(&subject_ids)
            .fetch_all(pool)
            .await?;

    let details = rows
        .into_iter()
        .filter_map(|recommendation| {
            let career = careers.get(&recommendation.career_id)?.clone();
            let recommended_subjects = subjects
                .iter()
                .filter(|s| {
                    subject_links
                        .iter()
                        .any(|(r, sid)| *r == recommendation.id && sid == &s.id)
                })
                .cloned()
                .collect();
            Some(RecommendationDetail {
                recommendation,
                career,
                recommended_subjects,
            })
        })
        .collect();

    Ok(details)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn career(name: &str, seq: i64, demand: &str) -> CareerRow {
        CareerRow {
            id: Uuid::new_v4(),
            seq,
            name: name.to_string(),
            description: String::new(),
            category: "stem".to_string(),
            average_salary: None,
            job_outlook: "high".to_string(),
            kenyan_market_demand: demand.to_string(),
        }
    }

    fn profile(name: &str, seq: i64) -> CareerProfile {
        CareerProfile {
            career: career(name, seq, "growing"),
            required_subjects: vec![],
            recommended_subjects: vec![],
            compatibility: HashMap::new(),
        }
    }

    #[test]
    fn test_missing_compatibility_row_defaults_to_half() {
        let p = profile("Surveyor", 1);
        assert_eq!(personality_match(&p, Uuid::new_v4()), 0.5);
    }

    #[test]
    fn test_explicit_compatibility_wins_over_default() {
        let type_id = Uuid::new_v4();
        let mut p = profile("Surveyor", 1);
        p.compatibility.insert(type_id, 0.9);
        assert_eq!(personality_match(&p, type_id), 0.9);
    }

    #[test]
    fn test_missing_required_subject_gates_academic_to_zero() {
        let maths = Uuid::new_v4();
        let physics = Uuid::new_v4();
        let mut p = profile("Engineer", 1);
        p.required_subjects = vec![maths, physics];
        p.recommended_subjects = vec![maths];

        // student has maths only
        let student: HashSet<Uuid> = [maths].into_iter().collect();
        assert_eq!(academic_match(&p, &student), 0.0);
    }

    #[test]
    fn test_empty_recommended_set_scores_one_when_gate_passes() {
        let english = Uuid::new_v4();
        let mut p = profile("Teacher", 1);
        p.required_subjects = vec![english];

        let student: HashSet<Uuid> = [english].into_iter().collect();
        assert_eq!(academic_match(&p, &student), 1.0);
    }

    #[test]
    fn test_academic_overlap_ratio() {
        let maths = Uuid::new_v4();
        let physics = Uuid::new_v4();
        let computing = Uuid::new_v4();
        let english = Uuid::new_v4();
        let mut p = profile("Developer", 1);
        p.required_subjects = vec![maths];
        p.recommended_subjects = vec![physics, computing, english];

        // student covers 2 of the 3 recommended
        let student: HashSet<Uuid> = [maths, physics, computing].into_iter().collect();
        let score = academic_match(&p, &student);
        assert!((score - 2.0 / 3.0).abs() < 1e-9, "score was {score}");
    }

    #[test]
    fn test_overall_score_is_weighted_blend() {
        let type_id = Uuid::new_v4();
        let maths = Uuid::new_v4();
        let mut p = profile("Developer", 1);
        p.compatibility.insert(type_id, 0.9);
        p.recommended_subjects = vec![maths];

        let student: HashSet<Uuid> = HashSet::new();
        let scored = score_catalog(&[p], type_id, &student);
        // 0.6 * 0.9 + 0.4 * 0.0 = 0.54
        assert!((scored[0].overall_score - 0.54).abs() < 1e-9);
        assert_eq!(scored[0].personality_score, 0.9);
        assert_eq!(scored[0].academic_score, 0.0);
    }

    #[test]
    fn test_ranking_descends_by_overall_score() {
        let type_id = Uuid::new_v4();
        let mut strong = profile("Strong", 1);
        strong.compatibility.insert(type_id, 0.9);
        let mut weak = profile("Weak", 2);
        weak.compatibility.insert(type_id, 0.2);

        let scored = score_catalog(&[weak.clone(), strong.clone()], type_id, &HashSet::new());
        assert_eq!(scored[0].career_id, strong.career.id);
        assert_eq!(scored[1].career_id, weak.career.id);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        // no compatibility rows and no subjects: every career scores the
        // default 0.5 * 0.6 + 1.0 * 0.4, so the ranking must be catalog order
        let first = profile("Alpha", 1);
        let second = profile("Beta", 2);
        let third = profile("Gamma", 3);
        let ids: Vec<Uuid> = [&first, &second, &third]
            .iter()
            .map(|p| p.career.id)
            .collect();

        let scored = score_catalog(&[first, second, third], Uuid::new_v4(), &HashSet::new());
        let ranked: Vec<Uuid> = scored.iter().map(|s| s.career_id).collect();
        assert_eq!(ranked, ids);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let type_id = Uuid::new_v4();
        let maths = Uuid::new_v4();
        let mut p = profile("Developer", 1);
        p.compatibility.insert(type_id, 0.7);
        p.recommended_subjects = vec![maths];
        let student: HashSet<Uuid> = [maths].into_iter().collect();

        let first = score_catalog(std::slice::from_ref(&p), type_id, &student);
        let second = score_catalog(std::slice::from_ref(&p), type_id, &student);
        assert_eq!(first[0].overall_score, second[0].overall_score);
        assert_eq!(first[0].reasoning, second[0].reasoning);
    }
}
