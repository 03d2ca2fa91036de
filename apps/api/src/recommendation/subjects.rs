//! Subject recommendations: a fixed per-personality-type preference table
//! unioned with the subjects recommended by the student's best-matching
//! careers, deduplicated in order and capped.

use std::collections::HashSet;

use sqlx::PgPool;
use uuid::Uuid;

use crate::assessment::mbti::MbtiType;
use crate::errors::AppError;
use crate::models::catalog::SubjectRow;
use crate::recommendation::engine::{load_catalog, load_student_subjects, score_catalog};

/// Careers consulted for subject alignment.
const TOP_CAREERS_CONSIDERED: usize = 3;
/// Cap on returned subjects.
const MAX_SUBJECTS: usize = 8;

/// Baseline subject preferences per personality type.
pub fn preferred_subjects(mbti: MbtiType) -> &'static [&'static str] {
    match mbti {
        MbtiType::INTJ => &["Mathematics", "Physics", "Computer Studies", "Chemistry"],
        MbtiType::INTP => &["Mathematics", "Physics", "Computer Studies", "Biology"],
        MbtiType::ENTJ => &["Business Studies", "Mathematics", "Economics", "History"],
        MbtiType::ENTP => &["Computer Studies", "Physics", "Geography", "Business Studies"],
        MbtiType::INFJ => &["Languages", "History", "Biology", "CRE"],
        MbtiType::INFP => &["Languages", "Literature", "Art", "Music"],
        MbtiType::ENFJ => &["Languages", "History", "Business Studies", "CRE"],
        MbtiType::ENFP => &["Languages", "Geography", "Business Studies", "Drama"],
        MbtiType::ISTJ => &["Mathematics", "Chemistry", "Business Studies", "Geography"],
        MbtiType::ISFJ => &["Biology", "Home Science", "Languages", "CRE"],
        MbtiType::ESTJ => &["Business Studies", "Mathematics", "Geography", "History"],
        MbtiType::ESFJ => &["Languages", "Home Science", "Business Studies", "CRE"],
        MbtiType::ISTP => &["Physics", "Chemistry", "Technical Drawing", "Computer Studies"],
        MbtiType::ISFP => &["Art", "Music", "Home Science", "Biology"],
        MbtiType::ESTP => &["Business Studies", "Physical Education", "Geography", "Computer Studies"],
        MbtiType::ESFP => &["Music", "Drama", "Business Studies", "Languages"],
    }
}

/// Unions the baseline names with career-aligned names, first occurrence
/// wins, capped at MAX_SUBJECTS.
pub fn combine_subject_names(base: &[&str], career_aligned: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut combined = Vec::new();
    for name in base
        .iter()
        .map(|s| s.to_string())
        .chain(career_aligned.iter().cloned())
    {
        if seen.insert(name.clone()) {
            combined.push(name);
        }
        if combined.len() == MAX_SUBJECTS {
            break;
        }
    }
    combined
}

/// Recommends subjects for a student from their personality type and their
/// current top careers. Scores careers in memory; the stored top-N
/// recommendations are left untouched.
pub async fn recommend_subjects(
    pool: &PgPool,
    student_id: Uuid,
) -> Result<Vec<SubjectRow>, AppError> {
    let result: Option<(Uuid, String)> = sqlx::query_as(
        "SELECT r.personality_type_id, pt.code
         FROM assessment_results r
         JOIN personality_types pt ON pt.id = r.personality_type_id
         WHERE r.student_id = $1",
    )
    .bind(student_id)
    .fetch_optional(pool)
    .await?;
    let (personality_type_id, code) = result.ok_or(AppError::NoAssessmentResult(student_id))?;

    let mbti: MbtiType = code
        .parse()
        .map_err(|_| AppError::UnknownPersonalityType(code.clone()))?;

    let profiles = load_catalog(pool).await?;
    let student_subjects = load_student_subjects(pool, student_id).await?;
    let scored = score_catalog(&profiles, personality_type_id, &student_subjects);

    // recommended-subject names of the top careers, in rank order
    let mut career_aligned: Vec<String> = Vec::new();
    for entry in scored.iter().take(TOP_CAREERS_CONSIDERED) {
        let Some(profile) = profiles.iter().find(|p| p.career.id == entry.career_id) else {
            continue;
        };
        let names: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM subjects WHERE id = ANY($1) ORDER BY name",
        )
        .bind(&profile.recommended_subjects)
        .fetch_all(pool)
        .await?;
        career_aligned.extend(names.into_iter().map(|(n,)| n));
    }

    let combined = combine_subject_names(preferred_subjects(mbti), &career_aligned);

    // resolve against the subject catalog, preserving recommendation order;
    // names with no catalog entry are dropped
    let rows = sqlx::query_as::<_, SubjectRow>("SELECT * FROM subjects WHERE name = ANY($1)")
        .bind(&combined)
        .fetch_all(pool)
        .await?;
    let ordered = combined
        .iter()
        .filter_map(|name| rows.iter().find(|r| &r.name == name).cloned())
        .collect();

    Ok(ordered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_table_covers_all_types() {
        for t in MbtiType::ALL {
            assert!(
                !preferred_subjects(t).is_empty(),
                "no subjects for {}",
                t.as_str()
            );
        }
    }

    #[test]
    fn test_combine_dedups_preserving_first_occurrence() {
        let base = ["Mathematics", "Physics"];
        let aligned = vec![
            "Physics".to_string(),
            "Computer Studies".to_string(),
            "Mathematics".to_string(),
        ];
        let combined = combine_subject_names(&base, &aligned);
        assert_eq!(combined, vec!["Mathematics", "Physics", "Computer Studies"]);
    }

    #[test]
    fn test_combine_caps_at_eight() {
        let base = ["A", "B", "C", "D"];
        let aligned: Vec<String> = ["E", "F", "G", "H", "I", "J"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let combined = combine_subject_names(&base, &aligned);
        assert_eq!(combined.len(), 8);
        assert_eq!(combined.last().unwrap(), "H");
    }

    #[test]
    fn test_combine_is_deterministic() {
        let base = ["Biology", "Chemistry"];
        let aligned = vec!["English".to_string(), "Biology".to_string()];
        assert_eq!(
            combine_subject_names(&base, &aligned),
            combine_subject_names(&base, &aligned)
        );
    }
}
