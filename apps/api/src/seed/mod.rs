//! Idempotent reference-data loading: personality types, subjects, careers
//! and the question bank. Run via `api seed`; existing rows are left alone.

mod careers;
mod personality_types;
mod questions;

use anyhow::Result;
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use careers::{CAREERS, SUBJECTS};
use personality_types::PERSONALITY_TYPES;
use questions::QUESTIONS;

pub async fn run(pool: &PgPool) -> Result<()> {
    seed_personality_types(pool).await?;
    seed_subjects(pool).await?;
    seed_careers(pool).await?;
    seed_questions(pool).await?;
    info!("Reference data seeded");
    Ok(())
}

async fn seed_personality_types(pool: &PgPool) -> Result<()> {
    for pt in PERSONALITY_TYPES {
        sqlx::query(
            "INSERT INTO personality_types
                 (code, name, description, strengths, weaknesses, career_recommendations)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (code) DO NOTHING",
        )
        .bind(pt.code)
        .bind(pt.name)
        .bind(pt.description)
        .bind(pt.strengths)
        .bind(pt.weaknesses)
        .bind(pt.career_recommendations)
        .execute(pool)
        .await?;
    }
    info!("Seeded {} personality types", PERSONALITY_TYPES.len());
    Ok(())
}

async fn seed_subjects(pool: &PgPool) -> Result<()> {
    for subject in SUBJECTS {
        sqlx::query(
            "INSERT INTO subjects (name, code, category, difficulty)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (code) DO NOTHING",
        )
        .bind(subject.name)
        .bind(subject.code)
        .bind(subject.category)
        .bind(subject.difficulty)
        .execute(pool)
        .await?;
    }
    info!("Seeded {} subjects", SUBJECTS.len());
    Ok(())
}

async fn seed_careers(pool: &PgPool) -> Result<()> {
    for career in CAREERS {
        sqlx::query(
            "INSERT INTO careers
                 (name, description, category, job_outlook, kenyan_market_demand, average_salary)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (name) DO NOTHING",
        )
        .bind(career.name)
        .bind(career.description)
        .bind(career.category)
        .bind(career.job_outlook)
        .bind(career.kenyan_market_demand)
        .bind(career.average_salary)
        .execute(pool)
        .await?;

        let career_id: Uuid = sqlx::query_scalar("SELECT id FROM careers WHERE name = $1")
            .bind(career.name)
            .fetch_one(pool)
            .await?;

        for name in career.required_subjects {
            link_subject(pool, "career_required_subjects", career_id, name).await?;
        }
        for name in career.recommended_subjects {
            link_subject(pool, "career_recommended_subjects", career_id, name).await?;
        }

        for m in career.personality_matches {
            let type_id: Option<Uuid> =
                sqlx::query_scalar("SELECT id FROM personality_types WHERE code = $1")
                    .bind(m.mbti_code)
                    .fetch_optional(pool)
                    .await?;
            let Some(type_id) = type_id else {
                warn!("Skipping match {} for '{}': type not seeded", m.mbti_code, career.name);
                continue;
            };
            sqlx::query(
                "INSERT INTO career_personality_matches
                     (career_id, personality_type_id, compatibility_score, rationale)
                 VALUES ($1, $2, $3, $4)
                 ON CONFLICT (career_id, personality_type_id) DO NOTHING",
            )
            .bind(career_id)
            .bind(type_id)
            .bind(m.score)
            .bind(m.rationale)
            .execute(pool)
            .await?;
        }
    }
    info!("Seeded {} careers", CAREERS.len());
    Ok(())
}

async fn link_subject(pool: &PgPool, table: &str, career_id: Uuid, subject: &str) -> Result<()> {
    // table name comes from the two fixed call sites above
    let sql = format!(
        "INSERT INTO {table} (career_id, subject_id)
         SELECT $1, id FROM subjects WHERE name = $2
         ON CONFLICT DO NOTHING"
    );
    sqlx::query(&sql).bind(career_id).bind(subject).execute(pool).await?;
    Ok(())
}

async fn seed_questions(pool: &PgPool) -> Result<()> {
    for (position, q) in QUESTIONS.iter().enumerate() {
        sqlx::query(
            "INSERT INTO questions (text, category, position)
             VALUES ($1, $2, $3)
             ON CONFLICT (text) DO NOTHING",
        )
        .bind(q.text)
        .bind(q.category)
        .bind(position as i32)
        .execute(pool)
        .await?;

        let question_id: Uuid = sqlx::query_scalar("SELECT id FROM questions WHERE text = $1")
            .bind(q.text)
            .fetch_one(pool)
            .await?;

        for (choice_position, &(text, value)) in q.choices.iter().enumerate() {
            sqlx::query(
                "INSERT INTO answer_choices (question_id, text, value, position)
                 VALUES ($1, $2, $3, $4)
                 ON CONFLICT (question_id, text) DO NOTHING",
            )
            .bind(question_id)
            .bind(text)
            .bind(value)
            .bind(choice_position as i32)
            .execute(pool)
            .await?;
        }
    }
    info!("Seeded {} questions", QUESTIONS.len());
    Ok(())
}
