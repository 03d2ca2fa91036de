//! Advice coach — pluggable, trait-based engine producing canned or
//! templated guidance from a student's personality profile.
//!
//! Default: `RuleBasedCoach` (pure-Rust, deterministic, fully testable).
//! The trait seam exists so a model-backed engine could be swapped in at
//! startup without touching handlers.
//!
//! `AppState` holds an `Arc<dyn CoachEngine>`.

pub mod advice;
pub mod handlers;
pub mod learning_style;

use async_trait::async_trait;

use crate::assessment::mbti::MbtiType;
use crate::errors::AppError;

/// What the coach knows about the student when replying.
#[derive(Debug, Clone, Copy)]
pub struct CoachContext {
    pub mbti: MbtiType,
}

#[async_trait]
pub trait CoachEngine: Send + Sync {
    async fn reply(&self, context: &CoachContext, message: &str) -> Result<String, AppError>;
}

/// Keyword-routed canned advice. No model calls.
pub struct RuleBasedCoach;

#[async_trait]
impl CoachEngine for RuleBasedCoach {
    async fn reply(&self, context: &CoachContext, message: &str) -> Result<String, AppError> {
        Ok(advice::canned_reply(context.mbti, message))
    }
}
