use std::sync::Arc;

use sqlx::PgPool;

use crate::coach::CoachEngine;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Pluggable advice engine. Default: RuleBasedCoach.
    pub coach: Arc<dyn CoachEngine>,
}
