use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Minimum answered questions before a session may be completed.
    /// Deployment policy, not a property of the scoring math.
    pub min_responses: i64,
    /// Default number of career recommendations to persist per student.
    pub default_top_n: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            min_responses: std::env::var("MIN_RESPONSES")
                .unwrap_or_else(|_| "40".to_string())
                .parse::<i64>()
                .context("MIN_RESPONSES must be an integer")?,
            default_top_n: std::env::var("RECOMMENDATION_TOP_N")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<i64>()
                .context("RECOMMENDATION_TOP_N must be an integer")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
