use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    /// Required unless `jobs_fixture` is set.
    pub database_url: Option<String>,
    /// JSON file of postings served from memory instead of PostgreSQL.
    pub jobs_fixture: Option<PathBuf>,
    pub db_max_connections: u32,
    pub port: u16,
    pub rust_log: String,
    /// Default number of suggestions when a request does not set `limit`.
    pub suggestion_limit: usize,
    /// Upper bound on open jobs loaded per request.
    pub max_candidates: usize,
    pub max_skill_length: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let jobs_fixture = std::env::var("JOBS_FIXTURE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        let database_url = match jobs_fixture {
            Some(_) => std::env::var("DATABASE_URL").ok(),
            None => Some(require_env("DATABASE_URL")?),
        };

        Ok(Config {
            database_url,
            jobs_fixture,
            db_max_connections: parse_env("DB_MAX_CONNECTIONS", 10)?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            suggestion_limit: parse_env("SUGGESTION_LIMIT", 5)?,
            max_candidates: parse_env("MAX_CANDIDATES", 100)?,
            max_skill_length: parse_env("MAX_SKILL_LENGTH", 50)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            jobs_fixture: None,
            db_max_connections: 10,
            port: 8080,
            rust_log: "info".to_string(),
            suggestion_limit: 5,
            max_candidates: 100,
            max_skill_length: 50,
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
