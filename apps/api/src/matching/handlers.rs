//! Axum route handlers for job suggestions.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::matching::matcher::{suggest_jobs, MatchResult};
use crate::matching::skills::validate_skill_lengths;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SuggestionsRequest {
    pub skills: Vec<String>,
    /// Defaults to the configured suggestion limit.
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedJob {
    #[serde(flatten)]
    pub result: MatchResult,
    pub match_percent: u32,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<SuggestedJob>,
    pub candidate_count: usize,
}

/// POST /api/v1/jobs/suggestions
///
/// Ranks currently open jobs against the applicant's skills.
/// No matches is a normal, empty response.
pub async fn handle_suggestions(
    State(state): State<AppState>,
    Json(request): Json<SuggestionsRequest>,
) -> Result<Json<SuggestionsResponse>, AppError> {
    let limit = match request.limit {
        None => state.config.suggestion_limit,
        Some(n) if n >= 1 => usize::try_from(n).unwrap_or(usize::MAX),
        Some(n) => {
            return Err(AppError::InvalidArgument(format!(
                "limit must be at least 1, got {n}"
            )))
        }
    };

    validate_skill_lengths(request.skills.as_slice(), state.config.max_skill_length)
        .map_err(AppError::Validation)?;

    let candidates = state.jobs.list_open_jobs(state.config.max_candidates).await?;
    let results = suggest_jobs(request.skills.as_slice(), &candidates, limit)?;

    info!(
        candidates = candidates.len(),
        suggestions = results.len(),
        "Served job suggestions"
    );

    Ok(Json(SuggestionsResponse {
        candidate_count: candidates.len(),
        suggestions: results
            .into_iter()
            .map(|result| SuggestedJob {
                match_percent: result.match_percent(),
                result,
            })
            .collect(),
    }))
}
