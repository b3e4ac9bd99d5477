//! Axum route handlers for the public job list.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::jobs::filters::{apply_filters, JobFilters};
use crate::models::job::JobPosting;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<JobPosting>,
    /// Open jobs before filtering.
    pub total: usize,
    pub filtered: usize,
}

/// GET /api/v1/jobs
///
/// Lists approved jobs, filtered by `search`, `location`, `company` and sorted by `sort_by`.
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(filters): Query<JobFilters>,
) -> Result<Json<JobListResponse>, AppError> {
    let open = state.jobs.list_open_jobs(state.config.max_candidates).await?;
    let total = open.len();
    let jobs = apply_filters(open, &filters);

    Ok(Json(JobListResponse {
        filtered: jobs.len(),
        total,
        jobs,
    }))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<JobPosting>, AppError> {
    state
        .jobs
        .get_job(&job_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))
}
