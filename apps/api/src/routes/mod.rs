pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::jobs::handlers as jobs;
use crate::matching::handlers as matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Jobs API
        .route("/api/v1/jobs", get(jobs::handle_list_jobs))
        .route(
            "/api/v1/jobs/suggestions",
            post(matching::handle_suggestions),
        )
        .route("/api/v1/jobs/:id", get(jobs::handle_get_job))
        .with_state(state)
}
