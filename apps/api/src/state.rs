use std::sync::Arc;

use crate::config::Config;
use crate::jobs::source::JobSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable job source. Default: PgJobSource.
    pub jobs: Arc<dyn JobSource>,
}
