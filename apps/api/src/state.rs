use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::report::store::ReportStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub llm: LlmClient,
    pub config: Config,
    /// Report persistence behind the minimal store contract: insert, find,
    /// find-by-owner. Production uses `PgReportStore`; tests swap in memory.
    pub reports: Arc<dyn ReportStore>,
}
