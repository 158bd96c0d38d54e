pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::auth::handlers as auth_handlers;
use crate::report::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/analyze", post(handlers::handle_analyze))
        .route("/report-pdf", get(handlers::handle_report_pdf))
        // Report reads backing the dashboard and detail pages
        .route("/api/v1/reports", get(handlers::handle_list_reports))
        .route("/api/v1/reports/:id", get(handlers::handle_get_report))
        // Session tokens
        .route("/api/v1/auth/register", post(auth_handlers::handle_register))
        .route("/api/v1/auth/login", post(auth_handlers::handle_login))
        .with_state(state)
}
