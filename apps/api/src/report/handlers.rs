//! Axum route handlers for the Report API.

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::Identity;
use crate::errors::AppError;
use crate::models::report::ReportRow;
use crate::pdf::render_report_pdf;
use crate::report::service::{create_report, get_report, list_reports};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// Defaults to empty so a missing field is rejected by the service as a
    /// 400 rather than failing body deserialization.
    #[serde(default)]
    pub business_info: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub strengths: String,
    pub weaknesses: String,
    pub opportunities: String,
    pub threats: String,
    pub report_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct ReportListResponse {
    pub reports: Vec<ReportRow>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPdfQuery {
    pub report_id: Option<Uuid>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /analyze
///
/// Runs a SWOT analysis for the authenticated caller and persists the result.
/// The `Identity` extractor rejects unauthenticated requests before the body
/// is even parsed, so no LLM or store call is made without a session.
pub async fn handle_analyze(
    State(state): State<AppState>,
    identity: Identity,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let report = create_report(
        state.reports.as_ref(),
        &state.llm,
        &identity,
        &request.business_info,
    )
    .await?;

    Ok(Json(AnalyzeResponse {
        strengths: report.strengths,
        weaknesses: report.weaknesses,
        opportunities: report.opportunities,
        threats: report.threats,
        report_id: report.id,
    }))
}

/// GET /api/v1/reports
///
/// The caller's reports, most recent first. Backs the dashboard page.
pub async fn handle_list_reports(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Json<ReportListResponse>, AppError> {
    let reports = list_reports(state.reports.as_ref(), &identity).await?;
    Ok(Json(ReportListResponse { reports }))
}

/// GET /api/v1/reports/:id
///
/// Single report detail. Backs the report page.
pub async fn handle_get_report(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<Uuid>,
) -> Result<Json<ReportRow>, AppError> {
    let report = get_report(state.reports.as_ref(), &identity, id).await?;
    Ok(Json(report))
}

/// GET /report-pdf?reportId=<id>
///
/// Premium-only PDF export of a stored report, served as an attachment.
/// Check order mirrors the tier gate: session, then tier, then input.
pub async fn handle_report_pdf(
    State(state): State<AppState>,
    identity: Identity,
    Query(query): Query<ReportPdfQuery>,
) -> Result<Response, AppError> {
    if !identity.premium {
        return Err(AppError::Forbidden);
    }

    let id = query
        .report_id
        .ok_or_else(|| AppError::Validation("Report ID is required.".to_string()))?;

    let report = get_report(state.reports.as_ref(), &identity, id).await?;
    let bytes = render_report_pdf(&report).map_err(|e| AppError::Pdf(e.to_string()))?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"swot_report.pdf\"",
            ),
        ],
        bytes,
    )
        .into_response())
}
