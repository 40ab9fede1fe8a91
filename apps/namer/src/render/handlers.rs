//! Axum route handlers for PDF export.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::layout::{CardContent, ReportConfig};
use crate::render::{effective_program, export_report, ExportedReport};
use crate::session::Entry;
use crate::state::AppState;

/// One row of a client-held entry list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportEntry {
    #[serde(default)]
    pub id: String,
    pub filename: String,
    #[serde(default)]
    pub description: String,
}

impl ReportEntry {
    pub fn card_content(&self) -> CardContent<'_> {
        CardContent {
            filename: &self.filename,
            description: &self.description,
            id: &self.id,
        }
    }
}

impl From<&Entry> for ReportEntry {
    fn from(entry: &Entry) -> Self {
        ReportEntry {
            id: entry.id.clone(),
            filename: entry.filename.clone(),
            description: entry.description.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub program_name: Option<String>,
    #[serde(default)]
    pub entries: Vec<ReportEntry>,
}

/// Renders on the blocking pool; layout and PDF writing are CPU-bound.
pub async fn render_report(
    program: String,
    entries: Vec<ReportEntry>,
    today: NaiveDate,
    config: ReportConfig,
) -> Result<ExportedReport, AppError> {
    let report = tokio::task::spawn_blocking(move || {
        let items: Vec<CardContent<'_>> = entries.iter().map(ReportEntry::card_content).collect();
        export_report(&program, &items, today, &config)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in PDF export: {e}")))??;

    info!(
        filename = %report.filename,
        pages = report.pages,
        bytes = report.bytes.len(),
        "Rendered export list"
    );
    Ok(report)
}

/// `application/pdf` attachment response.
pub fn pdf_response(report: ExportedReport) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", report.filename),
            ),
        ],
        Bytes::from(report.bytes),
    )
        .into_response()
}

/// POST /api/v1/reports
///
/// Exports a client-held entry list.
pub async fn handle_export(
    State(state): State<AppState>,
    Json(request): Json<ExportRequest>,
) -> Result<Response, AppError> {
    let program = effective_program(request.program_name.as_deref()).to_string();
    let report = render_report(
        program,
        request.entries,
        state.today(),
        state.report_config.clone(),
    )
    .await?;
    Ok(pdf_response(report))
}
