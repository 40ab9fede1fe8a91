//! Axum route handlers for session lifecycle and the session entry list.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::naming::handlers::build_from_request;
use crate::naming::validation::AddEntryRequest;
use crate::render::choose_program;
use crate::render::handlers::{pdf_response, render_report, ReportEntry};
use crate::session::EntryView;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SessionCreatedResponse {
    pub session_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct EntryListResponse {
    pub program_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub entries: Vec<EntryView>,
}

#[derive(Debug, Deserialize)]
pub struct DescriptionUpdate {
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub program_name: Option<String>,
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

fn entry_not_found(entry_id: &str) -> AppError {
    AppError::NotFound(format!("Entry {entry_id} not found"))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionCreatedResponse>) {
    let session_id = state.sessions.create().await;
    let active = state.sessions.len().await;
    info!(%session_id, active, "Session created");
    (StatusCode::CREATED, Json(SessionCreatedResponse { session_id }))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_discard_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.sessions.discard(id).await {
        return Err(session_not_found(id));
    }
    info!(session_id = %id, "Session discarded");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/sessions/:id/entries
pub async fn handle_list_entries(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EntryListResponse>, AppError> {
    let response = state
        .sessions
        .read(id, |s| EntryListResponse {
            program_name: s.program_name.clone(),
            created_at: s.created_at,
            entries: s.entries.views(),
        })
        .await
        .ok_or_else(|| session_not_found(id))?;
    Ok(Json(response))
}

/// POST /api/v1/sessions/:id/entries
///
/// Validates and builds first; the session is only touched on success.
pub async fn handle_add_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AddEntryRequest>,
) -> Result<(StatusCode, Json<EntryView>), AppError> {
    let built = build_from_request(&state, &request)?;
    let description = request.description.clone().unwrap_or_default();
    let program_name = request.program_name.clone();

    let (view, count) = state
        .sessions
        .write(id, move |s| {
            s.program_name = program_name;
            let view = EntryView::from(s.entries.push(built, description));
            (view, s.entries.len())
        })
        .await
        .ok_or_else(|| session_not_found(id))?;

    info!(session_id = %id, entry_id = %view.id, count, "Entry added");
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/v1/sessions/:id/entries/:entry_id
pub async fn handle_get_entry(
    State(state): State<AppState>,
    Path((id, entry_id)): Path<(Uuid, String)>,
) -> Result<Json<EntryView>, AppError> {
    let view = state
        .sessions
        .read(id, |s| s.entries.get(&entry_id).map(EntryView::from))
        .await
        .ok_or_else(|| session_not_found(id))?
        .ok_or_else(|| entry_not_found(&entry_id))?;
    Ok(Json(view))
}

/// PATCH /api/v1/sessions/:id/entries/:entry_id
pub async fn handle_update_description(
    State(state): State<AppState>,
    Path((id, entry_id)): Path<(Uuid, String)>,
    Json(update): Json<DescriptionUpdate>,
) -> Result<Json<EntryView>, AppError> {
    let view = state
        .sessions
        .write(id, |s| {
            s.entries
                .set_description(&entry_id, update.description)
                .map(EntryView::from)
        })
        .await
        .ok_or_else(|| session_not_found(id))?
        .ok_or_else(|| entry_not_found(&entry_id))?;
    Ok(Json(view))
}

/// DELETE /api/v1/sessions/:id/entries/:entry_id
///
/// Returns the renumbered list.
pub async fn handle_delete_entry(
    State(state): State<AppState>,
    Path((id, entry_id)): Path<(Uuid, String)>,
) -> Result<Json<EntryListResponse>, AppError> {
    let response = state
        .sessions
        .write(id, |s| {
            s.entries.remove(&entry_id).map(|_| EntryListResponse {
                program_name: s.program_name.clone(),
                created_at: s.created_at,
                entries: s.entries.views(),
            })
        })
        .await
        .ok_or_else(|| session_not_found(id))?
        .ok_or_else(|| entry_not_found(&entry_id))?;

    info!(session_id = %id, %entry_id, remaining = response.entries.len(), "Entry deleted");
    Ok(Json(response))
}

/// POST /api/v1/sessions/:id/export
///
/// `?program_name=` overrides the session's remembered program name.
pub async fn handle_export_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, AppError> {
    let (remembered, entries) = state
        .sessions
        .read(id, |s| {
            if s.entries.is_empty() {
                debug!(session_id = %id, "Exporting an empty entry list");
            }
            let entries: Vec<ReportEntry> =
                s.entries.entries().iter().map(ReportEntry::from).collect();
            (s.program_name.clone(), entries)
        })
        .await
        .ok_or_else(|| session_not_found(id))?;

    let program =
        choose_program(query.program_name.as_deref(), remembered.as_deref()).to_string();
    let report = render_report(
        program,
        entries,
        state.today(),
        state.report_config.clone(),
    )
    .await?;
    Ok(pdf_response(report))
}
