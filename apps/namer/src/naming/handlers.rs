//! Axum route handlers for form options and stateless filename builds.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;
use crate::naming::builder::{build_filename, BuiltFilename};
use crate::naming::catalog::FormOptions;
use crate::naming::segment::{colorize, ColoredSegment};
use crate::naming::validation::{validate_request, AddEntryRequest};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct BuildResponse {
    pub filename: String,
    pub segments: Vec<ColoredSegment>,
    pub description: String,
}

impl BuildResponse {
    pub fn new(built: &BuiltFilename, description: String) -> Self {
        BuildResponse {
            filename: built.filename.clone(),
            segments: colorize(&built.segments),
            description,
        }
    }
}

/// Validates the request and builds its filename. Shared with the session handlers.
pub fn build_from_request(
    state: &AppState,
    request: &AddEntryRequest,
) -> Result<BuiltFilename, AppError> {
    let fields = validate_request(request, state.catalog())?;
    let built = build_filename(&fields, state.today());
    debug!(filename = %built.filename, segments = built.segments.len(), "Built filename");
    Ok(built)
}

/// GET /api/v1/options
pub async fn handle_options(State(state): State<AppState>) -> Json<FormOptions> {
    Json(state.catalog().options())
}

/// POST /api/v1/filenames
///
/// Builds a filename without touching any session.
pub async fn handle_build_filename(
    State(state): State<AppState>,
    Json(request): Json<AddEntryRequest>,
) -> Result<Json<BuildResponse>, AppError> {
    let built = build_from_request(&state, &request)?;
    let description = request.description.unwrap_or_default();
    Ok(Json(BuildResponse::new(&built, description)))
}
