use axum::Json;
use tracing::debug;

use crate::errors::AppError;
use crate::estimate::{estimate_size, SizeEstimate, SizeEstimateRequest};

/// POST /api/v1/size-estimate
pub async fn handle_size_estimate(
    Json(request): Json<SizeEstimateRequest>,
) -> Result<Json<SizeEstimate>, AppError> {
    let estimate = estimate_size(&request)?;
    debug!(
        total_seconds = estimate.total_seconds,
        size_mb = estimate.size_mb,
        "Size estimated"
    );
    Ok(Json(estimate))
}
