// Raw file size estimate from duration and bitrate.

pub mod handlers;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Applied once to the megabyte figure and once more on the gigabyte conversion.
pub const CONTAINER_OVERHEAD: f64 = 1.01;

const BITS_PER_BYTE: f64 = 8.0;
const MB_PER_GB: f64 = 1024.0;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SizeEstimateRequest {
    #[serde(default)]
    pub hours: u32,
    #[serde(default)]
    pub minutes: u32,
    #[serde(default)]
    pub seconds: u32,
    pub bitrate_mbps: f64,
}

impl SizeEstimateRequest {
    pub fn total_seconds(&self) -> u64 {
        u64::from(self.hours) * 3600 + u64::from(self.minutes) * 60 + u64::from(self.seconds)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeEstimate {
    pub total_seconds: u64,
    pub size_mb: f64,
    pub size_gb: f64,
    pub summary: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum EstimateError {
    #[error("Bitrate must be a non-negative number, got {0}")]
    InvalidBitrate(f64),
}

/// `size_mb = bitrate * seconds / 8 * 1.01`; `size_gb = raw_mb / 1024 * 1.01`.
pub fn estimate_size(request: &SizeEstimateRequest) -> Result<SizeEstimate, EstimateError> {
    let bitrate = request.bitrate_mbps;
    if !bitrate.is_finite() || bitrate < 0.0 {
        return Err(EstimateError::InvalidBitrate(bitrate));
    }

    let total_seconds = request.total_seconds();
    let raw_mb = bitrate * total_seconds as f64 / BITS_PER_BYTE;
    let size_mb = raw_mb * CONTAINER_OVERHEAD;
    let size_gb = raw_mb / MB_PER_GB * CONTAINER_OVERHEAD;

    Ok(SizeEstimate {
        total_seconds,
        size_mb,
        size_gb,
        summary: format!("~{size_mb:.2} MB ({size_gb:.2} GB)"),
    })
}
