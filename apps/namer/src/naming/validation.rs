//! Turns the raw add-entry request into a `FieldSet`.
//!
//! Two checks only: every mandatory field is present, and choice fields hold a
//! value from their list. An unparsable date is not an error; it is logged and
//! the builder falls back to today.

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::naming::catalog::FormatCatalog;
use crate::naming::fields::{AudioFormat, Cadence, FieldSet, Language, SubtitleChoice};
use crate::naming::sanitize::sanitize;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw form payload. Field names match the form's JSON keys.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddEntryRequest {
    pub program_name: Option<String>,
    pub version: Option<String>,
    pub date: Option<String>,
    pub language: Option<String>,
    pub subtitles: Option<String>,
    pub file_format: Option<String>,
    pub video_format: Option<String>,
    pub video_aspect: Option<String>,
    pub video_resolution: Option<String>,
    pub cadence: Option<String>,
    pub audio_format: Option<String>,
    pub audio_codec: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid value '{value}' for {field}")]
    InvalidChoice { field: &'static str, value: String },
}

/// Validates `req` against the mandatory-field rules and the choice lists.
///
/// All missing fields are reported together. Choice membership is only checked
/// once nothing is missing.
pub fn validate_request(
    req: &AddEntryRequest,
    catalog: &FormatCatalog,
) -> Result<FieldSet, ValidationError> {
    let program = text(&req.program_name);
    let date_raw = text(&req.date);
    let language = text(&req.language);
    let subtitles = text(&req.subtitles);
    let file_format = text(&req.file_format);
    let video_format = text(&req.video_format);
    let audio_format = text(&req.audio_format);

    let mut missing = Vec::new();
    // A program made only of symbols sanitizes to nothing and would vanish from the name.
    if sanitize(program).is_empty() {
        missing.push("program_name");
    }
    for (name, value) in [
        ("date", date_raw),
        ("language", language),
        ("subtitles", subtitles),
        ("file_format", file_format),
        ("video_format", video_format),
        ("audio_format", audio_format),
    ] {
        if value.is_empty() {
            missing.push(name);
        }
    }
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    let language = Language::from_code(language).ok_or_else(|| invalid("language", language))?;
    let subtitles =
        SubtitleChoice::from_code(subtitles).ok_or_else(|| invalid("subtitles", subtitles))?;
    if !catalog.is_file_format(file_format) {
        return Err(invalid("file_format", file_format));
    }
    if !catalog.is_video_format(video_format) {
        return Err(invalid("video_format", video_format));
    }
    let audio_format =
        AudioFormat::from_code(audio_format).ok_or_else(|| invalid("audio_format", audio_format))?;
    let cadence = match text(&req.cadence) {
        "" => None,
        code => Some(Cadence::from_code(code).ok_or_else(|| invalid("cadence", code))?),
    };

    Ok(FieldSet {
        program: program.to_string(),
        version: text(&req.version).to_string(),
        date: parse_date(date_raw),
        language,
        subtitles: Some(subtitles),
        file_format: file_format.to_string(),
        video_format: video_format.to_string(),
        video_aspect: text(&req.video_aspect).to_string(),
        video_resolution: text(&req.video_resolution).to_string(),
        cadence,
        audio_format,
        audio_codec: text(&req.audio_codec).to_string(),
    })
}

/// Parses `YYYY-MM-DD`. Failure is masked: the builder substitutes today.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            warn!(date = raw, error = %e, "Unparsable date, falling back to today");
            None
        }
    }
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().map(str::trim).unwrap_or("")
}

fn invalid(field: &'static str, value: &str) -> ValidationError {
    ValidationError::InvalidChoice {
        field,
        value: value.to_string(),
    }
}
