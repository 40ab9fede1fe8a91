//! Filename assembly: FieldSet → ordered typed segments → delimited filename.
//!
//! Pure and total. Required-field validation happens before this is called
//! (see `naming::validation`), so every input here produces a filename.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::naming::fields::{FieldSet, SubtitleChoice};
use crate::naming::sanitize::{normalize_aspect, sanitize};
use crate::naming::segment::{Segment, SegmentCategory};

pub const SEGMENT_DELIMITER: char = '_';

/// Builder output: the final filename plus the typed segments it was joined from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuiltFilename {
    pub filename: String,
    pub segments: Vec<Segment>,
}

/// Builds the export filename for `fields`.
///
/// `today` stands in for a missing date, so callers control the clock.
pub fn build_filename(fields: &FieldSet, today: NaiveDate) -> BuiltFilename {
    let mut segments = Vec::with_capacity(SegmentCategory::ALL.len());

    let mut push = |category: SegmentCategory, value: String| {
        if category.is_optional() && value.is_empty() {
            return;
        }
        segments.push(Segment::new(category, value));
    };

    push(SegmentCategory::Program, sanitize(&fields.program));
    push(SegmentCategory::Version, sanitize(&fields.version));
    push(
        SegmentCategory::LangSub,
        lang_sub_value(fields.language.code(), fields.subtitles),
    );
    push(SegmentCategory::FileFormat, fields.file_format.clone());
    push(SegmentCategory::VideoFormat, fields.video_format.clone());
    push(
        SegmentCategory::VideoAspect,
        normalize_aspect(&fields.video_aspect),
    );
    push(
        SegmentCategory::Resolution,
        sanitize(&fields.video_resolution),
    );
    push(
        SegmentCategory::Cadence,
        fields
            .cadence
            .map(|c| c.code().to_string())
            .unwrap_or_default(),
    );
    push(
        SegmentCategory::AudioFormat,
        fields.audio_format.code().to_string(),
    );
    push(SegmentCategory::AudioCodec, sanitize(&fields.audio_codec));
    push(
        SegmentCategory::Date,
        date_code(fields.date.unwrap_or(today)),
    );

    let filename = join_segments(&segments);
    BuiltFilename { filename, segments }
}

/// Joins segment values with the delimiter. Empty values contribute nothing,
/// not even a separator.
pub fn join_segments(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| s.value.as_str())
        .filter(|v| !v.is_empty())
        .collect::<Vec<_>>()
        .join(&SEGMENT_DELIMITER.to_string())
}

/// `YYMMDD`, e.g. 2025-03-07 → `250307`.
pub fn date_code(date: NaiveDate) -> String {
    date.format("%y%m%d").to_string()
}

/// Subtitle half of the fused language/subtitle token.
fn subtitle_tag(subtitles: Option<SubtitleChoice>) -> String {
    match subtitles {
        Some(SubtitleChoice::NoSubtitles) => "NOSUB".to_string(),
        Some(SubtitleChoice::Language(lang)) => format!("ST{}", lang.code()),
        None => String::new(),
    }
}

fn lang_sub_value(language: &str, subtitles: Option<SubtitleChoice>) -> String {
    let tag = subtitle_tag(subtitles);
    if tag.is_empty() {
        language.to_string()
    } else {
        format!("{language}-{tag}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::fields::{AudioFormat, Cadence, Language};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn make_fields() -> FieldSet {
        FieldSet {
            program: "My Show!".to_string(),
            version: String::new(),
            date: Some(d(2025, 3, 7)),
            language: Language::En,
            subtitles: Some(SubtitleChoice::NoSubtitles),
            file_format: "MOV".to_string(),
            video_format: "HD".to_string(),
            video_aspect: "1.85".to_string(),
            video_resolution: "1920x1080".to_string(),
            cadence: Some(Cadence::Fps24),
            audio_format: AudioFormat::Stereo,
            audio_codec: "AAC".to_string(),
        }
    }

    #[test]
    fn test_reference_filename() {
        let built = build_filename(&make_fields(), d(2030, 1, 1));
        assert_eq!(
            built.filename,
            "My_Show_EN-NOSUB_MOV_HD_185_1920x1080_24_20_AAC_250307"
        );
        assert!(built
            .segments
            .iter()
            .all(|s| s.category != SegmentCategory::Version));
    }

    #[test]
    fn test_segments_follow_category_order() {
        let mut fields = make_fields();
        fields.version = "v2".to_string();
        let built = build_filename(&fields, d(2030, 1, 1));
        let categories: Vec<SegmentCategory> =
            built.segments.iter().map(|s| s.category).collect();
        assert_eq!(categories, SegmentCategory::ALL.to_vec());
        assert_eq!(join_segments(&built.segments), built.filename);
    }

    #[test]
    fn test_subtitle_language_fuses_with_st_prefix() {
        let mut fields = make_fields();
        fields.subtitles = Some(SubtitleChoice::Language(Language::Fr));
        let built = build_filename(&fields, d(2030, 1, 1));
        assert_eq!(built.segments[1].category, SegmentCategory::LangSub);
        assert_eq!(built.segments[1].value, "EN-STFR");
    }

    #[test]
    fn test_no_subtitle_choice_leaves_language_alone() {
        let mut fields = make_fields();
        fields.subtitles = None;
        let built = build_filename(&fields, d(2030, 1, 1));
        assert_eq!(built.segments[1].value, "EN");
        assert!(built.filename.starts_with("My_Show_EN_MOV"));
    }

    #[test]
    fn test_all_optional_segments_empty() {
        let mut fields = make_fields();
        fields.video_aspect = String::new();
        fields.video_resolution = "  ".to_string();
        fields.cadence = None;
        fields.audio_codec = "--".to_string();
        let built = build_filename(&fields, d(2030, 1, 1));
        assert_eq!(built.filename, "My_Show_EN-NOSUB_MOV_HD_20_250307");
        assert!(!built.filename.contains("__"));
        assert!(built.segments.iter().all(|s| !s.value.is_empty()));
    }

    #[test]
    fn test_version_is_sanitized_and_kept() {
        let mut fields = make_fields();
        fields.version = " Director's Cut ".to_string();
        let built = build_filename(&fields, d(2030, 1, 1));
        assert_eq!(
            built.segments[1],
            Segment::new(SegmentCategory::Version, "Directors_Cut")
        );
    }

    #[test]
    fn test_missing_date_uses_today() {
        let mut fields = make_fields();
        fields.date = None;
        let built = build_filename(&fields, d(2026, 10, 19));
        assert!(built.filename.ends_with("_261019"));
        assert_eq!(
            built.segments.last().map(|s| s.category),
            Some(SegmentCategory::Date)
        );
    }

    #[test]
    fn test_decimal_cadence_is_written_verbatim() {
        let mut fields = make_fields();
        fields.cadence = Some(Cadence::Fps23_976);
        let built = build_filename(&fields, d(2030, 1, 1));
        assert!(built.filename.contains("_23.976_"));
    }

    #[test]
    fn test_surround_audio_code() {
        let mut fields = make_fields();
        fields.audio_format = AudioFormat::Surround;
        let built = build_filename(&fields, d(2030, 1, 1));
        assert!(built.filename.contains("_24_51_AAC_"));
    }

    #[test]
    fn test_date_code_pads_fields() {
        assert_eq!(date_code(d(2009, 1, 2)), "090102");
    }

    #[test]
    fn test_build_is_deterministic() {
        let fields = make_fields();
        assert_eq!(
            build_filename(&fields, d(2030, 1, 1)),
            build_filename(&fields, d(2030, 1, 1))
        );
    }
}
