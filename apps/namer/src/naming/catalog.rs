//! Allowed values for the choice fields of the export form.
//!
//! File and video formats come from configuration; everything else is a fixed
//! enumeration from `naming::fields`.

use serde::Serialize;

use crate::naming::fields::{AudioFormat, Cadence, Language, SubtitleChoice};
use crate::naming::segment::SegmentCategory;

pub const DEFAULT_FILE_FORMATS: &[&str] = &["MOV", "MXF", "MP4", "AVI", "ProRes", "DNxHD"];
pub const DEFAULT_VIDEO_FORMATS: &[&str] = &["SD", "HD", "4K"];

/// Display bound for the description edit field. Stored descriptions are never cut.
pub const DESCRIPTION_DISPLAY_CHARS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatCatalog {
    pub file_formats: Vec<String>,
    pub video_formats: Vec<String>,
}

impl Default for FormatCatalog {
    fn default() -> Self {
        FormatCatalog {
            file_formats: to_owned_list(DEFAULT_FILE_FORMATS),
            video_formats: to_owned_list(DEFAULT_VIDEO_FORMATS),
        }
    }
}

impl FormatCatalog {
    pub fn is_file_format(&self, value: &str) -> bool {
        self.file_formats.iter().any(|f| f == value)
    }

    pub fn is_video_format(&self, value: &str) -> bool {
        self.video_formats.iter().any(|f| f == value)
    }

    /// Everything the form needs to render its selects.
    pub fn options(&self) -> FormOptions {
        FormOptions {
            languages: Language::ALL
                .into_iter()
                .map(|l| CodeLabel::new(l.code(), l.label()))
                .collect(),
            subtitles: SubtitleChoice::all()
                .into_iter()
                .map(|s| CodeLabel::new(s.code(), s.label()))
                .collect(),
            file_formats: self.file_formats.clone(),
            video_formats: self.video_formats.clone(),
            cadences: std::iter::once("")
                .chain(Cadence::ALL.into_iter().map(Cadence::code))
                .map(str::to_string)
                .collect(),
            audio_formats: AudioFormat::ALL
                .into_iter()
                .map(|a| CodeLabel::new(a.code(), a.label()))
                .collect(),
            segment_colors: SegmentCategory::ALL
                .into_iter()
                .map(|c| SegmentColor {
                    category: c,
                    color: c.color(),
                })
                .collect(),
            description_display_chars: DESCRIPTION_DISPLAY_CHARS,
        }
    }
}

/// Splits a comma-separated list, trimming entries and dropping blanks.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct CodeLabel {
    pub code: &'static str,
    pub label: &'static str,
}

impl CodeLabel {
    fn new(code: &'static str, label: &'static str) -> Self {
        CodeLabel { code, label }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SegmentColor {
    pub category: SegmentCategory,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormOptions {
    pub languages: Vec<CodeLabel>,
    pub subtitles: Vec<CodeLabel>,
    pub file_formats: Vec<String>,
    pub video_formats: Vec<String>,
    /// First entry is the empty "no cadence" choice.
    pub cadences: Vec<String>,
    pub audio_formats: Vec<CodeLabel>,
    pub segment_colors: Vec<SegmentColor>,
    pub description_display_chars: usize,
}
