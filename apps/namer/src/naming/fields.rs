//! Typed form fields and the fixed enumerations offered by the export form.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Fixed enumerations
// ────────────────────────────────────────────────────────────────────────────

/// Spoken language of the master. Serialized as its two-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    Fr,
    Es,
    En,
    Hi,
    Ar,
    Bn,
    Pt,
    Ru,
    Ja,
    Pa,
    Mr,
    Te,
    Vi,
    Ko,
    Zh,
    De,
    Ta,
    Ur,
    Jv,
    It,
}

impl Language {
    /// Form order.
    pub const ALL: [Language; 20] = [
        Language::Fr,
        Language::Es,
        Language::En,
        Language::Hi,
        Language::Ar,
        Language::Bn,
        Language::Pt,
        Language::Ru,
        Language::Ja,
        Language::Pa,
        Language::Mr,
        Language::Te,
        Language::Vi,
        Language::Ko,
        Language::Zh,
        Language::De,
        Language::Ta,
        Language::Ur,
        Language::Jv,
        Language::It,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::Fr => "FR",
            Language::Es => "ES",
            Language::En => "EN",
            Language::Hi => "HI",
            Language::Ar => "AR",
            Language::Bn => "BN",
            Language::Pt => "PT",
            Language::Ru => "RU",
            Language::Ja => "JA",
            Language::Pa => "PA",
            Language::Mr => "MR",
            Language::Te => "TE",
            Language::Vi => "VI",
            Language::Ko => "KO",
            Language::Zh => "ZH",
            Language::De => "DE",
            Language::Ta => "TA",
            Language::Ur => "UR",
            Language::Jv => "JV",
            Language::It => "IT",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::Fr => "Français",
            Language::Es => "Espagnol",
            Language::En => "Anglais",
            Language::Hi => "Hindi",
            Language::Ar => "Arabe",
            Language::Bn => "Bengali",
            Language::Pt => "Portugais",
            Language::Ru => "Russe",
            Language::Ja => "Japonais",
            Language::Pa => "Pendjabi",
            Language::Mr => "Marathi",
            Language::Te => "Télougou",
            Language::Vi => "Vietnamien",
            Language::Ko => "Coréen",
            Language::Zh => "Mandarin",
            Language::De => "Allemand",
            Language::Ta => "Tamoul",
            Language::Ur => "Ourdou",
            Language::Jv => "Javanais",
            Language::It => "Italien",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|l| l.code() == code)
    }
}

/// Subtitle track state of the master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubtitleChoice {
    /// Burned-in or sidecar subtitles in the given language.
    Language(Language),
    /// Explicitly no subtitles ("NOSUB").
    NoSubtitles,
}

pub const NO_SUBTITLES_CODE: &str = "NOSUB";

impl SubtitleChoice {
    pub fn code(self) -> &'static str {
        match self {
            SubtitleChoice::Language(l) => l.code(),
            SubtitleChoice::NoSubtitles => NO_SUBTITLES_CODE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SubtitleChoice::Language(l) => l.label(),
            SubtitleChoice::NoSubtitles => "NoSub",
        }
    }

    pub fn from_code(code: &str) -> Option<SubtitleChoice> {
        if code == NO_SUBTITLES_CODE {
            return Some(SubtitleChoice::NoSubtitles);
        }
        Language::from_code(code).map(SubtitleChoice::Language)
    }

    /// Languages first, then the no-subtitles sentinel.
    pub fn all() -> Vec<SubtitleChoice> {
        Language::ALL
            .into_iter()
            .map(SubtitleChoice::Language)
            .chain(std::iter::once(SubtitleChoice::NoSubtitles))
            .collect()
    }
}

/// Frame cadence. The empty choice is modelled as `Option<Cadence>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cadence {
    Fps23_976,
    Fps24,
    Fps25,
    Fps29_97,
    Fps30,
    Fps50,
    Fps59_94,
}

impl Cadence {
    pub const ALL: [Cadence; 7] = [
        Cadence::Fps23_976,
        Cadence::Fps24,
        Cadence::Fps25,
        Cadence::Fps29_97,
        Cadence::Fps30,
        Cadence::Fps50,
        Cadence::Fps59_94,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Cadence::Fps23_976 => "23.976",
            Cadence::Fps24 => "24",
            Cadence::Fps25 => "25",
            Cadence::Fps29_97 => "29.97",
            Cadence::Fps30 => "30",
            Cadence::Fps50 => "50",
            Cadence::Fps59_94 => "59.94",
        }
    }

    pub fn from_code(code: &str) -> Option<Cadence> {
        Cadence::ALL.into_iter().find(|c| c.code() == code)
    }
}

/// Audio channel layout, written into the filename as its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioFormat {
    Stereo,
    Surround,
}

impl AudioFormat {
    pub const ALL: [AudioFormat; 2] = [AudioFormat::Stereo, AudioFormat::Surround];

    pub fn code(self) -> &'static str {
        match self {
            AudioFormat::Stereo => "20",
            AudioFormat::Surround => "51",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AudioFormat::Stereo => "Stereo",
            AudioFormat::Surround => "Surround",
        }
    }

    pub fn from_code(code: &str) -> Option<AudioFormat> {
        AudioFormat::ALL.into_iter().find(|a| a.code() == code)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// FieldSet
// ────────────────────────────────────────────────────────────────────────────

/// Validated input to the filename builder.
///
/// Free-text fields hold the raw user text; sanitation happens inside the builder.
/// `date` is `None` when the caller could not parse one, in which case the builder
/// substitutes the current date.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSet {
    pub program: String,
    pub version: String,
    pub date: Option<NaiveDate>,
    pub language: Language,
    pub subtitles: Option<SubtitleChoice>,
    pub file_format: String,
    pub video_format: String,
    pub video_aspect: String,
    pub video_resolution: String,
    pub cadence: Option<Cadence>,
    pub audio_format: AudioFormat,
    pub audio_codec: String,
}
