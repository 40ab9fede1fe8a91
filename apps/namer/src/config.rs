use anyhow::{Context, Result};

use crate::naming::catalog::{
    parse_list, FormatCatalog, DEFAULT_FILE_FORMATS, DEFAULT_VIDEO_FORMATS,
};

/// Application configuration loaded from environment variables (and `.env` if present).
/// Read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Allowed values for the file-format and video-format fields.
    pub catalog: FormatCatalog,
    /// List variables that were unset or blank and fell back to their defaults.
    /// Logged by `main` once tracing is up.
    pub defaulted: Vec<&'static str>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let (catalog, defaulted) = load_catalog(
            std::env::var("FILE_FORMATS").ok().as_deref(),
            std::env::var("VIDEO_FORMATS").ok().as_deref(),
        );

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            catalog,
            defaulted,
        })
    }
}

fn load_catalog(
    file_formats: Option<&str>,
    video_formats: Option<&str>,
) -> (FormatCatalog, Vec<&'static str>) {
    let mut defaulted = Vec::new();
    let catalog = FormatCatalog {
        file_formats: list_or_default(
            "FILE_FORMATS",
            file_formats,
            DEFAULT_FILE_FORMATS,
            &mut defaulted,
        ),
        video_formats: list_or_default(
            "VIDEO_FORMATS",
            video_formats,
            DEFAULT_VIDEO_FORMATS,
            &mut defaulted,
        ),
    };
    (catalog, defaulted)
}

/// Parses a comma-separated list, materializing `default` when unset or blank.
fn list_or_default(
    key: &'static str,
    raw: Option<&str>,
    default: &[&str],
    defaulted: &mut Vec<&'static str>,
) -> Vec<String> {
    let parsed = raw.map(parse_list).unwrap_or_default();
    if parsed.is_empty() {
        defaulted.push(key);
        return default.iter().map(|s| s.to_string()).collect();
    }
    parsed
}
