// PDF export: layout → bytes, plus the HTTP handlers that serve them.

pub mod handlers;
pub mod pdf;

use chrono::NaiveDate;

use crate::layout::{layout_report, report_title, CardContent, LayoutError, ReportConfig};
use crate::naming::sanitize::sanitize;

/// Used when no usable program name is available.
pub const DEFAULT_PROGRAM: &str = "PROGRAM";

/// A rendered report ready to be sent as an attachment.
#[derive(Debug, Clone)]
pub struct ExportedReport {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub pages: usize,
}

/// `<sanitized program>_<YYYYMMDD>_export_list.pdf`
pub fn export_filename(program: &str, today: NaiveDate) -> String {
    format!(
        "{}_{}_export_list.pdf",
        sanitize(program),
        today.format("%Y%m%d")
    )
}

/// Picks the report's program name: the given one if it survives sanitation,
/// else `DEFAULT_PROGRAM`.
pub fn effective_program(program: Option<&str>) -> &str {
    choose_program(program, None)
}

/// First usable name of `requested` then `remembered`, else `DEFAULT_PROGRAM`.
/// A name is usable when something survives sanitation.
pub fn choose_program<'a>(requested: Option<&'a str>, remembered: Option<&'a str>) -> &'a str {
    let usable = |p: &&str| !sanitize(p).is_empty();
    requested
        .filter(usable)
        .or_else(|| remembered.filter(usable))
        .unwrap_or(DEFAULT_PROGRAM)
}

/// Lays out and renders `items` into a PDF.
pub fn export_report(
    program: &str,
    items: &[CardContent<'_>],
    today: NaiveDate,
    config: &ReportConfig,
) -> Result<ExportedReport, LayoutError> {
    let title = report_title(program, today);
    let layout = layout_report(items, &title, config)?;
    let bytes = pdf::render_pdf(&layout, config, &title);

    Ok(ExportedReport {
        filename: export_filename(program, today),
        pages: layout.pages.len(),
        bytes,
    })
}
