// Report layout: font metrics, card sizing, and greedy page flow.
// Pure geometry only; PDF bytes are produced by `render`.

pub mod card;
pub mod flow;
pub mod font_metrics;
pub mod page;

// Re-export the public API consumed by other modules (render, handlers).
pub use flow::{layout_report, report_title, CardContent, LayoutError, ReportLayout};
pub use page::{default_report_config, ReportConfig};
