//! Page geometry and the full report configuration.

use serde::{Deserialize, Serialize};

use crate::layout::card::{default_card_style, CardStyle};
use crate::layout::font_metrics::Font;

/// A4 in points.
pub const A4_WIDTH_PT: f32 = 595.2756;
pub const A4_HEIGHT_PT: f32 = 841.8898;

/// Page size and margins in points. PDF coordinates: origin bottom-left.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
    pub margin_right: f32,
}

impl PageGeometry {
    pub fn content_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }
}

/// Everything the layout pass needs besides the entries themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub page: PageGeometry,
    pub card: CardStyle,
    pub title_font: Font,
    pub title_size: f32,
    /// Distance from the title baseline to the top of the first card.
    pub title_gap: f32,
}

impl ReportConfig {
    pub fn title_baseline(&self) -> f32 {
        self.page.height - self.page.margin_top - self.title_size
    }

    /// Y of the top of the first card on every page.
    pub fn flow_top(&self) -> f32 {
        self.title_baseline() - self.title_gap
    }

    /// Vertical space available to cards on a fresh page.
    pub fn flow_height(&self) -> f32 {
        self.flow_top() - self.page.margin_bottom
    }
}

/// A4 portrait, title 80pt below the top edge, 40pt side margins, 50pt bottom margin.
pub fn default_report_config() -> ReportConfig {
    ReportConfig {
        page: PageGeometry {
            width: A4_WIDTH_PT,
            height: A4_HEIGHT_PT,
            margin_top: 64.0,
            margin_bottom: 50.0,
            margin_left: 40.0,
            margin_right: 40.0,
        },
        card: default_card_style(),
        title_font: Font::HelveticaBold,
        title_size: 16.0,
        title_gap: 40.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_sanity() {
        let config = default_report_config();
        assert!((config.title_baseline() - (A4_HEIGHT_PT - 80.0)).abs() < 1e-3);
        assert!((config.flow_top() - (A4_HEIGHT_PT - 120.0)).abs() < 1e-3);
        assert!(config.flow_height() > 600.0);
        assert!((config.page.content_width() - (A4_WIDTH_PT - 80.0)).abs() < 1e-3);
    }
}
