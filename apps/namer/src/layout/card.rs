//! Card style and content-driven card sizing.
//!
//! A card has two columns: the icon column (file icon, optional id label under it)
//! and the text column (filename line, optional description line). Its height is
//! the taller column plus padding, never less than the fixed minimum.

use serde::{Deserialize, Serialize};

use crate::layout::font_metrics::Font;

/// Visual constants for one report card. All lengths in points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardStyle {
    /// Inner padding on every side, and the gap between icon and text columns.
    pub padding: f32,
    pub icon_width: f32,
    pub icon_height: f32,
    /// Gap between the icon and its id label.
    pub icon_label_gap: f32,
    /// Gap between the filename and description lines.
    pub line_gap: f32,
    /// Vertical space between consecutive cards.
    pub card_gap: f32,
    pub corner_radius: f32,
    /// Line height as a multiple of font size.
    pub leading: f32,
    pub filename_font: Font,
    pub filename_size: f32,
    pub description_font: Font,
    pub description_size: f32,
    pub id_font: Font,
    pub id_size: f32,
    /// Display-only hard cuts, in characters.
    pub filename_max_chars: usize,
    pub description_max_chars: usize,
}

pub fn default_card_style() -> CardStyle {
    CardStyle {
        padding: 12.0,
        icon_width: 14.0,
        icon_height: 18.0,
        icon_label_gap: 3.0,
        line_gap: 4.0,
        card_gap: 12.0,
        corner_radius: 8.0,
        leading: 1.2,
        filename_font: Font::HelveticaBold,
        filename_size: 12.0,
        description_font: Font::HelveticaOblique,
        description_size: 10.0,
        id_font: Font::Helvetica,
        id_size: 7.0,
        filename_max_chars: 50,
        description_max_chars: 60,
    }
}

impl CardStyle {
    pub fn line_height(&self, size: f32) -> f32 {
        size * self.leading
    }
}

/// Height breakdown for one card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CardHeight {
    /// Icon plus id label, without padding.
    pub icon_column: f32,
    /// Filename plus description lines, without padding.
    pub text_column: f32,
    /// Floor: icon or one filename line, whichever is taller, plus padding.
    pub minimum: f32,
    pub total: f32,
}

/// Sizes a card from which optional lines it carries.
pub fn card_height(has_description: bool, has_id: bool, style: &CardStyle) -> CardHeight {
    let filename_line = style.line_height(style.filename_size);

    let mut icon_column = style.icon_height;
    if has_id {
        icon_column += style.icon_label_gap + style.line_height(style.id_size);
    }

    let mut text_column = filename_line;
    if has_description {
        text_column += style.line_gap + style.line_height(style.description_size);
    }

    let minimum = 2.0 * style.padding + style.icon_height.max(filename_line);
    let content = 2.0 * style.padding + icon_column.max(text_column);

    CardHeight {
        icon_column,
        text_column,
        minimum,
        total: content.max(minimum),
    }
}

/// Hard cut at `max` characters (not bytes). Display-only.
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
