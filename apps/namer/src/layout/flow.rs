//! Report flow layout: places cards top to bottom and breaks pages greedily.
//!
//! # Algorithm
//! - Every page opens with the title line; the cursor starts `title_gap` below it.
//! - Each card is sized by `card_height` from the lines it actually carries.
//! - If the card would cross the bottom margin, a new page is opened first.
//! - A card that cannot fit even on a fresh page is a `LayoutError`, checked
//!   before anything is placed.
//!
//! The output is plain geometry; `render::pdf` turns it into PDF operators.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::layout::card::{card_height, truncate_chars, CardStyle};
use crate::layout::font_metrics::{get_metrics, Font};
use crate::layout::page::ReportConfig;
use crate::naming::sanitize::sanitize;

// ────────────────────────────────────────────────────────────────────────────
// Input / output types
// ────────────────────────────────────────────────────────────────────────────

/// The three strings a card shows. Empty `description`/`id` drop their line.
#[derive(Debug, Clone, Copy)]
pub struct CardContent<'a> {
    pub filename: &'a str,
    pub description: &'a str,
    pub id: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    /// Bottom edge.
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn top(&self) -> f32 {
        self.y + self.height
    }
}

/// A single line of text at a baseline position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    pub text: String,
    pub font: Font,
    pub size: f32,
    pub x: f32,
    pub y: f32,
    /// Measured advance width in points.
    pub width: f32,
}

impl TextRun {
    fn new(text: String, font: Font, size: f32, x: f32, y: f32) -> Self {
        let width = get_metrics(font).width_pt(&text, size);
        TextRun {
            text,
            font,
            size,
            x,
            y,
            width,
        }
    }
}

/// One placed card, with its parts listed in draw order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardPlacement {
    /// Position of the source entry in the input slice.
    pub entry_index: usize,
    pub frame: Rect,
    pub icon: Rect,
    pub id_label: Option<TextRun>,
    pub filename: TextRun,
    pub description: Option<TextRun>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageLayout {
    pub title: TextRun,
    pub cards: Vec<CardPlacement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportLayout {
    pub pages: Vec<PageLayout>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("card needs {required:.1}pt of height but a page only has {available:.1}pt")]
    PageTooSmall { required: f32, available: f32 },

    #[error("card needs {required:.1}pt of width but a page only has {available:.1}pt")]
    PageTooNarrow { required: f32, available: f32 },
}

// ────────────────────────────────────────────────────────────────────────────
// Public entry points
// ────────────────────────────────────────────────────────────────────────────

/// `EXPORT LIST <sanitized program> <YYYYMMDD>`.
pub fn report_title(program: &str, today: NaiveDate) -> String {
    format!("EXPORT LIST {} {}", sanitize(program), today.format("%Y%m%d"))
}

/// Lays out `items` across as many pages as needed. Zero items still yields one
/// page carrying only the title.
pub fn layout_report(
    items: &[CardContent<'_>],
    title: &str,
    config: &ReportConfig,
) -> Result<ReportLayout, LayoutError> {
    let style = &config.card;
    check_fits(items, config)?;

    let bottom = config.page.margin_bottom;
    let mut pages = vec![new_page(title, config)];
    let mut cursor = config.flow_top();

    for (index, item) in items.iter().enumerate() {
        let height = card_height(!item.description.is_empty(), !item.id.is_empty(), style).total;

        if cursor - height < bottom && !current_cards(&pages).is_empty() {
            pages.push(new_page(title, config));
            cursor = config.flow_top();
        }

        let card = place_card(index, item, cursor, height, config);
        if let Some(page) = pages.last_mut() {
            page.cards.push(card);
        }
        cursor -= height + style.card_gap;
    }

    debug!(
        entries = items.len(),
        pages = pages.len(),
        "Report layout complete"
    );
    Ok(ReportLayout { pages })
}

// ────────────────────────────────────────────────────────────────────────────
// Internal helpers
// ────────────────────────────────────────────────────────────────────────────

fn current_cards(pages: &[PageLayout]) -> &[CardPlacement] {
    pages.last().map(|p| p.cards.as_slice()).unwrap_or(&[])
}

fn new_page(title: &str, config: &ReportConfig) -> PageLayout {
    PageLayout {
        title: TextRun::new(
            title.to_string(),
            config.title_font,
            config.title_size,
            config.page.margin_left,
            config.title_baseline(),
        ),
        cards: Vec::new(),
    }
}

/// Width of the icon column: the icon, or the id label if that is wider.
fn icon_lane_width(id: &str, style: &CardStyle) -> f32 {
    if id.is_empty() {
        return style.icon_width;
    }
    let label = get_metrics(style.id_font).width_pt(id, style.id_size);
    style.icon_width.max(label)
}

fn check_fits(items: &[CardContent<'_>], config: &ReportConfig) -> Result<(), LayoutError> {
    let style = &config.card;
    let available_height = config.flow_height();
    let available_width = config.page.content_width();

    for item in items {
        let required_height =
            card_height(!item.description.is_empty(), !item.id.is_empty(), style).total;
        if required_height > available_height {
            return Err(LayoutError::PageTooSmall {
                required: required_height,
                available: available_height.max(0.0),
            });
        }

        // padding | icon lane | padding | text column (non-empty) | padding
        let required_width = 3.0 * style.padding + icon_lane_width(item.id, style);
        if required_width >= available_width {
            return Err(LayoutError::PageTooNarrow {
                required: required_width,
                available: available_width.max(0.0),
            });
        }
    }
    Ok(())
}

/// Places one card whose top edge is at `top`.
fn place_card(
    entry_index: usize,
    item: &CardContent<'_>,
    top: f32,
    height: f32,
    config: &ReportConfig,
) -> CardPlacement {
    let style = &config.card;
    let frame = Rect {
        x: config.page.margin_left,
        y: top - height,
        width: config.page.content_width(),
        height,
    };

    let lane = icon_lane_width(item.id, style);
    let lane_x = frame.x + style.padding;
    let icon = Rect {
        x: lane_x + (lane - style.icon_width) / 2.0,
        y: top - style.padding - style.icon_height,
        width: style.icon_width,
        height: style.icon_height,
    };

    let id_label = (!item.id.is_empty()).then(|| {
        let width = get_metrics(style.id_font).width_pt(item.id, style.id_size);
        TextRun::new(
            item.id.to_string(),
            style.id_font,
            style.id_size,
            lane_x + (lane - width) / 2.0,
            icon.y - style.icon_label_gap - style.id_size,
        )
    });

    let text_x = lane_x + lane + style.padding;
    let filename_top = top - style.padding;
    let filename = TextRun::new(
        truncate_chars(item.filename, style.filename_max_chars),
        style.filename_font,
        style.filename_size,
        text_x,
        filename_top - style.filename_size,
    );

    let description = (!item.description.is_empty()).then(|| {
        let line_top = filename_top - style.line_height(style.filename_size) - style.line_gap;
        TextRun::new(
            truncate_chars(item.description, style.description_max_chars),
            style.description_font,
            style.description_size,
            text_x,
            line_top - style.description_size,
        )
    });

    CardPlacement {
        entry_index,
        frame,
        icon,
        id_label,
        filename,
        description,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::page::default_report_config;

    const FILENAME: &str = "My_Show_EN-NOSUB_MOV_HD_185_1920x1080_24_20_AAC_250307";

    fn make_items<'a>(
        n: usize,
        description: &'static str,
        ids: &'a [String],
    ) -> Vec<CardContent<'a>> {
        (0..n)
            .map(|i| CardContent {
                filename: FILENAME,
                description,
                id: ids.get(i).map(String::as_str).unwrap_or(""),
            })
            .collect()
    }

    fn make_ids(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("{i:02}")).collect()
    }

    fn full_items(ids: &[String]) -> Vec<CardContent<'_>> {
        make_items(ids.len(), "Clean master", ids)
    }

    #[test]
    fn test_report_title_format() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(
            report_title("My Show!", today),
            "EXPORT LIST My_Show 20261019"
        );
    }

    #[test]
    fn test_empty_report_has_one_title_page() {
        let layout = layout_report(&[], "EXPORT LIST X 20260101", &default_report_config()).unwrap();
        assert_eq!(layout.pages.len(), 1);
        assert!(layout.pages[0].cards.is_empty());
        assert_eq!(layout.pages[0].title.text, "EXPORT LIST X 20260101");
    }

    #[test]
    fn test_ten_full_cards_per_a4_page() {
        let config = default_report_config();
        let ids = make_ids(11);
        let layout = layout_report(&full_items(&ids), "T", &config).unwrap();
        assert_eq!(layout.pages.len(), 2);
        assert_eq!(layout.pages[0].cards.len(), 10);
        assert_eq!(layout.pages[1].cards.len(), 1);
        assert_eq!(layout.pages[1].cards[0].entry_index, 10);
    }

    #[test]
    fn test_page_count_monotonic_and_no_card_crosses_bottom_margin() {
        let config = default_report_config();
        let ids = make_ids(60);
        let mut previous_pages = 0;
        for n in 0..=60 {
            let layout = layout_report(&full_items(&ids[..n]), "T", &config).unwrap();
            assert!(layout.pages.len() >= previous_pages, "page count dropped at n={n}");
            previous_pages = layout.pages.len();

            for page in &layout.pages {
                for card in &page.cards {
                    assert!(
                        card.frame.y >= config.page.margin_bottom - 1e-3,
                        "card {} crosses bottom margin",
                        card.entry_index
                    );
                    assert!(card.frame.top() <= config.flow_top() + 1e-3);
                }
            }
        }
    }

    #[test]
    fn test_every_entry_placed_once_in_order() {
        let ids = make_ids(25);
        let layout = layout_report(&full_items(&ids), "T", &default_report_config()).unwrap();
        let order: Vec<usize> = layout
            .pages
            .iter()
            .flat_map(|p| p.cards.iter().map(|c| c.entry_index))
            .collect();
        assert_eq!(order, (0..25).collect::<Vec<_>>());
    }

    #[test]
    fn test_cards_without_description_are_shorter_and_pack_denser() {
        let config = default_report_config();
        let ids = make_ids(30);
        let with = layout_report(&make_items(30, "notes", &ids), "T", &config).unwrap();
        let without = layout_report(&make_items(30, "", &ids), "T", &config).unwrap();
        assert!(without.pages[0].cards[0].frame.height < with.pages[0].cards[0].frame.height);
        assert!(without.pages[0].cards.len() >= with.pages[0].cards.len());
        assert!(without.pages[0].cards[0].description.is_none());
    }

    #[test]
    fn test_cards_do_not_overlap() {
        let config = default_report_config();
        let ids = make_ids(10);
        let layout = layout_report(&full_items(&ids), "T", &config).unwrap();
        for pair in layout.pages[0].cards.windows(2) {
            let gap = pair[0].frame.y - pair[1].frame.top();
            assert!((gap - config.card.card_gap).abs() < 1e-3);
        }
    }

    #[test]
    fn test_text_is_truncated_for_display() {
        let long_desc = "d".repeat(100);
        let long_name = "N".repeat(80);
        let items = [CardContent {
            filename: &long_name,
            description: &long_desc,
            id: "01",
        }];
        let layout = layout_report(&items, "T", &default_report_config()).unwrap();
        let card = &layout.pages[0].cards[0];
        assert_eq!(card.filename.text.chars().count(), 50);
        assert_eq!(
            card.description.as_ref().map(|d| d.text.chars().count()),
            Some(60)
        );
    }

    #[test]
    fn test_id_label_sits_under_icon() {
        let items = [CardContent {
            filename: FILENAME,
            description: "",
            id: "07",
        }];
        let layout = layout_report(&items, "T", &default_report_config()).unwrap();
        let card = &layout.pages[0].cards[0];
        let label = card.id_label.as_ref().unwrap();
        assert!(label.y < card.icon.y);
        assert!(label.y > card.frame.y);
        let label_center = label.x + label.width / 2.0;
        let icon_center = card.icon.x + card.icon.width / 2.0;
        assert!((label_center - icon_center).abs() < 1e-3);
        assert!(card.filename.x > card.icon.x + card.icon.width);
    }

    #[test]
    fn test_missing_id_drops_label() {
        let items = [CardContent {
            filename: FILENAME,
            description: "x",
            id: "",
        }];
        let layout = layout_report(&items, "T", &default_report_config()).unwrap();
        assert!(layout.pages[0].cards[0].id_label.is_none());
    }

    #[test]
    fn test_every_page_repeats_title() {
        let ids = make_ids(21);
        let layout = layout_report(&full_items(&ids), "EXPORT LIST A 1", &default_report_config())
            .unwrap();
        assert_eq!(layout.pages.len(), 3);
        assert!(layout
            .pages
            .iter()
            .all(|p| p.title.text == "EXPORT LIST A 1"));
    }

    #[test]
    fn test_page_too_small_is_an_error() {
        let mut config = default_report_config();
        config.page.height = 150.0;
        let ids = make_ids(1);
        let err = layout_report(&full_items(&ids), "T", &config).unwrap_err();
        assert!(matches!(err, LayoutError::PageTooSmall { .. }));
    }

    #[test]
    fn test_page_too_small_even_for_empty_list_is_fine() {
        let mut config = default_report_config();
        config.page.height = 150.0;
        assert!(layout_report(&[], "T", &config).is_ok());
    }

    #[test]
    fn test_page_too_narrow_is_an_error() {
        let mut config = default_report_config();
        config.page.width = 100.0;
        let ids = make_ids(1);
        let err = layout_report(&full_items(&ids), "T", &config).unwrap_err();
        assert!(matches!(err, LayoutError::PageTooNarrow { .. }));
    }
}
