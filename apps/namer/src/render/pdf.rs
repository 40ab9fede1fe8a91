//! Writes a `ReportLayout` as PDF bytes.
//!
//! Fonts are the unembedded base-14 Helvetica family with WinAnsi encoding, so
//! the metric tables in `layout::font_metrics` match what the viewer draws.

use pdf_writer::{Content, Finish, Name, Pdf, Rect as PdfRect, Ref, Str, TextStr};

use crate::layout::flow::{CardPlacement, PageLayout, Rect, TextRun};
use crate::layout::font_metrics::Font;
use crate::layout::{ReportConfig, ReportLayout};

type Rgb = (f32, f32, f32);

const CARD_FILL: Rgb = (0.9, 0.95, 1.0);
const CARD_STROKE: Rgb = (0.6, 0.6, 0.8);
const ICON_BODY: Rgb = (0.7, 0.7, 0.7);
const ICON_FOLD: Rgb = (0.6, 0.6, 0.6);
const TEXT: Rgb = (0.0, 0.0, 0.0);
const ID_TEXT: Rgb = (0.4, 0.4, 0.6);

/// Size of the folded corner on the file icon.
const ICON_FOLD_PT: f32 = 5.0;

/// Bezier handle length for a quarter circle of radius 1.
const KAPPA: f32 = 0.552_284_8;

pub fn render_pdf(layout: &ReportLayout, config: &ReportConfig, title: &str) -> Vec<u8> {
    let mut pdf = Pdf::new();
    let mut next_id = 1i32;
    let mut alloc = || {
        let r = Ref::new(next_id);
        next_id += 1;
        r
    };

    let catalog_id = alloc();
    let pages_id = alloc();
    let info_id = alloc();
    let font_ids: Vec<(Font, Ref)> = Font::ALL.iter().map(|&f| (f, alloc())).collect();
    let page_ids: Vec<(Ref, Ref)> = layout.pages.iter().map(|_| (alloc(), alloc())).collect();

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().map(|(page_id, _)| *page_id))
        .count(page_ids.len() as i32);
    pdf.document_info(info_id)
        .title(TextStr(title))
        .producer(TextStr(concat!("namer ", env!("CARGO_PKG_VERSION"))));

    for (font, font_id) in &font_ids {
        pdf.type1_font(*font_id)
            .base_font(Name(font.base_font().as_bytes()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }

    for (page_layout, (page_id, content_id)) in layout.pages.iter().zip(&page_ids) {
        let mut page = pdf.page(*page_id);
        page.media_box(PdfRect::new(0.0, 0.0, config.page.width, config.page.height))
            .parent(pages_id)
            .contents(*content_id);
        {
            let mut resources = page.resources();
            let mut fonts = resources.fonts();
            for (font, font_id) in &font_ids {
                fonts.pair(Name(font.resource_name().as_bytes()), *font_id);
            }
        }
        page.finish();

        let content = page_content(page_layout, config);
        pdf.stream(*content_id, &content.finish());
    }

    pdf.finish()
}

fn page_content(page: &PageLayout, config: &ReportConfig) -> Content {
    let mut content = Content::new();
    draw_text(&mut content, &page.title, TEXT);
    for card in &page.cards {
        draw_card(&mut content, card, config);
    }
    content
}

/// Background, border, icon, id label, filename, description.
fn draw_card(content: &mut Content, card: &CardPlacement, config: &ReportConfig) {
    let radius = config.card.corner_radius;

    set_fill(content, CARD_FILL);
    rounded_rect(content, &card.frame, radius);
    content.fill_nonzero();

    set_stroke(content, CARD_STROKE);
    content.set_line_width(1.0);
    rounded_rect(content, &card.frame, radius);
    content.stroke();

    draw_icon(content, &card.icon);

    if let Some(label) = &card.id_label {
        draw_text(content, label, ID_TEXT);
    }
    draw_text(content, &card.filename, TEXT);
    if let Some(description) = &card.description {
        draw_text(content, description, TEXT);
    }
}

/// Grey sheet with a darker folded top-right corner.
fn draw_icon(content: &mut Content, icon: &Rect) {
    set_fill(content, ICON_BODY);
    content.rect(icon.x, icon.y, icon.width, icon.height);
    content.fill_nonzero();

    let right = icon.x + icon.width;
    let top = icon.top();
    set_fill(content, ICON_FOLD);
    content.move_to(right - ICON_FOLD_PT, top);
    content.line_to(right, top);
    content.line_to(right, top - ICON_FOLD_PT);
    content.close_path();
    content.fill_nonzero();
}

fn draw_text(content: &mut Content, run: &TextRun, color: Rgb) {
    set_fill(content, color);
    let bytes = encode_win_ansi(&run.text);
    content
        .begin_text()
        .set_font(Name(run.font.resource_name().as_bytes()), run.size)
        .next_line(run.x, run.y)
        .show(Str(&bytes))
        .end_text();
}

fn rounded_rect(content: &mut Content, rect: &Rect, radius: f32) {
    let r = radius.min(rect.width / 2.0).min(rect.height / 2.0);
    let k = r * KAPPA;
    let (x, y, w, h) = (rect.x, rect.y, rect.width, rect.height);

    content.move_to(x + r, y);
    content.line_to(x + w - r, y);
    content.cubic_to(x + w - r + k, y, x + w, y + r - k, x + w, y + r);
    content.line_to(x + w, y + h - r);
    content.cubic_to(x + w, y + h - r + k, x + w - r + k, y + h, x + w - r, y + h);
    content.line_to(x + r, y + h);
    content.cubic_to(x + r - k, y + h, x, y + h - r + k, x, y + h - r);
    content.line_to(x, y + r);
    content.cubic_to(x, y + r - k, x + r - k, y, x + r, y);
    content.close_path();
}

fn set_fill(content: &mut Content, (r, g, b): Rgb) {
    content.set_fill_rgb(r, g, b);
}

fn set_stroke(content: &mut Content, (r, g, b): Rgb) {
    content.set_stroke_rgb(r, g, b);
}

/// Encodes text for a WinAnsi simple font. Latin-1 maps directly, a handful of
/// typographic characters map into 0x80..0x9F, and anything else becomes `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' => c as u8,
            '\u{A0}'..='\u{FF}' => c as u32 as u8,
            '\t' | '\n' | '\r' => b' ',
            '€' => 0x80,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '–' => 0x96,
            '—' => 0x97,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{default_report_config, layout_report, CardContent};

    fn render(items: &[CardContent<'_>]) -> Vec<u8> {
        let config = default_report_config();
        let layout = layout_report(items, "EXPORT LIST My_Show 20261019", &config).unwrap();
        render_pdf(&layout, &config, "EXPORT LIST My_Show 20261019")
    }

    fn count(haystack: &[u8], needle: &[u8]) -> usize {
        haystack.windows(needle.len()).filter(|w| *w == needle).count()
    }

    #[test]
    fn test_encode_win_ansi() {
        assert_eq!(encode_win_ansi("AZ az_09"), b"AZ az_09".to_vec());
        assert_eq!(encode_win_ansi("é"), vec![0xE9]);
        assert_eq!(encode_win_ansi("’€"), vec![0x92, 0x80]);
        assert_eq!(encode_win_ansi("字"), b"?".to_vec());
        assert_eq!(encode_win_ansi("a\nb"), b"a b".to_vec());
    }

    #[test]
    fn test_output_is_a_pdf() {
        let bytes = render(&[]);
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(bytes.windows(5).any(|w| w == b"%%EOF"));
    }

    #[test]
    fn test_one_page_object_per_layout_page() {
        let ids: Vec<String> = (1..=15).map(|i| format!("{i:02}")).collect();
        let items: Vec<CardContent<'_>> = ids
            .iter()
            .map(|id| CardContent {
                filename: "My_Show_EN-NOSUB_MOV_HD_20_250307",
                description: "Clean master",
                id,
            })
            .collect();
        let bytes = render(&items);
        // 10 full cards fit on an A4 page, so 15 entries take two.
        assert_eq!(count(&bytes, b"/MediaBox"), 2);
        assert_eq!(count(&bytes, b"/Count 2"), 1);
    }

    #[test]
    fn test_fonts_are_declared() {
        let bytes = render(&[]);
        for font in Font::ALL {
            let name = format!("/BaseFont /{}", font.base_font());
            assert!(count(&bytes, name.as_bytes()) >= 1, "missing {name}");
        }
        assert!(count(&bytes, b"/WinAnsiEncoding") >= 3);
    }

    #[test]
    fn test_text_lands_in_content_stream() {
        let bytes = render(&[CardContent {
            filename: "My_Show_EN-NOSUB_MOV_HD_20_250307",
            description: "Clean master",
            id: "01",
        }]);
        assert_eq!(count(&bytes, b"(My_Show_EN-NOSUB_MOV_HD_20_250307)"), 1);
        assert_eq!(count(&bytes, b"(Clean master)"), 1);
        assert_eq!(count(&bytes, b"(01)"), 1);
        // Once on the page, once in the document info.
        assert_eq!(count(&bytes, b"(EXPORT LIST My_Show 20261019)"), 2);
    }

    #[test]
    fn test_text_extracts_back_out() {
        let bytes = render(&[CardContent {
            filename: "My_Show_EN-NOSUB_MOV_HD_20_250307",
            description: "",
            id: "01",
        }]);
        let text = pdf_extract::extract_text_from_mem(&bytes).unwrap();
        assert!(text.contains("EXPORT LIST"), "extracted: {text}");
        assert!(text.contains("My_Show_EN-NOSUB_MOV_HD_20_250307"), "extracted: {text}");
    }
}
