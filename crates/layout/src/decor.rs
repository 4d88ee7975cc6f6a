//! Per-page decoration: header text, footer page numbers and date, and
//! the watermark overlay.
//!
//! Decoration runs after all content is laid out, because the footer
//! needs the final page count and the watermark must sit on top of the
//! content of every page. Elements appended here are drawn last by the
//! backend, which gives the same stacking as overlaying a finished page.

use crate::elements::{LayoutElement, PositionedElement, TextElement, TextStyle, WatermarkElement};
use crate::fonts;
use chrono::NaiveDate;
use folio_style::{FontStyle, FontWeight, ResolvedStyling};
use folio_types::Size;

const DECOR_FONT_SIZE: f32 = 9.0;
/// Distance of the header baseline from the top page edge.
const HEADER_OFFSET: f32 = 22.0;
/// Distance of the footer line from the bottom page edge.
const FOOTER_OFFSET: f32 = 30.0;

/// Stamps header, footer and watermark across every page.
pub fn decorate_pages(
    pages: &mut [Vec<PositionedElement>],
    styling: &ResolvedStyling,
    page_size: Size,
    date: Option<NaiveDate>,
) {
    let total = pages.len();
    let hf = &styling.header_footer;
    let style = TextStyle {
        font_size: DECOR_FONT_SIZE,
        weight: FontWeight::Normal,
        style: FontStyle::Normal,
        color: styling.secondary_color,
    };

    for (index, page) in pages.iter_mut().enumerate() {
        if hf.show_header
            && let Some(text) = hf.header_text.as_deref()
        {
            push_text(page, text, style, styling.margins.left, HEADER_OFFSET);
        }

        if hf.show_footer {
            let footer_y = page_size.height - FOOTER_OFFSET;
            if hf.show_page_numbers {
                let label = format!("Page {} of {}", index + 1, total);
                let width = fonts::text_width(&label, DECOR_FONT_SIZE, FontWeight::Normal);
                push_text(page, &label, style, (page_size.width - width) / 2.0, footer_y);
            }
            if hf.show_date
                && let Some(date) = date
            {
                let label = date.format("%B %-d, %Y").to_string();
                push_text(page, &label, style, styling.margins.left, footer_y);
            }
        }

        // Watermark goes last so it overlays the page content.
        if let Some(wm) = &styling.watermark {
            page.push(PositionedElement::new(
                page_size.width / 2.0,
                page_size.height / 2.0,
                fonts::text_width(&wm.text, wm.font_size, FontWeight::Bold),
                wm.font_size,
                LayoutElement::Watermark(WatermarkElement {
                    text: wm.text.clone(),
                    font_size: wm.font_size,
                    opacity: wm.opacity,
                    angle: wm.angle,
                    color: styling.secondary_color,
                }),
            ));
        }
    }
}

fn push_text(page: &mut Vec<PositionedElement>, text: &str, style: TextStyle, x: f32, y: f32) {
    page.push(PositionedElement::new(
        x,
        y,
        fonts::text_width(text, style.font_size, style.weight),
        fonts::line_height(style.font_size),
        LayoutElement::Text(TextElement {
            content: text.to_string(),
            style,
        }),
    ));
}
