//! Translation of positioned elements into page content-stream
//! operations.
//!
//! Layout coordinates are top-down; every drawing operation here flips
//! into PDF's bottom-up space. Font and fill-color changes are tracked so
//! consecutive elements with the same style do not repeat state
//! operators.

use crate::writer::{FONT_BOLD, FONT_BOLD_OBLIQUE, FONT_OBLIQUE, FONT_REGULAR, PdfWriter};
use folio_layout::{
    ImageElement, LayoutElement, PositionedElement, RectElement, TextElement, TextStyle,
    WatermarkElement,
};
use folio_render_core::RenderError;
use folio_style::{FontStyle, FontWeight};
use folio_types::Color;
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Unicode typographic characters with a WinAnsi (CP-1252) slot outside
/// Latin-1: bullets, dashes, curly quotes and friends.
static WIN_ANSI_REMAP: Lazy<HashMap<char, u8>> = Lazy::new(|| {
    HashMap::from([
        ('\u{20AC}', 0x80), // euro
        ('\u{2018}', 0x91),
        ('\u{2019}', 0x92),
        ('\u{201C}', 0x93),
        ('\u{201D}', 0x94),
        ('\u{2022}', 0x95), // bullet
        ('\u{2013}', 0x96), // en dash
        ('\u{2014}', 0x97), // em dash
        ('\u{2026}', 0x85), // ellipsis
        ('\u{2122}', 0x99), // trademark
    ])
});

/// Encodes text into WinAnsi bytes; characters with no slot become `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| {
            let code = c as u32;
            if code <= 255 {
                code as u8
            } else {
                WIN_ANSI_REMAP.get(&c).copied().unwrap_or(b'?')
            }
        })
        .collect()
}

pub(crate) fn build_page_content(
    elements: &[PositionedElement],
    writer: &mut PdfWriter,
) -> Result<Content, RenderError> {
    let mut ctx = PageContext {
        page_height: writer.page_size().height,
        content: Content { operations: vec![] },
        state: RenderState::default(),
    };
    for element in elements {
        match &element.element {
            LayoutElement::Text(text) => ctx.draw_text(element, text),
            LayoutElement::Rect(rect) => ctx.draw_rect(element, rect),
            LayoutElement::Image(image) => ctx.draw_image(element, image, writer)?,
            LayoutElement::Watermark(wm) => ctx.draw_watermark(element, wm, writer),
        }
    }
    Ok(ctx.content)
}

#[derive(Default, Clone, PartialEq)]
struct RenderState {
    font_name: &'static str,
    font_size: f32,
    fill: Option<Color>,
}

struct PageContext {
    page_height: f32,
    content: Content,
    state: RenderState,
}

fn font_for(style: &TextStyle) -> &'static str {
    match (style.weight, style.style) {
        (FontWeight::Normal, FontStyle::Normal) => FONT_REGULAR,
        (FontWeight::Bold, FontStyle::Normal) => FONT_BOLD,
        (FontWeight::Normal, FontStyle::Italic) => FONT_OBLIQUE,
        (FontWeight::Bold, FontStyle::Italic) => FONT_BOLD_OBLIQUE,
    }
}

impl PageContext {
    fn op(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn set_font(&mut self, name: &'static str, size: f32) {
        if self.state.font_name != name || self.state.font_size != size {
            self.op("Tf", vec![Object::Name(name.as_bytes().to_vec()), size.into()]);
            self.state.font_name = name;
            self.state.font_size = size;
        }
    }

    fn set_fill(&mut self, color: Color) {
        if self.state.fill != Some(color) {
            self.op(
                "rg",
                vec![
                    (color.r as f32 / 255.0).into(),
                    (color.g as f32 / 255.0).into(),
                    (color.b as f32 / 255.0).into(),
                ],
            );
            self.state.fill = Some(color);
        }
    }

    fn draw_text(&mut self, el: &PositionedElement, text: &TextElement) {
        if text.content.trim().is_empty() {
            return;
        }
        self.set_fill(text.style.color);
        self.op("BT", vec![]);
        self.set_font(font_for(&text.style), text.style.font_size);
        let baseline = el.y + text.style.font_size * 0.8;
        self.op("Td", vec![el.x.into(), (self.page_height - baseline).into()]);
        self.op(
            "Tj",
            vec![Object::String(
                to_win_ansi(&text.content),
                StringFormat::Literal,
            )],
        );
        self.op("ET", vec![]);
    }

    fn draw_rect(&mut self, el: &PositionedElement, rect: &RectElement) {
        let y = self.page_height - el.y - el.height;
        if let Some(fill) = rect.fill {
            self.set_fill(fill);
            self.op(
                "re",
                vec![el.x.into(), y.into(), el.width.into(), el.height.into()],
            );
            self.op("f", vec![]);
        }
        if let Some(stroke) = rect.stroke {
            self.op(
                "RG",
                vec![
                    (stroke.r as f32 / 255.0).into(),
                    (stroke.g as f32 / 255.0).into(),
                    (stroke.b as f32 / 255.0).into(),
                ],
            );
            self.op("w", vec![rect.stroke_width.into()]);
            self.op(
                "re",
                vec![el.x.into(), y.into(), el.width.into(), el.height.into()],
            );
            self.op("S", vec![]);
        }
    }

    fn draw_image(
        &mut self,
        el: &PositionedElement,
        image: &ImageElement,
        writer: &mut PdfWriter,
    ) -> Result<(), RenderError> {
        let name = writer.add_image(&image.image)?;
        let y = self.page_height - el.y - el.height;
        self.op("q", vec![]);
        self.op(
            "cm",
            vec![
                el.width.into(),
                0.into(),
                0.into(),
                el.height.into(),
                el.x.into(),
                y.into(),
            ],
        );
        self.op("Do", vec![Object::Name(name.into_bytes())]);
        self.op("Q", vec![]);
        Ok(())
    }

    /// Rotated, alpha-blended text centered on the element position.
    /// Wrapped in q/Q so the alpha state never leaks into page content.
    fn draw_watermark(
        &mut self,
        el: &PositionedElement,
        wm: &WatermarkElement,
        writer: &mut PdfWriter,
    ) {
        let gs_name = writer.ensure_alpha_state(wm.opacity);
        let theta = wm.angle.to_radians();
        let (sin, cos) = theta.sin_cos();
        // Shift half the text width back along the rotated baseline so
        // the text is centered on (x, y).
        let cx = el.x - el.width / 2.0 * cos;
        let cy = (self.page_height - el.y) - el.width / 2.0 * sin;

        self.op("q", vec![]);
        self.op("gs", vec![Object::Name(gs_name.into_bytes())]);
        self.op(
            "rg",
            vec![
                (wm.color.r as f32 / 255.0).into(),
                (wm.color.g as f32 / 255.0).into(),
                (wm.color.b as f32 / 255.0).into(),
            ],
        );
        self.op("BT", vec![]);
        self.op(
            "Tf",
            vec![
                Object::Name(FONT_BOLD.as_bytes().to_vec()),
                wm.font_size.into(),
            ],
        );
        self.op(
            "Tm",
            vec![
                cos.into(),
                sin.into(),
                (-sin).into(),
                cos.into(),
                cx.into(),
                cy.into(),
            ],
        );
        self.op(
            "Tj",
            vec![Object::String(to_win_ansi(&wm.text), StringFormat::Literal)],
        );
        self.op("ET", vec![]);
        self.op("Q", vec![]);
        // Q restored the surrounding graphics state; drop the cache so
        // the next text element re-emits font and color.
        self.state = RenderState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_ansi_maps_typographic_chars() {
        assert_eq!(to_win_ansi("\u{2022} a"), vec![0x95, b' ', b'a']);
        assert_eq!(to_win_ansi("\u{2014}"), vec![0x97]);
    }

    #[test]
    fn win_ansi_replaces_unmappable_chars() {
        assert_eq!(to_win_ansi("\u{4E2D}"), vec![b'?']);
    }
}
