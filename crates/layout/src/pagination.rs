//! The pagination controller: walks the document's sections in order,
//! delegates content to the renderer, and decides where physical pages
//! begin.
//!
//! Page breaks happen in two cases: a section's explicit
//! `page_break_after` flag (never after the last section), and a content
//! unit that would overflow the remaining space on a page that already
//! has content. A unit taller than a whole page renders anyway and
//! overflows; nothing is ever split inside a node.

use crate::LayoutError;
use crate::elements::{LayoutElement, PositionedElement, RectElement, TextElement, TextStyle};
use crate::fonts;
use crate::renderer::{ContentRenderer, INTER_ELEMENT_SPACING};
use folio_model::{ContentNode, Document, Section};
use folio_style::{FontWeight, ResolvedStyling};
use folio_types::{PageBounds, Point, Size};

/// Scale factor of the section heading relative to the base font size.
const HEADING_SIZE_FACTOR: f32 = 1.6;
/// Gap between the heading rule and the section content.
const HEADING_GAP: f32 = 10.0;
/// Vertical gap between sections that flow on the same page.
const SECTION_GAP: f32 = 16.0;
/// Minimum room under a heading before it moves to the next page.
const HEADING_KEEP_WITH_NEXT: f32 = 24.0;

/// A bookmark target produced for sections flagged `include_in_toc`.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineEntry {
    pub title: String,
    /// Zero-based index of the page the section starts on.
    pub page_index: usize,
}

/// The result of laying out one document: pages of positioned elements
/// plus the outline entries collected along the way.
pub struct LaidOutDocument {
    pub pages: Vec<Vec<PositionedElement>>,
    pub outline: Vec<OutlineEntry>,
}

struct PageController<'a> {
    renderer: ContentRenderer<'a>,
    styling: &'a ResolvedStyling,
    bounds: PageBounds,
    pages: Vec<Vec<PositionedElement>>,
    current: Vec<PositionedElement>,
    cursor_y: f32,
    outline: Vec<OutlineEntry>,
}

/// Lays out every section of `document` onto pages of `page_size`.
/// An empty section list yields a single bare page, not an error.
pub fn paginate(
    document: &Document,
    styling: &ResolvedStyling,
    page_size: Size,
) -> Result<LaidOutDocument, LayoutError> {
    let margins = &styling.margins;
    let content_width = page_size.width - margins.left - margins.right;
    if content_width <= 0.0 {
        return Err(LayoutError::NoContentWidth(content_width));
    }
    let bounds = PageBounds::new(
        margins.left,
        margins.top,
        content_width,
        page_size.height - margins.bottom,
    );

    let mut controller = PageController {
        renderer: ContentRenderer::new(styling),
        styling,
        bounds,
        pages: Vec::new(),
        current: Vec::new(),
        cursor_y: bounds.top,
        outline: Vec::new(),
    };

    let last = document.sections.len().saturating_sub(1);
    for (index, section) in document.sections.iter().enumerate() {
        log::debug!(
            "Laying out section {:?} ({})",
            section.section_type,
            section.title
        );
        controller.layout_section(section);
        if section.page_break_after && index != last {
            controller.new_page();
        } else if index != last {
            controller.cursor_y += SECTION_GAP;
        }
    }

    Ok(controller.finish())
}

impl<'a> PageController<'a> {
    fn new_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.current));
        self.cursor_y = self.bounds.top;
    }

    fn page_has_content(&self) -> bool {
        !self.current.is_empty() || self.cursor_y > self.bounds.top
    }

    fn remaining(&self) -> f32 {
        self.bounds.remaining(self.cursor_y)
    }

    fn layout_section(&mut self, section: &Section) {
        if section.include_in_toc {
            self.outline.push(OutlineEntry {
                title: section.title.clone(),
                page_index: self.pages.len(),
            });
        }

        // Cover pages render as pure content, no heading bar.
        if !section.is_cover() {
            self.draw_heading(&section.title);
        }

        // A section-level Mixed node is paginated element by element;
        // anything else is one indivisible unit.
        match &section.content {
            ContentNode::Mixed { elements } => {
                for (i, unit) in elements.iter().enumerate() {
                    if i > 0 {
                        self.cursor_y += INTER_ELEMENT_SPACING;
                    }
                    self.place_unit(unit);
                }
            }
            other => self.place_unit(other),
        }
    }

    /// Renders one content unit, breaking to a fresh page first if the
    /// unit does not fit below the cursor but would fit a whole page.
    fn place_unit(&mut self, unit: &ContentNode) {
        let height = self.renderer.measure(unit, self.bounds);
        if self.page_has_content() && height > self.remaining() && height <= self.bounds.height() {
            log::debug!(
                "Breaking page before {} node ({}pt needed, {}pt left)",
                unit.kind(),
                height,
                self.remaining()
            );
            self.new_page();
        }
        let cursor = Point::new(self.bounds.left, self.cursor_y);
        let next = self
            .renderer
            .render(unit, cursor, self.bounds, &mut self.current);
        self.cursor_y = next.y;
    }

    fn draw_heading(&mut self, title: &str) {
        let size = self.styling.base_font_size * HEADING_SIZE_FACTOR;
        let line_height = fonts::line_height(size);
        let heading_height = line_height + 3.0 + HEADING_GAP;

        if self.page_has_content() && self.remaining() < heading_height + HEADING_KEEP_WITH_NEXT {
            self.new_page();
        }

        let style = TextStyle {
            font_size: size,
            weight: FontWeight::Bold,
            style: folio_style::FontStyle::Normal,
            color: self.styling.primary_color,
        };
        self.current.push(PositionedElement::new(
            self.bounds.left,
            self.cursor_y,
            fonts::text_width(title, size, FontWeight::Bold),
            line_height,
            LayoutElement::Text(TextElement {
                content: title.to_string(),
                style,
            }),
        ));
        self.cursor_y += line_height + 2.0;

        // Rule under the heading bar.
        self.current.push(PositionedElement::new(
            self.bounds.left,
            self.cursor_y,
            self.bounds.width,
            1.0,
            LayoutElement::Rect(RectElement::filled(self.styling.primary_color)),
        ));
        self.cursor_y += 1.0 + HEADING_GAP;
    }

    fn finish(mut self) -> LaidOutDocument {
        if self.page_has_content() || self.pages.is_empty() {
            let last = std::mem::take(&mut self.current);
            self.pages.push(last);
        }
        LaidOutDocument {
            pages: self.pages,
            outline: self.outline,
        }
    }
}
