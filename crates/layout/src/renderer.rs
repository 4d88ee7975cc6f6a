//! The recursive content renderer.
//!
//! `render` maps one content node to positioned elements starting at the
//! given cursor, confined to the page bounds, and returns the cursor
//! immediately below what it drew. `Mixed` nodes recurse, which is the
//! single recursion point that makes arbitrarily nested composite
//! documents renderable with one algorithm. Rendering never touches
//! document-level state; it only appends to the output buffer.

use crate::elements::{
    ImageElement, LayoutElement, PositionedElement, RectElement, TextElement, TextStyle,
};
use crate::fonts::{self, LINE_HEIGHT_FACTOR};
use crate::images;
use crate::text;
use folio_model::{ChartType, ContentNode, ImageAlignment, ListItem};
use folio_style::{FontStyle, FontWeight, ListStyle, ResolvedStyling, TableStyling, TextAlign};
use folio_types::{Color, PageBounds, Point};

/// Vertical gap between consecutive elements of a `Mixed` node.
pub const INTER_ELEMENT_SPACING: f32 = 10.0;
/// Default indent of list item text, and of each nesting level.
pub const LIST_INDENT: f32 = 20.0;
/// Default vertical gap after each list item.
pub const LIST_SPACING: f32 = 5.0;
/// Default marker glyph for unordered lists.
pub const DEFAULT_BULLET: &str = "\u{2022}";
/// Fixed height of every table row, header band included.
pub const TABLE_ROW_HEIGHT: f32 = 24.0;

const TABLE_CELL_PADDING: f32 = 4.0;
const TABLE_GRID_COLOR: Color = Color::gray(200);
const TABLE_ALTERNATE_FILL: Color = Color::gray(245);
const DEFAULT_IMAGE_WIDTH: f32 = 200.0;
const DEFAULT_CHART_WIDTH: f32 = 400.0;
const DEFAULT_CHART_HEIGHT: f32 = 200.0;
const CAPTION_GAP: f32 = 4.0;
const PLACEHOLDER_STROKE: f32 = 0.75;

pub struct ContentRenderer<'a> {
    styling: &'a ResolvedStyling,
}

impl<'a> ContentRenderer<'a> {
    pub fn new(styling: &'a ResolvedStyling) -> Self {
        Self { styling }
    }

    /// Height the node would occupy if rendered at the top of an
    /// unbounded page of the same width. Implemented as a scratch render
    /// so measurement can never drift from the real pass.
    pub fn measure(&self, node: &ContentNode, bounds: PageBounds) -> f32 {
        let mut scratch = Vec::new();
        let probe = PageBounds::new(bounds.left, 0.0, bounds.width, f32::INFINITY);
        self.render(node, Point::new(bounds.left, 0.0), probe, &mut scratch)
            .y
    }

    /// Draws `node` starting at `cursor` and returns the cursor
    /// immediately below the drawn content.
    pub fn render(
        &self,
        node: &ContentNode,
        cursor: Point,
        bounds: PageBounds,
        out: &mut Vec<PositionedElement>,
    ) -> Point {
        match node {
            ContentNode::Text { text, formatting } => {
                let fmt = formatting.clone().unwrap_or_default();
                let size = fmt.font_size.unwrap_or(self.styling.base_font_size);
                let weight = fmt.font_weight.unwrap_or_default();
                let style = fmt.font_style.unwrap_or_default();
                let color = fmt.color.unwrap_or_default();
                let align = fmt.text_align.unwrap_or_default();
                let line_height = size * fmt.line_height.unwrap_or(LINE_HEIGHT_FACTOR);
                let text_style = TextStyle {
                    font_size: size,
                    weight,
                    style,
                    color,
                };
                self.render_text_block(
                    text, text_style, align, line_height, cursor, bounds, out,
                )
            }
            ContentNode::Table {
                headers,
                rows,
                styling,
            } => self.render_table(headers, rows, styling.as_ref(), cursor, bounds, out),
            ContentNode::List {
                items,
                ordered,
                style,
            } => {
                let y = self.render_list_items(
                    items,
                    *ordered,
                    0,
                    style.as_ref(),
                    cursor.y,
                    bounds,
                    out,
                );
                Point::new(cursor.x, y)
            }
            ContentNode::Image {
                src,
                alt,
                width,
                height,
                alignment,
                caption,
            } => self.render_image(
                src,
                alt,
                *width,
                *height,
                alignment.unwrap_or_default(),
                caption.as_deref(),
                cursor,
                bounds,
                out,
            ),
            ContentNode::Chart {
                chart_type,
                title,
                width,
                height,
                ..
            } => self.render_chart(
                *chart_type,
                title.as_deref(),
                *width,
                *height,
                cursor,
                bounds,
                out,
            ),
            ContentNode::Mixed { elements } => {
                let mut pos = cursor;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        pos.y += INTER_ELEMENT_SPACING;
                    }
                    pos = self.render(element, pos, bounds, out);
                }
                pos
            }
        }
    }

    /// Wraps and draws a block of text, one element per line (or per word
    /// for justified lines), honoring the alignment.
    #[allow(clippy::too_many_arguments)]
    fn render_text_block(
        &self,
        content: &str,
        style: TextStyle,
        align: TextAlign,
        line_height: f32,
        cursor: Point,
        bounds: PageBounds,
        out: &mut Vec<PositionedElement>,
    ) -> Point {
        let lines = text::wrap(content, style.font_size, style.weight, bounds.width);
        let last = lines.len().saturating_sub(1);
        let mut y = cursor.y;

        for (i, line) in lines.iter().enumerate() {
            if line.text.is_empty() {
                y += line_height;
                continue;
            }

            if align == TextAlign::Justify && i < last {
                for (word, x, width) in text::justify_words(
                    line,
                    style.font_size,
                    style.weight,
                    bounds.left,
                    bounds.width,
                ) {
                    out.push(PositionedElement::new(
                        x,
                        y,
                        width,
                        line_height,
                        LayoutElement::Text(TextElement {
                            content: word,
                            style,
                        }),
                    ));
                }
            } else {
                let x = text::line_x(line, align, bounds.left, bounds.width);
                out.push(PositionedElement::new(
                    x,
                    y,
                    line.width,
                    line_height,
                    LayoutElement::Text(TextElement {
                        content: line.text.clone(),
                        style,
                    }),
                ));
            }
            y += line_height;
        }

        Point::new(cursor.x, y)
    }

    /// Uniform-column table: header band first, then fixed-height data
    /// rows. Every rendered row is normalized to the header cardinality.
    fn render_table(
        &self,
        headers: &[String],
        rows: &[Vec<String>],
        table_style: Option<&TableStyling>,
        cursor: Point,
        bounds: PageBounds,
        out: &mut Vec<PositionedElement>,
    ) -> Point {
        if headers.is_empty() {
            log::warn!("Table with no headers has no columns to lay out; skipping");
            return cursor;
        }

        let default_style = TableStyling::default();
        let ts = table_style.unwrap_or(&default_style);
        let row_height = ts.row_height.unwrap_or(TABLE_ROW_HEIGHT);
        let column_width = bounds.width / headers.len() as f32;
        let font_size = self.styling.base_font_size;

        // Header band.
        let mut y = cursor.y;
        if let Some(fill) = ts.header_fill_color {
            out.push(PositionedElement::new(
                bounds.left,
                y,
                bounds.width,
                row_height,
                LayoutElement::Rect(RectElement::filled(fill)),
            ));
        }
        let header_style = TextStyle::body(font_size)
            .bold()
            .colored(ts.header_text_color.unwrap_or_default());
        for (col, header) in headers.iter().enumerate() {
            let x = bounds.left + col as f32 * column_width;
            self.push_cell_grid(x, y, column_width, row_height, out);
            self.push_cell_text(header, header_style, x, y, row_height, out);
        }
        y += row_height;

        // Data rows.
        let cell_style = TextStyle::body(font_size);
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != headers.len() {
                log::warn!(
                    "Table row {} has {} cells, expected {}; normalizing",
                    row_idx,
                    row.len(),
                    headers.len()
                );
            }
            if ts.alternate_rows && row_idx % 2 == 1 {
                let fill = ts.alternate_fill_color.unwrap_or(TABLE_ALTERNATE_FILL);
                out.push(PositionedElement::new(
                    bounds.left,
                    y,
                    bounds.width,
                    row_height,
                    LayoutElement::Rect(RectElement::filled(fill)),
                ));
            }
            for col in 0..headers.len() {
                let x = bounds.left + col as f32 * column_width;
                self.push_cell_grid(x, y, column_width, row_height, out);
                let content = row.get(col).map(String::as_str).unwrap_or("");
                self.push_cell_text(content, cell_style, x, y, row_height, out);
            }
            y += row_height;
        }

        Point::new(cursor.x, y)
    }

    fn push_cell_grid(
        &self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        out: &mut Vec<PositionedElement>,
    ) {
        out.push(PositionedElement::new(
            x,
            y,
            width,
            height,
            LayoutElement::Rect(RectElement::outlined(TABLE_GRID_COLOR, 0.5)),
        ));
    }

    fn push_cell_text(
        &self,
        content: &str,
        style: TextStyle,
        cell_x: f32,
        cell_y: f32,
        row_height: f32,
        out: &mut Vec<PositionedElement>,
    ) {
        if content.is_empty() {
            return;
        }
        let y = cell_y + (row_height - style.font_size) / 2.0;
        out.push(PositionedElement::new(
            cell_x + TABLE_CELL_PADDING,
            y,
            fonts::text_width(content, style.font_size, style.weight),
            style.font_size,
            LayoutElement::Text(TextElement {
                content: content.to_string(),
                style,
            }),
        ));
    }

    /// Renders list items at the given nesting depth, returning the new
    /// cursor y. Sub-items recurse one level deeper with the indent
    /// increased by the indent step; ordered sublists restart at 1.
    #[allow(clippy::too_many_arguments)]
    fn render_list_items(
        &self,
        items: &[ListItem],
        ordered: bool,
        depth: usize,
        list_style: Option<&ListStyle>,
        start_y: f32,
        bounds: PageBounds,
        out: &mut Vec<PositionedElement>,
    ) -> f32 {
        let indent = list_style
            .and_then(|s| s.indent_level)
            .unwrap_or(LIST_INDENT);
        let spacing = list_style.and_then(|s| s.spacing).unwrap_or(LIST_SPACING);
        let bullet = list_style
            .and_then(|s| s.bullet.as_deref())
            .unwrap_or(DEFAULT_BULLET);

        let font_size = self.styling.base_font_size;
        let line_height = fonts::line_height(font_size);
        let item_style = TextStyle::body(font_size);

        let marker_x = bounds.left + depth as f32 * indent;
        let text_x = marker_x + indent;
        let text_width = (bounds.right() - text_x).max(1.0);

        let mut y = start_y;
        for (index, item) in items.iter().enumerate() {
            let marker = if ordered {
                format!("{}.", index + 1)
            } else {
                bullet.to_string()
            };
            out.push(PositionedElement::new(
                marker_x,
                y,
                fonts::text_width(&marker, font_size, FontWeight::Normal),
                line_height,
                LayoutElement::Text(TextElement {
                    content: marker,
                    style: item_style,
                }),
            ));

            let item_text = match item.checked {
                Some(true) => format!("[x] {}", item.text),
                Some(false) => format!("[ ] {}", item.text),
                None => item.text.clone(),
            };
            let lines = text::wrap(&item_text, font_size, FontWeight::Normal, text_width);
            for line in &lines {
                if !line.text.is_empty() {
                    out.push(PositionedElement::new(
                        text_x,
                        y,
                        line.width,
                        line_height,
                        LayoutElement::Text(TextElement {
                            content: line.text.clone(),
                            style: item_style,
                        }),
                    ));
                }
                y += line_height;
            }
            y += spacing;

            if !item.sub_items.is_empty() {
                y = self.render_list_items(
                    &item.sub_items,
                    ordered,
                    depth + 1,
                    list_style,
                    y,
                    bounds,
                    out,
                );
            }
        }
        y
    }

    #[allow(clippy::too_many_arguments)]
    fn render_image(
        &self,
        src: &str,
        alt: &str,
        width: Option<f32>,
        height: Option<f32>,
        alignment: ImageAlignment,
        caption: Option<&str>,
        cursor: Point,
        bounds: PageBounds,
        out: &mut Vec<PositionedElement>,
    ) -> Point {
        let resolved = images::resolve_image(src);
        let width = width.unwrap_or(DEFAULT_IMAGE_WIDTH).min(bounds.width);
        let height = height.unwrap_or_else(|| match &resolved {
            Some(img) => width * img.aspect_ratio(),
            None => width * 0.75,
        });
        let x = match alignment {
            ImageAlignment::Left => bounds.left,
            ImageAlignment::Center => bounds.left + (bounds.width - width) / 2.0,
            ImageAlignment::Right => bounds.right() - width,
        };

        match resolved {
            Some(image) => out.push(PositionedElement::new(
                x,
                cursor.y,
                width,
                height,
                LayoutElement::Image(ImageElement { image }),
            )),
            None => {
                log::warn!("Unresolvable image source {:?}; drawing placeholder", src);
                self.push_placeholder_box(x, cursor.y, width, height, alt, out);
            }
        }
        let mut y = cursor.y + height;

        if let Some(caption) = caption {
            let caption_size = (self.styling.base_font_size - 2.0).max(6.0);
            let caption_width = fonts::text_width(caption, caption_size, FontWeight::Normal);
            y += CAPTION_GAP;
            out.push(PositionedElement::new(
                x + (width - caption_width) / 2.0,
                y,
                caption_width,
                fonts::line_height(caption_size),
                LayoutElement::Text(TextElement {
                    content: caption.to_string(),
                    style: TextStyle {
                        font_size: caption_size,
                        weight: FontWeight::Normal,
                        style: FontStyle::Italic,
                        color: self.styling.secondary_color,
                    },
                }),
            ));
            y += fonts::line_height(caption_size);
        }

        Point::new(cursor.x, y)
    }

    /// Charts are opaque blocks: there is no chart plugin, so the
    /// renderer draws an outlined box captioned from the title.
    #[allow(clippy::too_many_arguments)]
    fn render_chart(
        &self,
        chart_type: ChartType,
        title: Option<&str>,
        width: Option<f32>,
        height: Option<f32>,
        cursor: Point,
        bounds: PageBounds,
        out: &mut Vec<PositionedElement>,
    ) -> Point {
        let width = width.unwrap_or(bounds.width.min(DEFAULT_CHART_WIDTH));
        let height = height.unwrap_or(DEFAULT_CHART_HEIGHT);
        let caption = match title {
            Some(title) => title.to_string(),
            None => format!("{} chart", chart_label(chart_type)),
        };
        log::debug!("Rendering chart {:?} as placeholder block", chart_type);
        self.push_placeholder_box(bounds.left, cursor.y, width, height, &caption, out);
        Point::new(cursor.x, cursor.y + height)
    }

    fn push_placeholder_box(
        &self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        label: &str,
        out: &mut Vec<PositionedElement>,
    ) {
        out.push(PositionedElement::new(
            x,
            y,
            width,
            height,
            LayoutElement::Rect(RectElement::outlined(
                self.styling.secondary_color,
                PLACEHOLDER_STROKE,
            )),
        ));
        if label.is_empty() {
            return;
        }
        let size = self.styling.base_font_size;
        let label_width = fonts::text_width(label, size, FontWeight::Normal);
        out.push(PositionedElement::new(
            x + (width - label_width) / 2.0,
            y + (height - size) / 2.0,
            label_width,
            fonts::line_height(size),
            LayoutElement::Text(TextElement {
                content: label.to_string(),
                style: TextStyle {
                    font_size: size,
                    weight: FontWeight::Normal,
                    style: FontStyle::Normal,
                    color: self.styling.secondary_color,
                },
            }),
        ));
    }
}

fn chart_label(chart_type: ChartType) -> &'static str {
    match chart_type {
        ChartType::Bar => "bar",
        ChartType::Line => "line",
        ChartType::Pie => "pie",
        ChartType::Radar => "radar",
    }
}
