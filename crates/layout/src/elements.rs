//! Output types of the layout pass: positioned elements the drawing
//! backend translates into page content.

use crate::images::PreparedImage;
use folio_style::{FontStyle, FontWeight};
use folio_types::Color;

/// Text drawing style carried on each text element. The backend maps
/// (weight, style) onto one of the four base-14 Helvetica faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub weight: FontWeight,
    pub style: FontStyle,
    pub color: Color,
}

impl TextStyle {
    /// Plain black body text at the given size.
    pub fn body(font_size: f32) -> Self {
        Self {
            font_size,
            weight: FontWeight::Normal,
            style: FontStyle::Normal,
            color: Color::default(),
        }
    }

    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    pub fn colored(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub content: String,
    pub style: TextStyle,
}

/// A filled and/or stroked rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct RectElement {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f32,
}

impl RectElement {
    pub fn filled(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
            stroke_width: 0.0,
        }
    }

    pub fn outlined(color: Color, width: f32) -> Self {
        Self {
            fill: None,
            stroke: Some(color),
            stroke_width: width,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageElement {
    pub image: PreparedImage,
}

/// Rotated, semi-transparent text stamped over finished page content.
/// `x`/`y` of the positioned element give the rotation center.
#[derive(Debug, Clone, PartialEq)]
pub struct WatermarkElement {
    pub text: String,
    pub font_size: f32,
    pub opacity: f32,
    pub angle: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutElement {
    Text(TextElement),
    Rect(RectElement),
    Image(ImageElement),
    Watermark(WatermarkElement),
}

/// An element with its resolved page position. Coordinates are top-down
/// (`y` grows toward the page bottom); the backend flips them.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub element: LayoutElement,
}

impl PositionedElement {
    pub fn new(x: f32, y: f32, width: f32, height: f32, element: LayoutElement) -> Self {
        Self {
            x,
            y,
            width,
            height,
            element,
        }
    }

    pub fn text_content(&self) -> Option<&str> {
        match &self.element {
            LayoutElement::Text(t) => Some(&t.content),
            _ => None,
        }
    }
}
