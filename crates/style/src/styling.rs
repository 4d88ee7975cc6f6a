//! Document styling and its resolution against the engine defaults.

use crate::font::{FontStyle, FontWeight};
use crate::text::TextAlign;
use folio_types::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Margins::all(50.0)
    }
}

/// Header/footer decoration switches. `header_text` is static text stamped
/// top-left on every page; page numbers go bottom-center, the date
/// bottom-left.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeaderFooterConfig {
    #[serde(default)]
    pub show_header: bool,
    #[serde(default = "default_true")]
    pub show_footer: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_text: Option<String>,
    #[serde(default = "default_true")]
    pub show_page_numbers: bool,
    #[serde(default)]
    pub show_date: bool,
}

fn default_true() -> bool {
    true
}

impl Default for HeaderFooterConfig {
    fn default() -> Self {
        Self {
            show_header: false,
            show_footer: true,
            header_text: None,
            show_page_numbers: true,
            show_date: false,
        }
    }
}

/// Watermark overlay stamped on every page after content rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WatermarkConfig {
    pub text: String,
    #[serde(default = "WatermarkConfig::default_opacity")]
    pub opacity: f32,
    #[serde(default = "WatermarkConfig::default_angle")]
    pub angle: f32,
    #[serde(default = "WatermarkConfig::default_font_size")]
    pub font_size: f32,
}

impl WatermarkConfig {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            opacity: Self::default_opacity(),
            angle: Self::default_angle(),
            font_size: Self::default_font_size(),
        }
    }

    fn default_opacity() -> f32 {
        0.1
    }

    fn default_angle() -> f32 {
        45.0
    }

    fn default_font_size() -> f32 {
        60.0
    }
}

/// Per-node text formatting. Applies only to the `Text` node carrying it;
/// children of a composite node never inherit it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TextFormatting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Multiplier on the measured line height; defaults to 1.2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TableStyling {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_fill_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_text_color: Option<Color>,
    #[serde(default)]
    pub alternate_rows: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_fill_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_height: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListStyle {
    /// Marker glyph for unordered lists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullet: Option<String>,
    /// Indentation of item text relative to the marker, and of each
    /// nesting level relative to its parent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent_level: Option<f32>,
    /// Vertical gap after each item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<f32>,
}

/// Document-level styling. Every field is optional; absent fields fall
/// back to the engine defaults in [`resolve_styling`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Styling {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margins: Option<Margins>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_footer: Option<HeaderFooterConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watermark: Option<WatermarkConfig>,
}

/// The fully-resolved styling a render pass works from. Unlike [`Styling`]
/// nothing here is optional except the watermark, which is genuinely
/// absent unless configured.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyling {
    pub font_family: String,
    pub base_font_size: f32,
    pub primary_color: Color,
    pub secondary_color: Color,
    pub margins: Margins,
    pub header_footer: HeaderFooterConfig,
    pub watermark: Option<WatermarkConfig>,
}

impl Default for ResolvedStyling {
    fn default() -> Self {
        Self {
            font_family: "Helvetica".to_string(),
            base_font_size: 11.0,
            primary_color: Color::new(0x1F, 0x29, 0x37),
            secondary_color: Color::new(0x6B, 0x72, 0x80),
            margins: Margins::default(),
            header_footer: HeaderFooterConfig::default(),
            watermark: None,
        }
    }
}

/// Resolves a document's styling against the engine defaults.
///
/// The merge is a shallow override: each present field replaces the
/// default wholesale. In particular `margins`, `header_footer` and
/// `watermark` are taken as complete objects — a document that sets
/// `header_footer` supplies every flag it cares about, none of the default
/// flags survive inside it.
pub fn resolve_styling(styling: Option<&Styling>) -> ResolvedStyling {
    let defaults = ResolvedStyling::default();
    let Some(s) = styling else {
        return defaults;
    };

    ResolvedStyling {
        font_family: s.font_family.clone().unwrap_or(defaults.font_family),
        base_font_size: s.base_font_size.unwrap_or(defaults.base_font_size),
        primary_color: s.primary_color.unwrap_or(defaults.primary_color),
        secondary_color: s.secondary_color.unwrap_or(defaults.secondary_color),
        margins: s.margins.unwrap_or(defaults.margins),
        header_footer: s.header_footer.clone().unwrap_or(defaults.header_footer),
        watermark: s.watermark.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_without_styling_yields_defaults() {
        let resolved = resolve_styling(None);
        assert_eq!(resolved, ResolvedStyling::default());
    }

    #[test]
    fn present_fields_override_defaults_individually() {
        let styling = Styling {
            base_font_size: Some(14.0),
            primary_color: Some(Color::new(10, 20, 30)),
            ..Default::default()
        };
        let resolved = resolve_styling(Some(&styling));
        assert_eq!(resolved.base_font_size, 14.0);
        assert_eq!(resolved.primary_color, Color::new(10, 20, 30));
        // Untouched fields keep their defaults.
        assert_eq!(resolved.font_family, "Helvetica");
        assert_eq!(resolved.margins, Margins::default());
    }

    #[test]
    fn nested_objects_are_replaced_wholesale() {
        // A header_footer override with show_footer defaulted off must not
        // inherit the engine default's show_footer=true.
        let styling = Styling {
            header_footer: Some(HeaderFooterConfig {
                show_header: true,
                show_footer: false,
                header_text: Some("Draft".into()),
                show_page_numbers: false,
                show_date: false,
            }),
            margins: Some(Margins::all(30.0)),
            ..Default::default()
        };
        let resolved = resolve_styling(Some(&styling));
        assert!(!resolved.header_footer.show_footer);
        assert!(!resolved.header_footer.show_page_numbers);
        assert_eq!(resolved.margins.top, 30.0);
        assert_eq!(resolved.margins.left, 30.0);
    }

    #[test]
    fn watermark_defaults_fill_in_on_deserialize() {
        let wm: WatermarkConfig = serde_json::from_str(r#"{"text":"DRAFT"}"#).unwrap();
        assert_eq!(wm.opacity, 0.1);
        assert_eq!(wm.angle, 45.0);
        assert_eq!(wm.font_size, 60.0);
    }
}
