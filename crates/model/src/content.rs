//! The content node union: one variant per unit of renderable content.

use folio_style::{ListStyle, TableStyling, TextFormatting};
use serde::{Deserialize, Serialize};

/// A unit of renderable content within a section.
///
/// `Mixed` nests arbitrarily deep, including further `Mixed` nodes, which
/// is why the renderer is recursive rather than a flat dispatcher. The
/// union is closed: every consumer matches exhaustively, so an unhandled
/// variant is a compile error, not a silent no-op.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ContentNode {
    Text {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        formatting: Option<TextFormatting>,
    },
    /// Invariant: every row has the same cardinality as `headers`.
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        styling: Option<TableStyling>,
    },
    Image {
        src: String,
        alt: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        width: Option<f32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        height: Option<f32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alignment: Option<ImageAlignment>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
    /// Charts are opaque rectangular blocks: the renderer has no chart
    /// plugin and draws a captioned placeholder of the given dimensions.
    Chart {
        chart_type: ChartType,
        data: serde_json::Value,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        options: Option<serde_json::Value>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        width: Option<f32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        height: Option<f32>,
    },
    List {
        items: Vec<ListItem>,
        #[serde(default)]
        ordered: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<ListStyle>,
    },
    Mixed {
        elements: Vec<ContentNode>,
    },
}

impl ContentNode {
    pub fn text(text: impl Into<String>) -> Self {
        ContentNode::Text {
            text: text.into(),
            formatting: None,
        }
    }

    pub fn formatted_text(text: impl Into<String>, formatting: TextFormatting) -> Self {
        ContentNode::Text {
            text: text.into(),
            formatting: Some(formatting),
        }
    }

    pub fn mixed(elements: Vec<ContentNode>) -> Self {
        ContentNode::Mixed { elements }
    }

    /// A string identifier for the variant, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            ContentNode::Text { .. } => "text",
            ContentNode::Table { .. } => "table",
            ContentNode::Image { .. } => "image",
            ContentNode::Chart { .. } => "chart",
            ContentNode::List { .. } => "list",
            ContentNode::Mixed { .. } => "mixed",
        }
    }
}

/// An item within a `List` node. `sub_items` nest without bound; each
/// level renders indented one step further than its parent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_items: Vec<ListItem>,
    /// Checklist state; renders a `[x]` / `[ ]` prefix when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

impl ListItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sub_items: Vec::new(),
            checked: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ChartType {
    Bar,
    Line,
    Pie,
    Radar,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ImageAlignment {
    Left,
    #[default]
    Center,
    Right,
}
