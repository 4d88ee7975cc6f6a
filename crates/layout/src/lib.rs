//! Layout engine: turns a document model into pages of positioned
//! elements ready for a drawing backend.
//!
//! The two halves are the recursive content renderer ([`ContentRenderer`])
//! and the pagination controller ([`paginate`]); [`decorate_pages`] runs
//! last and stamps headers, footers and the watermark across the finished
//! pages.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Content width of {0:.2} is not positive; margins exceed the page size.")]
    NoContentWidth(f32),
    #[error("Generic layout error: {0}")]
    Generic(String),
}

pub mod decor;
pub mod elements;
pub mod fonts;
pub mod images;
pub mod pagination;
pub mod renderer;
pub mod text;

pub use self::elements::{
    ImageElement, LayoutElement, PositionedElement, RectElement, TextElement, TextStyle,
    WatermarkElement,
};
pub use self::images::PreparedImage;
pub use self::pagination::{LaidOutDocument, OutlineEntry, paginate};
pub use self::renderer::ContentRenderer;

#[cfg(test)]
mod renderer_test;
#[cfg(test)]
mod test_utils;
