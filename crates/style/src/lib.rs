//! Styling configuration for rendered documents.
//!
//! A document may carry a [`Styling`] that shallow-overrides the engine
//! defaults field by field; [`resolve_styling`] is the single place that
//! merge is defined.

pub mod font;
pub mod page;
pub mod styling;
pub mod text;

pub use font::{FontStyle, FontWeight};
pub use page::{Orientation, PageFormat};
pub use styling::{
    HeaderFooterConfig, ListStyle, Margins, ResolvedStyling, Styling, TableStyling,
    TextFormatting, WatermarkConfig, resolve_styling,
};
pub use text::TextAlign;
