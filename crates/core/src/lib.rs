//! # folio-core
//!
//! Integration layer of the folio document engine: resolves options and
//! styling, runs the layout → decoration → backend pipeline, and exposes
//! the public generation API.

// Re-export foundation crates
pub use folio_model as model;
pub use folio_style as style;
pub use folio_types as types;

// Re-export algorithm and render crates
pub use folio_layout as layout;
pub use folio_render_core as render_core;
pub use folio_render_lopdf as render_lopdf;

// Re-export template crate
pub use folio_templates as templates;

pub mod error;
pub mod generate;
pub mod options;

// Re-export commonly used types
pub use error::PipelineError;
pub use generate::{
    generate_certificate, generate_pdf, generate_portfolio, generate_progress_report,
    generate_project_plan,
};
pub use options::GenerationOptions;

pub use folio_model::{ContentNode, Document, DocumentType, Metadata, Section, SectionType};
pub use folio_style::{Orientation, PageFormat, Styling};
