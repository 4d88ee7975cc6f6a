//! # folio
//!
//! Document composition and PDF rendering engine for educational project
//! documents: a serializable document model (sections of typed content
//! nodes plus styling), a recursive content renderer, a pagination and
//! decoration controller, document builders for common document kinds,
//! and an lopdf drawing backend behind a trait.
//!
//! ```no_run
//! use folio::{GenerationOptions, generate_project_plan};
//! use serde_json::json;
//!
//! let data = json!({
//!     "title": "Bridge Building",
//!     "subject": "Engineering",
//!     "objectives": ["Understand load distribution"],
//! });
//! let pdf = generate_project_plan(&data, "Ms. Rivera", &GenerationOptions::default())?;
//! std::fs::write("plan.pdf", pdf)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export the crate layers
pub use folio_layout as layout;
pub use folio_model as model;
pub use folio_render_core as render_core;
pub use folio_render_lopdf as render_lopdf;
pub use folio_style as style;
pub use folio_templates as templates;
pub use folio_types as types;

// The public generation API
pub use folio_core::{
    GenerationOptions, PipelineError, generate_certificate, generate_pdf, generate_portfolio,
    generate_progress_report, generate_project_plan,
};

// Commonly used model and style types
pub use folio_model::{
    ChartType, ContentNode, Document, DocumentType, ImageAlignment, ListItem, Metadata, Section,
    SectionType,
};
pub use folio_style::{
    HeaderFooterConfig, Orientation, PageFormat, Styling, TextFormatting, WatermarkConfig,
};
