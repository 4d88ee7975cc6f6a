//! The unified error type for all pipeline operations.

use folio_layout::LayoutError;
use folio_render_core::RenderError;
use thiserror::Error;

/// The main error enum for all high-level operations within the engine.
///
/// Data-completeness gaps are never errors (builders substitute
/// documented defaults); a `NotFound` raised by a collaborating store is
/// propagated unchanged through the builder stage. Any error aborts the
/// whole generation — no partial binary is ever returned.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },
    #[error("Builder input error: {0}")]
    Builder(String),
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}
