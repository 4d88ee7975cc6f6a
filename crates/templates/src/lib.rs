//! Document builders: fixed templates that assemble a complete
//! [`Document`](folio_model::Document) from loosely-typed input data.
//!
//! Builders never fail on missing optional fields — absent values fall
//! back to documented default strings ("Not specified", "None identified
//! yet"), and empty input arrays still produce renderable sections (a
//! header-only table, a list with no items).

mod certificate;
mod input;
mod portfolio;
mod progress_report;
mod project_plan;

pub use certificate::build_certificate;
pub use portfolio::build_portfolio;
pub use progress_report::build_progress_report;
pub use project_plan::build_project_plan;

/// Fallback for absent scalar fields.
pub const NOT_SPECIFIED: &str = "Not specified";
/// Fallback for absent collection-style fields.
pub const NONE_IDENTIFIED: &str = "None identified yet";
