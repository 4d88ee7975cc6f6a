//! PDF drawing backend using lopdf.
//!
//! [`PdfWriter`] assembles the object graph (page tree, base-14 fonts,
//! shared resources, Info dictionary, outline) and [`LopdfBackend`]
//! adapts it to the `DocumentBackend` trait consumed by the pipeline.

mod backend;
mod page;
mod writer;

pub use backend::LopdfBackend;
pub use page::to_win_ansi;
pub use writer::PdfWriter;
