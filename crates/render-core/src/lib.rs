//! Abstractions over the low-level drawing backend.
//!
//! The layout crates never talk to a PDF library directly; they produce
//! positioned elements, and a [`DocumentBackend`] turns those into the
//! final binary. Backends are constructed and injected by the caller —
//! there is no global renderer instance.

mod error;
mod traits;

pub use error::RenderError;
pub use traits::{DocumentBackend, DocumentProperties};
