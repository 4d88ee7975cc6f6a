//! The document model: the declarative, serializable representation of a
//! renderable document.
//!
//! A [`Document`] is an ordered list of [`Section`]s, each holding one
//! [`ContentNode`] tree, plus optional [`Styling`](folio_style::Styling).
//! The model is built once per render invocation (by a document builder or
//! deserialized from JSON) and is read-only during rendering.

pub mod content;
pub mod document;

pub use content::{ChartType, ContentNode, ImageAlignment, ListItem};
pub use document::{Document, DocumentType, Metadata, Section, SectionType};
