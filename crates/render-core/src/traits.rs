use crate::error::RenderError;
use folio_layout::{OutlineEntry, PositionedElement};
use folio_types::Size;
use std::io::{Seek, Write};

/// Document properties embedded into the output binary (the PDF Info
/// dictionary).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentProperties {
    pub title: String,
    pub author: String,
    pub subject: String,
    /// Joined keyword list, embedded verbatim.
    pub keywords: String,
    pub creator: String,
}

/// A document rendering backend, abstracting the PDF-writing primitives.
///
/// Call order: `begin_document`, optionally `set_properties`, then
/// `render_page` once per page in order, then `finish` to obtain the
/// writer with the serialized document. Implementations own all backend
/// state; one backend instance renders one document.
pub trait DocumentBackend<W: Write + Seek + Send> {
    fn begin_document(
        &mut self,
        writer: W,
        page_size: Size,
        compress: bool,
    ) -> Result<(), RenderError>;

    fn set_properties(&mut self, properties: &DocumentProperties) -> Result<(), RenderError>;

    fn render_page(&mut self, elements: &[PositionedElement]) -> Result<(), RenderError>;

    fn finish(self: Box<Self>, outline: &[OutlineEntry]) -> Result<W, RenderError>;
}
