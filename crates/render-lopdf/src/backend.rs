use crate::writer::PdfWriter;
use folio_layout::{OutlineEntry, PositionedElement};
use folio_render_core::{DocumentBackend, DocumentProperties, RenderError};
use folio_types::Size;
use std::io::{Seek, Write};

/// The lopdf implementation of [`DocumentBackend`]. One instance renders
/// one document; concurrent generations construct independent backends.
pub struct LopdfBackend<W: Write + Seek + Send> {
    writer: Option<W>,
    pdf: Option<PdfWriter>,
}

impl<W: Write + Seek + Send> LopdfBackend<W> {
    pub fn new() -> Self {
        Self {
            writer: None,
            pdf: None,
        }
    }
}

impl<W: Write + Seek + Send> Default for LopdfBackend<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Seek + Send> DocumentBackend<W> for LopdfBackend<W> {
    fn begin_document(
        &mut self,
        writer: W,
        page_size: Size,
        compress: bool,
    ) -> Result<(), RenderError> {
        self.writer = Some(writer);
        self.pdf = Some(PdfWriter::new(page_size, compress));
        Ok(())
    }

    fn set_properties(&mut self, properties: &DocumentProperties) -> Result<(), RenderError> {
        let pdf = self.pdf.as_mut().ok_or(RenderError::NotStarted)?;
        pdf.set_properties(properties);
        Ok(())
    }

    fn render_page(&mut self, elements: &[PositionedElement]) -> Result<(), RenderError> {
        let pdf = self.pdf.as_mut().ok_or(RenderError::NotStarted)?;
        pdf.render_page(elements)
    }

    fn finish(self: Box<Self>, outline: &[OutlineEntry]) -> Result<W, RenderError> {
        let mut backend = *self;
        let mut writer = backend.writer.take().ok_or(RenderError::NotStarted)?;
        let pdf = backend.pdf.take().ok_or(RenderError::NotStarted)?;
        pdf.finish_into(&mut writer, outline)?;
        Ok(writer)
    }
}
