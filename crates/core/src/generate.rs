//! The generation pipeline and the public convenience API.

use crate::error::PipelineError;
use crate::options::GenerationOptions;
use chrono::NaiveDate;
use folio_layout::decor::decorate_pages;
use folio_layout::paginate;
use folio_model::Document;
use folio_render_core::{DocumentBackend, DocumentProperties};
use folio_render_lopdf::LopdfBackend;
use folio_style::resolve_styling;
use folio_templates::{
    build_certificate, build_portfolio, build_progress_report, build_project_plan,
};
use itertools::Itertools;
use serde_json::Value;
use std::io::Cursor;

/// Renders a document model to PDF bytes.
///
/// The pipeline is a single synchronous pass per call: resolve styling,
/// paginate sections, decorate pages, then hand the pages to a freshly
/// constructed backend. Every invocation owns its private buffers and
/// writer, so concurrent callers are fully isolated.
pub fn generate_pdf(
    document: &Document,
    options: &GenerationOptions,
) -> Result<Vec<u8>, PipelineError> {
    if options.embed_fonts {
        log::debug!("embed_fonts requested; the base-14 fonts need no embedding");
    }
    if options.accessibility {
        log::debug!("accessibility flag is reserved and currently ignored");
    }

    let page_size = options.page_size();
    let styling = resolve_styling(document.styling.as_ref());
    log::debug!(
        "Generating {:?} {:?}: {} sections on {:.0}x{:.0}",
        document.doc_type,
        document.id,
        document.sections.len(),
        page_size.width,
        page_size.height
    );

    let mut laid = paginate(document, &styling, page_size)?;
    decorate_pages(&mut laid.pages, &styling, page_size, document.generated_date);

    let mut backend = LopdfBackend::new();
    backend.begin_document(Cursor::new(Vec::new()), page_size, options.compress)?;
    backend.set_properties(&document_properties(document))?;
    for page in &laid.pages {
        backend.render_page(page)?;
    }
    let writer = Box::new(backend).finish(&laid.outline)?;

    let bytes = writer.into_inner();
    log::debug!("Generated {} pages, {} bytes", laid.pages.len(), bytes.len());
    Ok(bytes)
}

fn document_properties(document: &Document) -> DocumentProperties {
    DocumentProperties {
        title: document.title.clone(),
        author: document.metadata.author.clone(),
        subject: document.metadata.subject.clone(),
        keywords: document.metadata.keyword_set().iter().join(", "),
        creator: concat!("folio ", env!("CARGO_PKG_VERSION")).to_string(),
    }
}

/// Builds and renders a project plan in one call.
pub fn generate_project_plan(
    data: &Value,
    author: &str,
    options: &GenerationOptions,
) -> Result<Vec<u8>, PipelineError> {
    generate_pdf(&build_project_plan(data, author), options)
}

/// Builds and renders a student portfolio in one call.
pub fn generate_portfolio(
    data: &Value,
    student_name: &str,
    options: &GenerationOptions,
) -> Result<Vec<u8>, PipelineError> {
    generate_pdf(&build_portfolio(data, student_name), options)
}

/// Builds and renders a progress report in one call.
pub fn generate_progress_report(
    data: &Value,
    options: &GenerationOptions,
) -> Result<Vec<u8>, PipelineError> {
    generate_pdf(&build_progress_report(data), options)
}

/// Builds and renders a certificate in one call.
pub fn generate_certificate(
    recipient: &str,
    achievement: &str,
    date: NaiveDate,
    signer: &str,
    title: Option<&str>,
    options: &GenerationOptions,
) -> Result<Vec<u8>, PipelineError> {
    generate_pdf(
        &build_certificate(recipient, achievement, date, signer, title),
        options,
    )
}
