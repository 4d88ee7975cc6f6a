use lopdf::Document;

/// Parses generated PDF bytes back into an lopdf document.
pub fn load_pdf(bytes: &[u8]) -> Document {
    Document::load_mem(bytes).expect("generated PDF should parse")
}

/// Raw (uncompressed) content stream text of a 1-based page.
pub fn page_text(doc: &Document, page_number: u32) -> String {
    let id = *doc
        .get_pages()
        .get(&page_number)
        .expect("page number out of range");
    String::from_utf8_lossy(&doc.get_page_content(id).expect("page has content")).into_owned()
}
