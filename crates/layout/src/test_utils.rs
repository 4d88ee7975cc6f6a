use crate::elements::PositionedElement;
use folio_model::{ContentNode, Document, DocumentType, Metadata, Section, SectionType};
use folio_style::ResolvedStyling;
use folio_types::PageBounds;

pub fn default_styling() -> ResolvedStyling {
    ResolvedStyling::default()
}

/// Letter-page content bounds with the default 50pt margins.
pub fn test_bounds() -> PageBounds {
    PageBounds::new(50.0, 50.0, 512.0, 742.0)
}

pub fn make_document(sections: Vec<Section>) -> Document {
    Document {
        id: "test-doc".into(),
        title: "Test Document".into(),
        doc_type: DocumentType::ProjectPlan,
        metadata: Metadata::default(),
        sections,
        styling: None,
        generated_date: None,
    }
}

pub fn text_section(section_type: SectionType, title: &str, text: &str) -> Section {
    Section::new(section_type, title, ContentNode::text(text))
}

pub fn find_first_text<'a>(
    elements: &'a [PositionedElement],
    content: &str,
) -> Option<&'a PositionedElement> {
    elements
        .iter()
        .find(|el| el.text_content().is_some_and(|t| t.contains(content)))
}

/// All text contents on a page, in draw order.
pub fn text_contents(elements: &[PositionedElement]) -> Vec<&str> {
    elements.iter().filter_map(|el| el.text_content()).collect()
}
