//! Certificate builder.

use chrono::NaiveDate;
use folio_model::{ContentNode, Document, DocumentType, Metadata, Section, SectionType};
use folio_style::{FontWeight, Styling, TextAlign, TextFormatting, WatermarkConfig};
use folio_types::Color;

/// Builds a single-page certificate.
///
/// The document always contains exactly one cover-page section whose
/// composite content is, in order: the certificate heading, the
/// attestation line, the recipient name, the achievement sentence, the
/// formatted date, and the signer block.
pub fn build_certificate(
    recipient: &str,
    achievement: &str,
    date: NaiveDate,
    signer: &str,
    title: Option<&str>,
) -> Document {
    let heading = title.unwrap_or("Certificate of Achievement");
    log::debug!("Building certificate for {:?}", recipient);

    let centered = |size: f32, weight: FontWeight| TextFormatting {
        font_size: Some(size),
        font_weight: Some(weight),
        text_align: Some(TextAlign::Center),
        ..Default::default()
    };

    let elements = vec![
        ContentNode::formatted_text(heading, centered(32.0, FontWeight::Bold)),
        ContentNode::formatted_text("This is to certify that", centered(14.0, FontWeight::Normal)),
        ContentNode::formatted_text(recipient, centered(24.0, FontWeight::Bold)),
        ContentNode::formatted_text(
            format!("has successfully completed {}", achievement),
            centered(14.0, FontWeight::Normal),
        ),
        ContentNode::formatted_text(
            date.format("%B %-d, %Y").to_string(),
            centered(12.0, FontWeight::Normal),
        ),
        ContentNode::formatted_text(
            format!("____________________\n{}", signer),
            centered(12.0, FontWeight::Normal),
        ),
    ];

    let section = Section::new(SectionType::CoverPage, heading, ContentNode::mixed(elements));

    Document {
        id: slug::slugify(format!("certificate-{}", recipient)),
        title: heading.to_string(),
        doc_type: DocumentType::Certificate,
        metadata: Metadata {
            author: signer.to_string(),
            subject: format!("Certificate for {}", recipient),
            keywords: vec!["certificate".to_string(), recipient.to_string()],
            student_name: Some(recipient.to_string()),
            ..Default::default()
        },
        sections: vec![section],
        styling: Some(Styling {
            primary_color: Some(Color::new(0x92, 0x40, 0x0E)),
            watermark: Some(WatermarkConfig {
                text: "CERTIFIED".to_string(),
                opacity: 0.06,
                angle: 45.0,
                font_size: 80.0,
            }),
            ..Default::default()
        }),
        generated_date: Some(date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn certificate_is_one_cover_section_with_fixed_element_order() {
        let date = NaiveDate::from_ymd_opt(2026, 6, 30).unwrap();
        let doc = build_certificate("Jane", "the Bridge Building Project", date, "Dr. Stone", None);

        assert_eq!(doc.doc_type, DocumentType::Certificate);
        assert_eq!(doc.sections.len(), 1);
        let section = &doc.sections[0];
        assert!(section.is_cover());
        assert!(!section.page_break_after);

        let texts: Vec<&str> = match &section.content {
            ContentNode::Mixed { elements } => elements
                .iter()
                .map(|el| match el {
                    ContentNode::Text { text, .. } => text.as_str(),
                    other => panic!("expected text element, got {}", other.kind()),
                })
                .collect(),
            other => panic!("expected mixed content, got {}", other.kind()),
        };

        assert_eq!(texts.len(), 6);
        assert_eq!(texts[0], "Certificate of Achievement");
        assert_eq!(texts[1], "This is to certify that");
        assert_eq!(texts[2], "Jane");
        assert_eq!(texts[3], "has successfully completed the Bridge Building Project");
        assert_eq!(texts[4], "June 30, 2026");
        assert!(texts[5].ends_with("Dr. Stone"));
    }

    #[test]
    fn custom_title_replaces_the_default_heading() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let doc = build_certificate("A", "B", date, "C", Some("Award of Excellence"));
        assert_eq!(doc.title, "Award of Excellence");
        match &doc.sections[0].content {
            ContentNode::Mixed { elements } => match &elements[0] {
                ContentNode::Text { text, .. } => assert_eq!(text, "Award of Excellence"),
                other => panic!("expected text, got {}", other.kind()),
            },
            other => panic!("expected mixed, got {}", other.kind()),
        }
    }
}
