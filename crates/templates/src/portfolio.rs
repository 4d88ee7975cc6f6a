//! Student portfolio builder.

use crate::input::{array, opt_str, str_or, string_items};
use crate::NOT_SPECIFIED;
use chrono::Utc;
use folio_model::{
    ContentNode, Document, DocumentType, ListItem, Metadata, Section, SectionType,
};
use folio_style::{FontWeight, TextAlign, TextFormatting};
use serde_json::Value;

/// Builds a portfolio document from a student record.
///
/// Recognized fields: `school`, `introduction`, `work_samples` (objects
/// with `title`, `description`, optional `image` data URL and `caption`),
/// `reflection`, `goals` (strings).
pub fn build_portfolio(data: &Value, student_name: &str) -> Document {
    let title = format!("{} — Portfolio", student_name);
    log::debug!("Building portfolio for {:?}", student_name);

    let centered = |size: f32, weight: FontWeight| TextFormatting {
        font_size: Some(size),
        font_weight: Some(weight),
        text_align: Some(TextAlign::Center),
        ..Default::default()
    };

    let mut cover_elements = vec![
        ContentNode::formatted_text("Student Portfolio", centered(28.0, FontWeight::Bold)),
        ContentNode::formatted_text(student_name, centered(18.0, FontWeight::Normal)),
    ];
    if let Some(school) = opt_str(data, "school") {
        cover_elements.push(ContentNode::formatted_text(
            school,
            centered(12.0, FontWeight::Normal),
        ));
    }
    let cover = Section::new(
        SectionType::CoverPage,
        title.clone(),
        ContentNode::mixed(cover_elements),
    )
    .with_page_break();

    let introduction = Section::new(
        SectionType::Introduction,
        "Introduction",
        ContentNode::text(str_or(
            data,
            "introduction",
            "This portfolio collects selected work from the year.",
        )),
    )
    .in_toc();

    let work = Section::new(
        SectionType::StudentWork,
        "Work Samples",
        work_samples(data),
    )
    .in_toc();

    let reflection = Section::new(
        SectionType::Reflection,
        "Reflection",
        ContentNode::text(str_or(data, "reflection", NOT_SPECIFIED)),
    )
    .in_toc();

    let goals = Section::new(
        SectionType::NextSteps,
        "Goals",
        ContentNode::List {
            items: string_items(data, "goals")
                .into_iter()
                .map(ListItem::new)
                .collect(),
            ordered: false,
            style: None,
        },
    )
    .in_toc();

    Document {
        id: slug::slugify(format!("portfolio-{}", student_name)),
        title,
        doc_type: DocumentType::StudentPortfolio,
        metadata: Metadata {
            author: student_name.to_string(),
            subject: "Student portfolio".to_string(),
            keywords: vec!["portfolio".to_string(), student_name.to_string()],
            student_name: Some(student_name.to_string()),
            school_name: opt_str(data, "school").map(str::to_string),
            ..Default::default()
        },
        sections: vec![cover, introduction, work, reflection, goals],
        styling: None,
        generated_date: Some(Utc::now().date_naive()),
    }
}

/// One composite block per sample: bold title, description, and the
/// sample image when one is attached.
fn work_samples(data: &Value) -> ContentNode {
    let samples: Vec<ContentNode> = array(data, "work_samples")
        .iter()
        .map(|sample| {
            let mut parts = vec![
                ContentNode::formatted_text(
                    str_or(sample, "title", "Untitled work"),
                    TextFormatting {
                        font_weight: Some(FontWeight::Bold),
                        ..Default::default()
                    },
                ),
                ContentNode::text(str_or(sample, "description", NOT_SPECIFIED)),
            ];
            if let Some(image) = opt_str(sample, "image") {
                parts.push(ContentNode::Image {
                    src: image.to_string(),
                    alt: str_or(sample, "title", "work sample").to_string(),
                    width: None,
                    height: None,
                    alignment: None,
                    caption: opt_str(sample, "caption").map(str::to_string),
                });
            }
            ContentNode::mixed(parts)
        })
        .collect();

    ContentNode::mixed(samples)
}
