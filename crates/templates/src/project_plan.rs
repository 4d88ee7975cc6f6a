//! Project plan builder.

use crate::input::{array, opt_str, str_or, string_items};
use crate::{NONE_IDENTIFIED, NOT_SPECIFIED};
use chrono::Utc;
use folio_model::{
    ContentNode, Document, DocumentType, ListItem, Metadata, Section, SectionType,
};
use folio_style::{FontWeight, TableStyling, TextAlign, TextFormatting};
use folio_types::Color;
use serde_json::Value;

/// Builds a project plan document from a loosely-typed project record.
///
/// Recognized fields: `title`, `subject`, `stage`, `description`,
/// `objectives` (strings), `milestones` (objects with `phase`,
/// `activity`, `duration`), `resources` (strings), `assessment`. Every
/// field is optional.
pub fn build_project_plan(data: &Value, author: &str) -> Document {
    let title = str_or(data, "title", "Untitled Project");
    let subject = str_or(data, "subject", NOT_SPECIFIED);
    let stage = opt_str(data, "stage");
    log::debug!("Building project plan for {:?}", title);

    let cover = Section::new(
        SectionType::CoverPage,
        title,
        ContentNode::mixed(cover_elements(title, subject, stage, author)),
    )
    .with_page_break();

    let overview = Section::new(
        SectionType::ProjectOverview,
        "Project Overview",
        ContentNode::formatted_text(
            str_or(data, "description", NOT_SPECIFIED),
            TextFormatting {
                text_align: Some(TextAlign::Justify),
                ..Default::default()
            },
        ),
    )
    .in_toc();

    let objectives = Section::new(
        SectionType::LearningObjectives,
        "Learning Objectives",
        ContentNode::List {
            items: string_items(data, "objectives")
                .into_iter()
                .map(ListItem::new)
                .collect(),
            ordered: true,
            style: None,
        },
    )
    .in_toc();

    let timeline = Section::new(
        SectionType::Timeline,
        "Timeline",
        milestone_table(data),
    )
    .in_toc();

    let resource_items = string_items(data, "resources");
    let resources = Section::new(
        SectionType::Resources,
        "Resources",
        if resource_items.is_empty() {
            ContentNode::text(NONE_IDENTIFIED)
        } else {
            ContentNode::List {
                items: resource_items.into_iter().map(ListItem::new).collect(),
                ordered: false,
                style: None,
            }
        },
    )
    .in_toc();

    let assessment = Section::new(
        SectionType::Assessment,
        "Assessment",
        ContentNode::text(str_or(data, "assessment", NOT_SPECIFIED)),
    )
    .in_toc();

    let mut keywords = vec!["project plan".to_string(), subject.to_string()];
    if let Some(stage) = stage {
        keywords.push(stage.to_string());
    }

    Document {
        id: slug::slugify(format!("project-plan-{}", title)),
        title: title.to_string(),
        doc_type: DocumentType::ProjectPlan,
        metadata: Metadata {
            author: author.to_string(),
            subject: subject.to_string(),
            keywords,
            stage: stage.map(str::to_string),
            ..Default::default()
        },
        sections: vec![cover, overview, objectives, timeline, resources, assessment],
        styling: None,
        generated_date: Some(Utc::now().date_naive()),
    }
}

fn cover_elements(
    title: &str,
    subject: &str,
    stage: Option<&str>,
    author: &str,
) -> Vec<ContentNode> {
    let centered = |size: f32, weight: FontWeight| TextFormatting {
        font_size: Some(size),
        font_weight: Some(weight),
        text_align: Some(TextAlign::Center),
        ..Default::default()
    };

    let mut elements = vec![
        ContentNode::formatted_text(title, centered(28.0, FontWeight::Bold)),
        ContentNode::formatted_text(
            format!("A project plan for {}", subject),
            centered(14.0, FontWeight::Normal),
        ),
    ];
    if let Some(stage) = stage {
        elements.push(ContentNode::formatted_text(
            format!("Stage: {}", stage),
            centered(12.0, FontWeight::Normal),
        ));
    }
    elements.push(ContentNode::formatted_text(
        format!("Prepared by {}", author),
        TextFormatting {
            font_size: Some(12.0),
            text_align: Some(TextAlign::Center),
            color: Some(Color::gray(100)),
            ..Default::default()
        },
    ));
    elements
}

fn milestone_table(data: &Value) -> ContentNode {
    let rows = array(data, "milestones")
        .iter()
        .map(|m| {
            vec![
                str_or(m, "phase", NOT_SPECIFIED).to_string(),
                str_or(m, "activity", NOT_SPECIFIED).to_string(),
                str_or(m, "duration", NOT_SPECIFIED).to_string(),
            ]
        })
        .collect();

    ContentNode::Table {
        headers: vec!["Phase".into(), "Activity".into(), "Duration".into()],
        rows,
        styling: Some(TableStyling {
            header_fill_color: Some(Color::new(0x1F, 0x29, 0x37)),
            header_text_color: Some(Color::white()),
            alternate_rows: true,
            alternate_fill_color: None,
            row_height: None,
        }),
    }
}
