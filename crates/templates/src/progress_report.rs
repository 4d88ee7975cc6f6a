//! Progress report builder.

use crate::input::{array, opt_str, str_or, string_items};
use crate::{NONE_IDENTIFIED, NOT_SPECIFIED};
use chrono::Utc;
use folio_model::{
    ContentNode, Document, DocumentType, ListItem, Metadata, Section, SectionType,
};
use folio_style::{TableStyling, TextAlign, TextFormatting};
use folio_types::Color;
use serde_json::Value;

/// Builds a progress report from a progress record.
///
/// Recognized fields: `student`, `teacher`, `period`, `summary`,
/// `subjects` (objects with `subject`, `progress`, `comments`),
/// `recommendations` (strings).
pub fn build_progress_report(data: &Value) -> Document {
    let student = str_or(data, "student", NOT_SPECIFIED);
    let period = opt_str(data, "period");
    let title = format!("Progress Report — {}", student);
    log::debug!("Building progress report for {:?}", student);

    let summary = Section::new(
        SectionType::Introduction,
        "Summary",
        ContentNode::formatted_text(
            str_or(data, "summary", NOT_SPECIFIED),
            TextFormatting {
                text_align: Some(TextAlign::Justify),
                ..Default::default()
            },
        ),
    )
    .in_toc();

    let rows = array(data, "subjects")
        .iter()
        .map(|s| {
            vec![
                str_or(s, "subject", NOT_SPECIFIED).to_string(),
                str_or(s, "progress", NOT_SPECIFIED).to_string(),
                str_or(s, "comments", "").to_string(),
            ]
        })
        .collect();
    let assessment = Section::new(
        SectionType::Assessment,
        "Progress by Subject",
        ContentNode::Table {
            headers: vec!["Subject".into(), "Progress".into(), "Comments".into()],
            rows,
            styling: Some(TableStyling {
                header_fill_color: Some(Color::new(0x1F, 0x29, 0x37)),
                header_text_color: Some(Color::white()),
                alternate_rows: true,
                alternate_fill_color: None,
                row_height: None,
            }),
        },
    )
    .in_toc();

    let recommendation_items = string_items(data, "recommendations");
    let next_steps = Section::new(
        SectionType::NextSteps,
        "Recommendations",
        if recommendation_items.is_empty() {
            ContentNode::text(NONE_IDENTIFIED)
        } else {
            ContentNode::List {
                items: recommendation_items.into_iter().map(ListItem::new).collect(),
                ordered: true,
                style: None,
            }
        },
    )
    .in_toc();

    Document {
        id: slug::slugify(format!("progress-report-{}", student)),
        title,
        doc_type: DocumentType::ProgressReport,
        metadata: Metadata {
            author: str_or(data, "teacher", NOT_SPECIFIED).to_string(),
            subject: "Progress report".to_string(),
            keywords: vec!["progress report".to_string(), student.to_string()],
            student_name: Some(student.to_string()),
            teacher_name: opt_str(data, "teacher").map(str::to_string),
            date_range: period.map(str::to_string),
            ..Default::default()
        },
        sections: vec![summary, assessment, next_steps],
        styling: None,
        generated_date: Some(Utc::now().date_naive()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn subjects_fill_the_assessment_table() {
        let data = json!({
            "student": "Sam",
            "teacher": "Ms. K",
            "subjects": [
                {"subject": "Maths", "progress": "Strong", "comments": "Great problem solving"},
                {"subject": "Reading", "progress": "Developing"},
            ],
        });
        let doc = build_progress_report(&data);

        assert_eq!(doc.doc_type, DocumentType::ProgressReport);
        match &doc.sections[1].content {
            ContentNode::Table { headers, rows, .. } => {
                assert_eq!(headers.len(), 3);
                assert_eq!(rows.len(), 2);
                // A missing comments field defaults to an empty cell, so
                // the row keeps the header cardinality.
                assert_eq!(rows[1], vec!["Reading", "Developing", ""]);
            }
            other => panic!("expected table, got {}", other.kind()),
        }
    }

    #[test]
    fn missing_recommendations_fall_back_to_text() {
        let doc = build_progress_report(&json!({"student": "Sam"}));
        match &doc.sections[2].content {
            ContentNode::Text { text, .. } => assert_eq!(text, NONE_IDENTIFIED),
            other => panic!("expected text fallback, got {}", other.kind()),
        }
    }

    #[test]
    fn period_lands_in_metadata_date_range() {
        let doc = build_progress_report(&json!({"student": "Sam", "period": "Term 2 2026"}));
        assert_eq!(doc.metadata.date_range.as_deref(), Some("Term 2 2026"));
    }
}
