use crate::content::ContentNode;
use chrono::NaiveDate;
use folio_style::Styling;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DocumentType {
    ProjectPlan,
    StudentPortfolio,
    ProgressReport,
    Assessment,
    Certificate,
    Rubric,
    LessonPlan,
    ParentReport,
}

/// Descriptive document metadata, embedded into the output's property
/// table (the PDF Info dictionary).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
}

impl Metadata {
    /// Keywords with set semantics: duplicates removed, first-seen order
    /// kept. This is the form embedded into the output properties.
    pub fn keyword_set(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for kw in &self.keywords {
            if !seen.contains(&kw.as_str()) {
                seen.push(kw.as_str());
            }
        }
        seen
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SectionType {
    CoverPage,
    TableOfContents,
    Introduction,
    ProjectOverview,
    LearningObjectives,
    Timeline,
    Resources,
    StudentWork,
    Assessment,
    Reflection,
    NextSteps,
    Appendix,
}

/// One section of a document. Order within `Document::sections` defines
/// draw order and the default page flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(rename = "type")]
    pub section_type: SectionType,
    pub title: String,
    pub content: ContentNode,
    #[serde(default)]
    pub page_break_after: bool,
    #[serde(default)]
    pub include_in_toc: bool,
}

impl Section {
    pub fn new(section_type: SectionType, title: impl Into<String>, content: ContentNode) -> Self {
        Self {
            section_type,
            title: title.into(),
            content,
            page_break_after: false,
            include_in_toc: false,
        }
    }

    pub fn with_page_break(mut self) -> Self {
        self.page_break_after = true;
        self
    }

    pub fn in_toc(mut self) -> Self {
        self.include_in_toc = true;
        self
    }

    /// Cover pages render as pure content: no heading bar is drawn.
    pub fn is_cover(&self) -> bool {
        self.section_type == SectionType::CoverPage
    }
}

/// A complete renderable document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    #[serde(default)]
    pub metadata: Metadata,
    pub sections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styling: Option<Styling>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_set_deduplicates_preserving_order() {
        let metadata = Metadata {
            keywords: vec![
                "science".into(),
                "project".into(),
                "science".into(),
                "stem".into(),
            ],
            ..Default::default()
        };
        assert_eq!(metadata.keyword_set(), vec!["science", "project", "stem"]);
    }

    #[test]
    fn document_round_trips_through_json() {
        let doc = Document {
            id: "plan-volcano".into(),
            title: "Volcano Study".into(),
            doc_type: DocumentType::ProjectPlan,
            metadata: Metadata {
                author: "A. Teacher".into(),
                subject: "Science".into(),
                keywords: vec!["geology".into()],
                ..Default::default()
            },
            sections: vec![
                Section::new(
                    SectionType::CoverPage,
                    "Volcano Study",
                    ContentNode::text("Volcano Study"),
                )
                .with_page_break(),
                Section::new(
                    SectionType::Introduction,
                    "Introduction",
                    ContentNode::text("Why volcanoes?"),
                )
                .in_toc(),
            ],
            styling: None,
            generated_date: NaiveDate::from_ymd_opt(2026, 3, 14),
        };

        let json = serde_json::to_string_pretty(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
        assert!(back.sections[0].is_cover());
        assert!(!back.sections[1].is_cover());
    }
}
