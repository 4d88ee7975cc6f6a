use crate::error::PipelineError;
use folio_style::{Orientation, PageFormat, page};
use folio_types::Size;
use serde::{Deserialize, Serialize};

/// Options recognized by [`generate_pdf`](crate::generate::generate_pdf).
///
/// `compress` flate-compresses content streams. `embed_fonts` and
/// `accessibility` are accepted and currently inert (reserved).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GenerationOptions {
    #[serde(default)]
    pub format: PageFormat,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default)]
    pub compress: bool,
    #[serde(default)]
    pub embed_fonts: bool,
    #[serde(default)]
    pub accessibility: bool,
}

impl GenerationOptions {
    /// Parses options from loosely-typed input. An unsupported format,
    /// orientation or field name is a configuration error, surfaced
    /// before any drawing begins — never silently substituted.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, PipelineError> {
        serde_json::from_value(value.clone()).map_err(|e| PipelineError::Config(e.to_string()))
    }

    pub fn page_size(&self) -> Size {
        page::page_size(self.format, self.orientation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_are_letter_portrait_uncompressed() {
        let options = GenerationOptions::default();
        assert_eq!(options.format, PageFormat::Letter);
        assert_eq!(options.orientation, Orientation::Portrait);
        assert!(!options.compress);
        assert_eq!(options.page_size(), Size::new(612.0, 792.0));
    }

    #[test]
    fn parses_recognized_fields() {
        let options = GenerationOptions::from_json(&json!({
            "format": "a4",
            "orientation": "landscape",
            "compress": true,
        }))
        .unwrap();
        assert_eq!(options.format, PageFormat::A4);
        assert_eq!(options.page_size(), Size::new(841.89, 595.28));
        assert!(options.compress);
    }

    #[test]
    fn unsupported_format_is_a_config_error() {
        let err = GenerationOptions::from_json(&json!({"format": "tabloid"})).unwrap_err();
        assert!(matches!(err, PipelineError::Config(_)));
    }

    #[test]
    fn unknown_fields_are_a_config_error() {
        let err = GenerationOptions::from_json(&json!({"dpi": 300})).unwrap_err();
        assert!(matches!(err, PipelineError::Config(_)));
    }
}
