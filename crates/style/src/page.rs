use folio_types::Size;
use serde::{Deserialize, Serialize};

/// Physical page format. Dimensions are in PDF points (1/72 inch).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PageFormat {
    #[default]
    Letter,
    A4,
}

impl PageFormat {
    pub fn portrait_size(self) -> Size {
        match self {
            PageFormat::Letter => Size::new(612.0, 792.0),
            PageFormat::A4 => Size::new(595.28, 841.89),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Resolves the physical page size for a format/orientation pair.
pub fn page_size(format: PageFormat, orientation: Orientation) -> Size {
    let portrait = format.portrait_size();
    match orientation {
        Orientation::Portrait => portrait,
        Orientation::Landscape => portrait.rotated(),
    }
}
