//! Buffered PDF document assembly on top of `lopdf::Document`.

use crate::page;
use folio_layout::{OutlineEntry, PositionedElement, PreparedImage};
use folio_render_core::{DocumentProperties, RenderError};
use folio_types::Size;
use lopdf::content::Content;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat, dictionary};
use std::collections::HashMap;
use std::io::Write as _;
use std::sync::Arc;

/// Internal resource names of the four base-14 faces registered on every
/// document: regular, bold, oblique, bold-oblique.
pub(crate) const FONT_REGULAR: &str = "F1";
pub(crate) const FONT_BOLD: &str = "F2";
pub(crate) const FONT_OBLIQUE: &str = "F3";
pub(crate) const FONT_BOLD_OBLIQUE: &str = "F4";

/// Builds one PDF document: pages are appended in order, shared resources
/// (fonts, alpha graphics states, image XObjects) accumulate, and
/// `finish_into` wires up the page tree, catalog, outline and Info
/// dictionary before serializing.
pub struct PdfWriter {
    doc: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    page_size: Size,
    compress: bool,
    alpha_states: Vec<(String, f32)>,
    xobjects: Vec<(String, ObjectId)>,
    image_names: HashMap<usize, String>,
    properties: Option<DocumentProperties>,
}

impl PdfWriter {
    pub fn new(page_size: Size, compress: bool) -> Self {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();
        let resources_id = doc.new_object_id();
        Self {
            doc,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            page_size,
            compress,
            alpha_states: Vec::new(),
            xobjects: Vec::new(),
            image_names: HashMap::new(),
            properties: None,
        }
    }

    pub fn page_size(&self) -> Size {
        self.page_size
    }

    pub fn set_properties(&mut self, properties: &DocumentProperties) {
        self.properties = Some(properties.clone());
    }

    /// Renders one page of positioned elements and appends it.
    pub fn render_page(&mut self, elements: &[PositionedElement]) -> Result<(), RenderError> {
        let content = page::build_page_content(elements, self)?;
        self.add_page(content)
    }

    fn add_page(&mut self, content: Content) -> Result<(), RenderError> {
        let encoded = content
            .encode()
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        let stream = self.make_stream(dictionary! {}, encoded)?;
        let content_id = self.doc.add_object(Object::Stream(stream));

        let page_id = self.doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                self.page_size.width.into(),
                self.page_size.height.into(),
            ],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        });
        self.page_ids.push(page_id);
        Ok(())
    }

    fn make_stream(
        &self,
        mut dict: Dictionary,
        content: Vec<u8>,
    ) -> Result<Stream, RenderError> {
        if self.compress {
            let mut encoder =
                flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
            encoder.write_all(&content)?;
            let compressed = encoder.finish()?;
            dict.set("Filter", Object::Name(b"FlateDecode".to_vec()));
            Ok(Stream::new(dict, compressed))
        } else {
            Ok(Stream::new(dict, content))
        }
    }

    /// Returns the ExtGState name for the given fill alpha, registering
    /// it on first use.
    pub(crate) fn ensure_alpha_state(&mut self, opacity: f32) -> String {
        if let Some((name, _)) = self
            .alpha_states
            .iter()
            .find(|(_, existing)| (existing - opacity).abs() < 0.001)
        {
            return name.clone();
        }
        let name = format!("GS{}", self.alpha_states.len() + 1);
        self.alpha_states.push((name.clone(), opacity));
        name
    }

    /// Embeds an image payload as an XObject, deduplicated per payload,
    /// and returns its resource name.
    pub(crate) fn add_image(&mut self, image: &PreparedImage) -> Result<String, RenderError> {
        let (data, width, height, jpeg) = match image {
            PreparedImage::Jpeg {
                data,
                width_px,
                height_px,
            } => (data, *width_px, *height_px, true),
            PreparedImage::Rgb8 {
                data,
                width_px,
                height_px,
            } => (data, *width_px, *height_px, false),
        };

        let key = Arc::as_ptr(data) as usize;
        if let Some(name) = self.image_names.get(&key) {
            return Ok(name.clone());
        }

        let mut dict = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => width as i64,
            "Height" => height as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
        };
        let stream = if jpeg {
            dict.set("Filter", Object::Name(b"DCTDecode".to_vec()));
            Stream::new(dict, data.as_ref().clone())
        } else {
            // Raw pixels always get flate-compressed, independent of the
            // content-stream compression flag.
            let mut encoder =
                flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
            encoder.write_all(data.as_slice())?;
            dict.set("Filter", Object::Name(b"FlateDecode".to_vec()));
            Stream::new(dict, encoder.finish()?)
        };

        let id = self.doc.add_object(Object::Stream(stream));
        let name = format!("Im{}", self.xobjects.len() + 1);
        self.xobjects.push((name.clone(), id));
        self.image_names.insert(key, name.clone());
        Ok(name)
    }

    fn font_dictionary() -> Dictionary {
        let mut fonts = Dictionary::new();
        for (name, base_font) in [
            (FONT_REGULAR, "Helvetica"),
            (FONT_BOLD, "Helvetica-Bold"),
            (FONT_OBLIQUE, "Helvetica-Oblique"),
            (FONT_BOLD_OBLIQUE, "Helvetica-BoldOblique"),
        ] {
            fonts.set(
                name.as_bytes(),
                Object::Dictionary(dictionary! {
                    "Type" => "Font",
                    "Subtype" => "Type1",
                    "BaseFont" => base_font,
                    "Encoding" => "WinAnsiEncoding",
                }),
            );
        }
        fonts
    }

    fn build_resources(&self) -> Dictionary {
        let mut resources = dictionary! { "Font" => Self::font_dictionary() };
        if !self.alpha_states.is_empty() {
            let mut gs = Dictionary::new();
            for (name, opacity) in &self.alpha_states {
                gs.set(
                    name.as_bytes(),
                    Object::Dictionary(dictionary! {
                        "Type" => "ExtGState",
                        "ca" => *opacity,
                        "CA" => *opacity,
                    }),
                );
            }
            resources.set("ExtGState", Object::Dictionary(gs));
        }
        if !self.xobjects.is_empty() {
            let mut xobjects = Dictionary::new();
            for (name, id) in &self.xobjects {
                xobjects.set(name.as_bytes(), Object::Reference(*id));
            }
            resources.set("XObject", Object::Dictionary(xobjects));
        }
        resources
    }

    fn build_outline(&mut self, outline: &[OutlineEntry]) -> Option<ObjectId> {
        let entries: Vec<&OutlineEntry> = outline
            .iter()
            .filter(|entry| entry.page_index < self.page_ids.len())
            .collect();
        if entries.is_empty() {
            return None;
        }

        let root_id = self.doc.new_object_id();
        let item_ids: Vec<ObjectId> = entries.iter().map(|_| self.doc.new_object_id()).collect();

        for (i, entry) in entries.iter().enumerate() {
            let mut dict = dictionary! {
                "Title" => Object::String(page::to_win_ansi(&entry.title), StringFormat::Literal),
                "Parent" => root_id,
                "Dest" => vec![
                    Object::Reference(self.page_ids[entry.page_index]),
                    "Fit".into(),
                ],
            };
            if i > 0 {
                dict.set("Prev", item_ids[i - 1]);
            }
            if i + 1 < item_ids.len() {
                dict.set("Next", item_ids[i + 1]);
            }
            self.doc.objects.insert(item_ids[i], dict.into());
        }

        let root = dictionary! {
            "Type" => "Outlines",
            "First" => item_ids[0],
            "Last" => *item_ids.last().expect("non-empty"),
            "Count" => item_ids.len() as i64,
        };
        self.doc.objects.insert(root_id, root.into());
        Some(root_id)
    }

    fn build_info(&mut self) -> Option<ObjectId> {
        let props = self.properties.as_ref()?;
        let string =
            |s: &str| Object::String(page::to_win_ansi(s), StringFormat::Literal);
        let info = dictionary! {
            "Title" => string(&props.title),
            "Author" => string(&props.author),
            "Subject" => string(&props.subject),
            "Keywords" => string(&props.keywords),
            "Creator" => string(&props.creator),
        };
        Some(self.doc.add_object(info))
    }

    /// Finalizes the object graph and serializes the document into
    /// `writer`.
    pub fn finish_into<W: std::io::Write>(
        mut self,
        writer: &mut W,
        outline: &[OutlineEntry],
    ) -> Result<(), RenderError> {
        log::debug!(
            "Serializing PDF: {} pages, {} images, {} outline entries",
            self.page_ids.len(),
            self.xobjects.len(),
            outline.len()
        );

        let resources: Object = self.build_resources().into();
        self.doc.objects.insert(self.resources_id, resources);

        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => self
                .page_ids
                .iter()
                .map(|id| Object::Reference(*id))
                .collect::<Vec<Object>>(),
            "Count" => self.page_ids.len() as i64,
        };
        self.doc.objects.insert(self.pages_id, pages.into());

        let mut catalog = dictionary! { "Type" => "Catalog", "Pages" => self.pages_id };
        if let Some(outline_id) = self.build_outline(outline) {
            catalog.set("Outlines", outline_id);
            catalog.set("PageMode", "UseOutlines");
        }
        let catalog_id = self.doc.add_object(catalog);
        self.doc.trailer.set("Root", catalog_id);

        if let Some(info_id) = self.build_info() {
            self.doc.trailer.set("Info", info_id);
        }

        self.doc
            .save_to(writer)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        Ok(())
    }
}
