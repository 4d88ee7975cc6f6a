//! Resolution of image sources into payloads the backend can embed.
//!
//! Only data-URL sources are resolvable by the engine itself; anything
//! else (file paths, remote URLs) renders as a placeholder. JPEG data
//! passes through untouched (the PDF DCTDecode filter consumes it as-is);
//! every other decodable format is flattened to raw RGB8.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::ImageFormat;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum PreparedImage {
    /// JPEG bytes, embedded verbatim under DCTDecode.
    Jpeg {
        data: Arc<Vec<u8>>,
        width_px: u32,
        height_px: u32,
    },
    /// Raw 8-bit RGB pixels, row-major.
    Rgb8 {
        data: Arc<Vec<u8>>,
        width_px: u32,
        height_px: u32,
    },
}

impl PreparedImage {
    pub fn pixel_size(&self) -> (u32, u32) {
        match self {
            PreparedImage::Jpeg {
                width_px,
                height_px,
                ..
            }
            | PreparedImage::Rgb8 {
                width_px,
                height_px,
                ..
            } => (*width_px, *height_px),
        }
    }

    /// Intrinsic height/width ratio, used for aspect-correct sizing when
    /// the node gives a width but no height.
    pub fn aspect_ratio(&self) -> f32 {
        let (w, h) = self.pixel_size();
        if w == 0 { 1.0 } else { h as f32 / w as f32 }
    }
}

/// Decodes a `data:` URL into an embeddable payload. Returns `None` for
/// non-data sources and undecodable payloads; callers degrade to a
/// placeholder box.
pub fn resolve_image(src: &str) -> Option<PreparedImage> {
    let rest = src.strip_prefix("data:")?;
    let (_, encoded) = rest.split_once(";base64,")?;
    let bytes = match BASE64.decode(encoded.trim()) {
        Ok(bytes) => bytes,
        Err(err) => {
            log::warn!("Undecodable base64 image payload: {}", err);
            return None;
        }
    };

    let format = image::guess_format(&bytes).ok();
    let decoded = match image::load_from_memory(&bytes) {
        Ok(img) => img,
        Err(err) => {
            log::warn!("Unsupported image payload: {}", err);
            return None;
        }
    };

    let (width_px, height_px) = (decoded.width(), decoded.height());
    if format == Some(ImageFormat::Jpeg) {
        Some(PreparedImage::Jpeg {
            data: Arc::new(bytes),
            width_px,
            height_px,
        })
    } else {
        Some(PreparedImage::Rgb8 {
            data: Arc::new(decoded.to_rgb8().into_raw()),
            width_px,
            height_px,
        })
    }
}
