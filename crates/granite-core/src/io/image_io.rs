use std::path::Path;

use crate::error::Result;
use crate::viewer::Vec2;

/// Photo decoded to 8-bit RGBA, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl DecodedImage {
    pub fn natural_size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Shrink so neither side exceeds `max_side`, keeping the aspect ratio.
    /// Used for thumbnails; images already small enough are returned as is.
    pub fn thumbnail(&self, max_side: u32) -> Result<Self> {
        if self.width <= max_side && self.height <= max_side {
            return Ok(self.clone());
        }
        let buffer = image::RgbaImage::from_raw(self.width, self.height, self.rgba.clone())
            .ok_or_else(|| {
                image::ImageError::Parameter(image::error::ParameterError::from_kind(
                    image::error::ParameterErrorKind::DimensionMismatch,
                ))
            })?;
        let small = image::DynamicImage::ImageRgba8(buffer).thumbnail(max_side, max_side);
        Ok(from_dynamic(small))
    }
}

/// Decode any format the `image` crate recognises from a file.
pub fn load_rgba(path: &Path) -> Result<DecodedImage> {
    let img = image::open(path)?;
    Ok(from_dynamic(img))
}

/// Decode an in-memory photo (e.g. freshly uploaded bytes).
pub fn decode_rgba(bytes: &[u8]) -> Result<DecodedImage> {
    let img = image::load_from_memory(bytes)?;
    Ok(from_dynamic(img))
}

fn from_dynamic(img: image::DynamicImage) -> DecodedImage {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    DecodedImage {
        width,
        height,
        rgba: rgba.into_raw(),
    }
}
