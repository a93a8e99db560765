//! Image decoding via the `image` crate.
//!
//! The decoder is treated as a black box that turns raw bytes into a 2D
//! pixel grid with per-pixel RGBA values, row-major with origin top-left.
//! Paletted images with a transparency entry are expanded to RGBA at decode
//! time, so downstream transparency handling only needs the alpha-channel
//! check.

use image::{ColorType, DynamicImage, ImageReader};
use std::io::Cursor;

use crate::error::Result;

/// Decode an image from raw file bytes, guessing the format from content.
pub fn load_image_from_bytes(data: &[u8]) -> Result<DynamicImage> {
    let reader = ImageReader::new(Cursor::new(data)).with_guessed_format()?;
    Ok(reader.decode()?)
}

/// Whether the decoded image carries transparency that must be composited
/// over a background color.
pub fn has_transparency(img: &DynamicImage) -> bool {
    matches!(
        img.color(),
        ColorType::La8
            | ColorType::Rgba8
            | ColorType::La16
            | ColorType::Rgba16
            | ColorType::Rgba32F
    )
}
