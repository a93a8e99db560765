//! Render a raster image as a Stormworks savegame of paintable signs.
//!
//! The pipeline decodes an image, composites it over an opaque background,
//! pads it to multiples of the 9x9 sign grid, mirrors it for the sign
//! coordinate system, optionally resizes it to a block-count target, and
//! serializes one sign component per block into the savegame XML.

pub mod color;
pub mod decode;
pub mod error;
pub mod grid;
pub mod normalize;
pub mod rescale;
pub mod vehicle;

use color::{Rgba, DEFAULT_BACKGROUND};
use error::Result;

/// Pipeline options. All fields optional; defaults reproduce the input image
/// at one sample per pixel over a black background.
#[derive(Clone, Copy, Debug, Default)]
pub struct GenerateOptions {
    /// Horizontal resize target in blocks.
    pub width_blocks: Option<u32>,
    /// Vertical resize target in blocks.
    pub height_blocks: Option<u32>,
    /// Background for transparency and padding. Opaque black when absent.
    pub background: Option<Rgba>,
}

/// Run the whole pipeline: raw image bytes in, savegame text out.
pub fn generate(image_bytes: &[u8], options: &GenerateOptions) -> Result<String> {
    let img = decode::load_image_from_bytes(image_bytes)?;
    let background = options.background.unwrap_or(DEFAULT_BACKGROUND);
    let grid = normalize::normalize(&img, background);
    let grid = rescale::resize_to_blocks(grid, options.width_blocks, options.height_blocks)?;
    Ok(vehicle::serialize(&grid))
}
