//! Image normalization: background compositing, padding, mirroring.
//!
//! Produces the grid the tiler consumes: opaque 3-channel pixels, both
//! dimensions exact multiples of the block size, mirrored left-right because
//! the sign coordinate system runs right-to-left relative to image
//! coordinates. The mirror is applied exactly once, after padding and before
//! any resize.

use image::DynamicImage;

use crate::color::{composite_over, Rgb, Rgba};
use crate::decode::has_transparency;
use crate::grid::{PixelGrid, BLOCK_SIZE};

/// Round a dimension up to the next multiple of the block size.
#[inline]
pub fn round_up_to_block(n: usize) -> usize {
    n.div_ceil(BLOCK_SIZE) * BLOCK_SIZE
}

/// Normalize a decoded image against a background color.
///
/// 1. Composite over the opaque background if the source carries
///    transparency, otherwise take the color data directly.
/// 2. Pad both dimensions up to the next multiple of 9 on a
///    background-filled canvas, pasting the image centered.
/// 3. Mirror the padded canvas horizontally.
pub fn normalize(img: &DynamicImage, background: Rgba) -> PixelGrid {
    let bg = background.rgb();
    let flattened = flatten(img, bg);
    let padded = pad_centered(&flattened, bg);
    padded.flipped_horizontal()
}

/// Flatten to opaque RGB, compositing over `bg` when the source has alpha.
fn flatten(img: &DynamicImage, bg: Rgb) -> PixelGrid {
    let width = img.width() as usize;
    let height = img.height() as usize;
    let rgba = img.to_rgba8();
    let composite = has_transparency(img);

    let pixels = rgba
        .pixels()
        .map(|p| {
            let src = Rgba::new(p[0], p[1], p[2], p[3]);
            if composite {
                composite_over(src, bg)
            } else {
                src.rgb()
            }
        })
        .collect();

    PixelGrid::from_pixels(width, height, pixels)
}

/// Paste `src` centered on a background-filled canvas whose dimensions are
/// the next multiples of the block size. Integer division for the offset:
/// when the padding difference is odd, the extra pixel goes bottom/right.
fn pad_centered(src: &PixelGrid, bg: Rgb) -> PixelGrid {
    let padded_w = round_up_to_block(src.width());
    let padded_h = round_up_to_block(src.height());

    if padded_w == src.width() && padded_h == src.height() {
        return src.clone();
    }

    let mut canvas = PixelGrid::filled(padded_w, padded_h, bg);
    let x_off = (padded_w - src.width()) / 2;
    let y_off = (padded_h - src.height()) / 2;
    canvas.paste(src, x_off, y_off);
    canvas
}
