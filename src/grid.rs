//! Row-major pixel grid with the paste/flip operations the normalizer needs.
//!
//! The grid is always 3-channel: alpha is consumed during compositing and is
//! never present downstream. Origin is top-left, pixels are stored row-major
//! (`y * width + x`), matching the decoder's ordering.

use crate::color::Rgb;

/// Samples per block edge. The sign component format is fixed at 9x9.
pub const BLOCK_SIZE: usize = 9;

/// Color samples per block.
pub const SAMPLES_PER_BLOCK: usize = BLOCK_SIZE * BLOCK_SIZE;

/// Opaque RGB pixel grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl PixelGrid {
    /// Create a grid filled with a single color.
    pub fn filled(width: usize, height: usize, color: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    /// Create a grid from row-major pixel data.
    /// Length must be exactly `width * height`.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Rgb>) -> Self {
        assert_eq!(
            pixels.len(),
            width * height,
            "pixel count {} does not match {}x{}",
            pixels.len(),
            width,
            height
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        debug_assert!(x < self.width && y < self.height);
        self.pixels[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: Rgb) {
        debug_assert!(x < self.width && y < self.height);
        self.pixels[y * self.width + x] = color;
    }

    /// Copy `src` into this grid with its top-left corner at `(x_off, y_off)`.
    /// The source must fit entirely within this grid.
    pub fn paste(&mut self, src: &PixelGrid, x_off: usize, y_off: usize) {
        debug_assert!(x_off + src.width <= self.width);
        debug_assert!(y_off + src.height <= self.height);

        for y in 0..src.height {
            let src_row = &src.pixels[y * src.width..(y + 1) * src.width];
            let dst_start = (y_off + y) * self.width + x_off;
            self.pixels[dst_start..dst_start + src.width].copy_from_slice(src_row);
        }
    }

    /// Return a left-right mirrored copy of this grid.
    pub fn flipped_horizontal(&self) -> PixelGrid {
        let mut pixels = Vec::with_capacity(self.pixels.len());
        for y in 0..self.height {
            let row = &self.pixels[y * self.width..(y + 1) * self.width];
            pixels.extend(row.iter().rev());
        }
        PixelGrid {
            width: self.width,
            height: self.height,
            pixels,
        }
    }
}
