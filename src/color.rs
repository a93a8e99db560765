//! 8-bit color types, alpha compositing, and background color parsing.

use crate::error::Error;

/// Opaque 3-channel color sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// 4-channel color with straight (non-premultiplied) alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Drop the alpha channel.
    #[inline]
    pub const fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

/// Background used for transparency and padding when the caller supplies
/// none: opaque black.
pub const DEFAULT_BACKGROUND: Rgba = Rgba::new(0, 0, 0, 255);

/// Blend a single channel of `src` over an opaque background channel using
/// straight alpha, with rounding.
#[inline]
fn blend_channel(src: u8, bg: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    ((src as u32 * a + bg as u32 * (255 - a) + 127) / 255) as u8
}

/// Composite a source pixel over an opaque background color.
/// The result is always opaque; fully opaque sources pass through unchanged.
#[inline]
pub fn composite_over(src: Rgba, background: Rgb) -> Rgb {
    match src.a {
        255 => src.rgb(),
        0 => background,
        a => Rgb::new(
            blend_channel(src.r, background.r, a),
            blend_channel(src.g, background.g, a),
            blend_channel(src.b, background.b, a),
        ),
    }
}

/// Parse a background color argument in the strict `0xRRGGBB` format.
/// The `0x`/`0X` prefix is required and exactly six hex digits must follow.
pub fn parse_background(s: &str) -> Result<Rgba, Error> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .ok_or_else(|| Error::Argument("Please use format 0xRRGGBB".to_string()))?;

    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::Argument("Please use format 0xRRGGBB".to_string()));
    }

    let color = u32::from_str_radix(digits, 16)
        .map_err(|_| Error::Argument("Please use format 0xRRGGBB".to_string()))?;

    Ok(Rgba::new(
        (color >> 16 & 0xFF) as u8,
        (color >> 8 & 0xFF) as u8,
        (color & 0xFF) as u8,
        0xFF,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_prefixed_hex_color() {
        assert_eq!(parse_background("0xFF0000").unwrap(), Rgba::new(255, 0, 0, 255));
        assert_eq!(parse_background("0x12aBcD").unwrap(), Rgba::new(0x12, 0xAB, 0xCD, 255));
        assert_eq!(parse_background("0X00ff7F").unwrap(), Rgba::new(0, 255, 0x7F, 255));
    }

    #[test]
    fn rejects_unprefixed_or_malformed() {
        assert!(parse_background("FF0000").is_err());
        assert!(parse_background("0xFFF").is_err());
        assert!(parse_background("0xFF00001").is_err());
        assert!(parse_background("0xGG0000").is_err());
        assert!(parse_background("").is_err());
    }

    #[test]
    fn opaque_pixels_ignore_background() {
        let bg = Rgb::new(10, 20, 30);
        assert_eq!(composite_over(Rgba::new(200, 100, 50, 255), bg), Rgb::new(200, 100, 50));
    }

    #[test]
    fn transparent_pixels_resolve_to_background() {
        let bg = Rgb::new(10, 20, 30);
        assert_eq!(composite_over(Rgba::new(200, 100, 50, 0), bg), bg);
    }

    #[test]
    fn half_alpha_blends_with_rounding() {
        // 255 * 128 / 255 rounds to 128
        let out = composite_over(Rgba::new(255, 255, 255, 128), Rgb::new(0, 0, 0));
        assert_eq!(out, Rgb::new(128, 128, 128));
    }
}
