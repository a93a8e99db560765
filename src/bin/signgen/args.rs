//! Command-line argument definitions

use clap::Parser;

use signgen::color::{parse_background, Rgba};

#[derive(Parser, Debug)]
#[command(name = "signgen")]
#[command(author, version, about = "Generate a Stormworks savegame of paintable signs from an image", long_about = None)]
pub struct Args {
    /// Input image path, or "-" to read from stdin
    #[arg(value_name = "IMAGE")]
    pub image: String,

    /// Output savegame path, or "-" to write to stdout
    #[arg(value_name = "SAVEGAME")]
    pub savegame: String,

    /// Resize the image to this width in blocks (1 block = 9 pixels).
    /// When --height is not given, the height scales uniformly and rounds
    /// up to whole blocks.
    #[arg(long)]
    pub width: Option<u32>,

    /// Resize the image to this height in blocks (1 block = 9 pixels).
    /// When --width is not given, the width scales uniformly and rounds
    /// up to whole blocks.
    #[arg(long)]
    pub height: Option<u32>,

    /// Background color for transparency and padding, format 0xRRGGBB
    /// (default: black)
    #[arg(long, value_parser = background_value)]
    pub background: Option<Rgba>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

fn background_value(s: &str) -> Result<Rgba, String> {
    parse_background(s).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positional_and_flags() {
        let args = Args::try_parse_from([
            "signgen",
            "input.png",
            "out.xml",
            "--width",
            "4",
            "--background",
            "0x336699",
            "-v",
        ])
        .unwrap();
        assert_eq!(args.image, "input.png");
        assert_eq!(args.savegame, "out.xml");
        assert_eq!(args.width, Some(4));
        assert_eq!(args.height, None);
        assert_eq!(args.background, Some(Rgba::new(0x33, 0x66, 0x99, 255)));
        assert!(args.verbose);
    }

    #[test]
    fn dash_means_stdio() {
        let args = Args::try_parse_from(["signgen", "-", "-"]).unwrap();
        assert_eq!(args.image, "-");
        assert_eq!(args.savegame, "-");
    }

    #[test]
    fn rejects_malformed_background() {
        assert!(Args::try_parse_from(["signgen", "a.png", "-", "--background", "FF0000"]).is_err());
    }
}
