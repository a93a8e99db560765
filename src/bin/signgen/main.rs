//! signgen - Image to Stormworks paintable-sign savegame
//!
//! Pipeline: decode image -> composite over background -> pad to 9x9 block
//! multiples -> mirror horizontally -> optional Lanczos3 resize -> serialize
//! one sign component per block.

mod args;

use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::process;

use args::Args;
use signgen::color::DEFAULT_BACKGROUND;
use signgen::error::Result;
use signgen::grid::BLOCK_SIZE;
use signgen::{decode, normalize, rescale, vehicle};

/// Read the input image, from stdin when the path is "-".
fn read_input(path: &str) -> io::Result<Vec<u8>> {
    if path == "-" {
        let mut data = Vec::new();
        io::stdin().read_to_end(&mut data)?;
        Ok(data)
    } else {
        fs::read(path)
    }
}

/// Write the savegame, to stdout when the path is "-". Terminal output gets
/// a trailing newline; file output is written byte-exact.
fn write_output(path: &str, text: &str) -> io::Result<()> {
    if path == "-" {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.write_all(b"\n")?;
        stdout.flush()
    } else {
        fs::write(path, text)
    }
}

fn run(args: &Args) -> Result<()> {
    if args.verbose {
        eprintln!("Loading: {}", args.image);
    }
    let bytes = read_input(&args.image)?;

    let img = decode::load_image_from_bytes(&bytes)?;
    if args.verbose {
        eprintln!(
            "  Decoded {}x{} ({:?})",
            img.width(),
            img.height(),
            img.color()
        );
    }

    let background = args.background.unwrap_or(DEFAULT_BACKGROUND);
    let grid = normalize::normalize(&img, background);
    if args.verbose {
        eprintln!("  Normalized to {}x{}", grid.width(), grid.height());
    }

    let grid = rescale::resize_to_blocks(grid, args.width, args.height)?;
    if args.verbose {
        eprintln!(
            "  Output: {}x{} blocks",
            grid.width() / BLOCK_SIZE,
            grid.height() / BLOCK_SIZE
        );
    }

    let text = vehicle::serialize(&grid);
    write_output(&args.savegame, &text)?;
    if args.verbose {
        eprintln!("Wrote {} bytes to {}", text.len(), args.savegame);
    }

    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
