//! Error types for the sign generation pipeline.
//!
//! Every failure is fatal for the run: nothing is retried, and no partial
//! output is written (the whole savegame text is built in memory before the
//! single write).

use thiserror::Error;

/// Result type alias for sign generation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating a savegame from an image.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed command-line value, e.g. a background color that is not
    /// `0xRRGGBB`.
    #[error("{0}")]
    Argument(String),

    /// Input bytes could not be decoded as an image.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// Unreadable input or unwritable output.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal padding/resize math produced dimensions that are not
    /// multiples of the block size. Unreachable by construction; if it
    /// triggers, it is a defect, not a user error.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),
}
