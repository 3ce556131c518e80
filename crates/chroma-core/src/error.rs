//! Error types for chroma
//!
//! Only the image adapter can fail; the color math is total.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for chroma operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading images
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The requested file does not exist
    #[error("file doesn't exist: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The PNG stream could not be decoded
    #[error("couldn't decode png: {0}")]
    Decode(#[from] png::DecodingError),

    /// Decoded pixels are in a layout the surface cannot hold
    #[error("unsupported pixel format: {0}")]
    UnsupportedPixelFormat(String),

    /// Buffer size mismatch
    #[error("buffer size mismatch: expected {expected}, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
