//! Error types for the icon-transparency crate.

use std::path::PathBuf;

/// Errors that can occur while loading, processing or saving an icon.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input could not be opened or decoded as an image.
    #[error("failed to load {}: {source}", path.display())]
    Decode {
        /// Path of the input image.
        path: PathBuf,
        /// Underlying decoder error.
        #[source]
        source: image::ImageError,
    },

    /// The output could not be encoded or written.
    #[error("failed to save {}: {source}", path.display())]
    Encode {
        /// Path of the output image.
        path: PathBuf,
        /// Underlying encoder error.
        #[source]
        source: image::ImageError,
    },

    /// The output extension does not map to a known image format.
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// An I/O error occurred while reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
