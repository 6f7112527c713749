//! The load, key, crop, save pipeline.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::bounds::{self, Bounds};
use crate::error::{Error, Result};
use crate::keying;

/// Options controlling file processing.
#[derive(Debug, Clone, Default)]
pub struct ProcessOptions {
    /// Suppress the progress lines printed to stdout.
    pub quiet: bool,
}

/// Summary of a processed icon.
#[derive(Debug, Clone)]
pub struct ProcessReport {
    /// Image that was read.
    pub input: PathBuf,
    /// Image that was written.
    pub output: PathBuf,
    /// Dimensions of the decoded input.
    pub original_size: (u32, u32),
    /// Box around the opaque content, `None` if everything was background.
    pub bounds: Option<Bounds>,
    /// Dimensions of the saved image.
    pub output_size: (u32, u32),
}

impl ProcessReport {
    /// Whether the output is smaller than the input.
    #[must_use]
    pub fn was_cropped(&self) -> bool {
        self.original_size != self.output_size
    }
}

/// Key out the background of an already decoded image and crop it to its content.
///
/// The image is converted to RGBA first. If no pixel survives keying the
/// full-size, fully transparent image is returned with `None` bounds.
#[must_use]
pub fn process_image(image: DynamicImage) -> (RgbaImage, Option<Bounds>) {
    let mut rgba = image.into_rgba8();
    keying::key_out_background(&mut rgba);

    match bounds::content_bounds(&rgba) {
        Some(b) => {
            log::debug!(
                "content bounds ({}, {}, {}, {})",
                b.left,
                b.top,
                b.right,
                b.bottom
            );
            (bounds::crop_to(&rgba, b), Some(b))
        }
        None => {
            log::debug!("no opaque content, keeping full image");
            (rgba, None)
        }
    }
}

/// Process `input` into `output` with default options.
///
/// Prints `Processing <input>...` and `Saved processed icon to <output>`.
///
/// # Errors
///
/// See [`process_file`].
pub fn process(input: &Path, output: &Path) -> Result<ProcessReport> {
    process_file(input, output, &ProcessOptions::default())
}

/// Process a single icon file: load, key out the background, crop, save.
///
/// # Errors
///
/// Returns [`Error::Decode`] if `input` cannot be opened or decoded, and
/// [`Error::UnsupportedFormat`], [`Error::Io`] or [`Error::Encode`] if the
/// result cannot be written to `output`.
pub fn process_file(input: &Path, output: &Path, opts: &ProcessOptions) -> Result<ProcessReport> {
    if !opts.quiet {
        println!("Processing {}...", input.display());
    }

    let decoded = image::open(input).map_err(|source| Error::Decode {
        path: input.to_path_buf(),
        source,
    })?;
    let original_size = (decoded.width(), decoded.height());
    log::debug!(
        "decoded {} ({}x{}, {:?})",
        input.display(),
        original_size.0,
        original_size.1,
        decoded.color()
    );

    let (processed, bounds) = process_image(decoded);
    save_image(&processed, output)?;

    if !opts.quiet {
        println!("Saved processed icon to {}", output.display());
    }

    Ok(ProcessReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        original_size,
        bounds,
        output_size: processed.dimensions(),
    })
}

/// Save an RGBA image in the format implied by the extension of `path`.
///
/// Encoders run with their default settings. The image is encoded in memory
/// first, so nothing is written to `path` when the encoder fails.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] for an unknown extension,
/// [`Error::Encode`] if the encoder rejects the image (e.g. RGBA into JPEG),
/// and [`Error::Io`] if the file cannot be written.
pub fn save_image(img: &RgbaImage, path: &Path) -> Result<()> {
    let format = ImageFormat::from_path(path)
        .map_err(|_| Error::UnsupportedFormat(path.display().to_string()))?;

    let mut encoded = Cursor::new(Vec::new());
    img.write_to(&mut encoded, format)
        .map_err(|source| Error::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    std::fs::write(path, encoded.into_inner())?;

    log::debug!(
        "wrote {} ({}x{}, {format:?})",
        path.display(),
        img.width(),
        img.height()
    );
    Ok(())
}
