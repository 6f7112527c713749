//! Turn a dark icon drawn on a white background into a cropped, transparent PNG.
//!
//! Pixels whose red, green and blue channels are all brighter than 240 are
//! treated as background and made fully transparent; every other pixel is made
//! fully opaque. The result is then cropped to the bounding box of the opaque
//! content.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::Path;
//!
//! let report = icon_transparency::process(Path::new("icon.jpg"), Path::new("icon.png"))
//!     .expect("failed to process icon");
//! println!("{:?} -> {:?}", report.original_size, report.output_size);
//! ```
//!
//! # In memory
//!
//! ```
//! use image::{DynamicImage, Rgb, RgbImage};
//!
//! let mut img = RgbImage::from_pixel(10, 10, Rgb([255, 255, 255]));
//! img.put_pixel(4, 5, Rgb([0, 0, 0]));
//!
//! let (icon, bounds) = icon_transparency::process_image(DynamicImage::ImageRgb8(img));
//! assert_eq!(icon.dimensions(), (1, 1));
//! assert!(bounds.is_some());
//! ```

#![deny(missing_docs)]

pub mod bounds;
pub mod error;
pub mod keying;
mod processor;

pub use bounds::Bounds;
pub use error::{Error, Result};
pub use processor::{
    process, process_file, process_image, save_image, ProcessOptions, ProcessReport,
};
