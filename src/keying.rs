//! White-background chroma keying.
//!
//! A pixel is background when its red, green and blue channels are all
//! strictly brighter than [`BACKGROUND_THRESHOLD`]. Keying rewrites the alpha
//! channel of every pixel: background becomes fully transparent, everything
//! else fully opaque. Existing alpha is discarded, not composited.

use image::{Rgba, RgbaImage};

/// Channel value every one of R, G and B must exceed for a pixel to count as background.
pub const BACKGROUND_THRESHOLD: u8 = 240;

const TRANSPARENT: u8 = 0;
const OPAQUE: u8 = 255;

/// Whether `pixel` belongs to the near-white background.
#[must_use]
pub fn is_background(pixel: Rgba<u8>) -> bool {
    let [r, g, b, _] = pixel.0;
    r > BACKGROUND_THRESHOLD && g > BACKGROUND_THRESHOLD && b > BACKGROUND_THRESHOLD
}

/// Make background pixels transparent and all others opaque, in place.
///
/// Color channels are left untouched.
pub fn key_out_background(image: &mut RgbaImage) {
    for pixel in image.pixels_mut() {
        pixel[3] = if is_background(*pixel) {
            TRANSPARENT
        } else {
            OPAQUE
        };
    }
}
