//! Content bounding box and cropping.

use image::RgbaImage;

/// Axis-aligned box around the non-transparent pixels of an image.
///
/// `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// First column containing content.
    pub left: u32,
    /// First row containing content.
    pub top: u32,
    /// One past the last column containing content.
    pub right: u32,
    /// One past the last row containing content.
    pub bottom: u32,
}

impl Bounds {
    /// Width of the box in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    /// Height of the box in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// Whether the box covers a whole `width` x `height` image.
    #[must_use]
    pub fn covers(&self, width: u32, height: u32) -> bool {
        self.left == 0 && self.top == 0 && self.right == width && self.bottom == height
    }
}

/// Smallest box containing every pixel with nonzero alpha.
///
/// Returns `None` when the image is fully transparent (or empty).
#[must_use]
pub fn content_bounds(image: &RgbaImage) -> Option<Bounds> {
    let mut found: Option<Bounds> = None;

    for (x, y, px) in image.enumerate_pixels() {
        if px[3] == 0 {
            continue;
        }
        let b = found.get_or_insert(Bounds {
            left: x,
            top: y,
            right: x + 1,
            bottom: y + 1,
        });
        b.left = b.left.min(x);
        b.top = b.top.min(y);
        b.right = b.right.max(x + 1);
        b.bottom = b.bottom.max(y + 1);
    }

    found
}

/// Copy the region described by `bounds` into a new image.
#[must_use]
pub fn crop_to(image: &RgbaImage, bounds: Bounds) -> RgbaImage {
    image::imageops::crop_imm(
        image,
        bounds.left,
        bounds.top,
        bounds.width(),
        bounds.height(),
    )
    .to_image()
}
