//! RGBA to palette-index quantization.

use super::indexed_image::IndexedImage;
use crate::color::RgbaImage;
use crate::constants::TRANSPARENT_INDEX;
use crate::palette::nearest_index;

/// Map every pixel of `image` to a palette index.
///
/// Translucent pixels (alpha below 128) become white regardless of their
/// RGB value; all others take the nearest palette color. The mapping is
/// per-pixel and order independent.
///
/// # Example
///
/// ```
/// use inky_palette::{quantize, Rgba, RgbaImage};
///
/// let pixels = [Rgba::opaque(10, 10, 10), Rgba::new(255, 0, 0, 0)];
/// let image = RgbaImage::from_pixels(2, 1, &pixels).unwrap();
///
/// assert_eq!(quantize(&image).indices(), &[0, 1]);
/// ```
pub fn quantize(image: &RgbaImage) -> IndexedImage {
    let indices = image
        .pixels()
        .map(|px| {
            if px.is_translucent() {
                TRANSPARENT_INDEX
            } else {
                nearest_index(px.r, px.g, px.b)
            }
        })
        .collect();
    IndexedImage::from_valid(indices, image.width(), image.height())
}
