//! Dithered-region detection.
//!
//! Icon artwork for a 7-color panel often fakes intermediate tones by
//! alternating two palette colors pixel by pixel. Such regions show high
//! variance between a pixel and its immediate neighbours; flat regions and
//! smooth gradients do not.
//!
//! Only the red channel is inspected. Which resampling path a pixel takes,
//! and so the output bytes, depends on this exact test.

use crate::color::RgbaImage;
use crate::constants::{DITHER_DIFF_THRESHOLD, DITHER_NEIGHBOR_THRESHOLD, NEIGHBORS_8};

/// Whether the pixel at (x, y) sits in a dithered region.
///
/// Counts the 8-connected neighbours whose red value differs from the
/// center's by more than [`DITHER_DIFF_THRESHOLD`]; the pixel is dithered
/// when at least [`DITHER_NEIGHBOR_THRESHOLD`] of them do.
///
/// Pixels on the outer 1-pixel frame of the image are always smooth.
///
/// # Example
///
/// ```
/// use inky_palette::{is_dithered, Rgba, RgbaImage};
///
/// // 3x3 checkerboard: the center differs from its 4 orthogonal neighbours
/// let b = Rgba::opaque(0, 0, 0);
/// let w = Rgba::opaque(255, 255, 255);
/// let image = RgbaImage::from_pixels(3, 3, &[b, w, b, w, b, w, b, w, b]).unwrap();
///
/// assert!(is_dithered(&image, 1, 1));
/// assert!(!is_dithered(&image, 0, 0));
/// ```
pub fn is_dithered(image: &RgbaImage, x: u32, y: u32) -> bool {
    let (width, height) = image.dimensions();
    if x < 1 || y < 1 || x + 1 >= width || y + 1 >= height {
        return false;
    }

    let center = image.pixel(x, y).r;
    let differing = NEIGHBORS_8
        .iter()
        .filter(|&&(dx, dy)| {
            let nx = (x as i32 + dx) as u32;
            let ny = (y as i32 + dy) as u32;
            image.pixel(nx, ny).r.abs_diff(center) > DITHER_DIFF_THRESHOLD
        })
        .count();

    differing >= DITHER_NEIGHBOR_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    fn red_image(width: u32, height: u32, reds: &[u8]) -> RgbaImage {
        let pixels: Vec<Rgba> = reds.iter().map(|&r| Rgba::opaque(r, 0, 0)).collect();
        RgbaImage::from_pixels(width, height, &pixels).unwrap()
    }

    #[test]
    fn test_flat_region_is_smooth() {
        let image = red_image(3, 3, &[100; 9]);
        assert!(!is_dithered(&image, 1, 1));
    }

    #[test]
    fn test_border_pixels_are_never_dithered() {
        #[rustfmt::skip]
        let image = red_image(3, 3, &[
            255, 0, 255,
            0, 255, 0,
            255, 0, 255,
        ]);
        for (x, y) in [(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (0, 2), (1, 2), (2, 2)] {
            assert!(!is_dithered(&image, x, y), "({x}, {y}) is on the border");
        }
        assert!(is_dithered(&image, 1, 1));
    }

    #[test]
    fn test_exactly_four_differing_neighbours_is_dithered() {
        #[rustfmt::skip]
        let image = red_image(3, 3, &[
            0, 0, 0,
            0, 0, 31,
            31, 31, 31,
        ]);
        assert!(is_dithered(&image, 1, 1));
    }

    #[test]
    fn test_three_differing_neighbours_is_smooth() {
        #[rustfmt::skip]
        let image = red_image(3, 3, &[
            0, 0, 0,
            0, 0, 0,
            31, 31, 31,
        ]);
        assert!(!is_dithered(&image, 1, 1));
    }

    #[test]
    fn test_difference_of_exactly_threshold_does_not_count() {
        let mut reds = [30u8; 9];
        reds[4] = 0;
        let image = red_image(3, 3, &reds);
        assert!(!is_dithered(&image, 1, 1));
    }

    #[test]
    fn test_only_red_channel_is_inspected() {
        // Strong green/blue alternation with constant red stays smooth
        let pixels: Vec<Rgba> = (0..9)
            .map(|i| {
                if i % 2 == 0 {
                    Rgba::opaque(50, 0, 255)
                } else {
                    Rgba::opaque(50, 255, 0)
                }
            })
            .collect();
        let image = RgbaImage::from_pixels(3, 3, &pixels).unwrap();
        assert!(!is_dithered(&image, 1, 1));
    }
}
