//! Black outline synthesis around yellow artwork.
//!
//! Yellow is nearly as light as white on the panel, so yellow icon shapes
//! disappear against a white background. This step draws a 1-pixel black
//! outline into the background around the exterior edge of every yellow
//! shape.
//!
//! # Two phases
//!
//! 1. Build a boolean map of yellow exterior-edge pixels from the unmodified
//!    image.
//! 2. Paint every background pixel that touches a mapped pixel black.
//!
//! Phase 2 only reads the map from phase 1 and the original image, never its
//! own output, so freshly painted border pixels cannot turn neighbouring
//! pixels into edges.
//!
//! Background here is wider than in the quantizer: opaque near-white pixels
//! also count.

use crate::color::{Rgba, RgbaImage};
use crate::constants::{
    ALPHA_THRESHOLD, NEAR_WHITE_THRESHOLD, NEIGHBORS_8, YELLOW_MAX_BLUE, YELLOW_MIN_RED_GREEN,
};

/// Background for border purposes: translucent, or opaque and near-white.
#[inline]
pub fn is_background(px: Rgba) -> bool {
    px.a < ALPHA_THRESHOLD
        || (px.r > NEAR_WHITE_THRESHOLD && px.g > NEAR_WHITE_THRESHOLD && px.b > NEAR_WHITE_THRESHOLD)
}

/// Yellow-like foreground: high red and green, low blue.
#[inline]
pub fn is_yellow(px: Rgba) -> bool {
    !is_background(px)
        && px.r > YELLOW_MIN_RED_GREEN
        && px.g > YELLOW_MIN_RED_GREEN
        && px.b < YELLOW_MAX_BLUE
}

/// Background test with out-of-bounds treated as background.
#[inline]
fn is_background_at(image: &RgbaImage, x: i32, y: i32) -> bool {
    image.get(x, y).map_or(true, is_background)
}

/// Yellow pixel with at least one background neighbour.
fn is_yellow_exterior_edge(image: &RgbaImage, x: u32, y: u32) -> bool {
    if !is_yellow(image.pixel(x, y)) {
        return false;
    }
    NEIGHBORS_8
        .iter()
        .any(|&(dx, dy)| is_background_at(image, x as i32 + dx, y as i32 + dy))
}

/// Phase 1: row-major map of yellow exterior-edge pixels.
fn yellow_edge_map(image: &RgbaImage) -> Vec<bool> {
    let (width, height) = image.dimensions();
    let mut edges = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            edges.push(is_yellow_exterior_edge(image, x, y));
        }
    }
    edges
}

/// Phase 2: background pixels that touch an edge pixel.
fn border_targets(image: &RgbaImage, edges: &[bool]) -> Vec<(u32, u32)> {
    let (width, height) = image.dimensions();
    let is_edge = |x: i32, y: i32| {
        x >= 0
            && y >= 0
            && x < width as i32
            && y < height as i32
            && edges[y as usize * width as usize + x as usize]
    };

    let mut targets = Vec::new();
    for y in 0..height {
        for x in 0..width {
            if !is_background(image.pixel(x, y)) {
                continue;
            }
            if NEIGHBORS_8
                .iter()
                .any(|&(dx, dy)| is_edge(x as i32 + dx, y as i32 + dy))
            {
                targets.push((x, y));
            }
        }
    }
    targets
}

/// Draw a 1-pixel opaque black outline around yellow shapes, in place.
///
/// Returns the number of pixels painted. Images without yellow are left
/// untouched.
///
/// # Example
///
/// ```
/// use inky_palette::{add_border, Rgba, RgbaImage};
///
/// let mut image = RgbaImage::filled(3, 3, Rgba::new(0, 0, 0, 0));
/// image.put_pixel(1, 1, Rgba::opaque(255, 255, 0));
///
/// let painted = add_border(&mut image);
///
/// assert_eq!(painted, 8);
/// assert_eq!(image.pixel(0, 0), Rgba::BLACK);
/// assert_eq!(image.pixel(1, 1), Rgba::opaque(255, 255, 0));
/// ```
pub fn add_border(image: &mut RgbaImage) -> usize {
    let edges = yellow_edge_map(image);
    let targets = border_targets(image, &edges);
    for &(x, y) in &targets {
        image.put_pixel(x, y, Rgba::BLACK);
    }
    targets.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAR: Rgba = Rgba::new(0, 0, 0, 0);
    const YELLOW: Rgba = Rgba::opaque(255, 255, 0);

    fn canvas_with_square(size: u32, from: u32, to: u32) -> RgbaImage {
        let mut image = RgbaImage::filled(size, size, CLEAR);
        for y in from..to {
            for x in from..to {
                image.put_pixel(x, y, YELLOW);
            }
        }
        image
    }

    #[test]
    fn test_background_definition() {
        assert!(is_background(Rgba::new(10, 10, 10, 127)));
        assert!(is_background(Rgba::opaque(255, 255, 255)));
        assert!(is_background(Rgba::new(241, 241, 241, 128)));
        assert!(!is_background(Rgba::opaque(240, 255, 255)));
        assert!(!is_background(Rgba::opaque(0, 0, 0)));
    }

    #[test]
    fn test_yellow_definition() {
        assert!(is_yellow(YELLOW));
        assert!(is_yellow(Rgba::opaque(201, 201, 99)));
        assert!(!is_yellow(Rgba::opaque(200, 255, 0)));
        assert!(!is_yellow(Rgba::opaque(255, 255, 100)));
        assert!(!is_yellow(Rgba::new(255, 255, 0, 100)));
    }

    #[test]
    fn test_square_gets_full_ring() {
        let mut image = canvas_with_square(7, 2, 5);
        let painted = add_border(&mut image);

        assert_eq!(painted, 16);
        for y in 0..7i32 {
            for x in 0..7i32 {
                let dist = (x - 3).abs().max((y - 3).abs());
                let px = image.pixel(x as u32, y as u32);
                match dist {
                    0 | 1 => assert_eq!(px, YELLOW, "({x}, {y}) inside square"),
                    2 => assert_eq!(px, Rgba::BLACK, "({x}, {y}) should be border"),
                    _ => assert_eq!(px, CLEAR, "({x}, {y}) should be untouched"),
                }
            }
        }
    }

    #[test]
    fn test_no_yellow_is_identity() {
        let mut image = RgbaImage::filled(5, 5, CLEAR);
        image.put_pixel(2, 2, Rgba::opaque(255, 0, 0));
        image.put_pixel(1, 1, Rgba::opaque(0, 0, 255));
        let before = image.clone();

        assert_eq!(add_border(&mut image), 0);
        assert_eq!(image, before);
    }

    #[test]
    fn test_interior_yellow_is_not_an_edge() {
        let image = canvas_with_square(7, 2, 5);
        assert!(!is_yellow_exterior_edge(&image, 3, 3));
        assert!(is_yellow_exterior_edge(&image, 2, 2));
    }

    #[test]
    fn test_image_edge_counts_as_background() {
        // Yellow fills the whole image: every frame pixel is an exterior edge,
        // but there is no background inside the image to paint.
        let mut image = RgbaImage::filled(3, 3, YELLOW);
        let edges = yellow_edge_map(&image);
        assert_eq!(edges.iter().filter(|&&e| e).count(), 8);
        assert_eq!(add_border(&mut image), 0);
    }

    #[test]
    fn test_non_background_neighbours_are_not_painted() {
        // Red pixel next to yellow keeps its color
        let mut image = canvas_with_square(5, 1, 4);
        image.put_pixel(0, 2, Rgba::opaque(255, 0, 0));
        add_border(&mut image);
        assert_eq!(image.pixel(0, 2), Rgba::opaque(255, 0, 0));
        assert_eq!(image.pixel(0, 1), Rgba::BLACK);
    }

    #[test]
    fn test_opaque_white_background_is_outlined() {
        let mut image = RgbaImage::filled(3, 3, Rgba::opaque(255, 255, 255));
        image.put_pixel(1, 1, YELLOW);
        assert_eq!(add_border(&mut image), 8);
        assert_eq!(image.pixel(2, 2), Rgba::BLACK);
    }

    #[test]
    fn test_painted_pixels_do_not_feed_back() {
        // Two pixels away from yellow must stay clear even though its
        // neighbour becomes black in the same call.
        let mut image = RgbaImage::filled(5, 1, CLEAR);
        image.put_pixel(0, 0, YELLOW);
        add_border(&mut image);
        assert_eq!(image.pixel(1, 0), Rgba::BLACK);
        assert_eq!(image.pixel(2, 0), CLEAR);
    }
}
