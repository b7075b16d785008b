//! Assertion helpers for tests.

use inky_palette::{IndexedImage, PaletteColor};
use pretty_assertions::assert_eq;

/// Assert the image has the given size and every index is a palette slot
pub fn assert_indexed(image: &IndexedImage, width: u32, height: u32) {
    assert_eq!((image.width(), image.height()), (width, height));
    assert_eq!(image.len(), (width * height) as usize);
    assert!(
        image.indices().iter().all(|&i| i < 8),
        "Index out of range in {:?}",
        image.indices()
    );
}

/// Assert the per-color pixel counts of an image
pub fn assert_histogram(image: &IndexedImage, expected: &[(PaletteColor, usize)]) {
    let histogram = image.histogram();
    let mut want = [0usize; 8];
    for &(color, count) in expected {
        want[color.index() as usize] = count;
    }
    assert_eq!(histogram, want, "Unexpected color histogram");
}
