//! IndexedImage: the terminal artifact of a conversion.
//!
//! [`IndexedImage`] stores one palette index per pixel with its dimensions.
//! The indexed form is what serialization sinks consume; an RGB rendering
//! through the nominal palette colors is available for previews.

use crate::api::ConvertError;
use crate::palette::{PaletteColor, PALETTE};

/// Palette-indexed raster, one byte per pixel, row-major.
///
/// Every byte is guaranteed to be in `0..=7`. The image is immutable once
/// built.
///
/// # Example
///
/// ```
/// use inky_palette::{IndexedImage, PaletteColor};
///
/// let image = IndexedImage::new(vec![0, 1, 5, 1], 2, 2).unwrap();
///
/// assert_eq!(image.width(), 2);
/// assert_eq!(image.color_at(0, 1), PaletteColor::Yellow);
///
/// // Nominal colors for preview rendering
/// let rgb = image.to_rgb();
/// assert_eq!(&rgb[6..9], &[255, 255, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedImage {
    /// Palette indices, one per pixel, row-major order.
    indices: Vec<u8>,
    /// Image width in pixels.
    width: u32,
    /// Image height in pixels.
    height: u32,
}

impl IndexedImage {
    /// Wrap a buffer of palette indices.
    ///
    /// # Errors
    ///
    /// - [`ConvertError::InvalidDimensions`] if either dimension is zero
    /// - [`ConvertError::BufferSize`] if `indices.len() != width * height`
    /// - [`ConvertError::InvalidIndex`] if any byte is above 7
    pub fn new(indices: Vec<u8>, width: u32, height: u32) -> Result<Self, ConvertError> {
        if width == 0 || height == 0 {
            return Err(ConvertError::InvalidDimensions { width, height });
        }
        let expected = width as usize * height as usize;
        if indices.len() != expected {
            return Err(ConvertError::BufferSize {
                expected,
                actual: indices.len(),
            });
        }
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= PALETTE.len()) {
            return Err(ConvertError::InvalidIndex { index });
        }
        Ok(Self::from_valid(indices, width, height))
    }

    /// Construct from indices already known to be valid.
    pub(crate) fn from_valid(indices: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(
            indices.len(),
            width as usize * height as usize,
            "indices length must match width * height ({}x{})",
            width,
            height,
        );
        Self {
            indices,
            width,
            height,
        }
    }

    /// Returns the palette indices as a slice.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels (and bytes).
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Always false: zero-sized images are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Palette color at (x, y). Coordinates must be in bounds.
    pub fn color_at(&self, x: u32, y: u32) -> PaletteColor {
        let index = self.indices[y as usize * self.width as usize + x as usize];
        PaletteColor::ALL[index as usize]
    }

    /// Pixel count per palette index.
    pub fn histogram(&self) -> [usize; 8] {
        let mut counts = [0usize; 8];
        for &index in &self.indices {
            counts[index as usize] += 1;
        }
        counts
    }

    /// Convert to RGB bytes using the nominal palette colors.
    ///
    /// The returned buffer has length `width * height * 3`.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.indices.len() * 3);
        for &index in &self.indices {
            let entry = &PALETTE[index as usize];
            rgb.extend_from_slice(&[entry.r, entry.g, entry.b]);
        }
        rgb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stores_fields() {
        let image = IndexedImage::new(vec![0, 1, 2, 3, 4, 5], 3, 2).unwrap();
        assert_eq!(image.indices(), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(image.width(), 3);
        assert_eq!(image.height(), 2);
        assert_eq!(image.len(), 6);
    }

    #[test]
    fn test_new_rejects_out_of_range_index() {
        let err = IndexedImage::new(vec![0, 8], 2, 1).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidIndex { index: 8 }));
    }

    #[test]
    fn test_new_rejects_length_mismatch() {
        let err = IndexedImage::new(vec![0; 5], 3, 2).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::BufferSize {
                expected: 6,
                actual: 5
            }
        ));
    }

    #[test]
    fn test_new_rejects_zero_width() {
        assert!(matches!(
            IndexedImage::new(Vec::new(), 0, 1),
            Err(ConvertError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_to_rgb_layout() {
        let image = IndexedImage::new(vec![0, 6], 2, 1).unwrap();
        assert_eq!(image.to_rgb(), vec![0, 0, 0, 255, 128, 0]);
    }

    #[test]
    fn test_histogram() {
        let image = IndexedImage::new(vec![1, 1, 7, 0], 2, 2).unwrap();
        assert_eq!(image.histogram(), [1, 2, 0, 0, 0, 0, 0, 1]);
    }
}
