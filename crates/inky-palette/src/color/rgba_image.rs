//! Owned RGBA raster

use super::rgba::Rgba;
use crate::api::ConvertError;
use crate::constants::RGBA_CHANNELS;

/// A row-major RGBA raster with 4 bytes per pixel.
///
/// The buffer is validated once at construction, so pixel access by
/// in-bounds coordinates never fails.
///
/// # Example
///
/// ```
/// use inky_palette::{Rgba, RgbaImage};
///
/// let mut image = RgbaImage::filled(2, 2, Rgba::opaque(255, 255, 255));
/// image.put_pixel(1, 0, Rgba::BLACK);
///
/// assert_eq!(image.pixel(1, 0), Rgba::BLACK);
/// assert_eq!(image.as_bytes().len(), 2 * 2 * 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbaImage {
    /// Wrap a decoded RGBA buffer.
    ///
    /// # Errors
    ///
    /// - [`ConvertError::InvalidDimensions`] if either dimension is zero
    /// - [`ConvertError::BufferSize`] if `data.len() != width * height * 4`
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, ConvertError> {
        if width == 0 || height == 0 {
            return Err(ConvertError::InvalidDimensions { width, height });
        }
        let expected = width as usize * height as usize * RGBA_CHANNELS;
        if data.len() != expected {
            return Err(ConvertError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build an image from pixels in row-major order.
    pub fn from_pixels(width: u32, height: u32, pixels: &[Rgba]) -> Result<Self, ConvertError> {
        let data = pixels.iter().flat_map(|px| px.to_bytes()).collect();
        Self::new(width, height, data)
    }

    /// An image where every pixel is `color`.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
        assert!(width > 0 && height > 0, "image dimensions must be non-zero");
        let count = width as usize * height as usize;
        let data = std::iter::repeat(color.to_bytes())
            .take(count)
            .flatten()
            .collect();
        Self {
            width,
            height,
            data,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Raw RGBA bytes, row-major.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        (y as usize * self.width as usize + x as usize) * RGBA_CHANNELS
    }

    /// Pixel at (x, y). Coordinates must be in bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        let i = self.offset(x, y);
        Rgba::new(
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        )
    }

    /// Pixel at signed coordinates, or `None` outside the image.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Rgba> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(self.pixel(x as u32, y as u32))
    }

    /// Overwrite the pixel at (x, y). Coordinates must be in bounds.
    #[inline]
    pub fn put_pixel(&mut self, x: u32, y: u32, px: Rgba) {
        let i = self.offset(x, y);
        self.data[i..i + RGBA_CHANNELS].copy_from_slice(&px.to_bytes());
    }

    /// Iterate over all pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgba> + '_ {
        self.data
            .chunks_exact(RGBA_CHANNELS)
            .map(|c| Rgba::new(c[0], c[1], c[2], c[3]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_dimensions() {
        let err = RgbaImage::new(0, 4, Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::InvalidDimensions {
                width: 0,
                height: 4
            }
        ));
    }

    #[test]
    fn test_new_rejects_short_buffer() {
        let err = RgbaImage::new(2, 2, vec![0; 15]).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::BufferSize {
                expected: 16,
                actual: 15
            }
        ));
    }

    #[test]
    fn test_pixel_layout_is_row_major() {
        let data: Vec<u8> = (0..24).collect();
        let image = RgbaImage::new(3, 2, data).unwrap();
        assert_eq!(image.pixel(0, 0), Rgba::new(0, 1, 2, 3));
        assert_eq!(image.pixel(2, 0), Rgba::new(8, 9, 10, 11));
        assert_eq!(image.pixel(0, 1), Rgba::new(12, 13, 14, 15));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let image = RgbaImage::filled(2, 2, Rgba::BLACK);
        assert_eq!(image.get(-1, 0), None);
        assert_eq!(image.get(0, 2), None);
        assert_eq!(image.get(1, 1), Some(Rgba::BLACK));
    }

    #[test]
    fn test_put_pixel() {
        let mut image = RgbaImage::filled(2, 1, Rgba::BLACK);
        image.put_pixel(1, 0, Rgba::opaque(1, 2, 3));
        assert_eq!(image.as_bytes(), &[0, 0, 0, 255, 1, 2, 3, 255]);
    }

    #[test]
    fn test_from_pixels_roundtrip() {
        let pixels = [Rgba::opaque(10, 20, 30), Rgba::new(1, 1, 1, 0)];
        let image = RgbaImage::from_pixels(2, 1, &pixels).unwrap();
        assert_eq!(image.pixels().collect::<Vec<_>>(), pixels);
    }
}
