//! 8-bit RGBA pixel type

use crate::constants::ALPHA_THRESHOLD;

/// A single 8-bit RGBA pixel.
///
/// This is the unit of the decoded input image. Channel values are stored
/// exactly as they came from the decoder; no gamma handling is applied
/// anywhere in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgba {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
    /// Alpha channel (0 = fully transparent, 255 = opaque)
    pub a: u8,
}

impl Rgba {
    /// Opaque black, the color written by border synthesis.
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);

    /// Create a pixel from its four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque pixel.
    ///
    /// # Example
    /// ```
    /// use inky_palette::Rgba;
    /// let red = Rgba::opaque(255, 0, 0);
    /// assert_eq!(red.a, 255);
    /// ```
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a pixel from a byte array [R, G, B, A].
    #[inline]
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Convert to a byte array [R, G, B, A].
    #[inline]
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Alpha below the transparency threshold.
    ///
    /// This is the quantizer's notion of transparency. Border synthesis
    /// uses a wider definition that also includes near-white pixels.
    #[inline]
    pub fn is_translucent(self) -> bool {
        self.a < ALPHA_THRESHOLD
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(bytes: [u8; 4]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(px: Rgba) -> Self {
        px.to_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_conversion() {
        let px = Rgba::from_bytes([1, 2, 3, 4]);
        assert_eq!(px, Rgba::new(1, 2, 3, 4));
        assert_eq!(px.to_bytes(), [1, 2, 3, 4]);
    }

    #[test]
    fn test_translucent_threshold() {
        assert!(Rgba::new(0, 0, 0, 0).is_translucent());
        assert!(Rgba::new(0, 0, 0, 127).is_translucent());
        assert!(!Rgba::new(0, 0, 0, 128).is_translucent());
        assert!(!Rgba::opaque(255, 255, 255).is_translucent());
    }
}
