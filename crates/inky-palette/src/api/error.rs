//! Unified error type for the inky-palette public API.

use thiserror::Error;

/// Error type for conversion operations.
///
/// Conversion is deterministic, so none of these are transient: retrying
/// with the same input fails the same way.
///
/// # Example
///
/// ```
/// use inky_palette::{ConvertError, Converter, Rgba, RgbaImage};
///
/// let image = RgbaImage::filled(4, 4, Rgba::BLACK);
/// let result = Converter::new().resize(0, 2).convert(image);
///
/// assert!(matches!(result, Err(ConvertError::InvalidDimensions { width: 0, height: 2 })));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Image or resize target with a zero dimension
    #[error("invalid dimensions {width}x{height}: both must be positive")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },
    /// Pixel buffer length does not match the dimensions
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSize {
        /// Length implied by the dimensions
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },
    /// Indexed buffer holds a byte outside the palette
    #[error("palette index {index} out of range")]
    InvalidIndex {
        /// The offending byte
        index: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimensions_message() {
        let error = ConvertError::InvalidDimensions {
            width: 0,
            height: 160,
        };
        assert_eq!(
            error.to_string(),
            "invalid dimensions 0x160: both must be positive"
        );
    }

    #[test]
    fn test_buffer_size_message() {
        let error = ConvertError::BufferSize {
            expected: 16,
            actual: 12,
        };
        assert_eq!(
            error.to_string(),
            "buffer size mismatch: expected 16 bytes, got 12"
        );
    }
}
