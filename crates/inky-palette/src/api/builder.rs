//! Converter builder -- the primary entry point for the crate.
//!
//! [`Converter`] wraps the pipeline (resize, border, quantize) behind a
//! fluent builder.

use super::error::ConvertError;
use crate::color::RgbaImage;
use crate::output::{quantize, IndexedImage};
use crate::preprocess::{add_border, resize, ConvertOptions};

/// High-level converter from RGBA rasters to palette-indexed images.
///
/// # Design
///
/// - Configuration methods consume and return `self`
/// - [`convert()`](Self::convert) takes `&self`, so one converter can be
///   reused for every image in a batch
/// - Resize is skipped when the image already has the target size
///
/// # Example
///
/// ```
/// use inky_palette::{Converter, Rgba, RgbaImage};
///
/// let converter = Converter::new().resize(2, 2).border(true);
///
/// let image = RgbaImage::filled(4, 4, Rgba::opaque(255, 255, 255));
/// let indexed = converter.convert(image).unwrap();
///
/// assert_eq!(indexed.width(), 2);
/// assert_eq!(indexed.indices(), &[1, 1, 1, 1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    /// Converter that quantizes images as-is.
    pub fn new() -> Self {
        Self::default()
    }

    /// Converter with the given options.
    pub fn with_options(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Set target dimensions for resize.
    #[inline]
    pub fn resize(mut self, width: u32, height: u32) -> Self {
        self.options = self.options.resize(width, height);
        self
    }

    /// Enable or disable yellow border synthesis.
    #[inline]
    pub fn border(mut self, enabled: bool) -> Self {
        self.options = self.options.border(enabled);
        self
    }

    /// The configured options.
    #[inline]
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Check the options before converting a batch.
    ///
    /// # Errors
    ///
    /// [`ConvertError::InvalidDimensions`] if a resize target has a zero
    /// dimension.
    pub fn validate(&self) -> Result<(), ConvertError> {
        self.options.validate()
    }

    /// Run resize and border synthesis without quantizing.
    ///
    /// Useful for inspecting the RGBA image the quantizer will see.
    pub fn prepare(&self, mut image: RgbaImage) -> Result<RgbaImage, ConvertError> {
        if let Some((width, height)) = self.options.target_size() {
            if image.dimensions() != (width, height) {
                image = resize(&image, width, height)?;
            }
        }
        if self.options.add_border {
            add_border(&mut image);
        }
        Ok(image)
    }

    /// Convert one image to palette indices.
    ///
    /// # Errors
    ///
    /// [`ConvertError::InvalidDimensions`] if a resize target has a zero
    /// dimension.
    pub fn convert(&self, image: RgbaImage) -> Result<IndexedImage, ConvertError> {
        let prepared = self.prepare(image)?;
        Ok(quantize(&prepared))
    }
}
