//! Conversion options.

use crate::api::ConvertError;

/// Configuration for the steps that run before quantization.
///
/// # Defaults
///
/// - Resize: disabled (keep source dimensions)
/// - Border: disabled
///
/// # Example
///
/// ```
/// use inky_palette::ConvertOptions;
///
/// let options = ConvertOptions::new().resize(160, 160).border(true);
/// assert_eq!(options.target_size(), Some((160, 160)));
/// assert!(options.add_border);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Target width for resize (None = preserve original).
    pub target_width: Option<u32>,

    /// Target height for resize (None = preserve original).
    pub target_height: Option<u32>,

    /// Draw a black outline around yellow shapes.
    pub add_border: bool,
}

impl ConvertOptions {
    /// Options that convert an image as-is.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set target dimensions for resize.
    #[inline]
    pub fn resize(mut self, width: u32, height: u32) -> Self {
        self.target_width = Some(width);
        self.target_height = Some(height);
        self
    }

    /// Enable or disable border synthesis.
    #[inline]
    pub fn border(mut self, enabled: bool) -> Self {
        self.add_border = enabled;
        self
    }

    /// Both target dimensions, if resize is configured.
    #[inline]
    pub fn target_size(&self) -> Option<(u32, u32)> {
        self.target_width.zip(self.target_height)
    }

    /// Reject a resize target with a zero dimension.
    ///
    /// # Errors
    ///
    /// [`ConvertError::InvalidDimensions`] naming the configured target.
    pub fn validate(&self) -> Result<(), ConvertError> {
        match self.target_size() {
            Some((width, height)) if width == 0 || height == 0 => {
                Err(ConvertError::InvalidDimensions { width, height })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert_eq!(ConvertOptions::new().validate(), Ok(()));
        assert_eq!(ConvertOptions::new().resize(1, 1).validate(), Ok(()));
        assert_eq!(
            ConvertOptions::new().resize(0, 160).validate(),
            Err(ConvertError::InvalidDimensions {
                width: 0,
                height: 160
            })
        );
    }

    #[test]
    fn test_defaults() {
        let options = ConvertOptions::new();
        assert_eq!(options.target_size(), None);
        assert!(!options.add_border);
    }

    #[test]
    fn test_partial_size_is_not_a_target() {
        let options = ConvertOptions {
            target_width: Some(10),
            ..ConvertOptions::default()
        };
        assert_eq!(options.target_size(), None);
    }
}
