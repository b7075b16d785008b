//! Pixel and raster types
//!
//! The pipeline works on plain 8-bit RGBA values. There is no color space
//! conversion: palette matching is squared Euclidean distance on raw bytes.

mod rgba;
mod rgba_image;

pub use rgba::Rgba;
pub use rgba_image::RgbaImage;
