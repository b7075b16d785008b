//! Output of the conversion pipeline.
//!
//! [`quantize`] maps an RGBA raster onto the fixed palette and produces an
//! [`IndexedImage`], the canonical output handed to serialization sinks.
//!
//! # Output Formats
//!
//! - **Indexed** ([`IndexedImage::indices`]): raw `u8` palette indices
//! - **RGB preview** ([`IndexedImage::to_rgb`]): nominal palette colors

mod indexed_image;
mod quantize;

pub use indexed_image::IndexedImage;
pub use quantize::quantize;
