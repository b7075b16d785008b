//! inky-palette: 7-color palette conversion for Inky e-ink displays
//!
//! This library turns RGBA artwork into the one-byte-per-pixel indexed
//! format the Inky Impression panel consumes: eight fixed colors, no
//! anti-aliasing, transparency mapped to white.
//!
//! # Quick Start
//!
//! The [`Converter`] builder is the primary entry point:
//!
//! ```
//! use inky_palette::{Converter, Rgba, RgbaImage};
//!
//! let image = RgbaImage::filled(4, 4, Rgba::opaque(255, 255, 255));
//! let indexed = Converter::new().convert(image).unwrap();
//!
//! assert_eq!(indexed.indices(), &[1u8; 16]);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! RgbaImage                 (decoded elsewhere)
//!     |
//!     v
//! [resize]                  per output pixel:
//!     |                       is_dithered?  -> nearest neighbor
//!     |                       otherwise     -> bilinear
//!     v
//! [add_border]              yellow exterior edges -> black outline
//!     |
//!     v
//! quantize                  alpha < 128      -> 1 (white)
//!     |                     otherwise        -> nearest_index(r, g, b)
//!     v
//! IndexedImage              one byte per pixel, 0..=7
//! ```
//!
//! # Palette
//!
//! | Index | Color  | RGB             |
//! |-------|--------|-----------------|
//! | 0     | black  | (0, 0, 0)       |
//! | 1     | white  | (255, 255, 255) |
//! | 2     | green  | (0, 255, 0)     |
//! | 3     | blue   | (0, 0, 255)     |
//! | 4     | red    | (255, 0, 0)     |
//! | 5     | yellow | (255, 255, 0)   |
//! | 6     | orange | (255, 128, 0)   |
//! | 7     | clear  | (224, 224, 224) |
//!
//! Matching is squared Euclidean distance on raw RGB bytes; ties go to the
//! lower index.
//!
//! # Two Notions of Transparency
//!
//! The quantizer treats only `alpha < 128` as transparent. Border synthesis
//! additionally treats opaque near-white pixels (all channels above 240) as
//! background. Quantization never sees that second definition.

pub mod api;
pub mod color;
pub mod constants;
pub mod output;
pub mod palette;
pub mod preprocess;


pub use api::{ConvertError, Converter};
pub use color::{Rgba, RgbaImage};
pub use output::{quantize, IndexedImage};
pub use palette::{nearest_color, nearest_index, PaletteColor, PaletteEntry, PaletteError, PALETTE};
pub use preprocess::{add_border, is_dithered, resize, ConvertOptions};
