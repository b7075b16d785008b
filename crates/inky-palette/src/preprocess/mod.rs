//! Image preprocessing ahead of palette quantization.
//!
//! Both steps are optional and run in this order:
//!
//! 1. **Resize** ([`resize`]) - dither-aware: nearest-neighbor inside
//!    dithered regions ([`is_dithered`]), bilinear elsewhere
//! 2. **Border** ([`add_border`]) - black outline around yellow shapes,
//!    drawn in place
//!
//! Resize runs first so the outline is exactly one pixel wide at the target
//! resolution.
//!
//! # Example
//!
//! ```
//! use inky_palette::{add_border, resize, Rgba, RgbaImage};
//!
//! let mut icon = RgbaImage::filled(32, 32, Rgba::new(0, 0, 0, 0));
//! for y in 8..24 {
//!     for x in 8..24 {
//!         icon.put_pixel(x, y, Rgba::opaque(255, 255, 0));
//!     }
//! }
//!
//! let mut small = resize(&icon, 16, 16).unwrap();
//! add_border(&mut small);
//!
//! assert_eq!(small.pixel(3, 3), Rgba::BLACK);
//! assert_eq!(small.pixel(8, 8), Rgba::opaque(255, 255, 0));
//! ```

mod border;
mod dither_detect;
mod options;
mod resize;

pub use border::{add_border, is_background, is_yellow};
pub use dither_detect::is_dithered;
pub use options::ConvertOptions;
pub use resize::resize;
