//! Dither-aware image resizing.
//!
//! Plain bilinear scaling blurs dither patterns into greys the panel cannot
//! show; plain nearest-neighbor scaling aliases smooth gradients. This
//! resampler picks per output pixel: regions classified as dithered by
//! [`is_dithered`] are sampled nearest-neighbor, everything else bilinear.

use super::dither_detect::is_dithered;
use crate::api::ConvertError;
use crate::color::{Rgba, RgbaImage};

/// Resize `src` to `target_width` x `target_height`.
///
/// For every output pixel the fractional source position is
/// `x * src_w / target_w` (and likewise for y). The truncated, clamped
/// position is classified; dithered pixels copy the source pixel at the
/// rounded position, smooth pixels are bilinearly interpolated per channel.
///
/// Returns a copy when the dimensions already match.
///
/// # Errors
///
/// [`ConvertError::InvalidDimensions`] if either target dimension is zero.
///
/// # Example
///
/// ```
/// use inky_palette::{resize, Rgba, RgbaImage};
///
/// let src = RgbaImage::filled(8, 8, Rgba::opaque(255, 0, 0));
/// let out = resize(&src, 3, 5).unwrap();
///
/// assert_eq!(out.dimensions(), (3, 5));
/// assert!(out.pixels().all(|px| px == Rgba::opaque(255, 0, 0)));
/// ```
pub fn resize(
    src: &RgbaImage,
    target_width: u32,
    target_height: u32,
) -> Result<RgbaImage, ConvertError> {
    if target_width == 0 || target_height == 0 {
        return Err(ConvertError::InvalidDimensions {
            width: target_width,
            height: target_height,
        });
    }
    if src.dimensions() == (target_width, target_height) {
        return Ok(src.clone());
    }

    let (src_width, src_height) = src.dimensions();
    let mut out = Vec::with_capacity(target_width as usize * target_height as usize * 4);

    for y in 0..target_height {
        for x in 0..target_width {
            let src_x = (x as f32 * src_width as f32) / target_width as f32;
            let src_y = (y as f32 * src_height as f32) / target_height as f32;

            let sample_x = (src_x as u32).min(src_width - 1);
            let sample_y = (src_y as u32).min(src_height - 1);

            let px = if is_dithered(src, sample_x, sample_y) {
                sample_nearest(src, src_x, src_y)
            } else {
                sample_bilinear(src, src_x, src_y)
            };
            out.extend_from_slice(&px.to_bytes());
        }
    }

    RgbaImage::new(target_width, target_height, out)
}

/// Source pixel at the rounded position, clamped into the image.
fn sample_nearest(src: &RgbaImage, src_x: f32, src_y: f32) -> Rgba {
    let x = ((src_x + 0.5) as u32).min(src.width() - 1);
    let y = ((src_y + 0.5) as u32).min(src.height() - 1);
    src.pixel(x, y)
}

/// Bilinear blend of the four pixels around the fractional position.
fn sample_bilinear(src: &RgbaImage, src_x: f32, src_y: f32) -> Rgba {
    let x1 = (src_x as u32).min(src.width() - 1);
    let y1 = (src_y as u32).min(src.height() - 1);
    let x2 = (x1 + 1).min(src.width() - 1);
    let y2 = (y1 + 1).min(src.height() - 1);

    let fx = src_x - x1 as f32;
    let fy = src_y - y1 as f32;

    let tl = src.pixel(x1, y1).to_bytes();
    let tr = src.pixel(x2, y1).to_bytes();
    let bl = src.pixel(x1, y2).to_bytes();
    let br = src.pixel(x2, y2).to_bytes();

    let mut result = [0u8; 4];
    for c in 0..4 {
        let top = tl[c] as f32 * (1.0 - fx) + tr[c] as f32 * fx;
        let bottom = bl[c] as f32 * (1.0 - fx) + br[c] as f32 * fx;
        let value = top * (1.0 - fy) + bottom * fy;
        result[c] = (value + 0.5).clamp(0.0, 255.0) as u8;
    }
    Rgba::from_bytes(result)
}
