//! Test fixtures: PNG files generated on the fly in a scratch directory.

use std::path::{Path, PathBuf};

use inky_assets::codec::encode_png;
use inky_palette::{Rgba, RgbaImage};

/// Palette colors as opaque RGBA
pub mod colors {
    use inky_palette::Rgba;

    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
    pub const YELLOW: Rgba = Rgba::opaque(255, 255, 0);
    pub const RED: Rgba = Rgba::opaque(255, 0, 0);
    pub const BLUE: Rgba = Rgba::opaque(0, 0, 255);
}

/// Write `image` as an RGBA PNG at `dir/name`.
pub fn write_png(dir: &Path, name: &str, image: &RgbaImage) -> PathBuf {
    let path = dir.join(name);
    let bytes = encode_png(
        image.width(),
        image.height(),
        png::ColorType::Rgba,
        image.as_bytes(),
    )
    .expect("encode fixture");
    std::fs::write(&path, bytes).expect("write fixture");
    path
}

/// Write a file that has a `.png` name but is not a PNG.
pub fn write_corrupt_png(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"\x89PNG but not really").expect("write fixture");
    path
}

/// Solid color image
pub fn solid(width: u32, height: u32, color: Rgba) -> RgbaImage {
    RgbaImage::filled(width, height, color)
}

/// 8x8 white icon with a 4x4 yellow square at (2,2)..(5,5).
///
/// Halving it samples even source coordinates only, which gives a 4x4 image
/// with a 2x2 yellow square at (1,1)..(2,2).
pub fn yellow_icon() -> RgbaImage {
    let mut image = RgbaImage::filled(8, 8, colors::WHITE);
    for y in 2..6 {
        for x in 2..6 {
            image.put_pixel(x, y, colors::YELLOW);
        }
    }
    image
}
