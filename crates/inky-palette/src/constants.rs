//! Named thresholds used throughout the conversion pipeline.
//!
//! These values define the output byte-for-byte. Changing any of them
//! changes which pixels are treated as transparent, dithered or yellow.

/// Number of entries in the display palette.
pub const PALETTE_SIZE: usize = 8;

/// Bytes per pixel in an [`RgbaImage`](crate::RgbaImage) buffer.
pub const RGBA_CHANNELS: usize = 4;

/// Pixels with alpha below this are transparent.
pub const ALPHA_THRESHOLD: u8 = 128;

/// Palette index emitted for transparent pixels (white).
pub const TRANSPARENT_INDEX: u8 = 1;

/// Red-channel difference above which a neighbour counts as "different".
pub const DITHER_DIFF_THRESHOLD: u8 = 30;

/// Minimum number of differing neighbours (of 8) for a dithered pixel.
pub const DITHER_NEIGHBOR_THRESHOLD: usize = 4;

/// Opaque pixels with every channel above this count as background when
/// synthesizing borders.
pub const NEAR_WHITE_THRESHOLD: u8 = 240;

/// Red and green must both exceed this for a pixel to be yellow.
pub const YELLOW_MIN_RED_GREEN: u8 = 200;

/// Blue must stay below this for a pixel to be yellow.
pub const YELLOW_MAX_BLUE: u8 = 100;

/// Offsets of the 8-connected neighbourhood, row by row.
pub(crate) const NEIGHBORS_8: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];
