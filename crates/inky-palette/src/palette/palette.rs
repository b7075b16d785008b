//! The fixed Inky Impression palette and nearest-color matching.
//!
//! The display accepts exactly eight color codes. Their order is part of
//! the contract: it is the byte value written per pixel and it decides
//! ties during nearest-color search.

use std::fmt;
use std::str::FromStr;

use super::error::PaletteError;
use crate::constants::PALETTE_SIZE;

/// One of the eight colors the display can show.
///
/// The discriminant is the palette index written to the indexed buffer.
///
/// # Example
///
/// ```
/// use inky_palette::PaletteColor;
///
/// assert_eq!(PaletteColor::Yellow.index(), 5);
/// assert_eq!(PaletteColor::try_from(6).unwrap(), PaletteColor::Orange);
/// assert_eq!("clear".parse::<PaletteColor>().unwrap().rgb(), (224, 224, 224));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum PaletteColor {
    Black = 0,
    White = 1,
    Green = 2,
    Blue = 3,
    Red = 4,
    Yellow = 5,
    Orange = 6,
    /// Light grey the panel uses for its cleaning cycle.
    Clear = 7,
}

/// A palette color together with its nominal RGB value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub color: PaletteColor,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PaletteEntry {
    const fn new(color: PaletteColor, r: u8, g: u8, b: u8) -> Self {
        Self { color, r, g, b }
    }

    /// Palette index of this entry (0..=7).
    #[inline]
    pub fn index(&self) -> u8 {
        self.color.index()
    }

    /// Squared Euclidean RGB distance to this entry.
    #[inline]
    pub fn distance_sq(&self, r: u8, g: u8, b: u8) -> u32 {
        let dr = r as i32 - self.r as i32;
        let dg = g as i32 - self.g as i32;
        let db = b as i32 - self.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }
}

/// The palette in index order. Scan order is also tie-break order.
pub const PALETTE: [PaletteEntry; PALETTE_SIZE] = [
    PaletteEntry::new(PaletteColor::Black, 0, 0, 0),
    PaletteEntry::new(PaletteColor::White, 255, 255, 255),
    PaletteEntry::new(PaletteColor::Green, 0, 255, 0),
    PaletteEntry::new(PaletteColor::Blue, 0, 0, 255),
    PaletteEntry::new(PaletteColor::Red, 255, 0, 0),
    PaletteEntry::new(PaletteColor::Yellow, 255, 255, 0),
    PaletteEntry::new(PaletteColor::Orange, 255, 128, 0),
    PaletteEntry::new(PaletteColor::Clear, 224, 224, 224),
];

impl PaletteColor {
    /// All colors in index order.
    pub const ALL: [PaletteColor; PALETTE_SIZE] = [
        PaletteColor::Black,
        PaletteColor::White,
        PaletteColor::Green,
        PaletteColor::Blue,
        PaletteColor::Red,
        PaletteColor::Yellow,
        PaletteColor::Orange,
        PaletteColor::Clear,
    ];

    /// Palette index written to the display buffer.
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Nominal RGB value.
    #[inline]
    pub fn rgb(self) -> (u8, u8, u8) {
        let entry = &PALETTE[self as usize];
        (entry.r, entry.g, entry.b)
    }

    /// Lower-case name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            PaletteColor::Black => "black",
            PaletteColor::White => "white",
            PaletteColor::Green => "green",
            PaletteColor::Blue => "blue",
            PaletteColor::Red => "red",
            PaletteColor::Yellow => "yellow",
            PaletteColor::Orange => "orange",
            PaletteColor::Clear => "clear",
        }
    }
}

impl TryFrom<u8> for PaletteColor {
    type Error = PaletteError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        PaletteColor::ALL
            .get(index as usize)
            .copied()
            .ok_or(PaletteError::InvalidIndex(index))
    }
}

impl FromStr for PaletteColor {
    type Err = PaletteError;

    /// Parse a color name, case-insensitively. `"clean"` is accepted as an
    /// alias for [`PaletteColor::Clear`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        if name == "clean" {
            return Ok(PaletteColor::Clear);
        }
        PaletteColor::ALL
            .iter()
            .copied()
            .find(|c| c.name() == name)
            .ok_or_else(|| PaletteError::UnknownName(s.to_string()))
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Index of the palette entry nearest to (r, g, b).
///
/// Distance is squared Euclidean in raw RGB. The running minimum is only
/// replaced by a strictly smaller distance, so an exact tie resolves to the
/// lower index.
///
/// # Example
///
/// ```
/// use inky_palette::nearest_index;
///
/// assert_eq!(nearest_index(10, 10, 10), 0);   // black
/// assert_eq!(nearest_index(250, 120, 5), 6);  // orange
/// ```
pub fn nearest_index(r: u8, g: u8, b: u8) -> u8 {
    let mut best = PALETTE[0].index();
    let mut best_distance = u32::MAX;

    for entry in &PALETTE {
        let distance = entry.distance_sq(r, g, b);
        if distance < best_distance {
            best_distance = distance;
            best = entry.index();
        }
    }

    best
}

/// [`nearest_index`] as a typed color.
#[inline]
pub fn nearest_color(r: u8, g: u8, b: u8) -> PaletteColor {
    PaletteColor::ALL[nearest_index(r, g, b) as usize]
}
