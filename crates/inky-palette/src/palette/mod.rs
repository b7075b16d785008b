//! The fixed display palette
//!
//! This module provides the eight-entry palette table, nearest-color search
//! and the error type for palette lookups.

mod error;
mod palette;

pub use error::PaletteError;
pub use palette::{nearest_color, nearest_index, PaletteColor, PaletteEntry, PALETTE};
