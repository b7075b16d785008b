//! Error types for palette lookups

use thiserror::Error;

/// Error type for palette lookups.
///
/// Returned when a raw byte or a color name does not identify one of the
/// eight display colors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// Index outside 0..=7
    #[error("invalid palette index {0} (expected 0..=7)")]
    InvalidIndex(u8),
    /// Name that matches no palette color
    #[error("unknown palette color name: {0:?}")]
    UnknownName(String),
}
