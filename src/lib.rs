//! Inky Assets - image conversion for 7-color e-ink displays
//!
//! Decodes PNG artwork, runs it through the [`inky_palette`] pipeline and
//! writes the palette indices out as C++ headers or SQLite asset rows.
//! This library exposes modules for the CLI and for integration testing.

pub mod codec;
pub mod error;
pub mod models;
pub mod services;
