//! Public API for the inky-palette crate.
//!
//! This module provides the high-level API: [`Converter`] builder and
//! [`ConvertError`] unified error type.

mod builder;
mod error;

pub use builder::Converter;
pub use error::ConvertError;
