pub mod config;
pub mod named_image;

pub use config::{AssetConfig, IconSettings};
pub use named_image::NamedImage;
