use std::path::PathBuf;

use inky_palette::ConvertError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("PNG decode error: {0}")]
    Decode(#[from] png::DecodingError),

    #[error("PNG encode error: {0}")]
    Encode(#[from] png::EncodingError),

    #[error("Unsupported PNG color type: {0:?}")]
    UnsupportedColor(png::ColorType),

    #[error("Conversion error: {0}")]
    Convert(#[from] ConvertError),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("No PNG files found in: {}", .0.display())]
    NoImages(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AssetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_error_no_images() {
        let error = AssetError::NoImages(PathBuf::from("icons/"));
        assert_eq!(error.to_string(), "No PNG files found in: icons/");
    }

    #[test]
    fn test_asset_error_unsupported_color() {
        let error = AssetError::UnsupportedColor(png::ColorType::Indexed);
        assert_eq!(error.to_string(), "Unsupported PNG color type: Indexed");
    }

    #[test]
    fn test_asset_error_from_convert_error() {
        let convert_error = ConvertError::InvalidDimensions {
            width: 0,
            height: 0,
        };
        let asset_error: AssetError = convert_error.into();
        match asset_error {
            AssetError::Convert(_) => {}
            _ => panic!("Expected Convert variant"),
        }
        assert_eq!(
            asset_error.to_string(),
            "Conversion error: invalid dimensions 0x0: both must be positive"
        );
    }

    #[test]
    fn test_asset_error_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.png");
        let asset_error: AssetError = io_error.into();
        assert!(matches!(asset_error, AssetError::Io(_)));
        assert_eq!(asset_error.to_string(), "IO error: missing.png");
    }

    #[test]
    fn test_asset_error_from_yaml_error() {
        let yaml_error = serde_yaml::from_str::<u32>("not a number").unwrap_err();
        let asset_error: AssetError = yaml_error.into();
        assert!(matches!(asset_error, AssetError::Config(_)));
    }
}
