use inky_palette::IndexedImage;
use std::path::Path;

/// A converted image together with the asset name it is stored under.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedImage {
    /// Asset name, normally the source file stem
    pub name: String,
    pub image: IndexedImage,
}

impl NamedImage {
    pub fn new(name: impl Into<String>, image: IndexedImage) -> Self {
        Self {
            name: name.into(),
            image,
        }
    }

    /// Name derived from a file path: the file name with its extension
    /// stripped.
    pub fn name_from_path(path: &Path) -> String {
        path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
