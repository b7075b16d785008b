use std::path::{Path, PathBuf};

use inky_palette::{quantize, Converter};

use crate::codec::load_png;
use crate::error::{AssetError, Result};
use crate::models::NamedImage;

/// Converts PNG files from disk with a shared set of options.
#[derive(Debug, Clone, Default)]
pub struct BatchConverter {
    converter: Converter,
}

impl BatchConverter {
    pub fn new(converter: Converter) -> Self {
        Self { converter }
    }

    pub fn converter(&self) -> &Converter {
        &self.converter
    }

    /// Load, resize, border and quantize one file. The result is named after
    /// the file stem.
    pub fn convert_file(&self, path: &Path) -> Result<NamedImage> {
        let rgba = load_png(path)?;
        let (src_w, src_h) = rgba.dimensions();
        tracing::debug!(path = %path.display(), width = src_w, height = src_h, "Decoded");

        let prepared = self.converter.prepare(rgba)?;
        tracing::debug!(
            width = prepared.width(),
            height = prepared.height(),
            border = self.converter.options().add_border,
            "Prepared"
        );

        let image = quantize(&prepared);

        tracing::info!(
            path = %path.display(),
            src = %format!("{}x{}", src_w, src_h),
            out = %format!("{}x{}", image.width(), image.height()),
            "Converted image"
        );

        Ok(NamedImage::new(NamedImage::name_from_path(path), image))
    }

    /// Convert every `*.png` file directly inside `dir`, in file name order.
    ///
    /// The converter options are checked first; a zero resize target fails
    /// the whole call with [`AssetError::Convert`]. Files that fail to load
    /// or convert are then logged and skipped. Returns
    /// [`AssetError::NoImages`] when the directory holds no PNG files at all.
    pub fn convert_dir(&self, dir: &Path) -> Result<Vec<NamedImage>> {
        self.converter.validate()?;

        let files = png_files(dir)?;
        if files.is_empty() {
            return Err(AssetError::NoImages(dir.to_path_buf()));
        }

        let mut images = Vec::with_capacity(files.len());
        for file in &files {
            match self.convert_file(file) {
                Ok(image) => images.push(image),
                Err(e) => tracing::warn!(path = %file.display(), error = %e, "Skipping image"),
            }
        }

        tracing::info!(
            dir = %dir.display(),
            converted = images.len(),
            skipped = files.len() - images.len(),
            "Directory converted"
        );
        Ok(images)
    }
}

/// Paths of the `*.png` files in `dir`, sorted.
pub fn png_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "png") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
