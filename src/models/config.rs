use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Import manifest loaded from a YAML file.
///
/// ```yaml
/// icons:
///   width: 160
///   height: 160
///   border: true
///   source_dir: weather-icons/
///   names:
///     clear_day: 01d.png
///     rain: 10d.png
/// warning: warning.png
/// ```
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AssetConfig {
    /// Named icons converted to a common size
    #[serde(default)]
    pub icons: IconSettings,

    /// Standalone warning image, converted at its own size without border
    #[serde(default)]
    pub warning: Option<PathBuf>,
}

/// Settings shared by every icon in the manifest
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct IconSettings {
    /// Target width in pixels
    #[serde(default = "default_icon_size")]
    pub width: u32,

    /// Target height in pixels
    #[serde(default = "default_icon_size")]
    pub height: u32,

    /// Outline yellow shapes in black
    #[serde(default)]
    pub border: bool,

    /// Directory the icon files live in (relative to the manifest)
    #[serde(default)]
    pub source_dir: PathBuf,

    /// Asset id to file name within `source_dir`
    #[serde(default)]
    pub names: BTreeMap<String, String>,
}

fn default_icon_size() -> u32 {
    160
}

impl Default for IconSettings {
    fn default() -> Self {
        Self {
            width: default_icon_size(),
            height: default_icon_size(),
            border: false,
            source_dir: PathBuf::new(),
            names: BTreeMap::new(),
        }
    }
}

impl AssetConfig {
    /// Parse a manifest from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Load a manifest file. Relative paths inside it are resolved against
    /// the manifest's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml(&content)?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        config.icons.source_dir = base.join(&config.icons.source_dir);
        if let Some(warning) = config.warning.take() {
            config.warning = Some(base.join(warning));
        }

        tracing::info!(
            icons = config.icons.names.len(),
            width = config.icons.width,
            height = config.icons.height,
            border = config.icons.border,
            "Loaded asset manifest"
        );
        Ok(config)
    }

    /// Full path of every configured icon, in id order.
    pub fn icon_paths(&self) -> impl Iterator<Item = (&str, PathBuf)> + '_ {
        self.icons
            .names
            .iter()
            .map(|(id, file)| (id.as_str(), self.icons.source_dir.join(file)))
    }
}
