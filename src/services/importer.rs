use std::path::{Path, PathBuf};

use inky_palette::Converter;

use crate::error::Result;
use crate::models::AssetConfig;
use crate::services::batch::BatchConverter;
use crate::services::sink::ImageSink;

/// Asset id the standalone warning image is stored under
pub const WARNING_ID: &str = "warning";

/// Outcome of an import run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Ids stored in the sink, in import order
    pub imported: Vec<String>,
    /// Source files that failed to load or convert
    pub skipped: Vec<PathBuf>,
}

/// Convert every asset named in `config` and store it in `sink`.
///
/// Icons are resized to the configured size (and bordered if enabled) and
/// processed in id order. The warning image keeps its own size and never
/// gets a border. A zero icon size is rejected before anything is stored.
/// A failing image is logged and recorded in the report; the rest of the
/// import continues. Only sink errors abort the run.
pub fn import_assets(config: &AssetConfig, sink: &mut dyn ImageSink) -> Result<ImportReport> {
    let converter = Converter::new()
        .resize(config.icons.width, config.icons.height)
        .border(config.icons.border);
    converter.validate()?;
    let icons = BatchConverter::new(converter);
    let plain = BatchConverter::default();

    let mut report = ImportReport::default();

    for (id, path) in config.icon_paths() {
        import_one(&icons, id, &path, sink, &mut report)?;
    }

    if let Some(warning) = &config.warning {
        import_one(&plain, WARNING_ID, warning, sink, &mut report)?;
    }

    tracing::info!(
        imported = report.imported.len(),
        skipped = report.skipped.len(),
        "Import finished"
    );
    Ok(report)
}

fn import_one(
    batch: &BatchConverter,
    id: &str,
    path: &Path,
    sink: &mut dyn ImageSink,
    report: &mut ImportReport,
) -> Result<()> {
    match batch.convert_file(path) {
        Ok(converted) => {
            sink.store(id, &converted.image)?;
            report.imported.push(id.to_string());
        }
        Err(e) => {
            tracing::warn!(id, path = %path.display(), error = %e, "Skipping asset");
            report.skipped.push(path.to_path_buf());
        }
    }
    Ok(())
}
