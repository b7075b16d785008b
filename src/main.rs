use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inky_assets::codec::encode_preview;
use inky_assets::models::AssetConfig;
use inky_assets::services::header_writer::{
    default_header_path, write_icon_header, write_image_header,
};
use inky_assets::services::{import_assets, AssetDb, BatchConverter};
use inky_palette::{ConvertOptions, Converter, PaletteColor};

#[derive(Parser)]
#[command(name = "inky-assets")]
#[command(about = "Convert PNG artwork into palette indices for 7-color e-ink displays")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Options shared by the conversion commands
#[derive(Args, Debug, Clone)]
struct ConvertArgs {
    /// Scale images to this width in pixels
    #[arg(long, requires = "height")]
    width: Option<u32>,

    /// Scale images to this height in pixels
    #[arg(long, requires = "width")]
    height: Option<u32>,

    /// Outline yellow shapes with a 1-pixel black border
    #[arg(long)]
    border: bool,
}

impl ConvertArgs {
    fn options(&self) -> ConvertOptions {
        let options = ConvertOptions::new().border(self.border);
        match (self.width, self.height) {
            (Some(w), Some(h)) => options.resize(w, h),
            _ => options,
        }
    }

    fn converter(&self) -> Converter {
        Converter::with_options(self.options())
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one PNG into a C++ header
    Convert {
        /// Input PNG file
        input: PathBuf,

        /// Output header (defaults to <stem>.h)
        output: Option<PathBuf>,

        #[command(flatten)]
        args: ConvertArgs,

        /// Also write the quantized result as a PNG preview
        #[arg(long)]
        preview: Option<PathBuf>,
    },
    /// Convert every PNG in a directory into one icon-set header
    Dir {
        /// Directory holding the PNG files
        dir: PathBuf,

        /// Output header
        output: PathBuf,

        #[command(flatten)]
        args: ConvertArgs,
    },
    /// Import the assets listed in a YAML manifest into the asset database
    Import {
        /// Manifest file
        #[arg(short, long)]
        config: PathBuf,

        /// SQLite database path
        #[arg(long, env = "ASSET_DB", default_value = "assets.db")]
        db: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(command) => {
            init_tracing();
            match command {
                Commands::Convert {
                    input,
                    output,
                    args,
                    preview,
                } => run_convert_command(&input, output, &args, preview.as_deref()),
                Commands::Dir { dir, output, args } => run_dir_command(&dir, &output, &args),
                Commands::Import { config, db } => run_import_command(&config, &db),
            }
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn init_tracing() {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inky_assets=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Convert a single image to a header (and optionally a preview PNG)
fn run_convert_command(
    input: &Path,
    output: Option<PathBuf>,
    args: &ConvertArgs,
    preview: Option<&Path>,
) -> anyhow::Result<()> {
    let batch = BatchConverter::new(args.converter());
    let image = batch.convert_file(input)?;

    let output = output.unwrap_or_else(|| default_header_path(input));
    write_image_header(&output, &image)?;

    if let Some(preview) = preview {
        std::fs::write(preview, encode_preview(&image.image)?)?;
        println!("Preview written to {}", preview.display());
    }

    println!(
        "Converted {} ({}x{}) -> {}",
        input.display(),
        image.image.width(),
        image.image.height(),
        output.display()
    );
    Ok(())
}

/// Convert a directory of icons to a combined header
fn run_dir_command(dir: &Path, output: &Path, args: &ConvertArgs) -> anyhow::Result<()> {
    let batch = BatchConverter::new(args.converter());
    let icons = batch.convert_dir(dir)?;
    write_icon_header(output, &icons)?;

    println!("Processed {} icons -> {}", icons.len(), output.display());
    Ok(())
}

/// Import manifest assets into the SQLite database
fn run_import_command(config_path: &Path, db_path: &Path) -> anyhow::Result<()> {
    let config = AssetConfig::load(config_path)?;

    let mut db = AssetDb::open(db_path)?;
    db.reset_images()?;
    let report = import_assets(&config, &mut db)?;

    println!(
        "Imported {} images into {}",
        report.imported.len(),
        db_path.display()
    );
    if !report.skipped.is_empty() {
        println!("Skipped {} files:", report.skipped.len());
        for path in &report.skipped {
            println!("  - {}", path.display());
        }
    }
    Ok(())
}

/// Show palette and usage when no subcommand is given
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let asset_db = std::env::var("ASSET_DB").ok();

    println!("Inky Assets v{VERSION}");
    println!("Image converter for 7-color e-ink displays\n");

    println!("Environment Variables:");
    println!(
        "  ASSET_DB = {}",
        asset_db.as_deref().unwrap_or("assets.db (default)")
    );

    println!("\nPalette:");
    for color in PaletteColor::ALL {
        let (r, g, b) = color.rgb();
        println!("  {}  {:<7} ({r:3}, {g:3}, {b:3})", color.index(), color.name());
    }

    println!("\nCommands:");
    println!("  inky-assets convert   Convert one PNG to a C++ header");
    println!("  inky-assets dir       Convert a directory of PNGs to an icon-set header");
    println!("  inky-assets import    Import manifest assets into the SQLite database");
    println!("\nRun 'inky-assets --help' for more details.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_convert() {
        let cli = Cli::try_parse_from([
            "inky-assets", "convert", "sun.png", "--width", "80", "--height", "40", "--border",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Convert { input, output, args, preview }) => {
                assert_eq!(input, PathBuf::from("sun.png"));
                assert_eq!(output, None);
                assert_eq!(preview, None);
                assert_eq!(args.converter().options().target_size(), Some((80, 40)));
                assert!(args.converter().options().add_border);
            }
            _ => panic!("Expected convert command"),
        }
    }

    #[test]
    fn test_cli_width_requires_height() {
        let result = Cli::try_parse_from(["inky-assets", "dir", "icons", "out.h", "--width", "80"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_no_command() {
        let cli = Cli::try_parse_from(["inky-assets"]).unwrap();
        assert!(cli.command.is_none());
    }
}
