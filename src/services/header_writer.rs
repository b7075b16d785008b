//! C++ header generation for embedding palette-indexed images in firmware.
//!
//! Two layouts are produced: a header for a single image
//! (`namespace image_<name>`), and a combined icon set
//! (`namespace weather_icons`) with a name-to-icon lookup map.

use std::path::{Path, PathBuf};

use inky_palette::{IndexedImage, PaletteColor};

use crate::error::Result;
use crate::models::NamedImage;

const BYTES_PER_LINE: usize = 16;
const ICON_SET_GUARD: &str = "WEATHER_ICONS_H";
const ICON_SET_NAMESPACE: &str = "weather_icons";

/// Replace every character that cannot appear in a C++ identifier with `_`.
pub fn sanitize_identifier(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// Namespace used for one icon inside the icon set. Names starting with a
/// digit get an `icon_` prefix.
pub fn icon_namespace(name: &str) -> String {
    let ident = sanitize_identifier(name);
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        format!("icon_{}", ident)
    } else {
        ident
    }
}

/// Default header path for a single image: `<stem>.h` in the working directory.
pub fn default_header_path(input: &Path) -> PathBuf {
    PathBuf::from(format!("{}.h", NamedImage::name_from_path(input)))
}

fn palette_legend() -> String {
    let entries: Vec<String> = PaletteColor::ALL
        .iter()
        .map(|c| {
            let mut name = c.name().to_string();
            if let Some(first) = name.get_mut(0..1) {
                first.make_ascii_uppercase();
            }
            format!("{}={}", c.index(), name)
        })
        .collect();
    format!("// Palette-indexed data ({})\n", entries.join(", "))
}

/// Append `data` as comma separated `0x..` bytes, sixteen per line.
fn write_hex_rows(out: &mut String, data: &[u8], indent: &str) {
    for (row_index, row) in data.chunks(BYTES_PER_LINE).enumerate() {
        out.push_str(indent);
        let is_last_row = (row_index + 1) * BYTES_PER_LINE >= data.len();
        let cells: Vec<String> = row.iter().map(|b| format!("0x{:02x}", b)).collect();
        out.push_str(&cells.join(", "));
        if !is_last_row {
            out.push(',');
        }
        out.push('\n');
    }
}

/// Render the header for a single image.
pub fn render_image_header(name: &str, image: &IndexedImage) -> String {
    let ident = sanitize_identifier(name);
    let guard = format!("IMAGE_{}_H", ident.to_ascii_uppercase());

    let mut out = String::new();
    out.push_str(&format!("// Auto-generated image data for {}\n", name));
    out.push_str(&format!("// Dimensions: {}x{}\n", image.width(), image.height()));
    out.push_str(&format!("#ifndef {}\n", guard));
    out.push_str(&format!("#define {}\n\n", guard));
    out.push_str("#include <cstdint>\n\n");
    out.push_str(&format!("namespace image_{} {{\n\n", ident));
    out.push_str(&format!("constexpr int width = {};\n", image.width()));
    out.push_str(&format!("constexpr int height = {};\n\n", image.height()));
    out.push_str(&palette_legend());
    out.push_str("const uint8_t data[] = {\n");
    write_hex_rows(&mut out, image.indices(), "    ");
    out.push_str("};\n\n");
    out.push_str(&format!("}} // namespace image_{}\n\n", ident));
    out.push_str(&format!("#endif // {}\n", guard));
    out
}

/// Render the combined icon-set header.
///
/// Icon blocks appear in the order given; the lookup map is sorted by name.
pub fn render_icon_header(icons: &[NamedImage]) -> String {
    let mut out = String::new();
    out.push_str("// Auto-generated weather icon data\n");
    out.push_str("// Contains all weather icons as embedded C++ data\n");
    out.push_str(&format!("#ifndef {}\n", ICON_SET_GUARD));
    out.push_str(&format!("#define {}\n\n", ICON_SET_GUARD));
    out.push_str("#include <cstdint>\n#include <map>\n#include <string>\n\n");
    out.push_str(&format!("namespace {} {{\n\n", ICON_SET_NAMESPACE));

    for icon in icons {
        let ns = icon_namespace(&icon.name);
        let (w, h) = (icon.image.width(), icon.image.height());
        out.push_str(&format!("// Icon: {} ({}x{})\n", icon.name, w, h));
        out.push_str(&format!("namespace {} {{\n", ns));
        out.push_str(&format!("    constexpr int width = {};\n", w));
        out.push_str(&format!("    constexpr int height = {};\n", h));
        out.push_str("    const uint8_t data[] = {\n");
        write_hex_rows(&mut out, icon.image.indices(), "        ");
        out.push_str("    };\n");
        out.push_str(&format!("}} // namespace {}\n\n", ns));
    }

    out.push_str("struct IconInfo {\n");
    out.push_str("    int width;\n    int height;\n    const uint8_t* data;\n");
    out.push_str("};\n\n");

    let mut by_name: Vec<&NamedImage> = icons.iter().collect();
    by_name.sort_by(|a, b| a.name.cmp(&b.name));
    by_name.dedup_by(|a, b| a.name == b.name);

    out.push_str("const std::map<std::string, IconInfo> icons = {\n");
    for icon in by_name {
        out.push_str(&format!(
            "    {{\"{}\", {{{}, {}, {}::data}}}},\n",
            icon.name,
            icon.image.width(),
            icon.image.height(),
            icon_namespace(&icon.name)
        ));
    }
    out.push_str("};\n\n");

    out.push_str("// Helper function to get icon by name\n");
    out.push_str("inline const IconInfo* get_icon(const std::string& name) {\n");
    out.push_str("    auto it = icons.find(name);\n");
    out.push_str("    return (it != icons.end()) ? &it->second : nullptr;\n");
    out.push_str("}\n\n");

    out.push_str(&format!("}} // namespace {}\n\n", ICON_SET_NAMESPACE));
    out.push_str(&format!("#endif // {}\n", ICON_SET_GUARD));
    out
}

/// Write a single-image header to `path`.
pub fn write_image_header(path: &Path, image: &NamedImage) -> Result<()> {
    std::fs::write(path, render_image_header(&image.name, &image.image))?;
    tracing::info!(path = %path.display(), name = %image.name, "Saved header");
    Ok(())
}

/// Write the icon-set header to `path`.
pub fn write_icon_header(path: &Path, icons: &[NamedImage]) -> Result<()> {
    std::fs::write(path, render_icon_header(icons))?;
    tracing::info!(path = %path.display(), icons = icons.len(), "Saved combined header");
    Ok(())
}
