//! PNG decoding into [`RgbaImage`] and preview encoding of [`IndexedImage`].
//!
//! Every PNG color type is normalized to 8-bit RGBA: palette images are
//! expanded, 16-bit channels stripped, and a missing alpha channel is filled
//! with 255.

use std::io::Cursor;
use std::path::Path;

use inky_palette::{IndexedImage, RgbaImage};

use crate::error::{AssetError, Result};

/// Decode PNG bytes into an RGBA raster.
pub fn decode_png(bytes: &[u8]) -> Result<RgbaImage> {
    let mut decoder = png::Decoder::new(bytes);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    buf.truncate(info.buffer_size());

    let rgba = match info.color_type {
        png::ColorType::Rgba => buf,
        png::ColorType::Rgb => buf
            .chunks_exact(3)
            .flat_map(|c| [c[0], c[1], c[2], 255])
            .collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .flat_map(|c| [c[0], c[0], c[0], c[1]])
            .collect(),
        png::ColorType::Grayscale => buf.iter().flat_map(|&v| [v, v, v, 255]).collect(),
        other => return Err(AssetError::UnsupportedColor(other)),
    };

    tracing::trace!(
        width = info.width,
        height = info.height,
        color = ?info.color_type,
        "Decoded PNG"
    );

    Ok(RgbaImage::new(info.width, info.height, rgba)?)
}

/// Read and decode a PNG file.
pub fn load_png(path: &Path) -> Result<RgbaImage> {
    let bytes = std::fs::read(path)?;
    decode_png(&bytes)
}

/// Encode raw 8-bit RGBA or RGB pixels as a PNG.
pub fn encode_png(
    width: u32,
    height: u32,
    color_type: png::ColorType,
    data: &[u8],
) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color_type);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(data)?;
    }
    Ok(buf.into_inner())
}

/// Render an indexed image through the nominal palette colors as an RGB PNG.
pub fn encode_preview(image: &IndexedImage) -> Result<Vec<u8>> {
    encode_png(
        image.width(),
        image.height(),
        png::ColorType::Rgb,
        &image.to_rgb(),
    )
}
