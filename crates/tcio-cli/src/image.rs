//! PNG load/save for the LUT tool.
//!
//! Decodes PNG files into linear-ish f32 RGB in [0, 1] and encodes
//! filtered output back to 8-bit with a display gamma.

use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// An RGB float image, 3 floats per pixel in [0, 1].
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<f32>,
}

/// Reads a PNG file as RGB f32.
///
/// Alpha is dropped, grayscale is expanded to RGB, 16-bit samples are
/// scaled to [0, 1].
pub fn load_png(path: &Path) -> Result<Image> {
    let file = File::open(path).with_context(|| format!("Failed to load: {}", path.display()))?;
    let decoder = png::Decoder::new(BufReader::new(file));
    let mut reader = decoder.read_info().context("invalid PNG header")?;

    let buf_size = reader
        .output_buffer_size()
        .context("cannot determine output buffer size")?;
    let mut buf = vec![0u8; buf_size];
    let info = reader.next_frame(&mut buf).context("PNG decode failed")?;
    let buf = &buf[..info.buffer_size()];

    let width = info.width;
    let height = info.height;
    let pixels = (width * height) as usize;

    let rgb: Vec<f32> = match (info.color_type, info.bit_depth) {
        (png::ColorType::Rgb, png::BitDepth::Eight) => {
            buf.iter().map(|&v| v as f32 / 255.0).collect()
        }
        (png::ColorType::Rgba, png::BitDepth::Eight) => buf
            .chunks(4)
            .flat_map(|p| [p[0], p[1], p[2]])
            .map(|v| v as f32 / 255.0)
            .collect(),
        (png::ColorType::Grayscale, png::BitDepth::Eight) => buf
            .iter()
            .flat_map(|&g| [g, g, g])
            .map(|v| v as f32 / 255.0)
            .collect(),
        (png::ColorType::Rgb, png::BitDepth::Sixteen) => buf
            .chunks(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]) as f32 / 65535.0)
            .collect(),
        (png::ColorType::Rgba, png::BitDepth::Sixteen) => buf
            .chunks(8)
            .flat_map(|p| {
                [
                    u16::from_be_bytes([p[0], p[1]]),
                    u16::from_be_bytes([p[2], p[3]]),
                    u16::from_be_bytes([p[4], p[5]]),
                ]
            })
            .map(|v| v as f32 / 65535.0)
            .collect(),
        (color_type, bit_depth) => {
            bail!("unsupported PNG layout: {:?} {:?}", color_type, bit_depth);
        }
    };

    if rgb.len() != pixels * 3 {
        bail!("PNG data size mismatch");
    }

    Ok(Image { width, height, rgb })
}

/// Writes RGB f32 data as an 8-bit PNG, applying a display gamma.
pub fn save_png(path: &Path, image: &Image, gamma: f32) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to save: {}", path.display()))?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, image.width, image.height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());
    encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

    let mut png_writer = encoder.write_header().context("PNG encode failed")?;

    let inv_gamma = 1.0 / gamma;
    let ldr: Vec<u8> = image
        .rgb
        .iter()
        .map(|&v| (v.max(0.0).powf(inv_gamma) * 255.0).clamp(0.0, 255.0) as u8)
        .collect();

    png_writer
        .write_image_data(&ldr)
        .context("PNG encode failed")?;

    Ok(())
}
