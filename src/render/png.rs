//! PNG output for rendered canvases.
//!
//! Exports are 8-bit RGB; the canvas alpha channel is dropped at encode
//! time. File output supports optional integer upscaling for crisp
//! previews.

use std::io::Cursor;
use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};

use crate::error::{BannerError, Result};
use crate::types::Colour;

use super::canvas::Canvas;

/// Encode a canvas as an in-memory PNG byte stream.
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>> {
    let img = to_rgb_image(canvas, 1);

    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, image::ImageFormat::Png)
        .map_err(|e| BannerError::Build {
            message: format!("Failed to encode PNG: {}", e),
        })?;

    Ok(bytes.into_inner())
}

/// Write a canvas to a PNG file.
///
/// # Arguments
///
/// * `canvas` - The rendered canvas to write
/// * `path` - Output file path
/// * `scale` - Integer scale factor, nearest-neighbour (0 is treated as 1)
pub fn write_png(canvas: &Canvas, path: &Path, scale: u32) -> Result<()> {
    let img = to_rgb_image(canvas, scale.max(1));

    img.save(path).map_err(|e| BannerError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}

/// Convert a canvas to an RGB image buffer, scaled by an integer factor.
fn to_rgb_image(canvas: &Canvas, scale: u32) -> RgbImage {
    let width = canvas.width() as u32 * scale;
    let height = canvas.height() as u32 * scale;

    let mut img: RgbImage = ImageBuffer::new(width, height);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let colour = canvas
            .get((x / scale) as usize, (y / scale) as usize)
            .unwrap_or(Colour::BLACK);
        *pixel = Rgb(colour.to_rgb());
    }

    img
}
