//! Pseudo-colored raster rendering of raw source bytes.
//!
//! The source is laid out as a 2D image of width `chunk_size` and height
//! `len / chunk_size`, one byte per pixel. Each byte maps to a hue with
//! fixed saturation and value, so byte-value structure shows up as color
//! banding. Trailing bytes past the last full row are dropped.

use crate::error::{EntropyError, Result};
use crate::render::{hsv_to_rgb, RgbRaster};
use std::path::Path;

/// Fixed saturation and value for the byte-to-hue mapping (200/255)
const SATURATION: f64 = 200.0 / 255.0;
const VALUE: f64 = 200.0 / 255.0;

/// Render raw bytes as an HSV-colored raster of the given width.
pub fn render_raster(data: &[u8], width: usize) -> Result<RgbRaster> {
    if width == 0 {
        return Err(EntropyError::InvalidChunkSize);
    }
    let height = data.len() / width;
    if height == 0 {
        return Err(EntropyError::RasterTooSmall {
            len: data.len(),
            width,
        });
    }

    let mut raster = RgbRaster::filled(width, height, [0, 0, 0]);
    for (i, &byte) in data[..width * height].iter().enumerate() {
        let hue = f64::from(byte) / 256.0 * 360.0;
        raster.put(i % width, i / width, hsv_to_rgb(hue, SATURATION, VALUE));
    }

    Ok(raster)
}

/// Render raw bytes and encode the raster as a PNG file
pub fn save_raster<P: AsRef<Path>>(data: &[u8], width: usize, path: P) -> Result<()> {
    render_raster(data, width)?.write_png(path)
}
