//! Rendering of entropy profiles and raw bytes.
//!
//! Consumes the normalized profile (bar chart, terminal sparkline) or the
//! raw byte buffer (pseudo-colored HSV raster) and encodes PNG output.

pub mod chart;
pub mod raster;

use crate::error::Result;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Classification of a normalized entropy value for coloring.
///
/// Boundary semantics: exactly 0.5 is `Low`, exactly 0.8 is `High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropyBand {
    Low,
    Mid,
    High,
}

impl EntropyBand {
    /// Classify a normalized entropy value
    pub fn classify(value: f64) -> Self {
        if value >= 0.8 {
            EntropyBand::High
        } else if value > 0.5 {
            EntropyBand::Mid
        } else {
            EntropyBand::Low
        }
    }

    /// Marker color for this band
    pub fn rgb(self) -> [u8; 3] {
        match self {
            EntropyBand::High => [255, 18, 18],
            EntropyBand::Mid => [204, 204, 51],
            EntropyBand::Low => [0, 0, 255],
        }
    }
}

/// Convert HSV to RGB.
///
/// * `hue` - degrees (0-360)
/// * `saturation` - 0.0-1.0
/// * `value` - 0.0-1.0
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> [u8; 3] {
    let h = (hue % 360.0) / 60.0;
    let c = value * saturation;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = value - c;

    let (r, g, b) = if h < 1.0 {
        (c, x, 0.0)
    } else if h < 2.0 {
        (x, c, 0.0)
    } else if h < 3.0 {
        (0.0, c, x)
    } else if h < 4.0 {
        (0.0, x, c)
    } else if h < 5.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    [
        ((r + m) * 255.0) as u8,
        ((g + m) * 255.0) as u8,
        ((b + m) * 255.0) as u8,
    ]
}

/// An 8-bit RGB pixel buffer that can be encoded as a PNG file.
pub struct RgbRaster {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl RgbRaster {
    /// Create a raster filled with a single color
    pub fn filled(width: usize, height: usize, rgb: [u8; 3]) -> Self {
        let mut pixels = Vec::with_capacity(width * height * 3);
        for _ in 0..width * height {
            pixels.extend_from_slice(&rgb);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Set the pixel at (x, y). Out-of-bounds coordinates are a bug in
    /// the caller and panic via slice indexing.
    pub fn put(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        let idx = (y * self.width + x) * 3;
        self.pixels[idx..idx + 3].copy_from_slice(&rgb);
    }

    /// Get the pixel at (x, y)
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        let idx = (y * self.width + x) * 3;
        [self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]]
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Encode the buffer as an 8-bit RGB PNG file
    pub fn write_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        let mut encoder = png::Encoder::new(writer, self.width as u32, self.height as u32);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut png_writer = encoder.write_header()?;
        png_writer.write_image_data(&self.pixels)?;
        Ok(())
    }
}
