//! Bar chart rendering of a normalized entropy profile.
//!
//! Two outputs: a PNG chart (equal-width bars, colored by entropy band)
//! and a colored Unicode sparkline for the terminal.

use crate::error::{EntropyError, Result};
use crate::render::{EntropyBand, RgbRaster};
use crossterm::style::{Color, Stylize};
use std::path::Path;

/// Chart height in pixels
pub const CHART_HEIGHT: usize = 256;

/// Width of each bar in pixels
pub const BAR_WIDTH: usize = 4;

/// Values per terminal sparkline row
const SPARKLINE_COLS: usize = 64;

/// Partial block glyphs, lowest to tallest
const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Render the profile as a bar chart on a white background, one
/// `BAR_WIDTH`-pixel bar per chunk in original chunk order.
pub fn render_chart(values: &[f64]) -> Result<RgbRaster> {
    if values.is_empty() {
        return Err(EntropyError::EmptyInput);
    }

    let width = values.len() * BAR_WIDTH;
    let mut raster = RgbRaster::filled(width, CHART_HEIGHT, [255, 255, 255]);

    for (i, &value) in values.iter().enumerate() {
        let value = value.clamp(0.0, 1.0);
        let bar_height = (value * CHART_HEIGHT as f64).round() as usize;
        let rgb = EntropyBand::classify(value).rgb();
        for x in i * BAR_WIDTH..(i + 1) * BAR_WIDTH {
            for y in CHART_HEIGHT - bar_height..CHART_HEIGHT {
                raster.put(x, y, rgb);
            }
        }
    }

    Ok(raster)
}

/// Render the profile and encode it as a PNG file
pub fn save_chart<P: AsRef<Path>>(values: &[f64], path: P) -> Result<()> {
    render_chart(values)?.write_png(path)
}

/// Print the profile to stdout as a colored sparkline, one glyph per
/// chunk, `SPARKLINE_COLS` chunks per row. Each row is prefixed with the
/// byte offset of its first chunk.
pub fn print_chart(values: &[f64], chunk_size: usize) {
    for (row, row_values) in values.chunks(SPARKLINE_COLS).enumerate() {
        let offset = row * SPARKLINE_COLS * chunk_size;
        print!("{:#010x}  ", offset);
        for &value in row_values {
            let value = value.clamp(0.0, 1.0);
            let glyph = BLOCKS[((value * 8.0) as usize).min(7)];
            let [r, g, b] = EntropyBand::classify(value).rgb();
            print!("{}", glyph.with(Color::Rgb { r, g, b }));
        }
        println!();
    }
}
