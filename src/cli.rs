use crate::profile::DEFAULT_CHUNK_SIZE;
use clap::Parser;
use std::path::PathBuf;

/// Entrograph - sliding-window entropy visualizer for binary files
#[derive(Parser, Debug, Clone)]
#[command(name = "entrograph")]
#[command(version = "0.1.0")]
#[command(about = "Visualize file contents by sliding-window Shannon entropy", long_about = None)]
pub struct Args {
    /// File to analyze
    #[arg(value_name = "FILE")]
    pub filename: PathBuf,

    /// Chunk size in bytes for entropy windows
    #[arg(short = 'c', long = "chunk-size", default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Output PNG path (required for image mode; optional for entropy mode)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Render the entropy bar chart (default mode)
    #[arg(short = 'e', long = "entropy", group = "mode")]
    pub entropy: bool,

    /// Render the raw bytes as a pseudo-colored raster image
    #[arg(short = 'i', long = "image", group = "mode")]
    pub image: bool,
}

impl Args {
    /// Validate the arguments
    pub fn validate(&self) -> Result<(), String> {
        if self.filename.as_os_str().is_empty() {
            return Err("File path cannot be empty".to_string());
        }

        if self.chunk_size == 0 {
            return Err("chunk-size must be greater than 0".to_string());
        }

        if self.image && self.output.is_none() {
            return Err("image mode requires an output path (-o/--output)".to_string());
        }

        Ok(())
    }
}
