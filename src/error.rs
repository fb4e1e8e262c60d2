use thiserror::Error;

/// Main error type for entropy profiling and rendering
#[derive(Error, Debug)]
pub enum EntropyError {
    #[error("Invalid chunk size: chunk size must be positive")]
    InvalidChunkSize,

    #[error("Empty input: entropy requires at least one byte")]
    EmptyInput,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Memory mapping error: {0}")]
    Mmap(String),

    #[error("Source too small for a {width} pixel wide raster ({len} bytes)")]
    RasterTooSmall { len: usize, width: usize },

    #[error("PNG encoding error: {0}")]
    Encode(#[from] png::EncodingError),
}

/// Result type alias for entropy operations
pub type Result<T> = std::result::Result<T, EntropyError>;
