//! Entrograph - sliding-window Shannon entropy visualizer for binary files.
//!
//! This library computes a chunked entropy profile over the byte contents
//! of a file and renders it for visual inspection:
//! - Fixed-size chunking over a byte source (last chunk may be shorter)
//! - Empirical Shannon entropy per chunk, in nats
//! - Min-max normalization of the profile into [0, 1]
//! - Bar chart rendering (PNG or colored terminal sparkline)
//! - Pseudo-colored HSV raster rendering of the raw bytes
//!
//! High-entropy regions stand out visually, which helps locate compressed,
//! encrypted, or packed segments inside a binary.

pub mod chunk;
pub mod cli;
pub mod entropy;
pub mod error;
pub mod normalize;
pub mod profile;
pub mod render;
pub mod source;

// Re-export commonly used types
pub use chunk::ChunkReader;
pub use entropy::shannon_entropy;
pub use error::{EntropyError, Result};
pub use normalize::normalize_entropies;
pub use profile::{EntropyProfile, DEFAULT_CHUNK_SIZE};
pub use render::{EntropyBand, RgbRaster};
pub use source::SourceFile;
