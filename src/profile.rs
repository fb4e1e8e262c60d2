//! The entropy profile: chunk, estimate, normalize.

use crate::chunk::ChunkReader;
use crate::entropy::shannon_entropy;
use crate::error::Result;
use crate::normalize::normalize_entropies;
use crate::source::SourceFile;
use std::path::Path;

/// Default chunk size in bytes for entropy windows.
pub const DEFAULT_CHUNK_SIZE: usize = 256;

/// Backing byte storage for a profile: a mapped file or an owned buffer.
enum SourceBytes {
    Mapped(SourceFile),
    Owned(Vec<u8>),
}

impl SourceBytes {
    fn as_slice(&self) -> &[u8] {
        match self {
            SourceBytes::Mapped(source) => source.bytes(),
            SourceBytes::Owned(data) => data,
        }
    }
}

/// Ordered sequence of normalized entropy values for a byte source,
/// index-aligned with the chunks it was computed from.
///
/// Built once per source and immutable afterwards; each construction owns
/// its own result storage. Any read or estimation failure aborts
/// construction entirely.
pub struct EntropyProfile {
    chunk_size: usize,
    values: Vec<f64>,
    data: SourceBytes,
}

impl EntropyProfile {
    /// Build a profile from a file on disk, memory-mapping its contents.
    pub fn from_path<P: AsRef<Path>>(path: P, chunk_size: usize) -> Result<Self> {
        let source = SourceFile::open(path)?;
        let values = compute_values(source.bytes(), chunk_size)?;
        Ok(Self {
            chunk_size,
            values,
            data: SourceBytes::Mapped(source),
        })
    }

    /// Build a profile from an in-memory byte buffer.
    pub fn from_bytes(data: Vec<u8>, chunk_size: usize) -> Result<Self> {
        let values = compute_values(&data, chunk_size)?;
        Ok(Self {
            chunk_size,
            values,
            data: SourceBytes::Owned(data),
        })
    }

    /// The normalized entropy sequence, one value per chunk, in `[0, 1]`.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The complete raw byte content of the source, for raster rendering.
    pub fn raw_bytes(&self) -> &[u8] {
        self.data.as_slice()
    }

    /// The chunk size the profile was computed with.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Number of chunks (and of profile values).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True for an empty source, which produces an empty profile.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Run the pipeline: chunk the data, estimate per-chunk entropy, then
/// min-max normalize across the whole sequence. An empty source is not
/// an error; it produces an empty profile with nothing to normalize.
fn compute_values(data: &[u8], chunk_size: usize) -> Result<Vec<f64>> {
    let mut entropies = Vec::new();
    for chunk in ChunkReader::new(data, chunk_size)? {
        entropies.push(shannon_entropy(&chunk?)?);
    }
    if entropies.is_empty() {
        return Ok(entropies);
    }
    normalize_entropies(&entropies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EntropyError;
    use std::io::Write;

    #[test]
    fn test_constant_file_round_trip() {
        // 1000 x 0x41 at chunk size 256: 4 chunks, all raw entropies zero,
        // degenerate normalization maps every value to 0.0.
        let profile = EntropyProfile::from_bytes(vec![0x41; 1000], 256).unwrap();
        assert_eq!(profile.len(), 4);
        assert_eq!(profile.values(), &[0.0, 0.0, 0.0, 0.0]);
        assert_eq!(profile.raw_bytes().len(), 1000);
        assert_eq!(profile.chunk_size(), 256);
    }

    #[test]
    fn test_empty_source_gives_empty_profile() {
        let profile = EntropyProfile::from_bytes(Vec::new(), 256).unwrap();
        assert!(profile.is_empty());
        assert_eq!(profile.values(), &[] as &[f64]);
        assert_eq!(profile.raw_bytes(), b"");
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let result = EntropyProfile::from_bytes(vec![1, 2, 3], 0);
        assert!(matches!(result, Err(EntropyError::InvalidChunkSize)));
    }

    #[test]
    fn test_value_per_chunk_alignment() {
        // One low-entropy chunk, one high-entropy chunk, one short tail.
        let mut data = vec![0u8; 64];
        data.extend(0u8..64);
        data.extend([7u8; 10]);
        let profile = EntropyProfile::from_bytes(data, 64).unwrap();
        assert_eq!(profile.len(), 3);
        assert_eq!(profile.values()[0], 0.0);
        assert_eq!(profile.values()[1], 1.0);
        assert_eq!(profile.values()[2], 0.0);
    }

    #[test]
    fn test_values_stay_in_unit_interval() {
        let data: Vec<u8> = (0..4096).map(|i| (i * 31 % 251) as u8).collect();
        let profile = EntropyProfile::from_bytes(data, 64).unwrap();
        assert_eq!(profile.len(), 64);
        assert!(profile.values().iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x41u8; 512]).unwrap();
        file.write_all(&(0u8..=255).collect::<Vec<_>>()).unwrap();
        file.flush().unwrap();

        let profile = EntropyProfile::from_path(file.path(), 256).unwrap();
        assert_eq!(profile.len(), 3);
        assert_eq!(profile.raw_bytes().len(), 768);
        assert_eq!(profile.values()[0], 0.0);
        assert_eq!(profile.values()[2], 1.0);
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = EntropyProfile::from_path("/no/such/file.bin", 256);
        assert!(matches!(result, Err(EntropyError::FileNotFound(_))));
    }
}
