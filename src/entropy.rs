//! Empirical Shannon entropy of a byte chunk.
//!
//! Uses a 256-bin byte frequency histogram and the formula
//! `H = -Σ(p_v * ln(p_v))` in nats. Values with zero count are skipped,
//! which implements the `0 * ln(0) = 0` convention by omission.

use crate::error::{EntropyError, Result};

/// Calculate the Shannon entropy of a chunk, in nats.
///
/// Returns 0.0 for a constant chunk and `ln(min(256, len))` when all
/// present byte values are equally frequent. A zero-length chunk is a
/// precondition violation; `ChunkReader` never produces one.
pub fn shannon_entropy(chunk: &[u8]) -> Result<f64> {
    if chunk.is_empty() {
        return Err(EntropyError::EmptyInput);
    }

    let mut counts = [0u32; 256];
    for &byte in chunk {
        counts[byte as usize] += 1;
    }

    let len = chunk.len() as f64;
    let mut entropy = 0.0;
    for &count in counts.iter() {
        if count > 0 {
            let p = f64::from(count) / len;
            entropy -= p * p.ln();
        }
    }

    Ok(entropy)
}
