//! Min-max normalization of a raw entropy sequence into `[0, 1]`.

use crate::error::{EntropyError, Result};

/// Rescale a sequence of raw entropy values so its minimum maps to 0.0
/// and its maximum to 1.0, preserving order and length.
///
/// Degenerate sequences (all values identical, so `max == min`) map every
/// value to 0.0 rather than dividing by zero; this keeps every output
/// inside `[0, 1]` for the renderer.
pub fn normalize_entropies(entropies: &[f64]) -> Result<Vec<f64>> {
    if entropies.is_empty() {
        return Err(EntropyError::EmptyInput);
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &e in entropies {
        min = min.min(e);
        max = max.max(e);
    }

    let range = max - min;
    if range == 0.0 {
        return Ok(vec![0.0; entropies.len()]);
    }

    Ok(entropies.iter().map(|&e| (e - min) / range).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_rejected() {
        assert!(matches!(
            normalize_entropies(&[]),
            Err(EntropyError::EmptyInput)
        ));
    }

    #[test]
    fn test_spans_unit_interval() {
        let normalized = normalize_entropies(&[3.0, 1.0, 2.0, 5.0]).unwrap();
        let min = normalized.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = normalized.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(min, 0.0);
        assert_eq!(max, 1.0);
        assert!(normalized.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn test_order_and_length_preserved() {
        let raw = [0.5, 4.0, 2.0];
        let normalized = normalize_entropies(&raw).unwrap();
        assert_eq!(normalized.len(), 3);
        assert_eq!(normalized[0], 0.0);
        assert_eq!(normalized[1], 1.0);
        assert!((normalized[2] - (2.0 - 0.5) / 3.5).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_sequence_maps_to_zero() {
        // All-equal input has no range; policy maps everything to 0.0.
        let normalized = normalize_entropies(&[4.2, 4.2, 4.2]).unwrap();
        assert_eq!(normalized, vec![0.0, 0.0, 0.0]);

        let single = normalize_entropies(&[1.7]).unwrap();
        assert_eq!(single, vec![0.0]);
    }
}
