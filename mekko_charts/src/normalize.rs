// Copyright 2026 the Mekko Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalization into fractions and cumulative boundaries.

extern crate alloc;

use alloc::vec::Vec;

use crate::ChartError;

/// Scales `values` so they sum to one: each output is `values[i] / sum(values)`.
///
/// Fails with [`ChartError::ZeroSum`] when the total is zero or not finite, which includes
/// an empty slice.
pub fn normalize(values: &[f64]) -> Result<Vec<f64>, ChartError> {
    let total: f64 = values.iter().sum();
    if total == 0.0 || !total.is_finite() {
        return Err(ChartError::ZeroSum);
    }
    Ok(values.iter().map(|v| v / total).collect())
}

/// Returns `values.len() + 1` monotone boundaries running from `0` to `1`.
///
/// The boundaries are the running sum of `normalize([0, values..])`. Boundary `i + 1` minus
/// boundary `i` is the share of `values[i]`. The last boundary is exactly `1.0`.
pub fn cumulative_boundaries(values: &[f64]) -> Result<Vec<f64>, ChartError> {
    let mut with_origin = Vec::with_capacity(values.len() + 1);
    with_origin.push(0.0);
    with_origin.extend_from_slice(values);

    let mut acc = 0.0;
    let mut out: Vec<f64> = normalize(&with_origin)?
        .into_iter()
        .map(|share| {
            acc += share;
            acc
        })
        .collect();
    if let Some(last) = out.last_mut() {
        *last = 1.0;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn normalize_divides_by_total() {
        let out = normalize(&[1.0, 3.0, 4.0]).unwrap();
        assert_eq!(out, vec![0.125, 0.375, 0.5]);
        let sum: f64 = out.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12, "sum {sum}");
    }

    #[test]
    fn normalize_keeps_leading_zero() {
        let out = normalize(&[0.0, 7.0, 3.0]).unwrap();
        assert_eq!(out[0], 0.0);
        assert!((out[1] - 0.7).abs() < 1e-12, "{out:?}");
        assert!((out[2] - 0.3).abs() < 1e-12, "{out:?}");
    }

    #[test]
    fn normalize_rejects_zero_total() {
        assert_eq!(normalize(&[0.0, 0.0]), Err(ChartError::ZeroSum));
        assert_eq!(normalize(&[]), Err(ChartError::ZeroSum));
    }

    #[test]
    fn boundaries_are_cumulative_and_end_at_one() {
        let b = cumulative_boundaries(&[7.0, 3.0]).unwrap();
        assert_eq!(b.len(), 3);
        assert_eq!(b[0], 0.0);
        assert!((b[1] - 0.7).abs() < 1e-12, "{b:?}");
        assert_eq!(b[2], 1.0);
    }

    #[test]
    fn boundaries_tolerate_zero_entries() {
        let b = cumulative_boundaries(&[2.0, 0.0, 2.0]).unwrap();
        assert_eq!(b, vec![0.0, 0.5, 0.5, 1.0]);
        assert!(b.windows(2).all(|w| w[0] <= w[1]));
    }
}
