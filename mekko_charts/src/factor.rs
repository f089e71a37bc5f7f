// Copyright 2026 the Mekko Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Divisor enumeration and median-divisor selection, used to pick a balanced grid shape.

use smallvec::SmallVec;

use crate::ChartError;

/// Divisors of an integer. Highly composite lengths stay well under the inline capacity.
pub type Divisors = SmallVec<[usize; 16]>;

/// Returns every positive divisor of `n`.
///
/// Divisors come out as pairs `(i, n / i)` for each `i` in `1..=floor(sqrt(n))` dividing `n`,
/// flattened in that order. The square root of a perfect square appears once.
pub fn factors(n: usize) -> Result<Divisors, ChartError> {
    if n == 0 {
        return Err(ChartError::ZeroFactor);
    }
    let mut out = Divisors::new();
    let mut i = 1;
    while i <= n / i {
        if n % i == 0 {
            out.push(i);
            let pair = n / i;
            if pair != i {
                out.push(pair);
            }
        }
        i += 1;
    }
    Ok(out)
}

/// Returns the element at index `len / 2` of an already sorted slice.
///
/// Even lengths pick the upper of the two middle elements rather than averaging them, so the
/// result is always one of the inputs.
pub fn median_divisor(sorted: &[usize]) -> Option<usize> {
    sorted.get(sorted.len() / 2).copied()
}

/// Returns the sorted divisors of `n`.
pub fn sorted_factors(n: usize) -> Result<Divisors, ChartError> {
    let mut divisors = factors(n)?;
    divisors.sort_unstable();
    Ok(divisors)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn factors_emit_pairs_in_order() {
        assert_eq!(factors(12).unwrap().as_slice(), &[1, 12, 2, 6, 3, 4]);
    }

    #[test]
    fn factors_match_brute_force() {
        for n in 1..=200_usize {
            let mut got: Vec<usize> = factors(n).unwrap().into_iter().collect();
            got.sort_unstable();
            let want: Vec<usize> = (1..=n).filter(|d| n % d == 0).collect();
            assert_eq!(got, want, "divisors of {n}");
        }
    }

    #[test]
    fn perfect_square_root_is_listed_once() {
        assert_eq!(factors(36).unwrap().iter().filter(|&&d| d == 6).count(), 1);
        assert_eq!(factors(1).unwrap().as_slice(), &[1]);
    }

    #[test]
    fn prime_has_two_divisors() {
        assert_eq!(factors(13).unwrap().as_slice(), &[1, 13]);
    }

    #[test]
    fn zero_has_no_divisors() {
        assert_eq!(factors(0), Err(ChartError::ZeroFactor));
    }

    #[test]
    fn median_uses_upper_middle_for_even_lengths() {
        assert_eq!(median_divisor(&[1, 2, 3, 4, 6, 12]), Some(4));
        assert_eq!(median_divisor(&[1, 3, 9]), Some(3));
        assert_eq!(median_divisor(&[]), None);
    }
}
