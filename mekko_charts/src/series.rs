// Copyright 2026 the Mekko Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input series: plain magnitudes, or magnitudes paired with labels.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::ChartError;

/// Chart input, resolved once at the API boundary.
#[derive(Clone, Debug, PartialEq)]
pub enum Series {
    /// Magnitudes without labels.
    Unlabeled(Vec<f64>),
    /// `(label, magnitude)` pairs in mapping order.
    Labeled(Vec<(String, f64)>),
}

impl Series {
    /// Creates an unlabeled series.
    pub fn unlabeled(values: impl IntoIterator<Item = f64>) -> Self {
        Self::Unlabeled(values.into_iter().collect())
    }

    /// Creates a labeled series.
    pub fn labeled<K: Into<String>>(entries: impl IntoIterator<Item = (K, f64)>) -> Self {
        Self::Labeled(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        match self {
            Self::Unlabeled(values) => values.len(),
            Self::Labeled(entries) => entries.len(),
        }
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` for [`Series::Labeled`].
    pub fn is_labeled(&self) -> bool {
        matches!(self, Self::Labeled(_))
    }

    /// Returns the magnitude at `index`.
    pub fn value(&self, index: usize) -> Option<f64> {
        match self {
            Self::Unlabeled(values) => values.get(index).copied(),
            Self::Labeled(entries) => entries.get(index).map(|(_, v)| *v),
        }
    }

    /// Returns the label at `index`, if this series is labeled.
    pub fn label(&self, index: usize) -> Option<&str> {
        match self {
            Self::Unlabeled(_) => None,
            Self::Labeled(entries) => entries.get(index).map(|(k, _)| k.as_str()),
        }
    }

    /// Checks that every magnitude is finite and non-negative.
    pub fn validate(&self) -> Result<(), ChartError> {
        validate_magnitudes((0..self.len()).map(|i| self.value(i).unwrap_or(f64::NAN)))
    }

    /// Validates the series and sorts it by magnitude, largest first.
    ///
    /// The sort is stable: equal magnitudes keep their input order. Labels travel with their
    /// values.
    pub fn sorted_descending(&self) -> Result<SortedSeries, ChartError> {
        self.validate()?;
        let mut order: Vec<usize> = (0..self.len()).collect();
        order.sort_by(|&a, &b| {
            let (a, b) = (self.value(a), self.value(b));
            b.partial_cmp(&a).unwrap_or(Ordering::Equal)
        });

        let values = order.iter().filter_map(|&i| self.value(i)).collect();
        let labels = match self {
            Self::Unlabeled(_) => None,
            Self::Labeled(entries) => Some(order.iter().map(|&i| entries[i].0.clone()).collect()),
        };
        Ok(SortedSeries { values, labels })
    }
}

/// Fails with [`ChartError::InvalidMagnitude`] at the first value that is negative or not
/// finite.
pub(crate) fn validate_magnitudes(
    values: impl IntoIterator<Item = f64>,
) -> Result<(), ChartError> {
    for (index, value) in values.into_iter().enumerate() {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidMagnitude { index, value });
        }
    }
    Ok(())
}

impl From<Vec<f64>> for Series {
    fn from(values: Vec<f64>) -> Self {
        Self::Unlabeled(values)
    }
}

impl From<&[f64]> for Series {
    fn from(values: &[f64]) -> Self {
        Self::Unlabeled(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Series {
    fn from(values: [f64; N]) -> Self {
        Self::Unlabeled(values.to_vec())
    }
}

impl From<Vec<(String, f64)>> for Series {
    fn from(entries: Vec<(String, f64)>) -> Self {
        Self::Labeled(entries)
    }
}

impl<'a> From<Vec<(&'a str, f64)>> for Series {
    fn from(entries: Vec<(&'a str, f64)>) -> Self {
        Self::labeled(entries)
    }
}

impl<'a, const N: usize> From<[(&'a str, f64); N]> for Series {
    fn from(entries: [(&'a str, f64); N]) -> Self {
        Self::labeled(entries)
    }
}

impl FromIterator<f64> for Series {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        Self::unlabeled(iter)
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Series {
    fn from_iter<T: IntoIterator<Item = (K, f64)>>(iter: T) -> Self {
        Self::labeled(iter)
    }
}

/// A validated series in descending magnitude order.
#[derive(Clone, Debug, PartialEq)]
pub struct SortedSeries {
    values: Vec<f64>,
    labels: Option<Vec<String>>,
}

impl SortedSeries {
    /// Returns the magnitudes, largest first.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the label of the `index`-th largest entry, if the series is labeled.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.as_ref()?.get(index).map(String::as_str)
    }

    /// Returns `true` if labels were supplied.
    pub fn is_labeled(&self) -> bool {
        self.labels.is_some()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
