// Copyright 2026 the Mekko Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid shape resolution.

use crate::factor::{median_divisor, sorted_factors};
use crate::{Axis, ChartError};

/// A mosaic grid of `nrows * ncols` cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridShape {
    /// Cells per column.
    pub nrows: usize,
    /// Number of columns.
    pub ncols: usize,
}

impl GridShape {
    /// Creates a shape without validation.
    pub const fn new(nrows: usize, ncols: usize) -> Self {
        Self { nrows, ncols }
    }

    /// Returns the number of cells, or `None` if it overflows `usize`.
    pub const fn cell_count(self) -> Option<usize> {
        self.nrows.checked_mul(self.ncols)
    }

    /// Picks a shape for `length` cells from its divisors.
    ///
    /// The median divisor (see [`median_divisor`]) becomes the column count. For 12 values the
    /// sorted divisors are `[1, 2, 3, 4, 6, 12]`, giving 4 columns of 3 rows.
    pub fn auto(length: usize) -> Result<Self, ChartError> {
        if length == 0 {
            return Err(ChartError::EmptySeries);
        }
        let divisors = sorted_factors(length)?;
        let ncols = median_divisor(&divisors).ok_or(ChartError::EmptySeries)?;
        Ok(Self::new(length / ncols, ncols))
    }

    /// Resolves requested dimensions against a series length.
    ///
    /// A requested dimension of `0` means "derive it". When exactly one dimension is given,
    /// `length` must be a multiple of it. When neither is given the shape comes from
    /// [`GridShape::auto`]. The resolved shape must hold exactly `length` cells.
    pub fn resolve(length: usize, nrows: usize, ncols: usize) -> Result<Self, ChartError> {
        if length == 0 {
            return Err(ChartError::EmptySeries);
        }
        let shape = match (nrows, ncols) {
            (0, 0) => Self::auto(length)?,
            (0, ncols) => Self::new(divide(length, ncols, Axis::Columns)?, ncols),
            (nrows, 0) => Self::new(nrows, divide(length, nrows, Axis::Rows)?),
            (nrows, ncols) => Self::new(nrows, ncols),
        };
        if shape.cell_count() != Some(length) {
            return Err(ChartError::ShapeMismatch {
                length,
                nrows: shape.nrows,
                ncols: shape.ncols,
            });
        }
        tracing::debug!(
            length,
            nrows = shape.nrows,
            ncols = shape.ncols,
            "resolved grid shape"
        );
        Ok(shape)
    }
}

fn divide(length: usize, requested: usize, axis: Axis) -> Result<usize, ChartError> {
    if length % requested != 0 {
        return Err(ChartError::NotAMultiple {
            length,
            axis,
            requested,
        });
    }
    Ok(length / requested)
}
