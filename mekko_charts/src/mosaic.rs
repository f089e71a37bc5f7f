// Copyright 2026 the Mekko Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The mosaic (marimekko) layout engine.
//!
//! The unit square is split into columns whose widths are proportional to the summed
//! magnitude of each column's values, then each column is split into rows whose heights are
//! proportional to the individual values. Values are assigned to columns in contiguous
//! chunks of `nrows`, so with descending input the first column holds the largest values.
//!
//! Coordinates here are unit-square coordinates with the origin at the bottom-left. Chart
//! builders map them into scene space.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;

use crate::normalize::cumulative_boundaries;
use crate::series::validate_magnitudes;
use crate::{ChartError, GridShape};

/// One laid-out cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    /// Row within the column, counted from the bottom.
    pub row: usize,
    /// Column, counted from the left.
    pub col: usize,
    /// Position in the input order: `col * nrows + row`.
    pub index: usize,
    /// The magnitude this cell encodes.
    pub value: f64,
    /// Left edge, offset by the gap from the column boundary.
    pub x: f64,
    /// Bottom edge, on the row boundary.
    pub y: f64,
    /// Column share minus the gap. May be negative when the share is smaller than the gap.
    pub width: f64,
    /// Row share minus the gap. May be negative when the share is smaller than the gap.
    pub height: f64,
}

impl Cell {
    /// Returns the cell rectangle, collapsing negative extents to zero.
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.x,
            self.y,
            self.x + self.width.max(0.0),
            self.y + self.height.max(0.0),
        )
    }

    /// Returns the center of the cell rectangle.
    pub fn center(&self) -> kurbo::Point {
        self.rect().center()
    }
}

/// Partition boundaries for a mosaic grid.
#[derive(Clone, Debug, PartialEq)]
pub struct MosaicLayout {
    shape: GridShape,
    gap: f64,
    values: Vec<f64>,
    cols: Vec<f64>,
    rows: Vec<Vec<f64>>,
}

impl MosaicLayout {
    /// Lays out `values` on a grid of the given shape.
    ///
    /// Values are taken in the order given; chart builders sort them descending first.
    /// `gap` is subtracted from every cell's width and height.
    ///
    /// Fails if `values` does not hold exactly one value per cell, if any value is negative or
    /// not finite, or if the whole series or any column sums to zero.
    pub fn compute(values: &[f64], shape: GridShape, gap: f64) -> Result<Self, ChartError> {
        if values.is_empty() {
            return Err(ChartError::EmptySeries);
        }
        if shape.nrows == 0 || shape.cell_count() != Some(values.len()) {
            return Err(ChartError::ShapeMismatch {
                length: values.len(),
                nrows: shape.nrows,
                ncols: shape.ncols,
            });
        }
        validate_magnitudes(values.iter().copied())?;

        let sums: Vec<f64> = values
            .chunks(shape.nrows)
            .map(|chunk| chunk.iter().sum())
            .collect();
        let cols = cumulative_boundaries(&sums)?;
        let rows = values
            .chunks(shape.nrows)
            .map(cumulative_boundaries)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(?cols, nrows = shape.nrows, ncols = shape.ncols, "mosaic columns");

        Ok(Self {
            shape,
            gap,
            values: values.to_vec(),
            cols,
            rows,
        })
    }

    /// Returns the grid shape.
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Returns the gap subtracted from each cell.
    pub fn gap(&self) -> f64 {
        self.gap
    }

    /// Returns the `ncols + 1` cumulative column boundaries, from `0` to `1`.
    pub fn cols(&self) -> &[f64] {
        &self.cols
    }

    /// Returns, per column, the `nrows + 1` cumulative row boundaries, from `0` to `1`.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Returns the cell at `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.shape.nrows || col >= self.shape.ncols {
            return None;
        }
        let index = col * self.shape.nrows + row;
        let col_bounds = (self.cols[col], self.cols[col + 1]);
        let row_bounds = (self.rows[col][row], self.rows[col][row + 1]);
        Some(Cell {
            row,
            col,
            index,
            value: self.values[index],
            x: col_bounds.0 + self.gap,
            y: row_bounds.0,
            width: (col_bounds.1 - col_bounds.0) - self.gap,
            height: (row_bounds.1 - row_bounds.0) - self.gap,
        })
    }

    /// Iterates cells column by column, bottom row first, which is input order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let GridShape { nrows, ncols } = self.shape;
        (0..ncols).flat_map(move |col| (0..nrows).filter_map(move |row| self.cell(row, col)))
    }
}
