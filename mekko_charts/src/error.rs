// Copyright 2026 the Mekko Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors returned by layout and chart builders.

extern crate alloc;

use alloc::string::String;
use core::fmt;

/// A grid axis, used to report which requested dimension was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The row count (`nrows`).
    Rows,
    /// The column count (`ncols`).
    Columns,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Rows => "nrows",
            Self::Columns => "ncols",
        })
    }
}

/// Invalid input to a layout utility or chart builder.
///
/// Every failure is detected before any mark is produced.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ChartError {
    /// The data series has no entries.
    #[error("data series is empty")]
    EmptySeries,
    /// A magnitude is negative, NaN or infinite.
    #[error("magnitude at index {index} must be finite and non-negative, got {value}")]
    InvalidMagnitude {
        /// Position of the offending value in the input series.
        index: usize,
        /// The offending value.
        value: f64,
    },
    /// Normalization was asked to divide by a zero (or non-finite) total.
    #[error("cannot normalize values that sum to zero")]
    ZeroSum,
    /// Factorization of zero was requested.
    #[error("cannot list the divisors of zero")]
    ZeroFactor,
    /// The series length is not a multiple of the one requested dimension.
    #[error("length of data ({length}) is not a multiple of {axis} ({requested})")]
    NotAMultiple {
        /// Series length.
        length: usize,
        /// The dimension that was supplied.
        axis: Axis,
        /// The supplied value.
        requested: usize,
    },
    /// The resolved grid does not hold exactly one cell per value.
    #[error("length of data ({length}) must equal nrows * ncols ({nrows} * {ncols})")]
    ShapeMismatch {
        /// Series length.
        length: usize,
        /// Row count.
        nrows: usize,
        /// Column count.
        ncols: usize,
    },
    /// No colormap is registered under this name.
    #[error("unknown colormap `{0}`")]
    UnknownColormap(String),
    /// A value is not one of the enumerated severity levels.
    #[error("{0} is not a severity level (expected one of 0, 1, 3, 5, 7.5, 10)")]
    UnknownLevel(f64),
}
