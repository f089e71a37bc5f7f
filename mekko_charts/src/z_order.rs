// Copyright 2026 the Mekko Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order conventions for chart-generated marks.
//!
//! Renderers sort by `(z_index, MarkId)` for a deterministic tie-break.

/// Mosaic cells.
pub const CELLS: i32 = 0;
/// Text drawn on top of cells.
pub const CELL_LABELS: i32 = 40;
/// Dot-chart dots.
pub const DOTS: i32 = 60;
/// Dot-chart labels.
pub const DOT_LABELS: i32 = 70;
/// Chart titles.
pub const TITLES: i32 = 80;
