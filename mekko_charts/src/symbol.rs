// Copyright 2026 the Mekko Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Symbol shapes for dot-like marks.

use kurbo::{BezPath, Circle, Rect, Shape};

/// A small set of symbol shapes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A circle.
    #[default]
    Circle,
    /// An axis-aligned square.
    Square,
}

impl Symbol {
    /// Returns a path for this symbol centered at `cx, cy`, using `size` as the diameter/side.
    pub fn path(self, cx: f64, cy: f64, size: f64) -> BezPath {
        // Curve tolerance in scene units; fine enough for screen-sized output.
        let tolerance = 0.1;
        let half = size * 0.5;
        match self {
            Self::Circle => Circle::new((cx, cy), half)
                .path_elements(tolerance)
                .collect(),
            Self::Square => Rect::new(cx - half, cy - half, cx + half, cy + half)
                .path_elements(tolerance)
                .collect(),
        }
    }
}
