// Copyright 2026 the Mekko Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rounded rectangle mark generation.

use kurbo::Rect;
use mekko_core::{Mark, MarkId};
use peniko::Brush;

/// A rectangle mark spec with optionally rounded corners.
#[derive(Clone, Debug)]
pub struct RectMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Rectangle geometry in scene coordinates.
    pub rect: Rect,
    /// Corner radius in scene coordinates.
    pub corner_radius: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Rendering order hint (`mekko_core::Mark::z_index`).
    pub z_index: i32,
}

impl RectMarkSpec {
    /// Creates a square-cornered rectangle mark spec.
    pub fn new(id: MarkId, rect: Rect) -> Self {
        Self {
            id,
            rect,
            corner_radius: 0.0,
            fill: Brush::default(),
            z_index: crate::z_order::CELLS,
        }
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the corner radius.
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates the mark, clamping the corner radius to half the shorter side.
    pub fn mark(&self) -> Mark {
        let rect = self.rect.abs();
        let max_radius = 0.5 * rect.width().min(rect.height());
        let radius = self.corner_radius.clamp(0.0, max_radius.max(0.0));
        Mark::rect(self.id, rect, radius, self.fill.clone()).with_z_index(self.z_index)
    }
}
