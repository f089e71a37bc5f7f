// Copyright 2026 the Mekko Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for chart layout.
//!
//! Shaping happens downstream of the figure, so layout that depends on text extents (the
//! title strip) accepts a measurer. Callers can plug in a shaping backend or use
//! [`HeuristicTextMeasurer`].

/// A minimal text measurement interface.
pub trait TextMeasurer {
    /// Returns `(width, height)` in scene coordinates for a single line of text.
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64);
}

/// A heuristic measurer assuming an average glyph width of ~0.6em and a height of 1em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        let width = 0.6 * font_size * text.chars().count() as f64;
        (width, font_size)
    }
}
