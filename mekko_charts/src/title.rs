// Copyright 2026 the Mekko Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart titles.
//!
//! A title reserves a strip above the plot in [`crate::ChartLayout`] and renders as a single
//! text mark centered in that strip.

extern crate alloc;

use alloc::string::String;

use kurbo::{Point, Rect};
use mekko_core::{Mark, MarkId, TextAnchor};
use peniko::Brush;

use crate::TextMeasurer;
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// A chart-level title.
#[derive(Clone, Debug)]
pub struct TitleSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Title text (unshaped).
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Vertical padding applied above and below the text.
    pub padding: f64,
    /// Horizontal anchor within the title strip.
    pub anchor: TextAnchor,
}

impl TitleSpec {
    /// Creates a title spec with default styling.
    pub fn new(id: MarkId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            font_size: 14.0,
            fill: Brush::default(),
            padding: 6.0,
            anchor: TextAnchor::Middle,
        }
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Returns the height this title reserves above the plot.
    pub fn measure(&self, measurer: &dyn TextMeasurer) -> f64 {
        let (_, h) = measurer.measure(&self.text, self.font_size);
        (2.0 * self.padding.max(0.0) + h).max(0.0)
    }

    /// Emits the title mark placed within `title_rect`.
    pub fn mark(&self, title_rect: Rect) -> Mark {
        let x = match self.anchor {
            TextAnchor::Start => title_rect.x0,
            TextAnchor::Middle => title_rect.center().x,
            TextAnchor::End => title_rect.x1,
        };
        TextMarkSpec::new(self.id, Point::new(x, title_rect.center().y), self.text.clone())
            .with_font_size(self.font_size)
            .with_fill(self.fill.clone())
            .with_anchor(self.anchor)
            .with_z_index(z_order::TITLES)
            .mark()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use mekko_core::MarkPayload;

    use super::*;
    use crate::HeuristicTextMeasurer;

    #[test]
    fn title_is_centered_in_its_strip() {
        let title = TitleSpec::new(MarkId::from_raw(10), "Title").with_font_size(12.0);
        let h = title.measure(&HeuristicTextMeasurer);
        assert_eq!(h, 24.0);

        let mark = title.mark(Rect::new(0.0, 0.0, 200.0, h));
        let MarkPayload::Text(t) = &mark.payload else {
            panic!("expected text payload");
        };
        assert_eq!(t.pos, Point::new(100.0, 12.0));
        assert_eq!(t.text, "Title");
        assert_eq!(mark.z_index, z_order::TITLES);
    }
}
