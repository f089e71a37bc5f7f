// Copyright 2026 the Mekko Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Figure layout: an optional title strip above a plot rectangle.
//!
//! Charts lay out their content in a unit square with the origin at the bottom-left, the way
//! plotting libraries place data coordinates. [`ChartLayout`] maps that square onto the plot
//! rectangle, flipping y because scene coordinates grow downward.

use kurbo::{Point, Rect, Size};

/// Resolved rectangles of a single chart, in scene coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    /// The whole figure.
    pub view: Rect,
    /// Title strip, if a title was measured.
    pub title: Option<Rect>,
    /// The rectangle the unit square maps onto.
    pub plot: Rect,
}

impl ChartLayout {
    /// Arranges a figure of `size`: the title strip takes `title_height` from the top, and the
    /// plot fills the rest inset by `margin` on every side.
    pub fn arrange(size: Size, margin: f64, title_height: Option<f64>) -> Self {
        let view = size.to_rect();
        let margin = margin.max(0.0);
        let title =
            title_height.map(|h| Rect::new(view.x0, view.y0, view.x1, view.y0 + h.max(0.0)));
        let top = title.map_or(view.y0, |t| t.y1);

        let x0 = view.x0 + margin;
        let y0 = top + margin;
        let plot = Rect::new(
            x0,
            y0,
            (view.x1 - margin).max(x0),
            (view.y1 - margin).max(y0),
        );
        Self { view, title, plot }
    }

    /// Maps a unit-square point (y up) into the plot rectangle (y down).
    pub fn unit_point(&self, p: Point) -> Point {
        Point::new(
            self.plot.x0 + p.x * self.plot.width(),
            self.plot.y1 - p.y * self.plot.height(),
        )
    }

    /// Maps a unit-square rectangle (y up) into the plot rectangle (y down).
    pub fn unit_rect(&self, r: Rect) -> Rect {
        let a = self.unit_point(Point::new(r.x0, r.y0));
        let b = self.unit_point(Point::new(r.x1, r.y1));
        Rect::from_points(a, b)
    }

    /// Scales a unit-square length so it stays isotropic in the plot.
    pub fn unit_length(&self, len: f64) -> f64 {
        len * self.plot.width().min(self.plot.height())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn unit_square_flips_into_plot() {
        let layout = ChartLayout::arrange(Size::new(200.0, 100.0), 10.0, None);
        assert_eq!(layout.plot, Rect::new(10.0, 10.0, 190.0, 90.0));
        assert_eq!(layout.unit_point(Point::new(0.0, 0.0)), Point::new(10.0, 90.0));
        assert_eq!(layout.unit_point(Point::new(1.0, 1.0)), Point::new(190.0, 10.0));
        assert_eq!(
            layout.unit_rect(Rect::new(0.0, 0.0, 0.5, 0.5)),
            Rect::new(10.0, 50.0, 100.0, 90.0)
        );
        assert_eq!(layout.unit_length(0.5), 40.0);
    }

    #[test]
    fn title_strip_pushes_the_plot_down() {
        let layout = ChartLayout::arrange(Size::new(200.0, 100.0), 0.0, Some(20.0));
        assert_eq!(layout.title, Some(Rect::new(0.0, 0.0, 200.0, 20.0)));
        assert_eq!(layout.plot, Rect::new(0.0, 20.0, 200.0, 100.0));
    }

    #[test]
    fn oversized_margin_collapses_the_plot() {
        let layout = ChartLayout::arrange(Size::new(20.0, 20.0), 30.0, None);
        assert_eq!(layout.plot.area(), 0.0);
    }
}
