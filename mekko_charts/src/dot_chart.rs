// Copyright 2026 the Mekko Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dot-legend chart: one row per entry, a text label and a dot colored by severity level.
//!
//! Rows are spaced evenly down the figure, first entry at the top. There is no proportional
//! sizing.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Point, Size};
use mekko_core::{Figure, Mark, MarkId, TextAnchor};
use peniko::Brush;
use peniko::color::palette::css;

use crate::text_mark::TextMarkSpec;
use crate::{ChartError, ChartLayout, Level, Symbol, z_order};

/// Configuration for a dot-legend chart.
///
/// Positions named "unit" are fractions of the figure, with y measured from the bottom.
#[derive(Clone, Debug)]
pub struct DotChartSpec {
    /// Stable-id base. Entry `i` uses `id_base + 2 * i` for its label and `id_base + 2 * i + 1`
    /// for its dot.
    pub id_base: u64,
    /// Figure size.
    pub figure_size: Size,
    /// Padding around the unit square.
    pub margin: f64,
    /// Label font size.
    pub font_size: f64,
    /// Unit x of the label anchor.
    pub label_x: f64,
    /// Horizontal anchor of labels.
    pub label_anchor: TextAnchor,
    /// Unit offset from the label anchor to the dot center.
    pub dot_dx: f64,
    /// Unit dot radius, scaled isotropically.
    pub dot_radius: f64,
    /// Dot shape.
    pub symbol: Symbol,
    /// Label paint.
    pub text_fill: Brush,
}

impl Default for DotChartSpec {
    fn default() -> Self {
        Self::new()
    }
}

impl DotChartSpec {
    /// Creates a spec for an 800 x 500 figure with left-aligned labels at unit x `0.05` and
    /// dots of unit radius `0.02` at unit x `0.15`.
    pub fn new() -> Self {
        Self {
            id_base: 0x444f_0000,
            figure_size: Size::new(800.0, 500.0),
            margin: 0.0,
            font_size: 12.0,
            label_x: 0.05,
            label_anchor: TextAnchor::Start,
            dot_dx: 0.1,
            dot_radius: 0.02,
            symbol: Symbol::Circle,
            text_fill: css::BLACK.into(),
        }
    }

    /// Sets the stable-id base.
    pub fn with_id_base(mut self, id_base: u64) -> Self {
        self.id_base = id_base;
        self
    }

    /// Sets the figure size.
    pub fn with_figure_size(mut self, size: Size) -> Self {
        self.figure_size = size;
        self
    }

    /// Sets the label font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the label anchor.
    pub fn with_label_anchor(mut self, anchor: TextAnchor) -> Self {
        self.label_anchor = anchor;
        self
    }

    /// Sets the unit dot radius.
    pub fn with_dot_radius(mut self, radius: f64) -> Self {
        self.dot_radius = radius;
        self
    }

    /// Sets the dot shape.
    pub fn with_symbol(mut self, symbol: Symbol) -> Self {
        self.symbol = symbol;
        self
    }

    /// Sets the label paint.
    pub fn with_text_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.text_fill = fill.into();
        self
    }

    /// Builds the chart from `(label, level value)` entries, in order.
    ///
    /// Every value is resolved to a [`Level`] before any mark is built, so one unknown value
    /// fails the whole chart.
    pub fn figure<K: AsRef<str>>(
        &self,
        entries: impl IntoIterator<Item = (K, f64)>,
    ) -> Result<Figure, ChartError> {
        let rows = entries
            .into_iter()
            .map(|(key, value)| Ok((key, Level::from_value(value)?)))
            .collect::<Result<Vec<_>, ChartError>>()?;

        let layout = ChartLayout::arrange(self.figure_size, self.margin, None);
        let mut figure = Figure::new(self.figure_size);
        figure.extend(self.marks(&layout, &rows));
        tracing::debug!(rows = rows.len(), "built dot chart");
        Ok(figure)
    }

    fn marks<K: AsRef<str>>(&self, layout: &ChartLayout, rows: &[(K, Level)]) -> Vec<Mark> {
        let n = rows.len() as f64;
        let size = 2.0 * layout.unit_length(self.dot_radius);
        let mut out = Vec::with_capacity(2 * rows.len());

        for (i, (key, level)) in rows.iter().enumerate() {
            let unit_y = (n - (i as f64 + 0.5)) / n;
            let label_pos = layout.unit_point(Point::new(self.label_x, unit_y));
            let dot_pos = layout.unit_point(Point::new(self.label_x + self.dot_dx, unit_y));
            let id = MarkId::from_raw(self.id_base).offset(2 * i as u64);

            out.push(
                TextMarkSpec::new(id, label_pos, key.as_ref())
                    .with_font_size(self.font_size)
                    .with_anchor(self.label_anchor)
                    .with_fill(self.text_fill.clone())
                    .with_z_index(z_order::DOT_LABELS)
                    .mark(),
            );
            out.push(
                Mark::path(
                    id.offset(1),
                    self.symbol.path(dot_pos.x, dot_pos.y, size),
                    level.color(),
                )
                .with_z_index(z_order::DOTS),
            );
        }
        out
    }
}
