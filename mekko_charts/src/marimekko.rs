// Copyright 2026 the Mekko Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marimekko (mosaic) chart builder.

extern crate alloc;

use alloc::format;
use alloc::string::String;

use kurbo::Size;
use mekko_core::{Figure, MarkId};
use peniko::color::palette::css;
use peniko::{Brush, Color};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::rect_mark::RectMarkSpec;
use crate::series::SortedSeries;
use crate::text_mark::TextMarkSpec;
use crate::{
    Cell, ChartError, ChartLayout, Colormap, GridShape, HeuristicTextMeasurer, MosaicLayout,
    Series, TextMeasurer, TitleSpec,
};

/// Configuration for a marimekko chart.
///
/// Lengths named "unit" are fractions of the plot's unit square; everything else is in scene
/// coordinates.
#[derive(Clone, Debug)]
pub struct MarimekkoSpec {
    /// Stable-id base. Cell `k` (in descending value order) uses `id_base + k`, its label
    /// `id_base + len + k`, and the title `id_base + 2 * len`.
    pub id_base: u64,
    /// Requested rows per column, `0` to derive.
    pub nrows: usize,
    /// Requested columns, `0` to derive.
    pub ncols: usize,
    /// Whether to label cells.
    pub text: bool,
    /// Whether labels of a labeled series also show the rounded value.
    ///
    /// Values are rounded to two decimals and printed without trailing zeros, so `1.0` shows
    /// as `1` and `2.50` as `2.5`.
    pub numbers: bool,
    /// Base label font size, scaled per cell by `width^0.25`.
    pub font_size: f64,
    /// Unit gap subtracted from every cell's width and height.
    pub gap: f64,
    /// Unit corner radius of cells.
    pub rounding: f64,
    /// Figure size.
    pub figure_size: Size,
    /// Padding between the figure edge (or title strip) and the plot.
    pub margin: f64,
    /// Optional colormap, sampled in reverse across cells. `None` uses a green gradient.
    pub colormap: Option<Colormap>,
    /// Optional chart title.
    pub title: Option<String>,
    /// Title font size.
    pub title_font_size: f64,
    /// Paint for labels and title.
    pub text_fill: Brush,
}

impl Default for MarimekkoSpec {
    fn default() -> Self {
        Self::new()
    }
}

impl MarimekkoSpec {
    /// Creates a spec with the default styling: auto grid, no labels, 0.005 gap and rounding,
    /// and an 800 x 500 figure.
    pub fn new() -> Self {
        Self {
            id_base: 0x4d4b_0000,
            nrows: 0,
            ncols: 0,
            text: false,
            numbers: false,
            font_size: 16.0,
            gap: 0.005,
            rounding: 0.005,
            figure_size: Size::new(800.0, 500.0),
            margin: 40.0,
            colormap: None,
            title: None,
            title_font_size: 14.0,
            text_fill: css::BLACK.into(),
        }
    }

    /// Sets the stable-id base.
    pub fn with_id_base(mut self, id_base: u64) -> Self {
        self.id_base = id_base;
        self
    }

    /// Requests a grid shape; `0` in either position means "derive".
    pub fn with_shape(mut self, nrows: usize, ncols: usize) -> Self {
        self.nrows = nrows;
        self.ncols = ncols;
        self
    }

    /// Enables or disables cell labels.
    pub fn with_text(mut self, text: bool) -> Self {
        self.text = text;
        self
    }

    /// Enables or disables values in the labels of a labeled series.
    pub fn with_numbers(mut self, numbers: bool) -> Self {
        self.numbers = numbers;
        self
    }

    /// Sets the base label font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the unit gap between cells.
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Sets the unit corner radius of cells.
    pub fn with_rounding(mut self, rounding: f64) -> Self {
        self.rounding = rounding;
        self
    }

    /// Sets the figure size.
    pub fn with_figure_size(mut self, size: Size) -> Self {
        self.figure_size = size;
        self
    }

    /// Sets the plot margin.
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Colors cells from a colormap.
    pub fn with_colormap(mut self, colormap: impl Into<Colormap>) -> Self {
        self.colormap = Some(colormap.into());
        self
    }

    /// Sets the chart title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the title font size.
    pub fn with_title_font_size(mut self, font_size: f64) -> Self {
        self.title_font_size = font_size;
        self
    }

    /// Sets the label and title paint.
    pub fn with_text_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.text_fill = fill.into();
        self
    }

    /// Sorts, validates and lays out a series without building marks.
    pub fn layout(&self, series: &Series) -> Result<(SortedSeries, MosaicLayout), ChartError> {
        let sorted = series.sorted_descending()?;
        let shape = GridShape::resolve(sorted.len(), self.nrows, self.ncols)?;
        let mosaic = MosaicLayout::compute(sorted.values(), shape, self.gap)?;
        Ok((sorted, mosaic))
    }

    /// Builds the chart, measuring the title heuristically.
    pub fn figure(&self, series: impl Into<Series>) -> Result<Figure, ChartError> {
        self.figure_with_measurer(series, &HeuristicTextMeasurer)
    }

    /// Builds the chart.
    pub fn figure_with_measurer(
        &self,
        series: impl Into<Series>,
        measurer: &dyn TextMeasurer,
    ) -> Result<Figure, ChartError> {
        let (sorted, mosaic) = self.layout(&series.into())?;
        let len = sorted.len() as u64;
        let shape = mosaic.shape();

        let title = self.title.as_ref().map(|text| {
            TitleSpec::new(MarkId::from_raw(self.id_base).offset(2 * len), text.clone())
                .with_font_size(self.title_font_size)
                .with_fill(self.text_fill.clone())
        });
        let layout = ChartLayout::arrange(
            self.figure_size,
            self.margin,
            title.as_ref().map(|t| t.measure(measurer)),
        );
        let radius = layout.unit_length(self.rounding);
        tracing::debug!(
            nrows = shape.nrows,
            ncols = shape.ncols,
            colormap = ?self.colormap,
            "building marimekko figure"
        );

        let mut figure = Figure::new(self.figure_size);
        for cell in mosaic.cells() {
            let rect = layout.unit_rect(cell.rect());
            let fill = self.cell_color(&cell, shape, sorted.len());
            tracing::trace!(
                row = cell.row,
                col = cell.col,
                x = cell.x,
                y = cell.y,
                width = cell.width,
                height = cell.height,
                "cell"
            );

            let index = cell.index as u64;
            figure.push(
                RectMarkSpec::new(MarkId::from_raw(self.id_base).offset(index), rect)
                    .with_corner_radius(radius)
                    .with_fill(fill)
                    .mark(),
            );

            if self.text {
                let font_size = self.font_size * cell.width.max(0.0).powf(0.25);
                figure.push(
                    TextMarkSpec::new(
                        MarkId::from_raw(self.id_base).offset(len + index),
                        rect.center(),
                        self.cell_label(&sorted, &cell),
                    )
                    .with_font_size(font_size)
                    .with_fill(self.text_fill.clone())
                    .mark(),
                );
            }
        }

        if let (Some(title), Some(rect)) = (title, layout.title) {
            figure.push(title.mark(rect));
        }
        Ok(figure)
    }

    /// Returns the fill of a cell.
    ///
    /// With a colormap, cell `k` of `len` samples the reversed map at `k / len`, so the largest
    /// value takes the far end of the map. Without one, cells shade from bright to dark green
    /// as `row + col` grows.
    pub fn cell_color(&self, cell: &Cell, shape: GridShape, len: usize) -> Color {
        match self.colormap {
            Some(map) => map.reversed().sample(cell.index as f64 / len as f64),
            None => {
                let steps = (shape.ncols + shape.nrows + 1) as f64;
                let green = 1.0 - (cell.col + cell.row + 1) as f64 / steps;
                Color::new([0.0, green as f32, 0.25, 1.0])
            }
        }
    }

    /// `"key: 1.5"`, `"key"` or `"1.5"`; whole values print without a fractional part.
    fn cell_label(&self, sorted: &SortedSeries, cell: &Cell) -> String {
        let value = round2(cell.value);
        match sorted.label(cell.index) {
            Some(key) if self.numbers => format!("{key}: {value}"),
            Some(key) => String::from(key),
            None => format!("{value}"),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;
    use crate::Palette;

    #[test]
    fn round2_keeps_two_decimals() {
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round2(2.0), 2.0);
        assert_eq!(round2(0.125), 0.13);
    }

    #[test]
    fn default_gradient_darkens_along_row_plus_col() {
        let spec = MarimekkoSpec::new();
        let shape = GridShape::new(2, 2);
        let (_, mosaic) = spec.layout(&Series::from(vec![4.0, 3.0, 2.0, 1.0])).unwrap();

        let first = spec.cell_color(&mosaic.cell(0, 0).unwrap(), shape, 4).to_rgba8();
        let last = spec.cell_color(&mosaic.cell(1, 1).unwrap(), shape, 4).to_rgba8();
        // 1 - 1/5 and 1 - 3/5 of full green.
        assert_eq!((first.r, first.g, first.b), (0, 204, 64));
        assert_eq!((last.r, last.g, last.b), (0, 102, 64));
    }

    #[test]
    fn colormap_runs_from_the_far_end() {
        let spec = MarimekkoSpec::new().with_colormap(Palette::Greys);
        let (_, mosaic) = spec.layout(&Series::from(vec![4.0, 3.0, 2.0, 1.0])).unwrap();
        let shape = mosaic.shape();

        let largest = spec.cell_color(&mosaic.cell(0, 0).unwrap(), shape, 4);
        assert_eq!(largest.to_rgba8().r, 0, "largest value samples the dark end");
        let smallest = spec.cell_color(&mosaic.cell(1, 1).unwrap(), shape, 4);
        assert!(smallest.to_rgba8().r > largest.to_rgba8().r);
    }

    #[test]
    fn labels_depend_on_series_kind_and_numbers_flag() {
        let labeled = Series::from([("a", 3.333), ("b", 1.0)]);
        let (sorted, mosaic) = MarimekkoSpec::new().layout(&labeled).unwrap();
        let cell = mosaic.cell(0, 0).unwrap();

        let plain = MarimekkoSpec::new();
        assert_eq!(plain.cell_label(&sorted, &cell), "a");
        let numbers = MarimekkoSpec::new().with_numbers(true);
        assert_eq!(numbers.cell_label(&sorted, &cell), "a: 3.33");

        let unlabeled = Series::from([3.333, 1.0]);
        let (sorted, mosaic) = plain.layout(&unlabeled).unwrap();
        assert_eq!(
            plain.cell_label(&sorted, &mosaic.cell(0, 0).unwrap()),
            "3.33"
        );
        assert_eq!(
            plain.cell_label(&sorted, &mosaic.cell(0, 1).unwrap()),
            "1",
            "whole values drop the fractional part"
        );
    }
}
