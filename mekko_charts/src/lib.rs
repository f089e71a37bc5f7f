// Copyright 2026 the Mekko Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marimekko (mosaic) layout and small chart builders for `mekko_core`.
//!
//! This crate has two layers:
//! - **Layout utilities**: [`normalize`], [`cumulative_boundaries`], [`factors`],
//!   [`median_divisor`], [`GridShape`] and the [`MosaicLayout`] engine. These work in a unit
//!   square and know nothing about rendering.
//! - **Chart builders**: [`MarimekkoSpec`] and [`DotChartSpec`] turn data into a
//!   [`mekko_core::Figure`] of marks in scene coordinates.
//!
//! ```
//! use mekko_charts::{GridShape, MarimekkoSpec, MosaicLayout};
//!
//! let layout = MosaicLayout::compute(&[4.0, 3.0, 2.0, 1.0], GridShape::new(2, 2), 0.0)?;
//! assert_eq!(layout.cols().len(), 3);
//!
//! let figure = MarimekkoSpec::new().with_text(true).figure(vec![4.0, 3.0, 2.0, 1.0])?;
//! assert_eq!(figure.len(), 8);
//! # Ok::<(), mekko_charts::ChartError>(())
//! ```
//!
//! Text shaping is out of scope; text marks store unshaped strings.

#![no_std]

extern crate alloc;

#[cfg(test)]
mod chart_tests;
mod colormap;
mod dot_chart;
mod error;
mod factor;
#[cfg(not(feature = "std"))]
mod float;
mod layout;
mod level;
mod marimekko;
mod measure;
mod mosaic;
mod normalize;
mod rect_mark;
mod series;
mod shape;
mod symbol;
mod text_mark;
mod title;
pub mod z_order;

pub use colormap::{Colormap, Palette};
pub use dot_chart::DotChartSpec;
pub use error::{Axis, ChartError};
pub use factor::{Divisors, factors, median_divisor, sorted_factors};
pub use layout::ChartLayout;
pub use level::Level;
pub use marimekko::MarimekkoSpec;
pub use measure::{HeuristicTextMeasurer, TextMeasurer};
pub use mosaic::{Cell, MosaicLayout};
pub use normalize::{cumulative_boundaries, normalize};
pub use rect_mark::RectMarkSpec;
pub use series::{Series, SortedSeries};
pub use shape::GridShape;
pub use symbol::Symbol;
pub use text_mark::TextMarkSpec;
pub use title::TitleSpec;
