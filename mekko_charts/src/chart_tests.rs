// Copyright 2026 the Mekko Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Rect, Size};
use mekko_core::{Figure, MarkId, MarkKind, MarkPayload};

use crate::{ChartError, MarimekkoSpec, Palette, Series};

fn cell_rects(fig: &Figure) -> Vec<Rect> {
    fig.marks()
        .iter()
        .filter_map(|m| match &m.payload {
            MarkPayload::Rect(r) => Some(r.rect),
            _ => None,
        })
        .collect()
}

fn labels(fig: &Figure) -> Vec<String> {
    fig.marks_in_paint_order()
        .into_iter()
        .filter_map(|m| match &m.payload {
            MarkPayload::Text(t) => Some(t.text.clone()),
            _ => None,
        })
        .collect()
}

fn assert_rect_close(a: Rect, b: Rect) {
    let eps = 1e-9;
    assert!((a.x0 - b.x0).abs() <= eps, "x0 {a:?} != {b:?}");
    assert!((a.y0 - b.y0).abs() <= eps, "y0 {a:?} != {b:?}");
    assert!((a.x1 - b.x1).abs() <= eps, "x1 {a:?} != {b:?}");
    assert!((a.y1 - b.y1).abs() <= eps, "y1 {a:?} != {b:?}");
}

#[test]
fn two_by_two_cells_map_into_the_plot() {
    // 100 x 100 plot at the origin so unit coordinates scale by 100.
    let spec = MarimekkoSpec::new()
        .with_shape(2, 2)
        .with_gap(0.0)
        .with_margin(0.0)
        .with_figure_size(Size::new(100.0, 100.0));
    let fig = spec.figure(vec![1.0, 3.0, 4.0, 2.0]).unwrap();
    let rects = cell_rects(&fig);
    assert_eq!(rects.len(), 4);

    // Largest value: left column (width 70), bottom row (height 4/7 of 100), flipped.
    let bottom_left = fig.get(MarkId::from_raw(spec.id_base)).unwrap();
    assert_rect_close(
        bottom_left.bounds().unwrap(),
        Rect::new(0.0, 100.0 - 400.0 / 7.0, 70.0, 100.0),
    );
    // Smallest value: right column, top row.
    let top_right = fig.get(MarkId::from_raw(spec.id_base + 3)).unwrap();
    assert_rect_close(
        top_right.bounds().unwrap(),
        Rect::new(70.0, 0.0, 100.0, 100.0 / 3.0),
    );
}

#[test]
fn auto_shape_for_twelve_values_has_four_columns() {
    let values: Vec<f64> = (1..=12).map(f64::from).collect();
    let spec = MarimekkoSpec::new();
    let (_, mosaic) = spec.layout(&Series::from(values.clone())).unwrap();
    assert_eq!(mosaic.shape().ncols, 4);
    assert_eq!(mosaic.shape().nrows, 3);

    let fig = spec.figure(values).unwrap();
    let mut xs: Vec<f64> = cell_rects(&fig).iter().map(|r| r.x0).collect();
    xs.sort_by(f64::total_cmp);
    xs.dedup_by(|a, b| (*a - *b).abs() < 1e-9);
    assert_eq!(xs.len(), 4, "distinct column origins {xs:?}");
}

#[test]
fn requesting_a_non_divisor_column_count_fails() {
    let values: Vec<f64> = (1..=12).map(f64::from).collect();
    let err = MarimekkoSpec::new()
        .with_shape(0, 5)
        .figure(values)
        .unwrap_err();
    assert!(matches!(err, ChartError::NotAMultiple { requested: 5, .. }));
}

#[test]
fn cells_leave_a_gap_and_do_not_overlap() {
    let values = vec![9.0, 7.0, 4.0, 4.0, 3.0, 2.0, 2.0, 1.0, 1.0];
    let fig = MarimekkoSpec::new().with_gap(0.01).figure(values).unwrap();
    let rects = cell_rects(&fig);
    assert_eq!(rects.len(), 9);
    for (i, a) in rects.iter().enumerate() {
        for b in &rects[i + 1..] {
            assert!(a.intersect(*b).area() < 1e-9, "{a:?} overlaps {b:?}");
        }
    }
}

#[test]
fn labeled_series_annotates_with_keys_and_numbers() {
    let fig = MarimekkoSpec::new()
        .with_text(true)
        .with_numbers(true)
        .figure([("beta", 1.0), ("alpha", 2.5), ("gamma", 0.25), ("delta", 0.25)])
        .unwrap();
    assert_eq!(
        labels(&fig),
        vec!["alpha: 2.5", "beta: 1", "gamma: 0.25", "delta: 0.25"]
    );
}

#[test]
fn label_size_shrinks_with_cell_width() {
    let fig = MarimekkoSpec::new()
        .with_shape(1, 2)
        .with_text(true)
        .figure(vec![9.0, 1.0])
        .unwrap();
    let sizes: Vec<f64> = fig
        .marks()
        .iter()
        .filter_map(|m| match &m.payload {
            MarkPayload::Text(t) => Some(t.font_size),
            _ => None,
        })
        .collect();
    assert_eq!(sizes.len(), 2);
    assert!(sizes[0] > sizes[1], "{sizes:?}");
    assert!(sizes[0] < 16.0);
}

#[test]
fn title_reserves_space_above_the_cells() {
    let plain = MarimekkoSpec::new().figure(vec![2.0, 1.0]).unwrap();
    let titled = MarimekkoSpec::new()
        .with_title("Market share")
        .figure(vec![2.0, 1.0])
        .unwrap();

    let top = |fig: &Figure| {
        cell_rects(fig)
            .iter()
            .map(|r| r.y0)
            .fold(f64::INFINITY, f64::min)
    };
    assert!(top(&titled) > top(&plain));
    assert_eq!(labels(&titled), vec!["Market share"]);
    assert!(
        titled
            .marks()
            .iter()
            .any(|m| m.kind() == MarkKind::Text && m.z_index == crate::z_order::TITLES)
    );
}

#[test]
fn colormap_cells_get_distinct_fills() {
    let fig = MarimekkoSpec::new()
        .with_colormap(Palette::Viridis)
        .figure(vec![5.0, 4.0, 3.0, 2.0])
        .unwrap();
    let fills: Vec<_> = fig
        .marks()
        .iter()
        .filter_map(|m| match &m.payload {
            MarkPayload::Rect(r) => Some(r.fill.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(fills.len(), 4);
    for (i, a) in fills.iter().enumerate() {
        for b in &fills[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn invalid_series_fail_before_building() {
    assert_eq!(
        MarimekkoSpec::new().figure(Vec::<f64>::new()).unwrap_err(),
        ChartError::EmptySeries
    );
    assert_eq!(
        MarimekkoSpec::new().figure(vec![0.0, 0.0]).unwrap_err(),
        ChartError::ZeroSum
    );
    assert!(matches!(
        MarimekkoSpec::new().figure(vec![1.0, -1.0]).unwrap_err(),
        ChartError::InvalidMagnitude { index: 1, .. }
    ));
}

#[test]
fn rounding_scales_with_the_plot() {
    let fig = MarimekkoSpec::new()
        .with_rounding(0.01)
        .with_margin(0.0)
        .figure(vec![1.0])
        .unwrap();
    let MarkPayload::Rect(r) = &fig.marks()[0].payload else {
        panic!("expected rect payload");
    };
    // 0.01 of the 500px short side.
    assert!((r.corner_radius - 5.0).abs() < 1e-9, "{}", r.corner_radius);
}
