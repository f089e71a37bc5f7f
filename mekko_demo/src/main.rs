// Copyright 2026 the Mekko Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Writes sample Mekko charts as SVG files.
//!
//! Usage: `mekko_demo [OUT_DIR]` (defaults to the current directory). Set `RUST_LOG=debug` to
//! see resolved grid shapes and cell geometry.

mod svg;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mekko_charts::{DotChartSpec, MarimekkoSpec, Palette, Series};
use mekko_core::Figure;

fn main() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("mekko_demo=info,mekko_charts=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let out_dir = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("."), PathBuf::from);
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let unlabeled = MarimekkoSpec::new()
        .with_text(true)
        .with_title("Twelve values, auto grid")
        .figure(vec![
            30.0, 22.0, 15.0, 12.0, 9.0, 8.0, 7.0, 5.0, 4.0, 3.0, 2.0, 1.0,
        ])?;
    write_svg(&out_dir, "marimekko.svg", &unlabeled)?;

    let market = Series::labeled([
        ("Retail", 41.0),
        ("Cloud", 27.5),
        ("Devices", 12.0),
        ("Ads", 9.5),
        ("Services", 6.0),
        ("Other", 4.0),
    ]);
    let labeled = MarimekkoSpec::new()
        .with_shape(2, 0)
        .with_text(true)
        .with_numbers(true)
        .with_colormap(Palette::Viridis)
        .with_title("Revenue by segment")
        .figure(market)?;
    write_svg(&out_dir, "marimekko_labeled.svg", &labeled)?;

    let dots = DotChartSpec::new().figure([
        ("Supply chain", 7.5),
        ("Regulation", 3.0),
        ("Currency", 5.0),
        ("Competition", 10.0),
        ("Weather", 1.0),
        ("Unrated", 0.0),
    ])?;
    write_svg(&out_dir, "dot_chart.svg", &dots)?;

    Ok(())
}

fn write_svg(dir: &Path, name: &str, figure: &Figure) -> Result<()> {
    let path = dir.join(name);
    std::fs::write(&path, svg::figure_to_svg(figure))
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), marks = figure.len(), "wrote figure");
    Ok(())
}
