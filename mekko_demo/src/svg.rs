// Copyright 2026 the Mekko Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG writer for Mekko figures.

use std::fmt::Write as _;

use mekko_core::{Figure, MarkPayload, TextAnchor, TextBaseline};
use peniko::Brush;

/// Renders a figure as a standalone SVG document, painting marks in `(z_index, id)` order.
pub(crate) fn figure_to_svg(figure: &Figure) -> String {
    let view = figure.view();
    let mut out = String::new();

    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    let _ = writeln!(
        out,
        r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
        view.x0,
        view.y0,
        view.width(),
        view.height(),
        view.width(),
        view.height()
    );
    let _ = writeln!(
        out,
        r##"<rect x="{}" y="{}" width="{}" height="{}" fill="#ffffff"/>"##,
        view.x0,
        view.y0,
        view.width(),
        view.height()
    );

    for mark in figure.marks_in_paint_order() {
        match &mark.payload {
            MarkPayload::Rect(r) => {
                let rr = r.rounded_rect();
                let rect = rr.rect();
                let radius = rr.radii().top_left;
                let _ = write!(
                    out,
                    r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                    rect.x0,
                    rect.y0,
                    rect.width(),
                    rect.height(),
                );
                if radius > 0.0 {
                    let _ = write!(out, r#" rx="{radius}" ry="{radius}""#);
                }
                write_paint_attr(&mut out, "fill", &r.fill);
                out.push_str("/>\n");
            }
            MarkPayload::Text(t) => {
                let baseline = match t.baseline {
                    TextBaseline::Middle => "middle",
                    TextBaseline::Alphabetic => "alphabetic",
                    TextBaseline::Hanging => "hanging",
                    TextBaseline::Ideographic => "ideographic",
                };
                let _ = write!(
                    out,
                    r#"<text x="{}" y="{}" font-size="{}" font-family="sans-serif" dominant-baseline="{}""#,
                    t.pos.x, t.pos.y, t.font_size, baseline
                );
                if t.angle != 0.0 {
                    let _ = write!(
                        out,
                        r#" transform="rotate({} {} {})""#,
                        t.angle, t.pos.x, t.pos.y
                    );
                }
                out.push_str(match t.anchor {
                    TextAnchor::Start => r#" text-anchor="start""#,
                    TextAnchor::Middle => r#" text-anchor="middle""#,
                    TextAnchor::End => r#" text-anchor="end""#,
                });
                write_paint_attr(&mut out, "fill", &t.fill);
                out.push('>');
                out.push_str(&escape_xml(&t.text));
                out.push_str("</text>\n");
            }
            MarkPayload::Path(p) => {
                let _ = write!(out, r#"<path d="{}""#, p.path.to_svg());
                write_paint_attr(&mut out, "fill", &p.fill);
                if p.stroke_width > 0.0 {
                    write_paint_attr(&mut out, "stroke", &p.stroke);
                    let _ = write!(out, r#" stroke-width="{}""#, p.stroke_width);
                }
                out.push_str("/>\n");
            }
        }
    }

    out.push_str("</svg>\n");
    out
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = (rgba.a != 255).then(|| f64::from(rgba.a) / 255.0);
            (fill, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o}""#);
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Size};
    use mekko_core::{Mark, MarkId};
    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn rounded_rects_carry_radius_and_fill() {
        let mut fig = Figure::new(Size::new(10.0, 10.0));
        fig.push(Mark::rect(
            MarkId::from_raw(1),
            Rect::new(1.0, 2.0, 5.0, 8.0),
            0.5,
            css::RED,
        ));
        let svg = figure_to_svg(&fig);
        assert!(svg.contains(r#"viewBox="0 0 10 10""#), "{svg}");
        assert!(
            svg.contains(
                r##"<rect x="1" y="2" width="4" height="6" rx="0.5" ry="0.5" fill="#ff0000"/>"##
            ),
            "{svg}"
        );
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(escape_xml("a<b & 'c'"), "a&lt;b &amp; &apos;c&apos;");
    }
}
