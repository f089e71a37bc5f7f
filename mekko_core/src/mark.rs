// Copyright 2026 the Mekko Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mark identity and payloads.

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, Point, Rect, RoundedRect, Shape};
use peniko::Brush;

/// Stable identity of a mark within a [`crate::Figure`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Creates an id from a raw value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the id `n` steps after this one (wrapping).
    #[must_use]
    pub const fn offset(self, n: u64) -> Self {
        Self(self.0.wrapping_add(n))
    }
}

/// Horizontal text anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// The anchor point is the start of the text run.
    #[default]
    Start,
    /// The anchor point is the horizontal center of the text run.
    Middle,
    /// The anchor point is the end of the text run.
    End,
}

/// Vertical text baseline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The anchor point is the vertical middle of the em box.
    #[default]
    Middle,
    /// The anchor point is the alphabetic baseline.
    Alphabetic,
    /// The anchor point is the hanging baseline (top).
    Hanging,
    /// The anchor point is the ideographic baseline (bottom).
    Ideographic,
}

/// The kind of a mark, without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkKind {
    /// An axis-aligned, optionally rounded, rectangle.
    Rect,
    /// A single line of unshaped text.
    Text,
    /// An arbitrary filled and/or stroked path.
    Path,
}

/// Rectangle payload.
#[derive(Clone, Debug, PartialEq)]
pub struct RectPayload {
    /// Geometry in scene coordinates.
    pub rect: Rect,
    /// Corner radius in scene coordinates (`0` for square corners).
    pub corner_radius: f64,
    /// Fill paint.
    pub fill: Brush,
}

impl RectPayload {
    /// Returns the geometry as a `kurbo::RoundedRect`.
    pub fn rounded_rect(&self) -> RoundedRect {
        self.rect.abs().to_rounded_rect(self.corner_radius.max(0.0))
    }
}

/// Text payload.
#[derive(Clone, Debug, PartialEq)]
pub struct TextPayload {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content (unshaped).
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Rotation in degrees around `pos`.
    pub angle: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

/// Path payload.
#[derive(Clone, Debug, PartialEq)]
pub struct PathPayload {
    /// Geometry in scene coordinates.
    pub path: BezPath,
    /// Fill paint.
    pub fill: Brush,
    /// Stroke paint, ignored when `stroke_width` is zero.
    pub stroke: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

/// The resolved content of a mark.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// Rectangle.
    Rect(RectPayload),
    /// Text.
    Text(TextPayload),
    /// Path.
    Path(PathPayload),
}

impl MarkPayload {
    /// Returns the payload kind.
    pub fn kind(&self) -> MarkKind {
        match self {
            Self::Rect(_) => MarkKind::Rect,
            Self::Text(_) => MarkKind::Text,
            Self::Path(_) => MarkKind::Path,
        }
    }

    /// Returns geometric bounds, or `None` for text (which needs shaping to be measured).
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(r.rect.abs()),
            Self::Text(_) => None,
            Self::Path(p) => {
                let half = 0.5 * p.stroke_width.max(0.0);
                Some(p.path.bounding_box().inflate(half, half))
            }
        }
    }
}

/// A single renderable mark.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable identity.
    pub id: MarkId,
    /// Paint order hint. Renderers sort by `(z_index, id)`.
    pub z_index: i32,
    /// Resolved content.
    pub payload: MarkPayload,
}

impl Mark {
    /// Creates a mark with a z-index of `0`.
    pub fn new(id: MarkId, payload: MarkPayload) -> Self {
        Self {
            id,
            z_index: 0,
            payload,
        }
    }

    /// Creates a rectangle mark.
    pub fn rect(id: MarkId, rect: Rect, corner_radius: f64, fill: impl Into<Brush>) -> Self {
        Self::new(
            id,
            MarkPayload::Rect(RectPayload {
                rect,
                corner_radius,
                fill: fill.into(),
            }),
        )
    }

    /// Creates a path mark with no stroke.
    pub fn path(id: MarkId, path: BezPath, fill: impl Into<Brush>) -> Self {
        Self::new(
            id,
            MarkPayload::Path(PathPayload {
                path,
                fill: fill.into(),
                stroke: Brush::default(),
                stroke_width: 0.0,
            }),
        )
    }

    /// Sets the z-index.
    #[must_use]
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Returns the mark kind.
    pub fn kind(&self) -> MarkKind {
        self.payload.kind()
    }

    /// Returns geometric bounds (see [`MarkPayload::bounds`]).
    pub fn bounds(&self) -> Option<Rect> {
        self.payload.bounds()
    }
}
