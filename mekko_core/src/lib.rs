// Copyright 2026 the Mekko Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer-agnostic mark model for Mekko charts.
//!
//! Chart builders in `mekko_charts` do not draw anything themselves. They produce a
//! [`Figure`]: a scene size plus a list of stable-identity [`Mark`]s (rectangles,
//! text runs and paths) in scene coordinates. A rendering collaborator (an SVG
//! writer, a GPU scene builder, a test harness) walks the figure in paint order.
//!
//! Text shaping is out of scope; text marks store unshaped strings.

#![no_std]

extern crate alloc;

mod figure;
mod mark;

pub use figure::Figure;
pub use mark::{
    Mark, MarkId, MarkKind, MarkPayload, PathPayload, RectPayload, TextAnchor, TextBaseline,
    TextPayload,
};
