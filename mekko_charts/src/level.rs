// Copyright 2026 the Mekko Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Enumerated severity levels for the dot chart.

use peniko::Color;

use crate::ChartError;

/// A severity level. Each level has one exact numeric value, a label and a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    /// `0.0`: not assessed.
    NotAssessed,
    /// `1.0`.
    Low,
    /// `3.0`.
    MediumLow,
    /// `5.0`.
    Medium,
    /// `7.5`.
    MediumHigh,
    /// `10.0`.
    High,
}

impl Level {
    /// Every level, lowest first.
    pub const ALL: [Self; 6] = [
        Self::NotAssessed,
        Self::Low,
        Self::MediumLow,
        Self::Medium,
        Self::MediumHigh,
        Self::High,
    ];

    /// Looks up the level whose value equals `value` exactly.
    pub fn from_value(value: f64) -> Result<Self, ChartError> {
        Self::ALL
            .into_iter()
            .find(|level| level.value() == value)
            .ok_or(ChartError::UnknownLevel(value))
    }

    /// Returns the numeric value.
    pub const fn value(self) -> f64 {
        match self {
            Self::NotAssessed => 0.0,
            Self::Low => 1.0,
            Self::MediumLow => 3.0,
            Self::Medium => 5.0,
            Self::MediumHigh => 7.5,
            Self::High => 10.0,
        }
    }

    /// Returns the display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotAssessed => "NA",
            Self::Low => "Low",
            Self::MediumLow => "Medium-Low",
            Self::Medium => "Medium",
            Self::MediumHigh => "Medium-High",
            Self::High => "High",
        }
    }

    /// Returns the dot color.
    pub const fn color(self) -> Color {
        match self {
            Self::NotAssessed => Color::from_rgb8(217, 217, 217),
            Self::Low => Color::from_rgb8(0, 153, 51),
            Self::MediumLow => Color::from_rgb8(204, 255, 102),
            Self::Medium => Color::from_rgb8(230, 230, 0),
            Self::MediumHigh => Color::from_rgb8(230, 92, 0),
            Self::High => Color::from_rgb8(204, 0, 0),
        }
    }
}

impl TryFrom<f64> for Level {
    type Error = ChartError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}
