// Copyright 2026 the Mekko Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named sequential colormaps.
//!
//! Each map is stored as nine evenly spaced sRGB stops and sampled by linear interpolation.
//! Names follow the common plotting conventions (`viridis`, `Greens`, ...); a `_r` suffix
//! selects the reversed map.

extern crate alloc;

use alloc::string::ToString;
use core::str::FromStr;

use peniko::Color;

use crate::ChartError;

type Stops = [[u8; 3]; 9];

const VIRIDIS: Stops = [
    [0x44, 0x01, 0x54],
    [0x47, 0x2d, 0x7b],
    [0x3b, 0x52, 0x8b],
    [0x2c, 0x72, 0x8e],
    [0x21, 0x91, 0x8c],
    [0x28, 0xae, 0x80],
    [0x5e, 0xc9, 0x62],
    [0xad, 0xdc, 0x30],
    [0xfd, 0xe7, 0x25],
];

const PLASMA: Stops = [
    [0x0d, 0x08, 0x87],
    [0x4c, 0x02, 0xa1],
    [0x7e, 0x03, 0xa8],
    [0xa9, 0x23, 0x95],
    [0xcc, 0x47, 0x78],
    [0xe5, 0x6b, 0x5d],
    [0xf8, 0x94, 0x41],
    [0xfd, 0xc3, 0x28],
    [0xf0, 0xf9, 0x21],
];

const INFERNO: Stops = [
    [0x00, 0x00, 0x04],
    [0x1f, 0x0c, 0x48],
    [0x55, 0x0f, 0x6d],
    [0x88, 0x22, 0x6a],
    [0xba, 0x36, 0x55],
    [0xe3, 0x59, 0x33],
    [0xf9, 0x8e, 0x09],
    [0xf9, 0xcb, 0x35],
    [0xfc, 0xff, 0xa4],
];

const MAGMA: Stops = [
    [0x00, 0x00, 0x04],
    [0x1c, 0x10, 0x44],
    [0x4f, 0x12, 0x7b],
    [0x81, 0x25, 0x81],
    [0xb5, 0x36, 0x7a],
    [0xe5, 0x50, 0x64],
    [0xfb, 0x87, 0x61],
    [0xfe, 0xc2, 0x87],
    [0xfc, 0xfd, 0xbf],
];

const CIVIDIS: Stops = [
    [0x00, 0x22, 0x4e],
    [0x12, 0x35, 0x70],
    [0x3b, 0x49, 0x6c],
    [0x57, 0x5d, 0x6d],
    [0x70, 0x71, 0x73],
    [0x8a, 0x86, 0x78],
    [0xa5, 0x9c, 0x74],
    [0xc3, 0xb3, 0x69],
    [0xfe, 0xe8, 0x38],
];

const GREENS: Stops = [
    [0xf7, 0xfc, 0xf5],
    [0xe5, 0xf5, 0xe0],
    [0xc7, 0xe9, 0xc0],
    [0xa1, 0xd9, 0x9b],
    [0x74, 0xc4, 0x76],
    [0x41, 0xab, 0x5d],
    [0x23, 0x8b, 0x45],
    [0x00, 0x6d, 0x2c],
    [0x00, 0x44, 0x1b],
];

const BLUES: Stops = [
    [0xf7, 0xfb, 0xff],
    [0xde, 0xeb, 0xf7],
    [0xc6, 0xdb, 0xef],
    [0x9e, 0xca, 0xe1],
    [0x6b, 0xae, 0xd6],
    [0x42, 0x92, 0xc6],
    [0x21, 0x71, 0xb5],
    [0x08, 0x51, 0x9c],
    [0x08, 0x30, 0x6b],
];

const REDS: Stops = [
    [0xff, 0xf5, 0xf0],
    [0xfe, 0xe0, 0xd2],
    [0xfc, 0xbb, 0xa1],
    [0xfc, 0x92, 0x72],
    [0xfb, 0x6a, 0x4a],
    [0xef, 0x3b, 0x2c],
    [0xcb, 0x18, 0x1d],
    [0xa5, 0x0f, 0x15],
    [0x67, 0x00, 0x0d],
];

const ORANGES: Stops = [
    [0xff, 0xf5, 0xeb],
    [0xfe, 0xe6, 0xce],
    [0xfd, 0xd0, 0xa2],
    [0xfd, 0xae, 0x6b],
    [0xfd, 0x8d, 0x3c],
    [0xf1, 0x69, 0x13],
    [0xd9, 0x48, 0x01],
    [0xa6, 0x36, 0x03],
    [0x7f, 0x27, 0x04],
];

const PURPLES: Stops = [
    [0xfc, 0xfb, 0xfd],
    [0xef, 0xed, 0xf5],
    [0xda, 0xda, 0xeb],
    [0xbc, 0xbd, 0xdc],
    [0x9e, 0x9a, 0xc8],
    [0x80, 0x7d, 0xba],
    [0x6a, 0x51, 0xa3],
    [0x54, 0x27, 0x8f],
    [0x3f, 0x00, 0x7d],
];

const GREYS: Stops = [
    [0xff, 0xff, 0xff],
    [0xf0, 0xf0, 0xf0],
    [0xd9, 0xd9, 0xd9],
    [0xbd, 0xbd, 0xbd],
    [0x96, 0x96, 0x96],
    [0x73, 0x73, 0x73],
    [0x52, 0x52, 0x52],
    [0x25, 0x25, 0x25],
    [0x00, 0x00, 0x00],
];

/// The built-in colormap palettes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Palette {
    /// Perceptually uniform, purple to yellow.
    Viridis,
    /// Perceptually uniform, blue to yellow through magenta.
    Plasma,
    /// Perceptually uniform, black to pale yellow through red.
    Inferno,
    /// Perceptually uniform, black to pale pink through purple.
    Magma,
    /// Color-vision-deficiency friendly, navy to yellow.
    Cividis,
    /// Sequential white to dark green.
    Greens,
    /// Sequential white to dark blue.
    Blues,
    /// Sequential white to dark red.
    Reds,
    /// Sequential white to dark orange.
    Oranges,
    /// Sequential white to dark purple.
    Purples,
    /// Sequential white to black.
    Greys,
}

impl Palette {
    /// Every palette, in name order of [`Palette::name`].
    pub const ALL: [Self; 11] = [
        Self::Viridis,
        Self::Plasma,
        Self::Inferno,
        Self::Magma,
        Self::Cividis,
        Self::Greens,
        Self::Blues,
        Self::Reds,
        Self::Oranges,
        Self::Purples,
        Self::Greys,
    ];

    /// Returns the canonical name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Viridis => "viridis",
            Self::Plasma => "plasma",
            Self::Inferno => "inferno",
            Self::Magma => "magma",
            Self::Cividis => "cividis",
            Self::Greens => "Greens",
            Self::Blues => "Blues",
            Self::Reds => "Reds",
            Self::Oranges => "Oranges",
            Self::Purples => "Purples",
            Self::Greys => "Greys",
        }
    }

    const fn stops(self) -> &'static Stops {
        match self {
            Self::Viridis => &VIRIDIS,
            Self::Plasma => &PLASMA,
            Self::Inferno => &INFERNO,
            Self::Magma => &MAGMA,
            Self::Cividis => &CIVIDIS,
            Self::Greens => &GREENS,
            Self::Blues => &BLUES,
            Self::Reds => &REDS,
            Self::Oranges => &ORANGES,
            Self::Purples => &PURPLES,
            Self::Greys => &GREYS,
        }
    }
}

/// A palette plus direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Colormap {
    /// The underlying palette.
    pub palette: Palette,
    /// Whether `sample(t)` reads the palette from the far end.
    pub reversed: bool,
}

impl Colormap {
    /// Creates a forward colormap.
    pub const fn new(palette: Palette) -> Self {
        Self {
            palette,
            reversed: false,
        }
    }

    /// Returns the same palette in the opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            palette: self.palette,
            reversed: !self.reversed,
        }
    }

    /// Samples the map at `t`, clamped to `[0, 1]`.
    pub fn sample(&self, t: f64) -> Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let t = if self.reversed { 1.0 - t } else { t };

        let stops = self.palette.stops();
        let last = stops.len() - 1;
        let pos = t * last as f64;
        let lo = (pos as usize).min(last - 1);
        let frac = (pos - lo as f64) as f32;

        let [a, b] = [stops[lo], stops[lo + 1]];
        let channel = |i: usize| {
            let (a, b) = (f32::from(a[i]), f32::from(b[i]));
            (a + (b - a) * frac) / 255.0
        };
        Color::new([channel(0), channel(1), channel(2), 1.0])
    }
}

impl From<Palette> for Colormap {
    fn from(palette: Palette) -> Self {
        Self::new(palette)
    }
}

impl FromStr for Colormap {
    type Err = ChartError;

    /// Parses a palette name, optionally suffixed with `_r`. Matching ignores ASCII case.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let (base, reversed) = match name.strip_suffix("_r") {
            Some(base) => (base, true),
            None => (name, false),
        };
        let palette = Palette::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(base))
            .ok_or_else(|| ChartError::UnknownColormap(name.to_string()))?;
        let map = Self::new(palette);
        Ok(if reversed { map.reversed() } else { map })
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn rgb(c: Color) -> [u8; 3] {
        let c = c.to_rgba8();
        [c.r, c.g, c.b]
    }

    #[test]
    fn endpoints_hit_first_and_last_stop() {
        let map = Colormap::new(Palette::Viridis);
        assert_eq!(rgb(map.sample(0.0)), [0x44, 0x01, 0x54]);
        assert_eq!(rgb(map.sample(1.0)), [0xfd, 0xe7, 0x25]);
    }

    #[test]
    fn reversed_swaps_endpoints() {
        let map = Colormap::new(Palette::Greens).reversed();
        assert_eq!(rgb(map.sample(0.0)), [0x00, 0x44, 0x1b]);
        assert_eq!(rgb(map.sample(1.0)), [0xf7, 0xfc, 0xf5]);
        assert_eq!(map.reversed(), Colormap::new(Palette::Greens));
    }

    #[test]
    fn midpoint_interpolates_between_stops() {
        let map = Colormap::new(Palette::Greys);
        // Halfway between stop 0 (255) and stop 1 (240).
        let [r, g, b] = rgb(map.sample(0.0625));
        assert!((246..=248).contains(&r), "r {r}");
        assert_eq!(r, g);
        assert_eq!(g, b);
    }

    #[test]
    fn out_of_range_is_clamped() {
        let map = Colormap::new(Palette::Blues);
        assert_eq!(rgb(map.sample(-3.0)), rgb(map.sample(0.0)));
        assert_eq!(rgb(map.sample(7.0)), rgb(map.sample(1.0)));
    }

    #[test]
    fn names_parse_with_reverse_suffix() {
        assert_eq!(
            "viridis".parse::<Colormap>(),
            Ok(Colormap::new(Palette::Viridis))
        );
        assert_eq!(
            "Greens_r".parse::<Colormap>(),
            Ok(Colormap::new(Palette::Greens).reversed())
        );
        assert_eq!(
            "MAGMA".parse::<Colormap>(),
            Ok(Colormap::new(Palette::Magma))
        );
        assert_eq!(
            "jet".parse::<Colormap>(),
            Err(ChartError::UnknownColormap("jet".into()))
        );
    }

    #[test]
    fn every_palette_round_trips_its_name() {
        for palette in Palette::ALL {
            assert_eq!(palette.name().parse::<Colormap>().unwrap().palette, palette);
        }
    }
}
