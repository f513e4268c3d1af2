use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::render::Color;

/// Built-in palettes, sampled from the ColorBrewer 11-class schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Palette {
    /// Red (disagree) to blue (agree).
    #[default]
    RdBu,
    RdYlGn,
    PuOr,
    #[serde(rename = "br_bg")]
    BrBG,
    Greys,
}

const RD_BU: &[u32] = &[
    0x67001f, 0xb2182b, 0xd6604d, 0xf4a582, 0xfddbc7, 0xf7f7f7, 0xd1e5f0, 0x92c5de, 0x4393c3,
    0x2166ac, 0x053061,
];
const RD_YL_GN: &[u32] = &[
    0xa50026, 0xd73027, 0xf46d43, 0xfdae61, 0xfee08b, 0xffffbf, 0xd9ef8b, 0xa6d96a, 0x66bd63,
    0x1a9850, 0x006837,
];
const PU_OR: &[u32] = &[
    0x7f3b08, 0xb35806, 0xe08214, 0xfdb863, 0xfee0b6, 0xf7f7f7, 0xd8daeb, 0xb2abd2, 0x8073ac,
    0x542788, 0x2d004b,
];
const BR_BG: &[u32] = &[
    0x543005, 0x8c510a, 0xbf812d, 0xdfc27d, 0xf6e8c3, 0xf5f5f5, 0xc7eae5, 0x80cdc1, 0x35978f,
    0x01665e, 0x003c30,
];
const GREYS: &[u32] = &[
    0xffffff, 0xf0f0f0, 0xd9d9d9, 0xbdbdbd, 0x969696, 0x737373, 0x525252, 0x252525, 0x000000,
];

impl Palette {
    fn anchors(self) -> &'static [u32] {
        match self {
            Self::RdBu => RD_BU,
            Self::RdYlGn => RD_YL_GN,
            Self::PuOr => PU_OR,
            Self::BrBG => BR_BG,
            Self::Greys => GREYS,
        }
    }

    /// Color at `t` in `[0, 1]`; out-of-range input clamps to the ends.
    #[must_use]
    pub fn sample(self, t: f64) -> Color {
        let anchors = self.anchors();
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let scaled = t * (anchors.len() - 1) as f64;
        let lower = scaled.floor() as usize;
        let upper = (lower + 1).min(anchors.len() - 1);
        hex_to_color(anchors[lower]).lerp(hex_to_color(anchors[upper]), scaled - lower as f64)
    }
}

fn hex_to_color(hex: u32) -> Color {
    let channel = |shift: u32| f64::from((hex >> shift) & 0xff) / 255.0;
    Color::rgb(channel(16), channel(8), channel(0))
}

/// Palette plus optional normalization bounds.
///
/// Missing bounds autoscale to the mapped values' min and max.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ColormapConfig {
    #[serde(default)]
    pub palette: Palette,
    #[serde(default)]
    pub vmin: Option<f64>,
    #[serde(default)]
    pub vmax: Option<f64>,
}

impl ColormapConfig {
    #[must_use]
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            vmin: None,
            vmax: None,
        }
    }

    #[must_use]
    pub fn with_bounds(mut self, vmin: Option<f64>, vmax: Option<f64>) -> Self {
        self.vmin = vmin;
        self.vmax = vmax;
        self
    }

    /// One color per column identity.
    ///
    /// Identities that all parse as numbers are mapped by value. Otherwise
    /// (categorical labels) they are mapped by position.
    #[must_use]
    pub fn colors_for<S: AsRef<str>>(&self, columns: &[S]) -> Vec<Color> {
        let values = match numeric_identities(columns) {
            Some(values) => values,
            None => {
                debug!(
                    columns = columns.len(),
                    "categorical column labels, mapping colors by position"
                );
                (0..columns.len()).map(|index| index as f64).collect()
            }
        };
        self.map_values(&values)
    }

    #[must_use]
    pub fn map_values(&self, values: &[f64]) -> Vec<Color> {
        let (vmin, vmax) = self.bounds(values);
        values
            .iter()
            .map(|value| {
                let t = if vmax == vmin {
                    0.0
                } else {
                    (value - vmin) / (vmax - vmin)
                };
                self.palette.sample(t)
            })
            .collect()
    }

    fn bounds(&self, values: &[f64]) -> (f64, f64) {
        let data_min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let data_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let vmin = self
            .vmin
            .filter(|v| v.is_finite())
            .unwrap_or(if data_min.is_finite() { data_min } else { 0.0 });
        let vmax = self
            .vmax
            .filter(|v| v.is_finite())
            .unwrap_or(if data_max.is_finite() { data_max } else { 0.0 });
        (vmin, vmax)
    }
}

fn numeric_identities<S: AsRef<str>>(columns: &[S]) -> Option<Vec<f64>> {
    columns
        .iter()
        .map(|column| {
            column
                .as_ref()
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
        })
        .collect()
}
