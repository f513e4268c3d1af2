use serde::{Deserialize, Serialize};

use crate::core::{LayoutOptions, PercentageMode, Viewport};
use crate::error::{LikertError, LikertResult};

use super::ColormapConfig;

/// Chart configuration passed explicitly into every layout/render call.
///
/// Serializable so hosts can keep chart setups as JSON files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikertConfig {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    /// Convert each row to percentages of its total before layout.
    #[serde(default = "default_true")]
    pub normalise: bool,
    /// Annotate every segment with its percentage.
    #[serde(default = "default_true")]
    pub labels: bool,
    /// Dashed vertical line on the shared center.
    #[serde(default = "default_true")]
    pub middle_line: bool,
    #[serde(default = "default_true")]
    pub legend: bool,
    /// Segment label rotation in degrees.
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub colormap: ColormapConfig,
    #[serde(default)]
    pub percentage_mode: PercentageMode,
    #[serde(default = "default_x_label")]
    pub x_label: String,
}

impl Default for LikertConfig {
    fn default() -> Self {
        Self {
            viewport: default_viewport(),
            normalise: true,
            labels: true,
            middle_line: true,
            legend: true,
            rotation: 0.0,
            colormap: ColormapConfig::default(),
            percentage_mode: PercentageMode::default(),
            x_label: default_x_label(),
        }
    }
}

impl LikertConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_normalise(mut self, normalise: bool) -> Self {
        self.normalise = normalise;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub fn with_middle_line(mut self, middle_line: bool) -> Self {
        self.middle_line = middle_line;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: bool) -> Self {
        self.legend = legend;
        self
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    #[must_use]
    pub fn with_colormap(mut self, colormap: ColormapConfig) -> Self {
        self.colormap = colormap;
        self
    }

    #[must_use]
    pub fn with_percentage_mode(mut self, percentage_mode: PercentageMode) -> Self {
        self.percentage_mode = percentage_mode;
        self
    }

    #[must_use]
    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            normalise: self.normalise,
            labels: self.labels,
            percentage_mode: self.percentage_mode,
        }
    }

    pub fn validate(&self) -> LikertResult<()> {
        if !self.viewport.is_valid() {
            return Err(LikertError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.rotation.is_finite() {
            return Err(LikertError::InvalidData(
                "label rotation must be finite".to_owned(),
            ));
        }
        for (name, bound) in [("vmin", self.colormap.vmin), ("vmax", self.colormap.vmax)] {
            if bound.is_some_and(|value| !value.is_finite()) {
                return Err(LikertError::InvalidData(format!(
                    "colormap `{name}` must be finite"
                )));
            }
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> LikertResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| LikertError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> LikertResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| LikertError::InvalidData(format!("failed to parse config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_viewport() -> Viewport {
    Viewport::new(1000, 800)
}

fn default_true() -> bool {
    true
}

fn default_x_label() -> String {
    "Distance".to_owned()
}
