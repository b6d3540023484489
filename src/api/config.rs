use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{ChartPadding, Padding, Viewport};
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_BAR_MARGIN_RIGHT: f64 = 5.0;
pub const DEFAULT_CHART_ID: &str = "chart";

/// Supported chart kinds.
///
/// Pie and doughnut share the sector geometry; a doughnut is expected to
/// carry a non-zero `centroid_padding`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Bar,
    Pie,
    Doughnut,
}

impl ChartType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Pie => "pie",
            Self::Doughnut => "doughnut",
        }
    }

    #[must_use]
    pub const fn is_sector(self) -> bool {
        matches!(self, Self::Pie | Self::Doughnut)
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = ChartError;

    fn from_str(value: &str) -> ChartResult<Self> {
        [Self::Bar, Self::Pie, Self::Doughnut]
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| ChartError::UnsupportedChartType(value.to_owned()))
    }
}

/// Layout configuration for one `compute` call.
///
/// This type is serializable (camelCase keys) so host applications can keep
/// chart setup next to their data without inventing an ad-hoc format. Every
/// omitted key takes the documented default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutOptions {
    /// Surface width; the container width when `None`.
    #[serde(default)]
    pub width: Option<u32>,
    /// Surface height; the resolved width (a square surface) when `None`.
    #[serde(default)]
    pub height: Option<u32>,
    /// Chart kind used by `LayoutEngine::compute_configured`.
    #[serde(default)]
    pub chart_type: ChartType,
    /// Outer margin between surface edge and chart area.
    #[serde(default)]
    pub svg_padding: Padding,
    /// Radius of the doughnut hole; 0 draws a full pie.
    #[serde(default)]
    pub centroid_padding: f64,
    /// Axis-label margins of the bar chart.
    #[serde(default)]
    pub chart_padding: ChartPadding,
    /// Horizontal gap between neighbouring bars.
    #[serde(default = "default_bar_margin_right")]
    pub bar_margin_right: f64,
    /// Emits a value label inside each bar.
    #[serde(default)]
    pub value_labels: bool,
    /// Prefix of every emitted primitive id.
    #[serde(default = "default_chart_id")]
    pub id: String,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            chart_type: ChartType::default(),
            svg_padding: Padding::default(),
            centroid_padding: 0.0,
            chart_padding: ChartPadding::default(),
            bar_margin_right: default_bar_margin_right(),
            value_labels: false,
            id: default_chart_id(),
        }
    }
}

impl LayoutOptions {
    #[must_use]
    pub fn new(chart_type: ChartType) -> Self {
        Self {
            chart_type,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn with_svg_padding(mut self, svg_padding: Padding) -> Self {
        self.svg_padding = svg_padding;
        self
    }

    #[must_use]
    pub fn with_centroid_padding(mut self, centroid_padding: f64) -> Self {
        self.centroid_padding = centroid_padding;
        self
    }

    #[must_use]
    pub fn with_chart_padding(mut self, chart_padding: ChartPadding) -> Self {
        self.chart_padding = chart_padding;
        self
    }

    #[must_use]
    pub fn with_bar_margin_right(mut self, bar_margin_right: f64) -> Self {
        self.bar_margin_right = bar_margin_right;
        self
    }

    #[must_use]
    pub fn with_value_labels(mut self, enabled: bool) -> Self {
        self.value_labels = enabled;
        self
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Surface size for a container `container_width` pixels wide.
    ///
    /// Fractional container widths are truncated.
    pub fn resolve_viewport(&self, container_width: f64) -> ChartResult<Viewport> {
        let width = match self.width {
            Some(width) => width,
            None => {
                if !container_width.is_finite() || container_width < 1.0 {
                    return Err(ChartError::InvalidOptions(format!(
                        "container width must be finite and >= 1 (got {container_width})"
                    )));
                }
                container_width.min(f64::from(u32::MAX)) as u32
            }
        };
        let viewport = Viewport::new(width, self.height.unwrap_or(width));
        if !viewport.is_valid() {
            return Err(ChartError::InvalidOptions(format!(
                "invalid viewport size: width={}, height={}",
                viewport.width, viewport.height
            )));
        }
        Ok(viewport)
    }
}

fn default_bar_margin_right() -> f64 {
    DEFAULT_BAR_MARGIN_RIGHT
}

fn default_chart_id() -> String {
    DEFAULT_CHART_ID.to_owned()
}
