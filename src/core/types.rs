use serde::{Deserialize, Serialize};

/// Resolved drawing-surface size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Length of the shorter side.
    #[must_use]
    pub fn min_side(self) -> f64 {
        f64::from(self.width.min(self.height))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

pub const DEFAULT_SVG_PADDING: f64 = 5.0;

/// Margin between the drawing-surface edge and the chart area.
///
/// Deserializes from either a single number applied to every side or an
/// object whose missing sides fall back to the default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "PaddingInput")]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub fn max_side(self) -> f64 {
        self.top.max(self.right).max(self.bottom).max(self.left)
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        [self.top, self.right, self.bottom, self.left]
            .into_iter()
            .all(|side| side.is_finite() && side >= 0.0)
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::uniform(DEFAULT_SVG_PADDING)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PaddingInput {
    Uniform(f64),
    Sides {
        #[serde(default = "default_side")]
        top: f64,
        #[serde(default = "default_side")]
        right: f64,
        #[serde(default = "default_side")]
        bottom: f64,
        #[serde(default = "default_side")]
        left: f64,
    },
}

fn default_side() -> f64 {
    DEFAULT_SVG_PADDING
}

impl From<PaddingInput> for Padding {
    fn from(input: PaddingInput) -> Self {
        match input {
            PaddingInput::Uniform(value) => Self::uniform(value),
            PaddingInput::Sides {
                top,
                right,
                bottom,
                left,
            } => Self::new(top, right, bottom, left),
        }
    }
}

/// Margins inside the chart area reserved for bar-chart axis labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartPadding {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
}

impl ChartPadding {
    #[must_use]
    pub const fn new(top: f64, bottom: f64, left: f64) -> Self {
        Self { top, bottom, left }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        [self.top, self.bottom, self.left]
            .into_iter()
            .all(|side| side.is_finite() && side >= 0.0)
    }
}

impl Default for ChartPadding {
    fn default() -> Self {
        Self::new(20.0, 50.0, 50.0)
    }
}
