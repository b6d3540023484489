use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Point;
use crate::error::{ChartError, ChartResult};

/// Source datum attached to a drawable for later inspection by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataAnnotation {
    pub label: String,
    pub value: f64,
}

impl DataAnnotation {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub annotation: Option<DataAnnotation>,
}

impl RectPrimitive {
    #[must_use]
    pub fn new(id: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            width,
            height,
            annotation: None,
        }
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: DataAnnotation) -> Self {
        self.annotation = Some(annotation);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(invalid(&self.id, "rect coordinates must be finite"));
        }
        if !self.width.is_finite() || self.width < 0.0 {
            return Err(invalid(&self.id, "rect width must be finite and >= 0"));
        }
        if !self.height.is_finite() || self.height < 0.0 {
            return Err(invalid(&self.id, "rect height must be finite and >= 0"));
        }
        Ok(())
    }
}

/// One command of a path outline, mirroring the SVG path grammar subset used
/// for sectors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Circular arc from the current point to `to`.
    ///
    /// `sweep == true` follows increasing angles (clockwise on screen).
    ArcTo {
        radius: f64,
        large_arc: bool,
        sweep: bool,
        to: Point,
    },
    Close,
}

impl PathCommand {
    fn is_finite(self) -> bool {
        match self {
            Self::MoveTo(point) | Self::LineTo(point) => point.is_finite(),
            Self::ArcTo { radius, to, .. } => radius.is_finite() && radius >= 0.0 && to.is_finite(),
            Self::Close => true,
        }
    }
}

/// Filled outline built from move/line/arc commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcPathPrimitive {
    pub id: String,
    pub commands: SmallVec<[PathCommand; 8]>,
    pub annotation: Option<DataAnnotation>,
}

impl ArcPathPrimitive {
    #[must_use]
    pub fn new(id: impl Into<String>, commands: impl IntoIterator<Item = PathCommand>) -> Self {
        Self {
            id: id.into(),
            commands: commands.into_iter().collect(),
            annotation: None,
        }
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: DataAnnotation) -> Self {
        self.annotation = Some(annotation);
        self
    }

    /// Serializes the outline as SVG path data (`d` attribute).
    #[must_use]
    pub fn to_svg_path_data(&self) -> String {
        let mut data = String::new();
        for command in &self.commands {
            if !data.is_empty() {
                data.push(' ');
            }
            // Writing into a String cannot fail.
            let _ = match *command {
                PathCommand::MoveTo(p) => write!(data, "M {},{}", p.x, p.y),
                PathCommand::LineTo(p) => write!(data, "L {},{}", p.x, p.y),
                PathCommand::ArcTo {
                    radius,
                    large_arc,
                    sweep,
                    to,
                } => write!(
                    data,
                    "A {radius},{radius} 0 {} {} {},{}",
                    u8::from(large_arc),
                    u8::from(sweep),
                    to.x,
                    to.y
                ),
                PathCommand::Close => write!(data, "Z"),
            };
        }
        data
    }

    pub fn validate(&self) -> ChartResult<()> {
        match self.commands.first() {
            Some(PathCommand::MoveTo(_)) => {}
            _ => return Err(invalid(&self.id, "path must start with a move command")),
        }
        if !self.commands.iter().all(|command| command.is_finite()) {
            return Err(invalid(&self.id, "path coordinates must be finite"));
        }
        Ok(())
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Label in pixel space, rotated by `rotation_deg` around `(x, y)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub id: String,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub rotation_deg: f64,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        x: f64,
        y: f64,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            x,
            y,
            rotation_deg: 0.0,
            h_align,
        }
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation_deg: f64) -> Self {
        self.rotation_deg = rotation_deg;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(invalid(&self.id, "text coordinates must be finite"));
        }
        if !self.rotation_deg.is_finite() {
            return Err(invalid(&self.id, "text rotation must be finite"));
        }
        Ok(())
    }
}

/// Backend-agnostic drawable, tagged by shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    Rect(RectPrimitive),
    ArcPath(ArcPathPrimitive),
    Text(TextPrimitive),
}

impl Primitive {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Rect(rect) => &rect.id,
            Self::ArcPath(path) => &path.id,
            Self::Text(text) => &text.id,
        }
    }

    #[must_use]
    pub fn annotation(&self) -> Option<&DataAnnotation> {
        match self {
            Self::Rect(rect) => rect.annotation.as_ref(),
            Self::ArcPath(path) => path.annotation.as_ref(),
            Self::Text(_) => None,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Rect(rect) => rect.validate(),
            Self::ArcPath(path) => path.validate(),
            Self::Text(text) => text.validate(),
        }
    }
}

impl From<RectPrimitive> for Primitive {
    fn from(rect: RectPrimitive) -> Self {
        Self::Rect(rect)
    }
}

impl From<ArcPathPrimitive> for Primitive {
    fn from(path: ArcPathPrimitive) -> Self {
        Self::ArcPath(path)
    }
}

impl From<TextPrimitive> for Primitive {
    fn from(text: TextPrimitive) -> Self {
        Self::Text(text)
    }
}

fn invalid(id: &str, reason: &str) -> ChartError {
    ChartError::InvalidPrimitive(format!("`{id}`: {reason}"))
}
