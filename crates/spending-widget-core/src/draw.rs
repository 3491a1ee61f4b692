//! Draw commands for chart rendering.
//!
//! All chart rendering reduces to these primitives, so a recorded command
//! list can be inspected in tests and replayed onto any raster backend.

use crate::{ArcGeometry, Color, Point};
use serde::{Deserialize, Serialize};

/// How a shape is colored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Paint {
    /// Single color
    Solid(Color),
    /// Two-stop linear gradient, clamped outside the `from..to` segment
    LinearGradient {
        /// Gradient start point
        from: Point,
        /// Gradient end point
        to: Point,
        /// Color at `from`
        start: Color,
        /// Color at `to`
        end: Color,
    },
}

impl Paint {
    /// Vertical gradient from `top` to `bottom`, starting at `start`.
    #[must_use]
    pub const fn vertical(top: Point, bottom: Point, start: Color, end: Color) -> Self {
        Self::LinearGradient {
            from: top,
            to: bottom,
            start,
            end,
        }
    }

    /// Color of the paint at its origin.
    #[must_use]
    pub const fn base_color(&self) -> Color {
        match self {
            Self::Solid(color) => *color,
            Self::LinearGradient { start, .. } => *start,
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

/// Stroke style for outlines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke paint
    pub paint: Paint,
    /// Stroke width in pixels
    pub width: f32,
}

impl StrokeStyle {
    /// Create a stroke.
    #[must_use]
    pub fn new(paint: impl Into<Paint>, width: f32) -> Self {
        Self {
            paint: paint.into(),
            width,
        }
    }
}

/// Fill or outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ShapeStyle {
    /// Fill the interior
    Fill(Paint),
    /// Outline only
    Stroke(StrokeStyle),
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontWeight {
    /// Regular (400)
    #[default]
    Normal,
    /// Bold (700)
    Bold,
}

/// Text style for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels (line height of a glyph cell)
    pub size: f32,
    /// Text color
    pub color: Color,
    /// Font weight
    pub weight: FontWeight,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 16.0,
            color: Color::BLACK,
            weight: FontWeight::Normal,
        }
    }
}

/// Drawing primitive - all chart rendering reduces to these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// A pie wedge (fill) or a rim curve (stroke) along `arc`.
    Arc {
        /// Arc geometry
        arc: ArcGeometry,
        /// Fill draws the wedge through the center; stroke draws the curve only
        style: ShapeStyle,
    },

    /// Draw a circle
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Shape style
        style: ShapeStyle,
    },

    /// Draw a block of text, each line centered on `center.x` and the block
    /// centered on `center.y`.
    Text {
        /// Text content, lines separated by `\n`
        content: String,
        /// Center of the text block
        center: Point,
        /// Layout width available to each line
        max_width: f32,
        /// Text style
        style: TextStyle,
    },
}

impl DrawCommand {
    /// Create a filled circle.
    #[must_use]
    pub fn filled_circle(center: Point, radius: f32, color: Color) -> Self {
        Self::Circle {
            center,
            radius,
            style: ShapeStyle::Fill(Paint::Solid(color)),
        }
    }

    /// Create a stroked circle.
    #[must_use]
    pub fn stroked_circle(center: Point, radius: f32, stroke: StrokeStyle) -> Self {
        Self::Circle {
            center,
            radius,
            style: ShapeStyle::Stroke(stroke),
        }
    }

    /// Create a filled pie wedge.
    #[must_use]
    pub fn wedge(arc: ArcGeometry, color: Color) -> Self {
        Self::Arc {
            arc,
            style: ShapeStyle::Fill(Paint::Solid(color)),
        }
    }

    /// Create a stroked rim along an arc.
    #[must_use]
    pub fn rim(arc: ArcGeometry, stroke: StrokeStyle) -> Self {
        Self::Arc {
            arc,
            style: ShapeStyle::Stroke(stroke),
        }
    }

    /// Whether this command is a filled pie wedge.
    #[must_use]
    pub const fn is_wedge(&self) -> bool {
        matches!(
            self,
            Self::Arc {
                style: ShapeStyle::Fill(_),
                ..
            }
        )
    }
}
