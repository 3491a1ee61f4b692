//! Core drawing types for the spending widget.
//!
//! This crate provides foundational types used by the snapshot pipeline:
//! - Points: [`Point`]
//! - Color representation: [`Color`] with packed ARGB conversion
//! - Pie geometry: [`ArcGeometry`]
//! - Draw commands and the [`Canvas`] trait with a [`RecordingCanvas`]

mod arc;
mod canvas;
mod color;
pub mod draw;
mod geometry;

pub use arc::{ArcGeometry, TWELVE_OCLOCK};
pub use canvas::{Canvas, RecordingCanvas};
pub use color::{Color, ColorParseError};
pub use draw::{DrawCommand, FontWeight, Paint, ShapeStyle, StrokeStyle, TextStyle};
pub use geometry::Point;
