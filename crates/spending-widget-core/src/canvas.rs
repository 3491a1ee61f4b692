//! The drawing surface trait and a recording implementation.

use crate::draw::{DrawCommand, ShapeStyle, StrokeStyle, TextStyle};
use crate::{ArcGeometry, Color, Point};

/// Canvas for painting chart primitives.
///
/// Implementations must be deterministic: the same call sequence produces
/// the same output.
pub trait Canvas {
    /// Fill a pie wedge from the center out to the arc.
    fn fill_arc(&mut self, arc: ArcGeometry, color: Color);

    /// Stroke the curve of an arc (no radial edges).
    fn stroke_arc(&mut self, arc: ArcGeometry, stroke: StrokeStyle);

    /// Draw a filled circle.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    /// Draw a stroked circle.
    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: StrokeStyle);

    /// Draw a block of centered text.
    fn draw_text(&mut self, text: &str, center: Point, max_width: f32, style: &TextStyle);

    /// Replay one recorded command.
    fn execute(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Arc {
                arc,
                style: ShapeStyle::Fill(paint),
            } => self.fill_arc(*arc, paint.base_color()),
            DrawCommand::Arc {
                arc,
                style: ShapeStyle::Stroke(stroke),
            } => self.stroke_arc(*arc, *stroke),
            DrawCommand::Circle {
                center,
                radius,
                style: ShapeStyle::Fill(paint),
            } => self.fill_circle(*center, *radius, paint.base_color()),
            DrawCommand::Circle {
                center,
                radius,
                style: ShapeStyle::Stroke(stroke),
            } => self.stroke_circle(*center, *radius, *stroke),
            DrawCommand::Text {
                content,
                center,
                max_width,
                style,
            } => self.draw_text(content, *center, *max_width, style),
        }
    }
}

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Replaying the same picture onto a raster backend
#[derive(Debug, Default, Clone)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Replay every recorded command onto another canvas.
    pub fn replay(&self, target: &mut dyn Canvas) {
        for command in &self.commands {
            target.execute(command);
        }
    }
}

impl Canvas for RecordingCanvas {
    fn fill_arc(&mut self, arc: ArcGeometry, color: Color) {
        self.commands.push(DrawCommand::wedge(arc, color));
    }

    fn stroke_arc(&mut self, arc: ArcGeometry, stroke: StrokeStyle) {
        self.commands.push(DrawCommand::rim(arc, stroke));
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands
            .push(DrawCommand::filled_circle(center, radius, color));
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: StrokeStyle) {
        self.commands
            .push(DrawCommand::stroked_circle(center, radius, stroke));
    }

    fn draw_text(&mut self, text: &str, center: Point, max_width: f32, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            content: text.to_string(),
            center,
            max_width,
            style: style.clone(),
        });
    }

    // Recording keeps the command as-is so gradient paints survive a replay.
    fn execute(&mut self, command: &DrawCommand) {
        self.commands.push(command.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Paint;

    // ===== RecordingCanvas Creation Tests =====

    #[test]
    fn test_recording_canvas_new() {
        let canvas = RecordingCanvas::new();
        assert!(canvas.is_empty());
        assert_eq!(canvas.command_count(), 0);
    }

    // ===== Basic Drawing Tests =====

    #[test]
    fn test_fill_arc_records_wedge() {
        let mut canvas = RecordingCanvas::new();
        let arc = ArcGeometry::new(Point::new(50.0, 50.0), 40.0, -90.0, 120.0);
        canvas.fill_arc(arc, Color::WHITE);

        assert_eq!(canvas.command_count(), 1);
        match &canvas.commands()[0] {
            DrawCommand::Arc { arc: recorded, style } => {
                assert_eq!(recorded.sweep_angle, 120.0);
                assert_eq!(*style, ShapeStyle::Fill(Paint::Solid(Color::WHITE)));
            }
            _ => panic!("Expected Arc command"),
        }
    }

    #[test]
    fn test_stroke_circle_records_stroke() {
        let mut canvas = RecordingCanvas::new();
        canvas.stroke_circle(Point::ORIGIN, 5.0, StrokeStyle::new(Color::BLACK, 4.0));
        assert!(matches!(
            canvas.commands()[0],
            DrawCommand::Circle {
                style: ShapeStyle::Stroke(_),
                ..
            }
        ));
    }

    #[test]
    fn test_take_commands_clears() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_circle(Point::ORIGIN, 1.0, Color::BLACK);
        let taken = canvas.take_commands();
        assert_eq!(taken.len(), 1);
        assert!(canvas.is_empty());
    }

    // ===== Replay Tests =====

    #[test]
    fn test_replay_preserves_gradient_rim() {
        let mut source = RecordingCanvas::new();
        let arc = ArcGeometry::circle(Point::new(10.0, 10.0), 8.0);
        let gradient = Paint::vertical(
            Point::new(10.0, 2.0),
            Point::new(10.0, 18.0),
            Color::BLACK,
            Color::WHITE,
        );
        source.stroke_arc(arc, StrokeStyle::new(gradient, 6.0));
        source.draw_text("TOP", Point::new(10.0, 10.0), 10.0, &TextStyle::default());

        let mut target = RecordingCanvas::new();
        source.replay(&mut target);
        assert_eq!(target.commands(), source.commands());
    }
}
