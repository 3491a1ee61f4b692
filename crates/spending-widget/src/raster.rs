//! tiny-skia rasterization of chart draw commands.

use crate::error::RenderError;
use crate::glyph;
use spending_widget_core::{ArcGeometry, Canvas, Color, FontWeight, Paint, Point, StrokeStyle, TextStyle};
use std::fmt;
use tiny_skia as sk;

/// An owned, immutable square chart bitmap.
#[derive(Clone)]
pub struct ChartImage {
    pixmap: sk::Pixmap,
}

impl ChartImage {
    /// A fully transparent image.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Allocation`] for a zero or oversized edge.
    pub fn blank(size_px: u32) -> Result<Self, RenderError> {
        sk::Pixmap::new(size_px, size_px)
            .map(|pixmap| Self { pixmap })
            .ok_or(RenderError::Allocation {
                width: size_px,
                height: size_px,
            })
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Premultiplied RGBA bytes, row-major.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Unpremultiplied color at `(x, y)`.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::from_rgba8(c.red(), c.green(), c.blue(), c.alpha()))
    }

    /// Whether every pixel is fully transparent.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.pixmap.data().iter().all(|&byte| byte == 0)
    }

    /// PNG encoding of the image.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Encode`] if the encoder fails.
    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        self.pixmap
            .encode_png()
            .map_err(|e| RenderError::Encode(e.to_string()))
    }
}

impl fmt::Debug for ChartImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartImage")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

impl PartialEq for ChartImage {
    fn eq(&self, other: &Self) -> bool {
        self.width() == other.width()
            && self.height() == other.height()
            && self.data() == other.data()
    }
}

/// [`Canvas`] that paints into an anti-aliased tiny-skia pixmap.
///
/// Degenerate shapes (zero radius, zero sweep) are skipped.
pub struct PixmapCanvas {
    pixmap: sk::Pixmap,
    arc_segments: usize,
}

impl PixmapCanvas {
    /// Transparent square canvas of `size_px` pixels.
    ///
    /// `arc_segments` is the flattening resolution of a full circle.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Allocation`] for a zero or oversized edge.
    pub fn new(size_px: u32, arc_segments: usize) -> Result<Self, RenderError> {
        let ChartImage { pixmap } = ChartImage::blank(size_px)?;
        Ok(Self {
            pixmap,
            arc_segments,
        })
    }

    /// Finish painting.
    #[must_use]
    pub fn into_image(self) -> ChartImage {
        ChartImage {
            pixmap: self.pixmap,
        }
    }

    fn fill(&mut self, path: &sk::Path, color: Color) {
        let paint = solid(color);
        self.pixmap.fill_path(
            path,
            &paint,
            sk::FillRule::Winding,
            sk::Transform::identity(),
            None,
        );
    }

    fn stroke(&mut self, path: &sk::Path, stroke: StrokeStyle) {
        if stroke.width <= 0.0 {
            return;
        }
        let Some(paint) = to_sk_paint(&stroke.paint) else {
            return;
        };
        let sk_stroke = sk::Stroke {
            width: stroke.width,
            ..sk::Stroke::default()
        };
        self.pixmap
            .stroke_path(path, &paint, &sk_stroke, sk::Transform::identity(), None);
    }
}

impl Canvas for PixmapCanvas {
    fn fill_arc(&mut self, arc: ArcGeometry, color: Color) {
        if arc.sweep_angle == 0.0 {
            return;
        }
        if let Some(path) = polygon(&arc.to_pie_slice(self.arc_segments), true) {
            self.fill(&path, color);
        }
    }

    fn stroke_arc(&mut self, arc: ArcGeometry, stroke: StrokeStyle) {
        if arc.sweep_angle == 0.0 {
            return;
        }
        if let Some(path) = polygon(&arc.to_polyline(self.arc_segments), false) {
            self.stroke(&path, stroke);
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        if let Some(path) = sk::PathBuilder::from_circle(center.x, center.y, radius) {
            self.fill(&path, color);
        }
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: StrokeStyle) {
        if let Some(path) = sk::PathBuilder::from_circle(center.x, center.y, radius) {
            self.stroke(&path, stroke);
        }
    }

    fn draw_text(&mut self, text: &str, center: Point, max_width: f32, style: &TextStyle) {
        if let Some(path) = text_path(text, center, max_width, style) {
            self.fill(&path, style.color);
        }
    }
}

/// Lay out `text` in the built-in bitmap font as one path of cell squares.
///
/// The cell edge is `size / 7`, shrunk further when the widest line would
/// overflow `max_width`. Lines are centered on `center.x` and the block on
/// `center.y`.
fn text_path(text: &str, center: Point, max_width: f32, style: &TextStyle) -> Option<sk::Path> {
    let lines: Vec<&str> = text.split('\n').collect();
    let widest = lines.iter().map(|line| glyph::line_width(line)).max()?;
    if widest == 0 {
        return None;
    }

    let mut cell = style.size / glyph::GLYPH_HEIGHT as f32;
    if max_width > 0.0 {
        cell = cell.min(max_width / widest as f32);
    }
    if !(cell.is_finite() && cell > 0.0) {
        return None;
    }
    let ink = match style.weight {
        FontWeight::Bold => cell,
        FontWeight::Normal => cell * 0.8,
    };

    let rows = lines.len() as f32 * glyph::LINE_PITCH as f32 - 1.0;
    let mut top = center.y - rows * cell / 2.0;
    let mut pb = sk::PathBuilder::new();

    for line in &lines {
        let left = center.x - glyph::line_width(line) as f32 * cell / 2.0;
        let renderable = line.chars().filter(|&c| glyph::rows(c).is_some());
        for (index, c) in renderable.enumerate() {
            let origin = left + (index as u32 * glyph::ADVANCE) as f32 * cell;
            for (col, row) in glyph::cells(c) {
                let x = (col as f32).mul_add(cell, origin);
                let y = (row as f32).mul_add(cell, top);
                if let Some(rect) = sk::Rect::from_xywh(x, y, ink, ink) {
                    pb.push_rect(rect);
                }
            }
        }
        top += glyph::LINE_PITCH as f32 * cell;
    }

    pb.finish()
}

fn polygon(points: &[Point], close: bool) -> Option<sk::Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = sk::PathBuilder::new();
    pb.move_to(first.x, first.y);
    for point in rest {
        pb.line_to(point.x, point.y);
    }
    if close {
        pb.close();
    }
    pb.finish()
}

fn sk_color(color: Color) -> sk::Color {
    let [r, g, b, a] = color.to_rgba8();
    sk::Color::from_rgba8(r, g, b, a)
}

fn solid(color: Color) -> sk::Paint<'static> {
    let mut paint = sk::Paint::default();
    paint.set_color(sk_color(color));
    paint.anti_alias = true;
    paint
}

fn to_sk_paint(paint: &Paint) -> Option<sk::Paint<'static>> {
    match *paint {
        Paint::Solid(color) => Some(solid(color)),
        Paint::LinearGradient {
            from,
            to,
            start,
            end,
        } => {
            let shader = sk::LinearGradient::new(
                sk::Point::from_xy(from.x, from.y),
                sk::Point::from_xy(to.x, to.y),
                vec![
                    sk::GradientStop::new(0.0, sk_color(start)),
                    sk::GradientStop::new(1.0, sk_color(end)),
                ],
                sk::SpreadMode::Pad,
                sk::Transform::identity(),
            )?;
            let mut sk_paint = sk::Paint::default();
            sk_paint.shader = shader;
            sk_paint.anti_alias = true;
            Some(sk_paint)
        }
    }
}
