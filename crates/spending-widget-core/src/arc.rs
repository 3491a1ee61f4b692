//! Arc geometry for pie charts.
//!
//! Angles are in degrees, measured clockwise from the positive x axis in a
//! y-down raster, so `-90.0` is the 12 o'clock position.

use crate::Point;
use serde::{Deserialize, Serialize};

/// The 12 o'clock position.
pub const TWELVE_OCLOCK: f64 = -90.0;

/// Arc geometry for one pie segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcGeometry {
    /// Center point
    pub center: Point,
    /// Radius
    pub radius: f32,
    /// Start angle (degrees)
    pub start_angle: f64,
    /// Sweep angle (degrees, clockwise when positive)
    pub sweep_angle: f64,
}

impl ArcGeometry {
    /// Create a new arc.
    #[must_use]
    pub const fn new(center: Point, radius: f32, start_angle: f64, sweep_angle: f64) -> Self {
        Self {
            center,
            radius,
            start_angle,
            sweep_angle,
        }
    }

    /// Create a full circle starting at 12 o'clock.
    #[must_use]
    pub const fn circle(center: Point, radius: f32) -> Self {
        Self::new(center, radius, TWELVE_OCLOCK, 360.0)
    }

    /// End angle (degrees).
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep_angle
    }

    /// Point on the circle at the given angle (degrees).
    #[must_use]
    pub fn point_at_angle(&self, angle: f64) -> Point {
        let radians = angle.to_radians();
        let radius = f64::from(self.radius);
        Point::new(
            radius.mul_add(radians.cos(), f64::from(self.center.x)) as f32,
            radius.mul_add(radians.sin(), f64::from(self.center.y)) as f32,
        )
    }

    /// Start point of arc.
    #[must_use]
    pub fn start_point(&self) -> Point {
        self.point_at_angle(self.start_angle)
    }

    /// End point of arc.
    #[must_use]
    pub fn end_point(&self) -> Point {
        self.point_at_angle(self.end_angle())
    }

    /// Number of line segments used to flatten this arc when a full circle
    /// uses `per_circle` segments. Never less than one.
    #[must_use]
    pub fn segment_count(&self, per_circle: usize) -> usize {
        let fraction = (self.sweep_angle.abs() / 360.0).min(1.0);
        ((fraction * per_circle.max(1) as f64).ceil() as usize).max(1)
    }

    /// Flatten the arc into a polyline.
    #[must_use]
    pub fn to_polyline(&self, per_circle: usize) -> Vec<Point> {
        let segments = self.segment_count(per_circle);
        (0..=segments)
            .map(|i| {
                let t = i as f64 / segments as f64;
                self.point_at_angle(t.mul_add(self.sweep_angle, self.start_angle))
            })
            .collect()
    }

    /// Flatten the arc into a closed pie slice (center, rim points, center).
    #[must_use]
    pub fn to_pie_slice(&self, per_circle: usize) -> Vec<Point> {
        let mut points = vec![self.center];
        points.extend(self.to_polyline(per_circle));
        points.push(self.center);
        points
    }
}
