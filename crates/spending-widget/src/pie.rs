//! Donut chart rendering for the top spending categories.
//!
//! Painting goes through a [`RecordingCanvas`] first; the recorded commands
//! are kept on the result and then replayed onto a [`PixmapCanvas`].

use crate::error::RenderError;
use crate::model::CategoryRecord;
use crate::raster::{ChartImage, PixmapCanvas};
use spending_widget_config::ChartConfig;
use spending_widget_core::{
    ArcGeometry, Canvas, Color, DrawCommand, FontWeight, Paint, Point, RecordingCanvas,
    StrokeStyle, TextStyle, TWELVE_OCLOCK,
};

/// Sweep of each amount, in degrees, proportional to its share of the total.
///
/// Returns `None` when the total is not a positive finite number.
#[must_use]
pub fn sweep_angles(amounts: &[f64]) -> Option<Vec<f64>> {
    let total: f64 = amounts.iter().sum();
    if !(total.is_finite() && total > 0.0) {
        return None;
    }
    Some(amounts.iter().map(|amount| amount / total * 360.0).collect())
}

/// One drawn segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSegment {
    /// Outer arc of the wedge
    pub arc: ArcGeometry,
    /// Fill color
    pub color: Color,
}

/// Resolved chart geometry for one pixel size.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    /// Image edge in pixels
    pub size_px: u32,
    /// Chart center
    pub center: Point,
    /// Outer radius
    pub outer_radius: f32,
    /// Donut hole radius
    pub inner_radius: f32,
    /// Segments in rank order, starting at 12 o'clock
    pub segments: Vec<PieSegment>,
}

/// A finished chart.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedChart {
    /// The raster image
    pub image: ChartImage,
    /// Color of each drawn segment, in rank order
    pub palette: Vec<Color>,
    /// Drawn segments
    pub segments: Vec<PieSegment>,
    /// Draw commands the image was painted from
    pub commands: Vec<DrawCommand>,
}

impl RenderedChart {
    /// Sum of all segment sweeps, in degrees.
    #[must_use]
    pub fn total_sweep(&self) -> f64 {
        self.segments.iter().map(|s| s.arc.sweep_angle).sum()
    }

    /// Whether nothing was drawn.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Renders ranked categories as a donut chart.
#[derive(Debug, Clone, Default)]
pub struct PieChartRenderer {
    config: ChartConfig,
}

impl PieChartRenderer {
    /// Create a renderer.
    #[must_use]
    pub const fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    /// Chart configuration.
    #[must_use]
    pub const fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Segment geometry for `categories`.
    ///
    /// Only the first `max_segments` categories are used, in the given order.
    /// `colors` is parallel to `categories`; a missing color uses the
    /// configured fallback. Returns `Ok(None)` when the amounts total zero.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::NoRadius`] if padding consumes the whole image.
    pub fn layout(
        &self,
        categories: &[CategoryRecord],
        colors: &[Color],
        size_px: u32,
    ) -> Result<Option<ChartLayout>, RenderError> {
        let used = &categories[..categories.len().min(self.config.max_segments)];
        let amounts: Vec<f64> = used.iter().map(|c| c.amount).collect();
        let Some(sweeps) = sweep_angles(&amounts) else {
            return Ok(None);
        };

        let half = size_px as f32 / 2.0;
        let outer_radius = half - self.config.padding_px;
        if !(outer_radius > 0.0) {
            return Err(RenderError::NoRadius {
                size_px,
                padding_px: self.config.padding_px.to_string(),
            });
        }
        let center = Point::new(half, half);

        let mut start = TWELVE_OCLOCK;
        let segments = sweeps
            .iter()
            .enumerate()
            .map(|(index, &sweep)| {
                let arc = ArcGeometry::new(center, outer_radius, start, sweep);
                start += sweep;
                PieSegment {
                    arc,
                    color: colors
                        .get(index)
                        .copied()
                        .unwrap_or(self.config.fallback_segment_color),
                }
            })
            .collect();

        Ok(Some(ChartLayout {
            size_px,
            center,
            outer_radius,
            inner_radius: outer_radius * self.config.donut_ratio,
            segments,
        }))
    }

    /// Paint a layout onto `canvas`.
    pub fn paint(&self, layout: &ChartLayout, canvas: &mut dyn Canvas) {
        let config = &self.config;
        let center = layout.center;
        let radius = layout.outer_radius;

        for segment in &layout.segments {
            canvas.fill_arc(segment.arc, segment.color);
            let rim = Paint::vertical(
                Point::new(center.x, center.y - radius),
                Point::new(center.x, center.y + radius),
                segment.color,
                Color::WHITE,
            );
            canvas.stroke_arc(segment.arc, StrokeStyle::new(rim, config.rim_width_px));
        }

        canvas.fill_circle(center, layout.inner_radius, config.inner_color);
        canvas.stroke_circle(
            center,
            radius,
            StrokeStyle::new(config.border_color, config.border_width_px),
        );

        let label = TextStyle {
            size: layout.inner_radius * config.label_scale,
            color: config.label_color,
            weight: FontWeight::Bold,
        };
        let max_width = (layout.inner_radius * config.label_width_scale)
            .trunc()
            .max(1.0);
        canvas.draw_text(&config.label, center, max_width, &label);
    }

    /// Render a `size_px` square chart.
    ///
    /// A zero total yields a blank image of the requested size.
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be allocated or has no room for
    /// the pie after padding.
    pub fn render(
        &self,
        categories: &[CategoryRecord],
        colors: &[Color],
        size_px: u32,
    ) -> Result<RenderedChart, RenderError> {
        let mut raster = PixmapCanvas::new(size_px, self.config.arc_segments)?;
        let Some(layout) = self.layout(categories, colors, size_px)? else {
            return Ok(RenderedChart {
                image: raster.into_image(),
                palette: Vec::new(),
                segments: Vec::new(),
                commands: Vec::new(),
            });
        };

        let mut recording = RecordingCanvas::new();
        self.paint(&layout, &mut recording);
        recording.replay(&mut raster);

        Ok(RenderedChart {
            image: raster.into_image(),
            palette: layout.segments.iter().map(|s| s.color).collect(),
            segments: layout.segments,
            commands: recording.take_commands(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const FOOD: Color = Color::from_argb(0xFFFF_8A65);
    const TRANSPORT: Color = Color::from_argb(0xFF4E_CDC4);

    fn two_categories() -> Vec<CategoryRecord> {
        vec![
            CategoryRecord::new("Ăn uống", 500_000.0, "62", 1),
            CategoryRecord::new("Di chuyển", 300_000.0, "38", 2),
        ]
    }

    fn renderer() -> PieChartRenderer {
        PieChartRenderer::default()
    }

    // ===== Sweep Tests =====

    #[test]
    fn test_sweep_angles_proportional() {
        let sweeps = sweep_angles(&[500_000.0, 300_000.0]).unwrap();
        assert_eq!(sweeps, vec![225.0, 135.0]);
    }

    #[test]
    fn test_sweep_angles_zero_total() {
        assert!(sweep_angles(&[]).is_none());
        assert!(sweep_angles(&[0.0, 0.0]).is_none());
        assert!(sweep_angles(&[f64::INFINITY]).is_none());
    }

    // ===== Layout Tests =====

    #[test]
    fn test_layout_geometry() {
        let layout = renderer()
            .layout(&two_categories(), &[FOOD, TRANSPORT], 104)
            .unwrap()
            .unwrap();
        assert_eq!(layout.center, Point::new(52.0, 52.0));
        assert_eq!(layout.outer_radius, 42.0);
        assert!((layout.inner_radius - 24.36).abs() < 1e-4);
        assert_eq!(layout.segments[0].arc.start_angle, -90.0);
        assert_eq!(layout.segments[1].arc.start_angle, 135.0);
        assert_eq!(layout.segments[1].arc.end_angle(), 270.0);
    }

    #[test]
    fn test_layout_uses_at_most_three() {
        let categories: Vec<_> = (0..5)
            .map(|i| CategoryRecord::new(format!("c{i}"), 10.0, "20", i))
            .collect();
        let layout = renderer().layout(&categories, &[], 104).unwrap().unwrap();
        assert_eq!(layout.segments.len(), 3);
        assert!(layout
            .segments
            .iter()
            .all(|s| (s.arc.sweep_angle - 120.0).abs() < 1e-9));
    }

    #[test]
    fn test_missing_color_uses_fallback() {
        let layout = renderer()
            .layout(&two_categories(), &[FOOD], 104)
            .unwrap()
            .unwrap();
        assert_eq!(layout.segments[1].color.to_argb(), 0xFFFF_6B6B);
    }

    #[test]
    fn test_padding_consumes_image() {
        let err = renderer().render(&two_categories(), &[], 20).unwrap_err();
        assert!(matches!(err, RenderError::NoRadius { size_px: 20, .. }));
    }

    // ===== Render Tests =====

    #[test]
    fn test_render_commands() {
        let chart = renderer()
            .render(&two_categories(), &[FOOD, TRANSPORT], 104)
            .unwrap();
        assert_eq!(chart.palette, vec![FOOD, TRANSPORT]);
        assert_eq!(chart.commands.iter().filter(|c| c.is_wedge()).count(), 2);
        // two wedges, two rims, hole, border, label
        assert_eq!(chart.commands.len(), 7);
        assert!((chart.total_sweep() - 360.0).abs() < 1e-9);
        match chart.commands.last() {
            Some(DrawCommand::Text { content, style, .. }) => {
                assert_eq!(content, "TOP\nSPEND");
                assert_eq!(style.weight, FontWeight::Bold);
            }
            other => panic!("expected label, got {other:?}"),
        }
    }

    #[test]
    fn test_render_pixels() {
        let chart = renderer()
            .render(&two_categories(), &[FOOD, TRANSPORT], 104)
            .unwrap();
        let image = &chart.image;
        assert_eq!((image.width(), image.height()), (104, 104));
        // mid-radius of the first wedge, at 22.5 degrees
        assert_eq!(image.pixel(82, 64).unwrap().to_argb(), 0xFFFF_8A65);
        // mid-radius of the second wedge, straight left of center
        assert_eq!(image.pixel(19, 52).unwrap().to_argb(), 0xFF4E_CDC4);
        // donut hole above the label
        assert_eq!(image.pixel(52, 34).unwrap().to_argb(), 0xFF07_182A);
        // corner outside the pie
        assert_eq!(image.pixel(0, 0).unwrap().a, 0.0);
    }

    #[test]
    fn test_zero_total_is_blank() {
        let categories = vec![CategoryRecord::new("A", 0.0, "0", 0)];
        let chart = renderer().render(&categories, &[FOOD], 104).unwrap();
        assert!(chart.is_blank());
        assert!(chart.image.is_blank());
        assert_eq!(chart.image.width(), 104);
    }

    #[test]
    fn test_render_is_deterministic() {
        let a = renderer().render(&two_categories(), &[FOOD, TRANSPORT], 96).unwrap();
        let b = renderer().render(&two_categories(), &[FOOD, TRANSPORT], 96).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_size_is_error() {
        assert!(renderer().render(&two_categories(), &[], 0).is_err());
    }

    proptest! {
        #[test]
        fn prop_sweeps_sum_to_full_circle(amounts in prop::collection::vec(0.01f64..1e9, 1..=3)) {
            let sweeps = sweep_angles(&amounts).unwrap();
            let total: f64 = sweeps.iter().sum();
            prop_assert!((total - 360.0).abs() < 1e-6);
            prop_assert!(sweeps.iter().all(|s| *s > 0.0));
        }

        #[test]
        fn prop_segments_chain_from_twelve_oclock(
            amounts in prop::collection::vec(0.0f64..1e7, 1..=5),
            size_px in 24u32..400,
        ) {
            prop_assume!(amounts.iter().take(3).sum::<f64>() > 0.0);
            let categories: Vec<_> = amounts
                .iter()
                .zip(0..)
                .map(|(&amount, id)| CategoryRecord::new("x", amount, "0", id))
                .collect();
            let layout = renderer().layout(&categories, &[], size_px).unwrap().unwrap();
            prop_assert_eq!(layout.segments.len(), amounts.len().min(3));
            prop_assert_eq!(layout.segments[0].arc.start_angle, TWELVE_OCLOCK);
            for pair in layout.segments.windows(2) {
                prop_assert_eq!(pair[1].arc.start_angle, pair[0].arc.end_angle());
                prop_assert!(pair[1].arc.start_angle >= pair[0].arc.start_angle);
            }
            let last = layout.segments.last().unwrap();
            prop_assert!((last.arc.end_angle() - (TWELVE_OCLOCK + 360.0)).abs() < 1e-6);
        }

        #[test]
        fn prop_non_positive_total_draws_no_wedges(count in 0usize..4) {
            let categories: Vec<_> = (0..count)
                .map(|i| CategoryRecord::new("x", 0.0, "0", i32::try_from(i).unwrap()))
                .collect();
            let chart = renderer().render(&categories, &[], 64).unwrap();
            prop_assert!(chart.commands.iter().all(|c| !c.is_wedge()));
            prop_assert!(chart.image.is_blank());
        }
    }
}
