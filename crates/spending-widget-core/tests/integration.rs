//! Integration tests for spending-widget-core.
//!
//! These tests verify the public API works correctly end-to-end.

use spending_widget_core::{
    ArcGeometry, Canvas, Color, DrawCommand, Point, RecordingCanvas, StrokeStyle, TextStyle,
    TWELVE_OCLOCK,
};

// =============================================================================
// Color Integration Tests
// =============================================================================

#[test]
fn test_color_roundtrip_hex() {
    let original = Color::from_argb(0xFF4E_CDC4);
    let parsed = Color::from_hex(&original.to_hex()).expect("valid hex");
    assert_eq!(parsed.to_argb(), original.to_argb());
}

#[test]
fn test_color_bar_alpha() {
    let bar = Color::from_argb(0xFFFF_8A65).scale_alpha(0.7);
    assert_eq!(bar.to_argb(), 0xB2FF_8A65);
}

// =============================================================================
// Arc Integration Tests
// =============================================================================

#[test]
fn test_consecutive_arcs_share_endpoints() {
    let center = Point::new(50.0, 50.0);
    let first = ArcGeometry::new(center, 40.0, TWELVE_OCLOCK, 225.0);
    let second = ArcGeometry::new(center, 40.0, first.end_angle(), 135.0);

    assert_eq!(first.end_point(), second.start_point());
    assert!((second.end_angle() - (TWELVE_OCLOCK + 360.0)).abs() < 1e-9);
}

// =============================================================================
// Canvas Integration Tests
// =============================================================================

#[test]
fn test_donut_recording() {
    let mut canvas = RecordingCanvas::new();
    let center = Point::new(50.0, 50.0);
    canvas.fill_arc(ArcGeometry::circle(center, 40.0), Color::WHITE);
    canvas.fill_circle(center, 23.2, Color::from_argb(0xFF07_182A));
    canvas.stroke_circle(center, 40.0, StrokeStyle::new(Color::from_argb(0x3327_C9E8), 4.0));
    canvas.draw_text("TOP\nSPEND", center, 32.48, &TextStyle::default());

    let wedges = canvas.commands().iter().filter(|c| c.is_wedge()).count();
    assert_eq!(wedges, 1);
    assert_eq!(canvas.command_count(), 4);
    assert!(matches!(
        canvas.commands().last(),
        Some(DrawCommand::Text { .. })
    ));
}
